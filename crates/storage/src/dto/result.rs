use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{EventResult, EventType, Group, Position};
use crate::services::filter::ResultQuery;

/// Response payload for a stored result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    pub id: Uuid,
    pub student_name: String,
    pub reg_no: String,
    pub group: Group,
    pub event_name: String,
    pub event_type: EventType,
    pub position: Position,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// Request payload for recording a new result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateResultRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Student name must be between 1 and 255 characters"
    ))]
    pub student_name: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Registration number must be between 1 and 64 characters"
    ))]
    pub reg_no: String,

    pub group: Group,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Event name must be between 1 and 255 characters"
    ))]
    pub event_name: String,

    pub event_type: EventType,

    pub position: Position,

    /// Stored as given; falls back to the conventional points for the
    /// position when omitted.
    #[validate(range(min = 0, message = "Points cannot be negative"))]
    pub points: Option<i32>,
}

impl CreateResultRequest {
    pub fn effective_points(&self) -> i32 {
        self.points
            .unwrap_or_else(|| self.position.default_points())
    }
}

/// Query parameters for the filtered results listing. An absent parameter
/// or the literal `All` (any case) disables that predicate.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ResultQueryParams {
    pub group: Option<String>,
    pub event_type: Option<String>,
    pub search: Option<String>,
}

impl ResultQueryParams {
    pub fn into_query(self) -> Result<ResultQuery, String> {
        let group = match self.group.as_deref() {
            None => None,
            Some(label) if label.eq_ignore_ascii_case("all") => None,
            Some(label) => {
                Some(Group::from_label(label).ok_or_else(|| format!("Unknown group: {label}"))?)
            }
        };

        let event_type = match self.event_type.as_deref() {
            None => None,
            Some(label) if label.eq_ignore_ascii_case("all") => None,
            Some(label) => Some(
                EventType::from_label(label)
                    .ok_or_else(|| format!("Unknown event type: {label}"))?,
            ),
        };

        Ok(ResultQuery {
            group,
            event_type,
            search: self.search.unwrap_or_default(),
        })
    }
}

impl From<EventResult> for ResultResponse {
    fn from(result: EventResult) -> Self {
        Self {
            id: result.id,
            student_name: result.student_name,
            reg_no: result.reg_no,
            group: result.group,
            event_name: result.event_name,
            event_type: result.event_type,
            position: result.position,
            points: result.points,
            created_at: result.created_at,
        }
    }
}

impl From<&EventResult> for ResultResponse {
    fn from(result: &EventResult) -> Self {
        result.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_disables_predicate() {
        let params = ResultQueryParams {
            group: Some("All".to_string()),
            event_type: Some("all".to_string()),
            search: None,
        };

        let query = params.into_query().unwrap();

        assert!(query.group.is_none());
        assert!(query.event_type.is_none());
        assert!(query.search.is_empty());
    }

    #[test]
    fn test_known_labels_parse() {
        let params = ResultQueryParams {
            group: Some("Red".to_string()),
            event_type: Some("Games".to_string()),
            search: Some("chess".to_string()),
        };

        let query = params.into_query().unwrap();

        assert_eq!(query.group, Some(Group::Red));
        assert_eq!(query.event_type, Some(EventType::Games));
        assert_eq!(query.search, "chess");
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let params = ResultQueryParams {
            group: Some("Yellow".to_string()),
            ..ResultQueryParams::default()
        };

        assert!(params.into_query().is_err());
    }

    #[test]
    fn test_omitted_points_fall_back_to_position() {
        let req = CreateResultRequest {
            student_name: "John Doe".to_string(),
            reg_no: "CS-101".to_string(),
            group: Group::Green,
            event_name: "100m Sprint".to_string(),
            event_type: EventType::Athletics,
            position: Position::First,
            points: None,
        };
        assert_eq!(req.effective_points(), 5);

        let req = CreateResultRequest {
            points: Some(99),
            ..req
        };
        assert_eq!(req.effective_points(), 99);
    }
}
