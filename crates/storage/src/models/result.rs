use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EventType, Group, Position};

/// One scored participation record for one student in one event.
///
/// `points` is stored independently of `position` and is the authoritative
/// scoring contribution; the position label is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub id: Uuid,
    pub student_name: String,
    pub reg_no: String,
    #[sqlx(rename = "group_color")]
    pub group: Group,
    pub event_name: String,
    pub event_type: EventType,
    pub position: Position,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}
