use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Finishing rank in a single event.
///
/// Serialized labels match the admin surface verbatim, including the
/// non-placing `Participated` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "event_position")]
pub enum Position {
    #[serde(rename = "1st")]
    #[sqlx(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    #[sqlx(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    #[sqlx(rename = "3rd")]
    Third,
    Participated,
}

impl Position {
    /// Conventional points for a finishing position. The stored `points`
    /// value on a result stays authoritative; this only fills in requests
    /// that omit points.
    pub fn default_points(&self) -> i32 {
        match self {
            Self::First => 5,
            Self::Second => 3,
            Self::Third => 1,
            Self::Participated => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        assert_eq!(serde_json::to_string(&Position::First).unwrap(), "\"1st\"");
        assert_eq!(
            serde_json::from_str::<Position>("\"Participated\"").unwrap(),
            Position::Participated
        );
    }

    #[test]
    fn test_rejects_unknown_position() {
        let parsed: Result<Position, _> = serde_json::from_str("\"4th\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_default_points_convention() {
        assert_eq!(Position::First.default_points(), 5);
        assert_eq!(Position::Second.default_points(), 3);
        assert_eq!(Position::Third.default_points(), 1);
        assert_eq!(Position::Participated.default_points(), 0);
    }
}
