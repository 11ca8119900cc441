use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the three fixed competing groups.
///
/// Out-of-set values are rejected wherever a `Group` is deserialized, so
/// an invalid group never reaches scoring or filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "group_color")]
pub enum Group {
    Green,
    Red,
    Blue,
}

impl Group {
    /// Declared order; doubles as the leaderboard tie-break.
    pub const ALL: [Group; 3] = [Group::Green, Group::Red, Group::Blue];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Green" => Some(Self::Green),
            "Red" => Some(Self::Red),
            "Blue" => Some(Self::Blue),
            _ => None,
        }
    }
}

/// Running total for one group. Derived, never stored; recomputed from
/// the full result collection on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct GroupScore {
    pub group: Group,
    pub total_points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_set_group() {
        let parsed: Result<Group, _> = serde_json::from_str("\"Yellow\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Group::from_label("Green"), Some(Group::Green));
        assert_eq!(Group::from_label("green"), None);
    }
}
