use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category an event is scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "event_type")]
pub enum EventType {
    Athletics,
    Games,
}

impl EventType {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Athletics" => Some(Self::Athletics),
            "Games" => Some(Self::Games),
            _ => None,
        }
    }
}
