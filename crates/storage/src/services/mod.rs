pub mod filter;
pub mod scoreboard;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use crate::models::{EventResult, EventType, Group, Position};

    pub fn result(
        student_name: &str,
        reg_no: &str,
        group: Group,
        event_name: &str,
        event_type: EventType,
        points: i32,
    ) -> EventResult {
        EventResult {
            id: Uuid::new_v4(),
            student_name: student_name.to_string(),
            reg_no: reg_no.to_string(),
            group,
            event_name: event_name.to_string(),
            event_type,
            position: Position::Participated,
            points,
            created_at: Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap(),
        }
    }
}
