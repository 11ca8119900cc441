use crate::models::{EventResult, EventType, Group};

/// Predicates applied to the result table. `None` leaves a predicate
/// disabled; all active predicates must match.
#[derive(Debug, Clone, Default)]
pub struct ResultQuery {
    pub group: Option<Group>,
    pub event_type: Option<EventType>,
    pub search: String,
}

/// Select the results matching every active predicate, preserving the
/// input order. Cheap enough to re-run on every input change; an empty
/// match is an empty vec, never an error.
pub fn apply<'a>(results: &'a [EventResult], query: &ResultQuery) -> Vec<&'a EventResult> {
    let needle = query.search.to_lowercase();

    results
        .iter()
        .filter(|result| {
            query.group.is_none_or(|group| result.group == group)
                && query
                    .event_type
                    .is_none_or(|event_type| result.event_type == event_type)
                && (needle.is_empty() || matches_search(result, &needle))
        })
        .collect()
}

// Case-insensitive substring match over the three searchable fields.
fn matches_search(result: &EventResult, needle: &str) -> bool {
    result.student_name.to_lowercase().contains(needle)
        || result.event_name.to_lowercase().contains(needle)
        || result.reg_no.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::result;

    fn sample() -> Vec<EventResult> {
        vec![
            result(
                "John Doe",
                "CS-101",
                Group::Green,
                "100m Sprint",
                EventType::Athletics,
                5,
            ),
            result(
                "Priya Nair",
                "EC-204",
                Group::Red,
                "Chess",
                EventType::Games,
                3,
            ),
            result(
                "Arun Menon",
                "ME-330",
                Group::Green,
                "Long Jump",
                EventType::Athletics,
                1,
            ),
            result(
                "Sara Thomas",
                "CS-115",
                Group::Blue,
                "Carrom",
                EventType::Games,
                0,
            ),
        ]
    }

    #[test]
    fn test_default_query_matches_everything() {
        let results = sample();

        let filtered = apply(&results, &ResultQuery::default());

        assert_eq!(filtered.len(), results.len());
    }

    #[test]
    fn test_active_predicates_combine_with_and() {
        let results = sample();
        let query = ResultQuery {
            group: Some(Group::Green),
            event_type: Some(EventType::Athletics),
            search: String::new(),
        };

        let filtered = apply(&results, &query);

        assert_eq!(filtered.len(), 2);
        assert!(
            filtered
                .iter()
                .all(|r| r.group == Group::Green && r.event_type == EventType::Athletics)
        );
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let results = sample();

        for term in ["john", "JOHN", "Doe"] {
            let query = ResultQuery {
                search: term.to_string(),
                ..ResultQuery::default()
            };
            let filtered = apply(&results, &query);
            assert_eq!(filtered.len(), 1, "term {term:?} should match John Doe");
            assert_eq!(filtered[0].student_name, "John Doe");
        }

        // Event name and registration number are searchable too.
        let by_event = apply(
            &results,
            &ResultQuery {
                search: "chess".to_string(),
                ..ResultQuery::default()
            },
        );
        assert_eq!(by_event.len(), 1);
        assert_eq!(by_event[0].student_name, "Priya Nair");

        let by_reg = apply(
            &results,
            &ResultQuery {
                search: "cs-1".to_string(),
                ..ResultQuery::default()
            },
        );
        assert_eq!(by_reg.len(), 2);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let results = sample();
        let query = ResultQuery {
            group: Some(Group::Green),
            ..ResultQuery::default()
        };

        let filtered = apply(&results, &query);

        let names: Vec<&str> = filtered.iter().map(|r| r.student_name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Arun Menon"]);
    }

    #[test]
    fn test_unmatched_group_returns_empty() {
        let results = vec![
            result(
                "John Doe",
                "CS-101",
                Group::Green,
                "100m Sprint",
                EventType::Athletics,
                5,
            ),
            result(
                "Priya Nair",
                "EC-204",
                Group::Red,
                "Chess",
                EventType::Games,
                3,
            ),
        ];
        let query = ResultQuery {
            group: Some(Group::Blue),
            ..ResultQuery::default()
        };

        assert!(apply(&results, &query).is_empty());
    }
}
