use crate::models::{EventResult, Group, GroupScore};

/// Reduce an unordered result collection into ranked per-group totals.
///
/// Always returns exactly one entry per group, highest total first, even
/// for groups without any results. Equal totals keep the declared group
/// order, so the ranking is deterministic for any input order. Index 0 is
/// the current leader; rank is positional and never stored.
pub fn aggregate(results: &[EventResult]) -> Vec<GroupScore> {
    let mut standings: Vec<GroupScore> = Group::ALL
        .iter()
        .map(|&group| GroupScore {
            group,
            total_points: 0,
        })
        .collect();

    for result in results {
        if let Some(entry) = standings.iter_mut().find(|s| s.group == result.group) {
            entry.total_points += i64::from(result.points);
        }
    }

    // Stable sort: ties fall back to the declared order seeded above.
    standings.sort_by_key(|s| std::cmp::Reverse(s.total_points));

    standings
}
