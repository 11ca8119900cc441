use storage::models::GroupScore;
use storage::services::scoreboard;
use storage::store::ResultStore;

/// Current standings, leader first.
pub fn standings(store: &dyn ResultStore) -> Vec<GroupScore> {
    scoreboard::aggregate(&store.snapshot())
}
