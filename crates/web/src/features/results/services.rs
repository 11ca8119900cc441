use storage::dto::result::CreateResultRequest;
use storage::error::Result;
use storage::models::EventResult;
use storage::services::filter::{self, ResultQuery};
use storage::store::{NewResult, ResultStore};
use uuid::Uuid;

/// Filter the current snapshot without re-sorting it.
pub fn list_results(store: &dyn ResultStore, query: &ResultQuery) -> Vec<EventResult> {
    let snapshot = store.snapshot();

    filter::apply(&snapshot, query)
        .into_iter()
        .cloned()
        .collect()
}

/// Record a new result. The store assigns id and creation instant.
pub async fn add_result(store: &dyn ResultStore, req: &CreateResultRequest) -> Result<EventResult> {
    store
        .add(NewResult {
            student_name: req.student_name.clone(),
            reg_no: req.reg_no.clone(),
            group: req.group,
            event_name: req.event_name.clone(),
            event_type: req.event_type,
            position: req.position,
            points: req.effective_points(),
        })
        .await
}

pub async fn remove_result(store: &dyn ResultStore, id: Uuid) -> Result<()> {
    store.remove(id).await
}
