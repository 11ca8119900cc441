use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{EventResult, EventType, Group, Position};

mod local;
mod postgres;

pub use local::LocalResultStore;
pub use postgres::PgResultStore;

/// A result as submitted by the admin surface, before the store assigns
/// its identity.
#[derive(Debug, Clone)]
pub struct NewResult {
    pub student_name: String,
    pub reg_no: String,
    pub group: Group,
    pub event_name: String,
    pub event_type: EventType,
    pub position: Position,
    pub points: i32,
}

impl NewResult {
    /// Stamp a fresh id and creation instant. Ids are never reused;
    /// `created_at` drives the newest-first emission order.
    fn assign(self) -> EventResult {
        EventResult {
            id: Uuid::new_v4(),
            student_name: self.student_name,
            reg_no: self.reg_no,
            group: self.group,
            event_name: self.event_name,
            event_type: self.event_type,
            position: self.position,
            points: self.points,
            created_at: Utc::now(),
        }
    }
}

/// Owner of the live result collection.
///
/// Mutations go through the store; consumers only ever see immutable
/// snapshots, pulled on demand or pushed through [`ResultStore::subscribe`].
/// Writers are serialized per backend, so last write wins.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Short tag naming the active backend, for logs and health reporting.
    fn backend_tag(&self) -> &'static str;

    /// Current collection, newest first.
    fn snapshot(&self) -> Arc<Vec<EventResult>>;

    /// Watch the collection. The receiver holds the current snapshot
    /// immediately and observes every subsequent mutation; dropping it
    /// ends delivery.
    fn subscribe(&self) -> watch::Receiver<Arc<Vec<EventResult>>>;

    /// Persist a new result and push the updated snapshot.
    async fn add(&self, new: NewResult) -> Result<EventResult>;

    /// Delete a result if present and push the updated snapshot. Removing
    /// an unknown id is a no-op.
    async fn remove(&self, id: Uuid) -> Result<()>;
}
