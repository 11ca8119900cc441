use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};
use uuid::Uuid;

use crate::error::Result;
use crate::models::EventResult;

use super::{NewResult, ResultStore};

/// File-backed fallback store for running without a database.
///
/// The collection lives in the watch channel and is rewritten to a JSON
/// file on every mutation. The mutex serializes writers; readers only
/// touch the channel.
pub struct LocalResultStore {
    path: PathBuf,
    write_guard: Mutex<()>,
    tx: watch::Sender<Arc<Vec<EventResult>>>,
}

impl LocalResultStore {
    /// Load the collection from `path`, starting empty when the file does
    /// not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let mut results: Vec<EventResult> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::info!(
            count = results.len(),
            path = %path.display(),
            "Loaded results from local file"
        );

        let (tx, _rx) = watch::channel(Arc::new(results));

        Ok(Self {
            path,
            write_guard: Mutex::new(()),
            tx,
        })
    }

    async fn persist(&self, results: &[EventResult]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(results)?;
        tokio::fs::write(&self.path, bytes).await?;

        Ok(())
    }
}

#[async_trait]
impl ResultStore for LocalResultStore {
    fn backend_tag(&self) -> &'static str {
        "local-file"
    }

    fn snapshot(&self) -> Arc<Vec<EventResult>> {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Arc<Vec<EventResult>>> {
        self.tx.subscribe()
    }

    async fn add(&self, new: NewResult) -> Result<EventResult> {
        let _guard = self.write_guard.lock().await;

        let record = new.assign();
        let mut results = (**self.tx.borrow()).clone();
        results.insert(0, record.clone());

        self.persist(&results).await?;
        self.tx.send_replace(Arc::new(results));

        Ok(record)
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        let _guard = self.write_guard.lock().await;

        let mut results = (**self.tx.borrow()).clone();
        let before = results.len();
        results.retain(|r| r.id != id);

        if results.len() == before {
            return Ok(());
        }

        self.persist(&results).await?;
        self.tx.send_replace(Arc::new(results));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, Group, Position};

    fn new_result(student_name: &str, group: Group, points: i32) -> NewResult {
        NewResult {
            student_name: student_name.to_string(),
            reg_no: "CS-101".to_string(),
            group,
            event_name: "100m Sprint".to_string(),
            event_type: EventType::Athletics,
            position: Position::First,
            points,
        }
    }

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("results.json")
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();

        let store = LocalResultStore::open(store_path(&dir)).await.unwrap();

        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_add_assigns_identity_and_prepends() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalResultStore::open(store_path(&dir)).await.unwrap();

        let first = store.add(new_result("John Doe", Group::Green, 5)).await.unwrap();
        let second = store.add(new_result("Priya Nair", Group::Red, 3)).await.unwrap();

        assert_ne!(first.id, second.id);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].student_name, "Priya Nair");
        assert_eq!(snapshot[1].student_name, "John Doe");
    }

    #[tokio::test]
    async fn test_collection_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let record = {
            let store = LocalResultStore::open(&path).await.unwrap();
            store.add(new_result("John Doe", Group::Green, 5)).await.unwrap()
        };

        let reopened = LocalResultStore::open(&path).await.unwrap();
        let snapshot = reopened.snapshot();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0], record);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalResultStore::open(store_path(&dir)).await.unwrap();

        let record = store.add(new_result("John Doe", Group::Green, 5)).await.unwrap();

        store.remove(record.id).await.unwrap();
        assert!(store.snapshot().is_empty());

        // Removing again, or removing an id that never existed, is fine.
        store.remove(record.id).await.unwrap();
        store.remove(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_subscribers_see_every_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalResultStore::open(store_path(&dir)).await.unwrap();

        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        let record = store.add(new_result("John Doe", Group::Green, 5)).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.remove(record.id).await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
    }
}
