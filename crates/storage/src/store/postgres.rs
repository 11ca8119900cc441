use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use uuid::Uuid;

use crate::Database;
use crate::error::Result;
use crate::models::EventResult;
use crate::repository::result::ResultRepository;

use super::{NewResult, ResultStore};

/// Postgres-backed store.
///
/// Each mutation goes through the repository and then republishes the
/// full collection from the database, so the emitted snapshot always
/// reflects persisted state.
pub struct PgResultStore {
    db: Database,
    tx: watch::Sender<Arc<Vec<EventResult>>>,
}

impl PgResultStore {
    pub async fn new(db: Database) -> Result<Self> {
        let results = ResultRepository::new(db.pool()).list().await?;
        tracing::info!(count = results.len(), "Loaded results from Postgres");

        let (tx, _rx) = watch::channel(Arc::new(results));

        Ok(Self { db, tx })
    }

    async fn republish(&self) -> Result<()> {
        let results = ResultRepository::new(self.db.pool()).list().await?;
        self.tx.send_replace(Arc::new(results));

        Ok(())
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    fn snapshot(&self) -> Arc<Vec<EventResult>> {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Arc<Vec<EventResult>>> {
        self.tx.subscribe()
    }

    async fn add(&self, new: NewResult) -> Result<EventResult> {
        let record = ResultRepository::new(self.db.pool())
            .insert(&new.assign())
            .await?;
        self.republish().await?;

        Ok(record)
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        ResultRepository::new(self.db.pool()).delete(id).await?;
        self.republish().await?;

        Ok(())
    }
}
