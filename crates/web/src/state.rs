use std::sync::Arc;

use storage::store::ResultStore;

use crate::middleware::auth::Sessions;

/// Shared state handed to every handler. The store backend is picked once
/// at startup; handlers only see the trait object.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResultStore>,
    pub sessions: Sessions,
}
