use std::sync::Arc;

use crate::assist::AssistCoordinator;
use crate::config::Config;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. The store is the single owner of the session document;
/// the coordinator holds the four assist flow cells.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub assist: Arc<AssistCoordinator>,
    /// Runtime configuration; kept around for handlers that grow a need
    /// for it.
    #[allow(dead_code)]
    pub config: Config,
}
