use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::resume::ResumeDocument;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single document edited during this session. Lives only in memory.
    pub document: Arc<RwLock<ResumeDocument>>,
    pub config: Config,
}

impl AppState {
    pub fn new(document: ResumeDocument, config: Config) -> Self {
        Self {
            document: Arc::new(RwLock::new(document)),
            config,
        }
    }
}
