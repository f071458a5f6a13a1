use std::sync::Arc;

use crate::cache::CoverLetterCache;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both collaborators sit behind trait objects so their lifecycle is tied to
/// process start and tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn CoverLetterCache>,
    pub llm: Arc<dyn TextGenerator>,
}
