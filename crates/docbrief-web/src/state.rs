use std::sync::Arc;

use docbrief_core::{SessionStore, SummaryPipeline, TokenSigner};

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub pipeline: SummaryPipeline,
    /// `None` when the server runs without authentication.
    pub signer: Option<TokenSigner>,
}
