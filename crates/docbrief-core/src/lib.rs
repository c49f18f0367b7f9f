pub mod auth;
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod store;

// Re-export for convenience
pub use auth::{AuthError, Claims, TokenSigner};
pub use config::Config;
pub use extract::{ExtractError, TextExtractor};
pub use pipeline::{PipelineError, SummaryPipeline};
pub use store::{MemoryStore, SessionStore, StoreError, UserRecord};

// Canonical response types live in the LLM crate; re-exported here so
// consumers only need docbrief-core.
pub use docbrief_llm::{ChatBackend, Interpretation, LlmError, SummaryResult};
