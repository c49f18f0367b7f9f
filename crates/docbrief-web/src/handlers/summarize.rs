use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::HeaderMap;

use docbrief_core::SummaryResult;

use crate::error::ApiError;
use crate::handlers::auth::authenticate_request;
use crate::state::AppState;
use crate::upload;

/// Accept an uploaded document and return its structured summary.
///
/// With auth enabled the token is verified before the upload is even parsed,
/// so an invalid token costs no extraction or model work. The result is
/// appended to the caller's history; anonymous requests keep no history.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<SummaryResult>, ApiError> {
    let email = if state.signer.is_some() {
        Some(authenticate_request(&state, &headers)?)
    } else {
        None
    };

    let upload = upload::parse_multipart(multipart).await?;
    tracing::info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        user = email.as_deref().unwrap_or("anonymous"),
        "summarizing upload"
    );

    let result = state.pipeline.summarize(&upload.data).await?;

    if let Some(email) = email {
        state.store.append_summary(&email, result.clone());
    }

    Ok(Json(result))
}

/// Return the caller's accumulated summaries, oldest first.
pub async fn history(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<SummaryResult>>, ApiError> {
    let email = authenticate_request(&state, &headers)?;
    Ok(Json(state.store.summaries_for(&email)))
}
