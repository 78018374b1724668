use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;
use crate::sync::run_sync;

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub success: bool,
}

/// GET /sync
///
/// Replaces the character table with a fresh copy of the catalog. Blocks
/// until every page has been fetched and stored.
pub async fn sync(State(state): State<AppState>) -> AppResult<Json<SyncResponse>> {
    run_sync(
        state.catalog.as_ref(),
        &state.classifier,
        &state.characters,
    )
    .await?;
    Ok(Json(SyncResponse { success: true }))
}
