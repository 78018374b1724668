//! Handlers for the character list pages and the flag mutations.
//!
//! Pages render HTML filtered by flag:
//! `/`, `/all`, `/blipped`, `/safe`, `/unknown`
//!
//! Mutations set a character's flag by catalog id and answer with the
//! update result `[rows_affected]`:
//! `/blip/{id}`, `/unblip/{id}`

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use blip_core::types::{Flag, MarvelId};

use crate::error::AppResult;
use crate::render;
use crate::state::AppState;

/// A filtered view of the character table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    All,
    Blipped,
    Safe,
    Unknown,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::All => "The Blip (All Characters)",
            View::Blipped => "The Blip (Blipped)",
            View::Safe => "The Blip (Safe)",
            View::Unknown => "The Blip (Unknown)",
        }
    }

    /// Flag filter, or `None` for the unfiltered view.
    pub fn filter(self) -> Option<Flag> {
        match self {
            View::All => None,
            View::Blipped => Some(Some(true)),
            View::Safe => Some(Some(false)),
            View::Unknown => Some(None),
        }
    }
}

async fn render_view(state: &AppState, view: View) -> AppResult<Html<String>> {
    let characters = match view.filter() {
        None => state.characters.list_all().await?,
        Some(flag) => state.characters.list_by_flag(flag).await?,
    };
    Ok(Html(render::character_page(view.title(), &characters)))
}

/// GET / and GET /all
pub async fn list_all(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_view(&state, View::All).await
}

/// GET /blipped
pub async fn list_blipped(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_view(&state, View::Blipped).await
}

/// GET /safe
pub async fn list_safe(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_view(&state, View::Safe).await
}

/// GET /unknown
pub async fn list_unknown(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_view(&state, View::Unknown).await
}

/// Set the flag for `raw_id`.
///
/// Ids are not validated: one that is not a number cannot match any row,
/// so it reports zero rows affected like any other unknown id.
async fn set_flag(state: &AppState, raw_id: &str, blip: bool) -> AppResult<Json<[u64; 1]>> {
    let affected = match raw_id.parse::<MarvelId>() {
        Ok(marvel_id) => state.characters.set_flag(marvel_id, blip).await?,
        Err(_) => {
            tracing::debug!(id = raw_id, "Non-numeric character id matches nothing");
            0
        }
    };
    tracing::info!(id = raw_id, blip, affected, "Character flag updated");
    Ok(Json([affected]))
}

/// GET /blip/{id}
pub async fn blip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<[u64; 1]>> {
    set_flag(&state, &id, true).await
}

/// GET /unblip/{id}
pub async fn unblip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<[u64; 1]>> {
    set_flag(&state, &id, false).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_filter_on_expected_flag() {
        assert_eq!(View::All.filter(), None);
        assert_eq!(View::Blipped.filter(), Some(Some(true)));
        assert_eq!(View::Safe.filter(), Some(Some(false)));
        assert_eq!(View::Unknown.filter(), Some(None));
    }
}
