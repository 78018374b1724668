pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page and action route tree.
///
/// ```text
/// GET /                 all characters (HTML)
/// GET /all              all characters (HTML)
/// GET /blipped          flag = true (HTML)
/// GET /safe             flag = false (HTML)
/// GET /unknown          flag unset (HTML)
/// GET /sync             refetch the catalog, {"success": true}
/// GET /blip/{id}        set flag = true, [rows_affected]
/// GET /unblip/{id}      set flag = false, [rows_affected]
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::characters::list_all))
        .route("/all", get(handlers::characters::list_all))
        .route("/blipped", get(handlers::characters::list_blipped))
        .route("/safe", get(handlers::characters::list_safe))
        .route("/unknown", get(handlers::characters::list_unknown))
        .route("/sync", get(handlers::sync::sync))
        .route("/blip/{id}", get(handlers::characters::blip))
        .route("/unblip/{id}", get(handlers::characters::unblip))
}
