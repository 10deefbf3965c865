//! Route definitions for the business registration resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::business;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET    /                     -> root
/// POST   /register             -> register
/// GET    /businesses           -> list
/// GET    /businesses/search    -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(business::root))
        .route("/register", post(business::register))
        .route("/businesses", get(business::list))
        .route("/businesses/search", get(business::search))
}
