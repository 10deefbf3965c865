pub mod business;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                         service status message
/// /register                 register a business (POST)
/// /businesses               list businesses
/// /businesses/search        search by name or phone
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(business::router())
}
