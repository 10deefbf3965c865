//! Handlers for business listing, registration, and search.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use savvy_core::error::CoreError;
use savvy_core::lookup::BusinessMatch;
use savvy_core::registration::BusinessRegistration;
use savvy_db::models::business::{Business, CreateBusiness};
use savvy_db::repositories::business_repo::UQ_BUSINESSES_EMAIL;
use savvy_db::repositories::BusinessRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Message returned when the email is already registered.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "A business with this email already exists.";

/// Message returned when a search matches nothing.
pub const NO_MATCH_MESSAGE: &str = "We couldn't find a business with that name.";

/// Message returned for a blank search query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a business name or phone number.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ServiceMessage {
    pub message: &'static str,
}

/// Query parameters for `GET /businesses/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api
pub async fn root() -> Json<ServiceMessage> {
    Json(ServiceMessage {
        message: "Backend server is running successfully!",
    })
}

/// GET /api/businesses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Business>>> {
    let businesses = BusinessRepo::list(&state.pool).await?;
    Ok(Json(businesses))
}

/// POST /api/register
///
/// Validates required fields, hashes the password, and inserts one row.
/// A duplicate email yields 409.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<BusinessRegistration>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Business>)> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let registration = input.validate()?;

    let password = registration.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateBusiness {
        name: registration.business_name,
        address: registration.business_address,
        owner_name: registration.owner_name,
        email: registration.email,
        phone: registration.phone,
        website: registration.website,
        password_hash,
    };

    let business = BusinessRepo::create(&state.pool, &create)
        .await
        .map_err(|e| {
            if savvy_db::is_unique_violation(&e, UQ_BUSINESSES_EMAIL) {
                AppError::Core(CoreError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()))
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(
        business_id = business.id,
        name = %business.name,
        "Business registered"
    );

    Ok((StatusCode::CREATED, Json(business)))
}

/// GET /api/businesses/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<BusinessMatch>> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(AppError::BadRequest(EMPTY_QUERY_MESSAGE.to_string()));
    }

    let found = state.lookup.find_match(query).await?;
    found
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(NO_MATCH_MESSAGE.to_string()).into())
}
