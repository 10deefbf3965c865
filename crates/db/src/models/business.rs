//! Business entity model and DTOs.

use savvy_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `businesses` table.
///
/// The password hash is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Business {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new business. `password_hash` must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateBusiness {
    pub name: String,
    pub address: Option<String>,
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub password_hash: String,
}
