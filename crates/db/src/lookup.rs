//! Postgres-backed [`BusinessLookup`].

use async_trait::async_trait;
use savvy_core::error::CoreError;
use savvy_core::lookup::{BusinessLookup, BusinessMatch};

use crate::models::business::Business;
use crate::repositories::BusinessRepo;
use crate::DbPool;

/// Searches registered businesses by name or phone.
#[derive(Debug, Clone)]
pub struct PgBusinessLookup {
    pool: DbPool,
}

impl PgBusinessLookup {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<Business> for BusinessMatch {
    fn from(business: Business) -> Self {
        BusinessMatch::with_placeholder_image(business.name, business.address, business.phone)
    }
}

#[async_trait]
impl BusinessLookup for PgBusinessLookup {
    async fn find_match(&self, query: &str) -> Result<Option<BusinessMatch>, CoreError> {
        let found = BusinessRepo::search_first(&self.pool, query)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Business search failed");
                CoreError::Internal(format!("Business search failed: {e}"))
            })?;
        Ok(found.map(BusinessMatch::from))
    }
}
