//! Repository for the `businesses` table.

use sqlx::PgPool;

use crate::models::business::{Business, CreateBusiness};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, address, owner_name, email, phone, website, password_hash, created_at";

/// Unique constraint guarding `businesses.email`.
pub const UQ_BUSINESSES_EMAIL: &str = "uq_businesses_email";

/// Provides insert and read operations for businesses.
pub struct BusinessRepo;

impl BusinessRepo {
    /// Insert a new business, returning the created row.
    ///
    /// Fails with a unique violation on [`UQ_BUSINESSES_EMAIL`] when the email
    /// is already registered.
    pub async fn create(pool: &PgPool, input: &CreateBusiness) -> Result<Business, sqlx::Error> {
        let query = format!(
            "INSERT INTO businesses (name, address, owner_name, email, phone, website, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Business>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.owner_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// List all businesses in registration order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Business>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM businesses ORDER BY id");
        sqlx::query_as::<_, Business>(&query).fetch_all(pool).await
    }

    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Business>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM businesses WHERE email = $1");
        sqlx::query_as::<_, Business>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find the first business whose name or phone contains `term`,
    /// case-insensitively, oldest first.
    pub async fn search_first(pool: &PgPool, term: &str) -> Result<Option<Business>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM businesses
             WHERE name ILIKE $1 OR phone ILIKE $1
             ORDER BY id
             LIMIT 1"
        );
        sqlx::query_as::<_, Business>(&query)
            .bind(like_pattern(term))
            .fetch_optional(pool)
            .await
    }
}

/// Wrap `term` in `%` wildcards, escaping LIKE metacharacters.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
