//! Shared primitive aliases for persisted entities.

/// Row identifiers are PostgreSQL `BIGSERIAL`.
pub type DbId = i64;

/// Creation times are stored as `TIMESTAMPTZ` and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
