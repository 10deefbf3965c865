//! Repository structs with async CRUD methods.
//!
//! Each repository is a zero-sized struct whose methods take `&PgPool`.

pub mod business_repo;

pub use business_repo::BusinessRepo;
