//! # Taskhome Shared Library
//!
//! This crate contains the data layer shared by the Taskhome API server:
//! the entity store, its query operations, the home aggregation, and the
//! startup seeding routine.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and migration runner
//! - `models`: Database models and their query operations
//! - `home`: Home summary aggregation
//! - `seed`: One-shot startup seeding

pub mod db;
pub mod home;
pub mod models;
pub mod seed;

/// Current version of the taskhome shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
