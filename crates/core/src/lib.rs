//! Domain layer for the academy content platform.
//!
//! Holds everything that does not need a store: identifier and timestamp
//! aliases, the error taxonomy, the role visibility policy, caller-side
//! validation rules and pure listing helpers. The `academy-db` crate builds
//! its models and repositories on top of these.

pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
