//! In-memory data access for articles, courses and testimonials.
//!
//! Each repository owns its collection for the lifetime of the process,
//! seeded from fixture JSON at construction. Every operation waits out a
//! simulated network delay and hands back owned copies, so callers never
//! alias store state. Role visibility is not enforced here; see
//! [`listing`] and [`academy_core::roles`].

pub mod config;
pub mod listing;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;
pub mod stores;

pub use config::{ConfigError, StoreConfig};
pub use seed::{SeedData, SeedError};
pub use store::Latency;
pub use stores::{StartupError, Stores};
