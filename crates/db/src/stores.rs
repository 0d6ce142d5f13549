//! The set of repositories an application holds for its lifetime.

use std::sync::Arc;

use crate::config::{ConfigError, StoreConfig};
use crate::repositories::{ArticleRepo, CourseRepo, TestimonialRepo};
use crate::seed::{SeedData, SeedError};
use crate::store::Latency;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Every repository, constructed once at startup and shared by `Arc`.
#[derive(Clone)]
pub struct Stores {
    pub articles: Arc<ArticleRepo>,
    pub courses: Arc<CourseRepo>,
    pub testimonials: Arc<TestimonialRepo>,
}

impl Stores {
    pub fn new(seed: SeedData, latency: Latency) -> Self {
        Self {
            articles: Arc::new(ArticleRepo::new(seed.articles, latency)),
            courses: Arc::new(CourseRepo::new(
                seed.membership_courses,
                seed.master_courses,
                latency,
            )),
            testimonials: Arc::new(TestimonialRepo::new(seed.testimonials, latency)),
        }
    }

    /// Seed from `config.seed_dir`, or the bundled fixtures when unset.
    pub fn from_config(config: &StoreConfig) -> Result<Self, SeedError> {
        let seed = match &config.seed_dir {
            Some(dir) => SeedData::from_dir(dir)?,
            None => SeedData::bundled()?,
        };
        Ok(Self::new(seed, config.latency()))
    }

    /// Load `.env` if present, read [`StoreConfig`] from the environment and
    /// build the stores.
    pub fn from_env() -> Result<Self, StartupError> {
        dotenvy::dotenv().ok();
        let config = StoreConfig::from_env()?;
        tracing::info!(
            latency_min_ms = config.latency_min_ms,
            latency_max_ms = config.latency_max_ms,
            seed_dir = ?config.seed_dir,
            "Loaded store configuration"
        );
        Ok(Self::from_config(&config)?)
    }
}
