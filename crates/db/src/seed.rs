//! Fixture data the stores are seeded with at construction.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::models::article::Article;
use crate::models::course::Course;
use crate::models::testimonial::Testimonial;

pub const ARTICLES_FILE: &str = "articles.json";
pub const MEMBERSHIP_COURSES_FILE: &str = "membershipCourses.json";
pub const MASTER_COURSES_FILE: &str = "masterCourses.json";
pub const TESTIMONIALS_FILE: &str = "testimonials.json";

const BUNDLED_ARTICLES: &str = include_str!("../seed/articles.json");
const BUNDLED_MEMBERSHIP_COURSES: &str = include_str!("../seed/membershipCourses.json");
const BUNDLED_MASTER_COURSES: &str = include_str!("../seed/masterCourses.json");
const BUNDLED_TESTIMONIALS: &str = include_str!("../seed/testimonials.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Initial contents of every store.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub articles: Vec<Article>,
    pub membership_courses: Vec<Course>,
    pub master_courses: Vec<Course>,
    pub testimonials: Vec<Testimonial>,
}

impl SeedData {
    /// Decode the fixtures compiled into this crate.
    pub fn bundled() -> Result<Self, SeedError> {
        Ok(Self {
            articles: parse(ARTICLES_FILE, BUNDLED_ARTICLES)?,
            membership_courses: parse(MEMBERSHIP_COURSES_FILE, BUNDLED_MEMBERSHIP_COURSES)?,
            master_courses: parse(MASTER_COURSES_FILE, BUNDLED_MASTER_COURSES)?,
            testimonials: parse(TESTIMONIALS_FILE, BUNDLED_TESTIMONIALS)?,
        })
    }

    /// Read the four fixture files from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, SeedError> {
        tracing::debug!(dir = %dir.display(), "Reading seed fixtures");
        Ok(Self {
            articles: read(dir, ARTICLES_FILE)?,
            membership_courses: read(dir, MEMBERSHIP_COURSES_FILE)?,
            master_courses: read(dir, MASTER_COURSES_FILE)?,
            testimonials: read(dir, TESTIMONIALS_FILE)?,
        })
    }
}

fn read<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, SeedError> {
    let path = dir.join(name);
    let raw = std::fs::read_to_string(&path).map_err(|source| SeedError::Io {
        path: path.clone(),
        source,
    })?;
    parse(name, &raw)
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, SeedError> {
    let records: Vec<T> = serde_json::from_str(raw).map_err(|source| SeedError::Json {
        name: name.to_string(),
        source,
    })?;
    tracing::info!(fixture = name, count = records.len(), "Loaded seed fixture");
    Ok(records)
}
