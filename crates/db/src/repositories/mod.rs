//! Repository layer.
//!
//! Each repository owns its collection behind a lock and exposes async
//! CRUD. Every method waits out the store's [`Latency`](crate::Latency)
//! before touching state and returns owned copies.

pub mod article_repo;
pub mod course_repo;
pub mod testimonial_repo;

pub use article_repo::ArticleRepo;
pub use course_repo::CourseRepo;
pub use testimonial_repo::TestimonialRepo;
