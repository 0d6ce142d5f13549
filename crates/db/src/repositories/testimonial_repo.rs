//! Repository for the testimonial collection.

use academy_core::catalog::newest_first;
use academy_core::error::CoreError;
use academy_core::types::DbId;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::store::{next_id, Latency};

const ENTITY: &str = "testimonial";

/// Provides CRUD operations for testimonials, listed newest first.
pub struct TestimonialRepo {
    testimonials: RwLock<Vec<Testimonial>>,
    latency: Latency,
}

impl TestimonialRepo {
    pub fn new(seed: Vec<Testimonial>, latency: Latency) -> Self {
        tracing::info!(entity = ENTITY, count = seed.len(), "Store seeded");
        Self {
            testimonials: RwLock::new(seed),
            latency,
        }
    }

    /// All testimonials, hidden ones included, sorted by `created_at`
    /// descending. Entries with equal timestamps keep insertion order.
    pub async fn list(&self) -> Vec<Testimonial> {
        self.latency.wait().await;
        let mut testimonials = self.testimonials.read().await.clone();
        testimonials.sort_by(|a, b| newest_first(&a.created_at, &b.created_at));
        testimonials
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Testimonial, CoreError> {
        self.latency.wait().await;
        self.testimonials
            .read()
            .await
            .iter()
            .find(|testimonial| testimonial.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    pub async fn create(&self, input: &CreateTestimonial) -> Testimonial {
        self.latency.wait().await;
        let mut testimonials = self.testimonials.write().await;
        let id = next_id(testimonials.iter().map(|testimonial| testimonial.id));
        let testimonial = Testimonial::from_create(id, input, Utc::now());
        testimonials.push(testimonial.clone());
        tracing::debug!(entity = ENTITY, id, "Created");
        testimonial
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Testimonial, CoreError> {
        self.latency.wait().await;
        let mut testimonials = self.testimonials.write().await;
        let testimonial = find_mut(&mut testimonials, id)?;
        input.apply_to(testimonial);
        tracing::debug!(entity = ENTITY, id, "Updated");
        Ok(testimonial.clone())
    }

    /// Flip `is_hidden` in one step under the write lock.
    pub async fn toggle_hidden(&self, id: DbId) -> Result<Testimonial, CoreError> {
        self.latency.wait().await;
        let mut testimonials = self.testimonials.write().await;
        let testimonial = find_mut(&mut testimonials, id)?;
        testimonial.is_hidden = !testimonial.is_hidden;
        tracing::debug!(
            entity = ENTITY,
            id,
            is_hidden = testimonial.is_hidden,
            "Visibility toggled"
        );
        Ok(testimonial.clone())
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.latency.wait().await;
        let mut testimonials = self.testimonials.write().await;
        let index = testimonials
            .iter()
            .position(|testimonial| testimonial.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        testimonials.remove(index);
        tracing::debug!(entity = ENTITY, id, "Deleted");
        Ok(())
    }
}

fn find_mut(testimonials: &mut [Testimonial], id: DbId) -> Result<&mut Testimonial, CoreError> {
    testimonials
        .iter_mut()
        .find(|testimonial| testimonial.id == id)
        .ok_or_else(|| CoreError::not_found(ENTITY, id))
}
