//! Testimonial entity model and DTOs.

use academy_core::error::CoreError;
use academy_core::types::{DbId, Timestamp};
use academy_core::validation::{normalize_testimonial_content, DEFAULT_TESTIMONIAL_USER_ID};
use serde::{Deserialize, Serialize};

/// A testimonial record. Hidden testimonials stay in the store but are left
/// out of the public feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "Id")]
    pub id: DbId,
    pub content: String,
    #[serde(default)]
    pub is_hidden: bool,
    pub user_id: String,
    pub created_at: Timestamp,
}

impl Testimonial {
    pub(crate) fn from_create(id: DbId, input: &CreateTestimonial, now: Timestamp) -> Self {
        Self {
            id,
            content: input.content.clone(),
            is_hidden: input.is_hidden,
            user_id: input.user_id.clone(),
            created_at: input.created_at.unwrap_or(now),
        }
    }
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    pub content: String,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Stamped with the current time by the store if omitted.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn default_user_id() -> String {
    DEFAULT_TESTIMONIAL_USER_ID.to_string()
}

impl CreateTestimonial {
    /// A visible testimonial from the default user.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_hidden: false,
            user_id: default_user_id(),
            created_at: None,
        }
    }

    /// Trim the content and enforce the length limit.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.content = normalize_testimonial_content(&self.content)?.to_string();
        Ok(self)
    }
}

/// DTO for updating an existing testimonial. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    pub content: Option<String>,
    pub is_hidden: Option<bool>,
    pub user_id: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl UpdateTestimonial {
    /// Overwrite each field of `testimonial` that is present in the patch.
    pub fn apply_to(&self, testimonial: &mut Testimonial) {
        if let Some(content) = &self.content {
            testimonial.content = content.clone();
        }
        if let Some(is_hidden) = self.is_hidden {
            testimonial.is_hidden = is_hidden;
        }
        if let Some(user_id) = &self.user_id {
            testimonial.user_id = user_id.clone();
        }
        if let Some(created_at) = self.created_at {
            testimonial.created_at = created_at;
        }
    }

    pub fn validated(mut self) -> Result<Self, CoreError> {
        if let Some(content) = self.content.take() {
            self.content = Some(normalize_testimonial_content(&content)?.to_string());
        }
        Ok(self)
    }
}
