//! Article entity model and DTOs.

use std::collections::BTreeSet;

use academy_core::catalog::reading_minutes;
use academy_core::error::CoreError;
use academy_core::roles::{default_allowed_roles, RoleGated, RoleTag};
use academy_core::types::{DbId, Timestamp};
use academy_core::validation::{thumbnail_or_default, validate_required, DEFAULT_THUMBNAIL_URL};
use serde::{Deserialize, Serialize};

/// An article record. `content` may embed rich markup and is stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "Id")]
    pub id: DbId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub allowed_roles: BTreeSet<RoleTag>,
    pub created_at: Timestamp,
}

impl Article {
    /// The thumbnail to display, falling back to the shared default.
    pub fn thumbnail(&self) -> &str {
        match self.thumbnail_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_THUMBNAIL_URL,
        }
    }

    /// Estimated reading time of `content`, in minutes.
    pub fn reading_minutes(&self) -> usize {
        reading_minutes(&self.content)
    }

    pub(crate) fn from_create(id: DbId, input: &CreateArticle, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title.clone(),
            content: input.content.clone(),
            thumbnail_url: input.thumbnail_url.clone(),
            allowed_roles: input.allowed_roles.clone(),
            created_at: input.created_at.unwrap_or(now),
        }
    }
}

impl RoleGated for Article {
    fn allowed_roles(&self) -> &BTreeSet<RoleTag> {
        &self.allowed_roles
    }
}

/// DTO for creating a new article.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default = "default_allowed_roles")]
    pub allowed_roles: BTreeSet<RoleTag>,
    /// Stamped with the current time by the store if omitted.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl CreateArticle {
    /// A draft visible to every role, with no thumbnail.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            thumbnail_url: None,
            allowed_roles: default_allowed_roles(),
            created_at: None,
        }
    }

    /// Upload-form checks: title and content are required, and a blank
    /// thumbnail is replaced by the default one.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validate_required("title", &self.title)?;
        validate_required("content", &self.content)?;
        self.thumbnail_url = Some(thumbnail_or_default(self.thumbnail_url.as_deref()));
        Ok(self)
    }
}

/// DTO for updating an existing article. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub thumbnail_url: Option<String>,
    pub allowed_roles: Option<BTreeSet<RoleTag>>,
    pub created_at: Option<Timestamp>,
}

impl UpdateArticle {
    /// Overwrite each field of `article` that is present in the patch.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(content) = &self.content {
            article.content = content.clone();
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            article.thumbnail_url = Some(thumbnail_url.clone());
        }
        if let Some(allowed_roles) = &self.allowed_roles {
            article.allowed_roles = allowed_roles.clone();
        }
        if let Some(created_at) = self.created_at {
            article.created_at = created_at;
        }
    }

    /// Same checks as [`CreateArticle::validated`], for the fields present.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        if let Some(title) = &self.title {
            validate_required("title", title)?;
        }
        if let Some(content) = &self.content {
            validate_required("content", content)?;
        }
        if let Some(thumbnail_url) = self.thumbnail_url.take() {
            self.thumbnail_url = Some(thumbnail_or_default(Some(&thumbnail_url)));
        }
        Ok(self)
    }
}
