//! Repository for the article collection.

use academy_core::error::CoreError;
use academy_core::types::DbId;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::store::{next_id, Latency};

const ENTITY: &str = "article";

/// Provides CRUD operations for articles.
pub struct ArticleRepo {
    articles: RwLock<Vec<Article>>,
    latency: Latency,
}

impl ArticleRepo {
    pub fn new(seed: Vec<Article>, latency: Latency) -> Self {
        tracing::info!(entity = ENTITY, count = seed.len(), "Store seeded");
        Self {
            articles: RwLock::new(seed),
            latency,
        }
    }

    /// All articles in insertion order.
    pub async fn list(&self) -> Vec<Article> {
        self.latency.wait().await;
        self.articles.read().await.clone()
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Article, CoreError> {
        self.latency.wait().await;
        self.articles
            .read()
            .await
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    /// Append a new article with the next id, returning the stored copy.
    pub async fn create(&self, input: &CreateArticle) -> Article {
        self.latency.wait().await;
        let mut articles = self.articles.write().await;
        let id = next_id(articles.iter().map(|article| article.id));
        let article = Article::from_create(id, input, Utc::now());
        articles.push(article.clone());
        tracing::debug!(entity = ENTITY, id, "Created");
        article
    }

    /// Merge the non-`None` fields of `input` over the stored article.
    pub async fn update(&self, id: DbId, input: &UpdateArticle) -> Result<Article, CoreError> {
        self.latency.wait().await;
        let mut articles = self.articles.write().await;
        let article = articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        input.apply_to(article);
        tracing::debug!(entity = ENTITY, id, "Updated");
        Ok(article.clone())
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.latency.wait().await;
        let mut articles = self.articles.write().await;
        let index = articles
            .iter()
            .position(|article| article.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        articles.remove(index);
        tracing::debug!(entity = ENTITY, id, "Deleted");
        Ok(())
    }
}
