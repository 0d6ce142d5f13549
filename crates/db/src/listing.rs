//! Listing and dashboard helpers applied to copies returned by the stores.
//!
//! Nothing here touches a repository. Role filtering happens in
//! [`visible_to`]; admin views skip it and list everything.

use academy_core::catalog::{
    created_within_window, matches_search, newest_first, pinned_then_newest, posted_this_week,
    RELATED_ARTICLE_LIMIT,
};
use academy_core::roles::{RoleGated, Viewer};
use academy_core::types::{DbId, Timestamp};
use serde::Serialize;

use crate::models::article::Article;
use crate::models::course::Course;
use crate::models::testimonial::Testimonial;

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Keep only the entities `viewer` may see.
pub fn visible_to<T: RoleGated>(viewer: Viewer, items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.visible_to(viewer))
        .collect()
}

/// Testimonials shown on the public feed: everything not hidden.
pub fn public_testimonials(testimonials: Vec<Testimonial>) -> Vec<Testimonial> {
    testimonials
        .into_iter()
        .filter(|testimonial| !testimonial.is_hidden)
        .collect()
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Pinned courses first, then newest first.
pub fn sort_courses_for_display(courses: &mut [Course]) {
    courses.sort_by(|a, b| {
        pinned_then_newest(a.is_pinned, &a.created_at, b.is_pinned, &b.created_at)
    });
}

pub fn sort_articles_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| newest_first(&a.created_at, &b.created_at));
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Articles whose title or content contains `query`, ignoring case.
pub fn search_articles<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| {
            matches_search(query, &[article.title.as_str(), article.content.as_str()])
        })
        .collect()
}

/// Courses whose title or description contains `query`, ignoring case.
pub fn search_courses<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| {
            matches_search(query, &[course.title.as_str(), course.description.as_str()])
        })
        .collect()
}

/// Up to [`RELATED_ARTICLE_LIMIT`] other articles, in the order given.
pub fn related_articles(articles: &[Article], current_id: DbId) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| article.id != current_id)
        .take(RELATED_ARTICLE_LIMIT)
        .collect()
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

pub fn pinned_count(courses: &[Course]) -> usize {
    courses.iter().filter(|course| course.is_pinned).count()
}

/// Lessons across `courses`.
pub fn total_curriculum_videos(courses: &[Course]) -> usize {
    courses
        .iter()
        .map(|course| course.curriculum_videos.len())
        .sum()
}

/// Articles counted by the insights page's "posted this week" tile.
pub fn articles_posted_this_week(articles: &[Article], now: &Timestamp) -> usize {
    articles
        .iter()
        .filter(|article| posted_this_week(&article.created_at, now))
        .count()
}

/// Sum of per-article reading estimates, each rounded up separately.
pub fn total_reading_minutes(articles: &[Article]) -> usize {
    articles.iter().map(Article::reading_minutes).sum()
}

/// Testimonials counted by the feed page's "this week" tile. Same rounded
/// rule as [`articles_posted_this_week`], not the one in
/// [`TestimonialStats`].
pub fn testimonials_posted_this_week(testimonials: &[Testimonial], now: &Timestamp) -> usize {
    testimonials
        .iter()
        .filter(|testimonial| posted_this_week(&testimonial.created_at, now))
        .count()
}

/// Characters written across all testimonials, hidden ones included.
pub fn total_testimonial_characters(testimonials: &[Testimonial]) -> usize {
    testimonials
        .iter()
        .map(|testimonial| testimonial.content.chars().count())
        .sum()
}

/// Admin dashboard counters for the testimonial feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialStats {
    pub total: usize,
    pub visible: usize,
    pub hidden: usize,
    /// Created at or after `now - 7 days`.
    pub this_week: usize,
}

impl TestimonialStats {
    pub fn compute(testimonials: &[Testimonial], now: &Timestamp) -> Self {
        let hidden = testimonials.iter().filter(|t| t.is_hidden).count();
        Self {
            total: testimonials.len(),
            visible: testimonials.len() - hidden,
            hidden,
            this_week: testimonials
                .iter()
                .filter(|t| created_within_window(&t.created_at, now))
                .count(),
        }
    }
}
