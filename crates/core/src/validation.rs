//! Caller-side validation rules for content submitted to the stores.
//!
//! The stores accept any well-shaped value; these checks run in the
//! presentation layer before `create`/`update`.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum testimonial length, counted in characters.
pub const MAX_TESTIMONIAL_CONTENT_LENGTH: usize = 500;

/// Minimum number of complete curriculum videos a course must keep.
pub const MIN_CURRICULUM_VIDEOS: usize = 1;

/// Author recorded on testimonials submitted without one.
pub const DEFAULT_TESTIMONIAL_USER_ID: &str = "user";

/// Thumbnail shown for articles and courses saved without one.
pub const DEFAULT_THUMBNAIL_URL: &str = "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Reject values that are empty or whitespace-only.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Trim testimonial content and check it is non-empty and within
/// [`MAX_TESTIMONIAL_CONTENT_LENGTH`] characters.
pub fn normalize_testimonial_content(content: &str) -> Result<&str, CoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "testimonial content cannot be empty".to_string(),
        ));
    }
    let length = trimmed.chars().count();
    if length > MAX_TESTIMONIAL_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "testimonial content exceeds maximum length of {MAX_TESTIMONIAL_CONTENT_LENGTH} characters, got {length}"
        )));
    }
    Ok(trimmed)
}

/// A curriculum entry is kept only when both its title and URL are filled in.
pub fn is_complete_video(title: &str, video_url: &str) -> bool {
    !title.trim().is_empty() && !video_url.trim().is_empty()
}

/// Check the number of complete curriculum videos left after filtering.
pub fn validate_curriculum_len(count: usize) -> Result<(), CoreError> {
    if count < MIN_CURRICULUM_VIDEOS {
        return Err(CoreError::Validation(format!(
            "a course needs at least {MIN_CURRICULUM_VIDEOS} curriculum video"
        )));
    }
    Ok(())
}

/// Resolve a possibly blank thumbnail to [`DEFAULT_THUMBNAIL_URL`].
pub fn thumbnail_or_default(thumbnail_url: Option<&str>) -> String {
    match thumbnail_url.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_THUMBNAIL_URL.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_required ---------------------------------------------------

    #[test]
    fn required_accepts_text() {
        assert!(validate_required("title", "Intro").is_ok());
    }

    #[test]
    fn required_rejects_blank() {
        let err = validate_required("title", "   ").unwrap_err();
        assert!(err.to_string().contains("title is required"));
        assert!(validate_required("content", "").is_err());
    }

    // -- normalize_testimonial_content ---------------------------------------

    #[test]
    fn testimonial_content_is_trimmed() {
        assert_eq!(normalize_testimonial_content("  great course \n").unwrap(), "great course");
    }

    #[test]
    fn testimonial_content_empty_rejected() {
        assert!(normalize_testimonial_content(" \t ").is_err());
    }

    #[test]
    fn testimonial_content_limit_counts_characters() {
        // 500 multi-byte characters stay within the limit.
        let at_limit = "후".repeat(MAX_TESTIMONIAL_CONTENT_LENGTH);
        assert!(normalize_testimonial_content(&at_limit).is_ok());

        let over = "a".repeat(MAX_TESTIMONIAL_CONTENT_LENGTH + 1);
        let err = normalize_testimonial_content(&over).unwrap_err();
        assert!(err.to_string().contains("maximum length"));
    }

    // -- curriculum ----------------------------------------------------------

    #[test]
    fn incomplete_videos_detected() {
        assert!(is_complete_video("Lesson 1", "https://v/1"));
        assert!(!is_complete_video("", "https://v/1"));
        assert!(!is_complete_video("Lesson 1", "  "));
    }

    #[test]
    fn curriculum_needs_one_video() {
        assert!(validate_curriculum_len(0).is_err());
        assert!(validate_curriculum_len(1).is_ok());
        assert!(validate_curriculum_len(12).is_ok());
    }

    // -- thumbnail_or_default ------------------------------------------------

    #[test]
    fn thumbnail_falls_back_when_missing_or_blank() {
        assert_eq!(thumbnail_or_default(None), DEFAULT_THUMBNAIL_URL);
        assert_eq!(thumbnail_or_default(Some(" ")), DEFAULT_THUMBNAIL_URL);
        assert_eq!(thumbnail_or_default(Some("https://img/1.png")), "https://img/1.png");
    }
}
