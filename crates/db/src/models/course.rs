//! Course entity model and DTOs.

use std::collections::BTreeSet;
use std::fmt;

use academy_core::error::CoreError;
use academy_core::roles::{default_allowed_roles, RoleGated, RoleTag};
use academy_core::types::{DbId, Timestamp};
use academy_core::validation::{
    is_complete_video, thumbnail_or_default, validate_curriculum_len, validate_required,
    DEFAULT_THUMBNAIL_URL,
};
use serde::{Deserialize, Serialize};

/// Which of the two disjoint course partitions a course lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Membership,
    Master,
}

impl CourseType {
    /// Order in which cross-partition lookups scan the partitions.
    pub const SEARCH_ORDER: [CourseType; 2] = [CourseType::Membership, CourseType::Master];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseType::Membership => "membership",
            CourseType::Master => "master",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lesson in a course's curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumVideo {
    pub title: String,
    pub video_url: String,
    /// Length in seconds.
    #[serde(default)]
    pub duration: u32,
}

impl CurriculumVideo {
    pub fn new(title: impl Into<String>, video_url: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            video_url: video_url.into(),
            duration,
        }
    }

    pub fn is_complete(&self) -> bool {
        is_complete_video(&self.title, &self.video_url)
    }
}

/// A course record.
///
/// `course_type` is fixed at creation: updates cannot move a course
/// between partitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "Id")]
    pub id: DbId,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub allowed_roles: BTreeSet<RoleTag>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub curriculum_videos: Vec<CurriculumVideo>,
    pub created_at: Timestamp,
}

impl Course {
    /// The thumbnail to display, falling back to the shared default.
    pub fn thumbnail(&self) -> &str {
        match self.thumbnail_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_THUMBNAIL_URL,
        }
    }

    /// Sum of curriculum video durations, in seconds.
    pub fn total_duration(&self) -> u64 {
        self.curriculum_videos
            .iter()
            .map(|video| u64::from(video.duration))
            .sum()
    }

    pub(crate) fn from_create(id: DbId, input: &CreateCourse, now: Timestamp) -> Self {
        Self {
            id,
            course_type: input.course_type,
            title: input.title.clone(),
            description: input.description.clone(),
            thumbnail_url: input.thumbnail_url.clone(),
            allowed_roles: input.allowed_roles.clone(),
            is_pinned: input.is_pinned,
            curriculum_videos: input.curriculum_videos.clone(),
            created_at: input.created_at.unwrap_or(now),
        }
    }
}

impl RoleGated for Course {
    fn allowed_roles(&self) -> &BTreeSet<RoleTag> {
        &self.allowed_roles
    }
}

/// DTO for creating a new course. `course_type` selects the partition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default = "default_allowed_roles")]
    pub allowed_roles: BTreeSet<RoleTag>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub curriculum_videos: Vec<CurriculumVideo>,
    /// Stamped with the current time by the store if omitted.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl CreateCourse {
    /// An unpinned draft visible to every role, with an empty curriculum.
    pub fn new(
        course_type: CourseType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            course_type,
            title: title.into(),
            description: description.into(),
            thumbnail_url: None,
            allowed_roles: default_allowed_roles(),
            is_pinned: false,
            curriculum_videos: Vec::new(),
            created_at: None,
        }
    }

    pub fn with_video(mut self, video: CurriculumVideo) -> Self {
        self.curriculum_videos.push(video);
        self
    }

    /// Upload-form checks: title and description are required, incomplete
    /// curriculum entries are dropped and at least one must remain, and a
    /// blank thumbnail is replaced by the default one.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validate_required("title", &self.title)?;
        validate_required("description", &self.description)?;
        self.curriculum_videos = complete_videos(self.curriculum_videos)?;
        self.thumbnail_url = Some(thumbnail_or_default(self.thumbnail_url.as_deref()));
        Ok(self)
    }
}

/// DTO for updating an existing course. All fields are optional.
///
/// Has no `type` field: a `type` key in incoming JSON is ignored, so a
/// course never changes partition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub allowed_roles: Option<BTreeSet<RoleTag>>,
    pub is_pinned: Option<bool>,
    pub curriculum_videos: Option<Vec<CurriculumVideo>>,
    pub created_at: Option<Timestamp>,
}

impl UpdateCourse {
    /// Overwrite each field of `course` that is present in the patch.
    pub fn apply_to(&self, course: &mut Course) {
        if let Some(title) = &self.title {
            course.title = title.clone();
        }
        if let Some(description) = &self.description {
            course.description = description.clone();
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            course.thumbnail_url = Some(thumbnail_url.clone());
        }
        if let Some(allowed_roles) = &self.allowed_roles {
            course.allowed_roles = allowed_roles.clone();
        }
        if let Some(is_pinned) = self.is_pinned {
            course.is_pinned = is_pinned;
        }
        if let Some(videos) = &self.curriculum_videos {
            course.curriculum_videos = videos.clone();
        }
        if let Some(created_at) = self.created_at {
            course.created_at = created_at;
        }
    }

    /// Same checks as [`CreateCourse::validated`], for the fields present.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        if let Some(title) = &self.title {
            validate_required("title", title)?;
        }
        if let Some(description) = &self.description {
            validate_required("description", description)?;
        }
        if let Some(videos) = self.curriculum_videos.take() {
            self.curriculum_videos = Some(complete_videos(videos)?);
        }
        if let Some(thumbnail_url) = self.thumbnail_url.take() {
            self.thumbnail_url = Some(thumbnail_or_default(Some(&thumbnail_url)));
        }
        Ok(self)
    }
}

fn complete_videos(videos: Vec<CurriculumVideo>) -> Result<Vec<CurriculumVideo>, CoreError> {
    let complete: Vec<CurriculumVideo> = videos
        .into_iter()
        .filter(CurriculumVideo::is_complete)
        .collect();
    validate_curriculum_len(complete.len())?;
    Ok(complete)
}
