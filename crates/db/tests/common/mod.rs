#![allow(dead_code)]

use std::collections::BTreeSet;

use academy_core::roles::RoleTag;
use academy_core::types::Timestamp;
use academy_db::models::article::Article;
use academy_db::models::course::{Course, CourseType, CurriculumVideo};
use academy_db::models::testimonial::Testimonial;
use chrono::{TimeZone, Utc};

/// Midnight UTC on the given day of March 2024.
pub fn march(day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
}

pub fn roles(tags: &[RoleTag]) -> BTreeSet<RoleTag> {
    tags.iter().copied().collect()
}

pub fn article(id: i64, title: &str, created_at: Timestamp) -> Article {
    Article {
        id,
        title: title.to_string(),
        content: format!("<p>{title} body</p>"),
        thumbnail_url: None,
        allowed_roles: roles(&RoleTag::ALL),
        created_at,
    }
}

pub fn course(id: i64, course_type: CourseType, title: &str, created_at: Timestamp) -> Course {
    Course {
        id,
        course_type,
        title: title.to_string(),
        description: format!("{title} description"),
        thumbnail_url: None,
        allowed_roles: roles(&RoleTag::ALL),
        is_pinned: false,
        curriculum_videos: vec![CurriculumVideo::new("Intro", "https://v/intro", 60)],
        created_at,
    }
}

pub fn testimonial(id: i64, content: &str, created_at: Timestamp) -> Testimonial {
    Testimonial {
        id,
        content: content.to_string(),
        is_hidden: false,
        user_id: "user".to_string(),
        created_at,
    }
}
