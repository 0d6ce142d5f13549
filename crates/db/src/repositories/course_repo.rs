//! Repository for the two course partitions.
//!
//! Membership and master courses live in separate vectors with independent
//! id sequences, so the same id can exist once in each. Lookups by id alone
//! scan the partitions in [`CourseType::SEARCH_ORDER`] and take the first
//! match; callers that need a specific partition use the `_in` variants.

use academy_core::error::CoreError;
use academy_core::types::DbId;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::course::{Course, CourseType, CreateCourse, UpdateCourse};
use crate::store::{next_id, Latency};

const ENTITY: &str = "course";

#[derive(Debug, Default)]
struct Partitions {
    membership: Vec<Course>,
    master: Vec<Course>,
}

impl Partitions {
    fn get(&self, course_type: CourseType) -> &Vec<Course> {
        match course_type {
            CourseType::Membership => &self.membership,
            CourseType::Master => &self.master,
        }
    }

    fn get_mut(&mut self, course_type: CourseType) -> &mut Vec<Course> {
        match course_type {
            CourseType::Membership => &mut self.membership,
            CourseType::Master => &mut self.master,
        }
    }

    /// Partition and index of the first course with `id`, scanning
    /// `partitions` in order.
    fn locate(&self, id: DbId, partitions: &[CourseType]) -> Option<(CourseType, usize)> {
        partitions.iter().find_map(|&course_type| {
            self.get(course_type)
                .iter()
                .position(|course| course.id == id)
                .map(|index| (course_type, index))
        })
    }
}

/// Provides CRUD operations for membership and master courses.
pub struct CourseRepo {
    partitions: RwLock<Partitions>,
    latency: Latency,
}

impl CourseRepo {
    /// Seed each partition from its own fixture vector.
    pub fn new(membership: Vec<Course>, master: Vec<Course>, latency: Latency) -> Self {
        for (course_type, seed) in [
            (CourseType::Membership, &membership),
            (CourseType::Master, &master),
        ] {
            if let Some(course) = seed.iter().find(|c| c.course_type != course_type) {
                tracing::warn!(
                    entity = ENTITY,
                    id = course.id,
                    partition = %course_type,
                    course_type = %course.course_type,
                    "Seeded course type disagrees with its partition",
                );
            }
        }
        tracing::info!(
            entity = ENTITY,
            membership = membership.len(),
            master = master.len(),
            "Store seeded",
        );
        Self {
            partitions: RwLock::new(Partitions { membership, master }),
            latency,
        }
    }

    /// All courses in one partition, in insertion order.
    pub async fn list(&self, course_type: CourseType) -> Vec<Course> {
        self.latency.wait().await;
        self.partitions.read().await.get(course_type).clone()
    }

    /// Every course, membership partition first.
    pub async fn list_all(&self) -> Vec<Course> {
        self.latency.wait().await;
        let partitions = self.partitions.read().await;
        CourseType::SEARCH_ORDER
            .iter()
            .flat_map(|&course_type| partitions.get(course_type).iter().cloned())
            .collect()
    }

    /// First course with `id` across both partitions.
    pub async fn find_by_id(&self, id: DbId) -> Result<Course, CoreError> {
        self.find(id, &CourseType::SEARCH_ORDER).await
    }

    /// Course with `id` in one partition only.
    pub async fn find_by_id_in(
        &self,
        course_type: CourseType,
        id: DbId,
    ) -> Result<Course, CoreError> {
        self.find(id, &[course_type]).await
    }

    /// Append to the partition named by `input.course_type`, with the next
    /// id of that partition.
    pub async fn create(&self, input: &CreateCourse) -> Course {
        self.latency.wait().await;
        let mut partitions = self.partitions.write().await;
        let courses = partitions.get_mut(input.course_type);
        let id = next_id(courses.iter().map(|course| course.id));
        let course = Course::from_create(id, input, Utc::now());
        courses.push(course.clone());
        tracing::debug!(entity = ENTITY, id, partition = %input.course_type, "Created");
        course
    }

    /// Merge the non-`None` fields of `input` over the first course with
    /// `id`. The course stays in its partition.
    pub async fn update(&self, id: DbId, input: &UpdateCourse) -> Result<Course, CoreError> {
        self.modify(id, &CourseType::SEARCH_ORDER, input).await
    }

    pub async fn update_in(
        &self,
        course_type: CourseType,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Course, CoreError> {
        self.modify(id, &[course_type], input).await
    }

    /// Remove the first course with `id` across both partitions.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.remove(id, &CourseType::SEARCH_ORDER).await
    }

    pub async fn delete_in(&self, course_type: CourseType, id: DbId) -> Result<(), CoreError> {
        self.remove(id, &[course_type]).await
    }

    async fn find(&self, id: DbId, scan: &[CourseType]) -> Result<Course, CoreError> {
        self.latency.wait().await;
        let partitions = self.partitions.read().await;
        let (course_type, index) = partitions
            .locate(id, scan)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        Ok(partitions.get(course_type)[index].clone())
    }

    async fn modify(
        &self,
        id: DbId,
        scan: &[CourseType],
        input: &UpdateCourse,
    ) -> Result<Course, CoreError> {
        self.latency.wait().await;
        let mut partitions = self.partitions.write().await;
        let (course_type, index) = partitions
            .locate(id, scan)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        let course = &mut partitions.get_mut(course_type)[index];
        input.apply_to(course);
        tracing::debug!(entity = ENTITY, id, partition = %course_type, "Updated");
        Ok(course.clone())
    }

    async fn remove(&self, id: DbId, scan: &[CourseType]) -> Result<(), CoreError> {
        self.latency.wait().await;
        let mut partitions = self.partitions.write().await;
        let (course_type, index) = partitions
            .locate(id, scan)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        partitions.get_mut(course_type).remove(index);
        tracing::debug!(entity = ENTITY, id, partition = %course_type, "Deleted");
        Ok(())
    }
}
