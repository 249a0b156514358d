// ── Course store ──
//
// The whole list is replaced on every refresh. No upserts, no merges:
// what subscribers see is exactly the last successful `GET /courses`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::model::{Course, Discipline, EntityId};
use crate::feed::{CourseFeed, CourseList};

/// Reactive store for the course list.
pub struct CourseStore {
    courses: watch::Sender<CourseList>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl CourseStore {
    pub fn new() -> Self {
        let (courses, _) = watch::channel(Arc::new(Vec::new()));
        let (last_refresh, _) = watch::channel(None);
        Self {
            courses,
            last_refresh,
        }
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Replace the entire list, preserving the given order.
    pub(crate) fn replace(&self, courses: Vec<Course>) {
        let snapshot: Vec<Arc<Course>> = courses.into_iter().map(Arc::new).collect();
        self.courses.send_replace(Arc::new(snapshot));
        self.last_refresh.send_replace(Some(Utc::now()));
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn courses_snapshot(&self) -> CourseList {
        self.courses.borrow().clone()
    }

    pub fn course_by_id(&self, id: &EntityId) -> Option<Arc<Course>> {
        self.courses.borrow().iter().find(|c| &c.id == id).cloned()
    }

    pub fn discipline_by_id(&self, course_id: &EntityId, id: &EntityId) -> Option<Discipline> {
        self.course_by_id(course_id)
            .and_then(|c| c.discipline(id).cloned())
    }

    pub fn course_count(&self) -> usize {
        self.courses.borrow().len()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_courses(&self) -> CourseFeed {
        CourseFeed::new(self.courses.subscribe())
    }
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}
