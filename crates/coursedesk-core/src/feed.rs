// ── Course feed ──
//
// Subscriber side of the course store. Every item is a full list as
// returned by the last successful refresh.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::Course;

pub type CourseList = Arc<Vec<Arc<Course>>>;

/// A subscription to the course list.
///
/// Holds the list seen last so the UI can render before the first
/// change arrives.
pub struct CourseFeed {
    seen: CourseList,
    receiver: watch::Receiver<CourseList>,
}

impl CourseFeed {
    pub(crate) fn new(mut receiver: watch::Receiver<CourseList>) -> Self {
        let seen = receiver.borrow_and_update().clone();
        Self { seen, receiver }
    }

    /// The list captured at subscription time or by the last `changed()`.
    pub fn current(&self) -> &CourseList {
        &self.seen
    }

    /// Wait for the store to publish a new list.
    /// Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<CourseList> {
        self.receiver.changed().await.ok()?;
        self.seen = self.receiver.borrow_and_update().clone();
        Some(Arc::clone(&self.seen))
    }
}
