// ── Reactive course store ──
//
// Holds the last list the server returned, broadcast to subscribers
// via `watch` channels.

mod course_store;

pub use course_store::CourseStore;
