//! Screen implementations. Each screen is a top-level Component.

pub mod courses;

pub use courses::CoursesScreen;
