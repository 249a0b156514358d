// ── Domain model ──

mod course;
mod entity_id;

pub use course::{Course, Discipline};
pub use entity_id::EntityId;
