// ── Course and discipline domain types ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// A course and its disciplines, in the order the server returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    /// Hours.
    pub workload: u32,
    pub start_date: Option<NaiveDate>,
    pub disciplines: Vec<Discipline>,
}

impl Course {
    pub fn discipline(&self, id: &EntityId) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| &d.id == id)
    }
}

/// A discipline. Always owned by exactly one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: EntityId,
    pub name: String,
    pub course_id: EntityId,
}
