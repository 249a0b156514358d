// ── Request payloads for create/update commands ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use coursedesk_api::CourseBody;

/// Field values for creating or updating a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRequest {
    pub name: String,
    pub workload: u32,
    pub start_date: Option<NaiveDate>,
}

impl From<&CourseRequest> for CourseBody {
    fn from(req: &CourseRequest) -> Self {
        CourseBody {
            name: req.name.clone(),
            workload: req.workload,
            start_date: req.start_date,
        }
    }
}
