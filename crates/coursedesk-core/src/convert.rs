// ── API-to-domain type conversions ──
//
// Bridges raw `coursedesk_api` response types into canonical domain
// types. Disciplines pick up their owning course id here since the
// wire format only nests them.

use coursedesk_api::{CourseResponse, DisciplineResponse};

use crate::model::{Course, Discipline, EntityId};

impl From<CourseResponse> for Course {
    fn from(c: CourseResponse) -> Self {
        let id = EntityId::from(c.id);
        let disciplines = c
            .disciplines
            .into_iter()
            .map(|d| discipline_from_api(d, &id))
            .collect();

        Course {
            id,
            name: c.name,
            workload: c.workload,
            start_date: c.start_date,
            disciplines,
        }
    }
}

fn discipline_from_api(d: DisciplineResponse, course_id: &EntityId) -> Discipline {
    Discipline {
        id: EntityId::from(d.id),
        name: d.name,
        course_id: course_id.clone(),
    }
}
