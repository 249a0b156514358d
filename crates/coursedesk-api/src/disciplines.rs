// Discipline endpoints
//
// Disciplines have no list endpoint of their own; they arrive embedded
// in `GET /courses`.

use tracing::debug;

use crate::client::CourseClient;
use crate::error::Error;
use crate::types::DisciplineBody;

impl CourseClient {
    /// `POST /course-disciplines/disciplines` with `{id: courseId, name}`
    pub async fn create_discipline(&self, course_id: &str, name: &str) -> Result<(), Error> {
        let url = self.url(&["course-disciplines", "disciplines"]);
        debug!(course_id, name, "creating discipline");
        let body = DisciplineBody {
            id: course_id.to_owned(),
            name: name.to_owned(),
        };
        self.post(url, &body).await
    }

    /// `PUT /disciplines` with `{id, name}`
    pub async fn update_discipline(&self, id: &str, name: &str) -> Result<(), Error> {
        let url = self.url(&["disciplines"]);
        debug!(id, name, "renaming discipline");
        let body = DisciplineBody {
            id: id.to_owned(),
            name: name.to_owned(),
        };
        self.put(url, &body).await
    }

    /// `DELETE /course-disciplines/courses/{courseId}/disciplines/{disciplineId}`
    pub async fn delete_discipline(&self, course_id: &str, discipline_id: &str) -> Result<(), Error> {
        let url = self.url(&[
            "course-disciplines",
            "courses",
            course_id,
            "disciplines",
            discipline_id,
        ]);
        debug!(course_id, discipline_id, "deleting discipline");
        self.delete(url).await
    }
}
