// Course endpoints
//
// Listing and create/update live under `/courses`; deletion goes through
// the `/course-disciplines` aggregate so the server can cascade.

use tracing::debug;

use crate::client::CourseClient;
use crate::error::Error;
use crate::types::{CourseBody, CourseResponse};

impl CourseClient {
    /// List every course with its disciplines embedded, in server order.
    ///
    /// `GET /courses`
    pub async fn list_courses(&self) -> Result<Vec<CourseResponse>, Error> {
        let url = self.url(&["courses"]);
        debug!("listing courses");
        self.get(url).await
    }

    /// `POST /courses`
    pub async fn create_course(&self, body: &CourseBody) -> Result<(), Error> {
        let url = self.url(&["courses"]);
        debug!(name = %body.name, "creating course");
        self.post(url, body).await
    }

    /// `PUT /courses/{id}`
    pub async fn update_course(&self, id: &str, body: &CourseBody) -> Result<(), Error> {
        let url = self.url(&["courses", id]);
        debug!(id, "updating course");
        self.put(url, body).await
    }

    /// Delete a course and, server-side, all of its disciplines.
    ///
    /// `DELETE /course-disciplines/courses/{id}`
    pub async fn delete_course(&self, id: &str) -> Result<(), Error> {
        let url = self.url(&["course-disciplines", "courses", id]);
        debug!(id, "deleting course");
        self.delete(url).await
    }
}
