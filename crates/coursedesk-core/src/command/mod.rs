// ── Command API ──
//
// All write operations flow through a unified `Command` enum. The
// controller routes each variant to its endpoint and refreshes the
// course list afterwards.

pub mod requests;

use strum::IntoStaticStr;

use crate::error::CoreError;
use crate::model::EntityId;

pub use requests::CourseRequest;

/// All possible write operations against the course API.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    // ── Course CRUD ──────────────────────────────────────────────────
    CreateCourse(CourseRequest),
    UpdateCourse {
        id: EntityId,
        update: CourseRequest,
    },
    DeleteCourse {
        id: EntityId,
    },

    // ── Discipline CRUD ──────────────────────────────────────────────
    CreateDiscipline {
        course_id: EntityId,
        name: String,
    },
    UpdateDiscipline {
        id: EntityId,
        name: String,
    },
    DeleteDiscipline {
        course_id: EntityId,
        id: EntityId,
    },
}

/// Result of a successfully executed command.
///
/// The API acknowledges mutations by status code only; new state is
/// observed through the refreshed course list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Ok,
}

/// How the outcome of a command is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Show a toast on both success and failure.
    Toast {
        success: &'static str,
        failure: &'static str,
    },
    /// No toast. Failures are only logged and the editor keeps its state.
    LogOnly,
}

impl Command {
    /// Short machine name, e.g. `"delete_course"`. Used in log fields.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Notification policy for this command.
    ///
    /// Only creating a course and the two deletions report back to the
    /// user; saves and discipline creation fail silently apart from logs.
    pub fn feedback(&self) -> Feedback {
        match self {
            Self::CreateCourse(_) => Feedback::Toast {
                success: "Curso criado com sucesso",
                failure: "Erro ao criar curso",
            },
            Self::DeleteCourse { .. } => Feedback::Toast {
                success: "Curso excluído com sucesso",
                failure: "Erro ao excluir curso",
            },
            Self::DeleteDiscipline { .. } => Feedback::Toast {
                success: "Disciplina excluída com sucesso",
                failure: "Erro ao excluir disciplina",
            },
            Self::UpdateCourse { .. }
            | Self::CreateDiscipline { .. }
            | Self::UpdateDiscipline { .. } => Feedback::LogOnly,
        }
    }

    /// Reject payloads the server would have to refuse anyway.
    ///
    /// Course creation needs a trimmed non-empty name, a positive
    /// workload and a start date. Updates are sent as typed.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::CreateCourse(req) => {
                if req.name.trim().is_empty() {
                    return Err(validation("course name is empty"));
                }
                if req.workload == 0 {
                    return Err(validation("course workload must be positive"));
                }
                if req.start_date.is_none() {
                    return Err(validation("course start date is missing"));
                }
                Ok(())
            }
            Self::CreateDiscipline { name, .. } if name.trim().is_empty() => {
                Err(validation("discipline name is empty"))
            }
            _ => Ok(()),
        }
    }
}

fn validation(message: &str) -> CoreError {
    CoreError::ValidationFailed {
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn course_request(name: &str, workload: u32, date: Option<NaiveDate>) -> Command {
        Command::CreateCourse(CourseRequest {
            name: name.into(),
            workload,
            start_date: date,
        })
    }

    #[test]
    fn only_create_and_deletes_toast() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(matches!(
            course_request("Rust", 1, date).feedback(),
            Feedback::Toast { failure: "Erro ao criar curso", .. }
        ));
        assert!(matches!(
            Command::DeleteDiscipline {
                course_id: "c".into(),
                id: "d".into()
            }
            .feedback(),
            Feedback::Toast { .. }
        ));
        assert_eq!(
            Command::UpdateDiscipline {
                id: "d".into(),
                name: "x".into()
            }
            .feedback(),
            Feedback::LogOnly
        );
        assert_eq!(
            Command::CreateDiscipline {
                course_id: "c".into(),
                name: "x".into()
            }
            .feedback(),
            Feedback::LogOnly
        );
    }

    #[test]
    fn create_course_validation() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(course_request("Rust", 40, date).validate().is_ok());
        assert!(course_request("   ", 40, date).validate().is_err());
        assert!(course_request("Rust", 0, date).validate().is_err());
        assert!(course_request("Rust", 40, None).validate().is_err());
    }

    #[test]
    fn updates_are_not_validated() {
        let cmd = Command::UpdateCourse {
            id: "c1".into(),
            update: CourseRequest {
                name: String::new(),
                workload: 0,
                start_date: None,
            },
        };
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn command_names_are_snake_case() {
        assert_eq!(
            Command::DeleteCourse { id: "c".into() }.name(),
            "delete_course"
        );
    }
}
