// ── Course editing ──

use chrono::NaiveDate;

use super::{EditPolicy, Editable, Prompt, coerce_workload};
use crate::command::{Command, CourseRequest};
use crate::model::Course;

/// Edit buffer for a course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseBuffer {
    pub name: String,
    pub workload: u32,
    pub start_date: Option<NaiveDate>,
}

impl CourseBuffer {
    /// Workload as shown in its input.
    pub fn workload_text(&self) -> String {
        self.workload.to_string()
    }

    /// Append a typed character and re-coerce the whole field.
    pub fn push_workload(&mut self, c: char) {
        let mut text = self.workload_text();
        text.push(c);
        self.workload = coerce_workload(&text);
    }

    pub fn pop_workload(&mut self) {
        let mut text = self.workload_text();
        text.pop();
        self.workload = coerce_workload(&text);
    }

    fn request(&self) -> CourseRequest {
        CourseRequest {
            name: self.name.clone(),
            workload: self.workload,
            start_date: self.start_date,
        }
    }
}

impl Editable for Course {
    type Buffer = CourseBuffer;
    type Parent = ();

    const POLICY: EditPolicy = EditPolicy {
        confirm_create: true,
        confirm_save: false,
        confirm_delete: true,
        // A successful create leaves the form filled in.
        reset_after_create: false,
        close_after_create: false,
    };

    fn seed(&self) -> CourseBuffer {
        CourseBuffer {
            name: self.name.clone(),
            workload: self.workload,
            start_date: self.start_date,
        }
    }

    fn validate(buffer: &CourseBuffer) -> Result<(), String> {
        if buffer.name.trim().is_empty() || buffer.workload == 0 || buffer.start_date.is_none() {
            return Err("Preencha nome, carga horária e data de início".into());
        }
        Ok(())
    }

    fn create_command(_parent: &(), buffer: &CourseBuffer) -> Command {
        Command::CreateCourse(buffer.request())
    }

    fn update_command(&self, buffer: &CourseBuffer) -> Command {
        Command::UpdateCourse {
            id: self.id.clone(),
            update: buffer.request(),
        }
    }

    fn delete_command(&self) -> Command {
        Command::DeleteCourse {
            id: self.id.clone(),
        }
    }

    fn create_prompt(buffer: &CourseBuffer) -> Prompt {
        Prompt::new(
            "Criar curso",
            format!(
                "Deseja criar o curso \"{}\" com {} horas?",
                buffer.name.trim(),
                buffer.workload
            ),
        )
    }

    fn delete_prompt(&self) -> Prompt {
        Prompt::new(
            "Excluir curso",
            format!(
                "O curso \"{}\" e todas as suas disciplinas serão excluídos. Deseja continuar?",
                self.name
            ),
        )
    }
}
