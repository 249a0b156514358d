// ── Discipline editing ──

use super::{EditPolicy, Editable, Prompt};
use crate::command::Command;
use crate::model::{Discipline, EntityId};

/// Edit buffer for a discipline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisciplineBuffer {
    pub name: String,
}

impl Editable for Discipline {
    type Buffer = DisciplineBuffer;
    /// Owning course.
    type Parent = EntityId;

    // Save and create go straight through; only delete asks first.
    const POLICY: EditPolicy = EditPolicy {
        confirm_create: false,
        confirm_save: false,
        confirm_delete: true,
        reset_after_create: true,
        close_after_create: true,
    };

    fn seed(&self) -> DisciplineBuffer {
        DisciplineBuffer {
            name: self.name.clone(),
        }
    }

    fn validate(buffer: &DisciplineBuffer) -> Result<(), String> {
        if buffer.name.trim().is_empty() {
            return Err("Informe o nome da disciplina".into());
        }
        Ok(())
    }

    fn create_command(course_id: &EntityId, buffer: &DisciplineBuffer) -> Command {
        Command::CreateDiscipline {
            course_id: course_id.clone(),
            name: buffer.name.clone(),
        }
    }

    fn update_command(&self, buffer: &DisciplineBuffer) -> Command {
        Command::UpdateDiscipline {
            id: self.id.clone(),
            name: buffer.name.clone(),
        }
    }

    fn delete_command(&self) -> Command {
        Command::DeleteDiscipline {
            course_id: self.course_id.clone(),
            id: self.id.clone(),
        }
    }

    fn create_prompt(buffer: &DisciplineBuffer) -> Prompt {
        Prompt::new(
            "Criar disciplina",
            format!("Deseja criar a disciplina \"{}\"?", buffer.name.trim()),
        )
    }

    fn delete_prompt(&self) -> Prompt {
        Prompt::new(
            "Excluir disciplina",
            format!("A disciplina \"{}\" será excluída. Deseja continuar?", self.name),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::edit::{Disposition, EditSession, Intent, Mode, Operation};

    fn ownership() -> Discipline {
        Discipline {
            id: "d1".into(),
            name: "Ownership".into(),
            course_id: "c1".into(),
        }
    }

    #[test]
    fn rename_is_not_gated() {
        let mut session = EditSession::existing("c1".into(), ownership());
        session.primary();
        session.buffer_mut().unwrap().name = "Borrowing".into();

        assert_eq!(
            session.primary(),
            Intent::Submit {
                op: Operation::Update,
                command: Command::UpdateDiscipline {
                    id: "d1".into(),
                    name: "Borrowing".into(),
                },
            }
        );
    }

    #[test]
    fn cancel_restores_committed_name() {
        let mut session = EditSession::existing("c1".into(), ownership());
        session.primary();
        session.buffer_mut().unwrap().name = "Borrowing".into();

        assert_eq!(session.cancel(), Disposition::Keep);
        assert_eq!(session.mode(), Mode::View);
        assert_eq!(session.buffer().name, "Ownership");
        assert!(session.buffer_mut().is_none());

        session.primary();
        assert_eq!(session.buffer().name, "Ownership");
    }

    #[test]
    fn delete_is_gated() {
        let session = EditSession::existing("c1".into(), ownership());
        let Intent::Confirm { request, .. } = session.delete() else {
            panic!("expected Confirm");
        };
        assert_eq!(
            request.command,
            Command::DeleteDiscipline {
                course_id: "c1".into(),
                id: "d1".into(),
            }
        );
    }

    #[test]
    fn create_slot_submits_directly_and_closes_on_success() {
        let mut slot: EditSession<Discipline> = EditSession::create("c1".into());
        assert_eq!(slot.mode(), Mode::Edit);
        assert!(matches!(slot.delete(), Intent::None));

        slot.buffer_mut().unwrap().name = "Lifetimes".into();
        assert_eq!(
            slot.primary(),
            Intent::Submit {
                op: Operation::Create,
                command: Command::CreateDiscipline {
                    course_id: "c1".into(),
                    name: "Lifetimes".into(),
                },
            }
        );

        slot.dispatched();
        assert_eq!(slot.on_outcome(Operation::Create, true), Disposition::Close);
        assert_eq!(slot.buffer(), &DisciplineBuffer::default());
    }

    #[test]
    fn failed_create_keeps_slot_and_text() {
        let mut slot: EditSession<Discipline> = EditSession::create("c1".into());
        slot.buffer_mut().unwrap().name = "Lifetimes".into();
        slot.primary();
        slot.dispatched();

        assert_eq!(slot.on_outcome(Operation::Create, false), Disposition::Keep);
        assert_eq!(slot.buffer().name, "Lifetimes");
    }

    #[test]
    fn cancelling_create_slot_closes_it() {
        let mut slot: EditSession<Discipline> = EditSession::create("c1".into());
        slot.buffer_mut().unwrap().name = "half typed".into();
        assert_eq!(slot.cancel(), Disposition::Close);
    }

    #[test]
    fn empty_name_is_invalid() {
        let mut slot: EditSession<Discipline> = EditSession::create("c1".into());
        slot.buffer_mut().unwrap().name = "   ".into();
        assert!(matches!(slot.primary(), Intent::Invalid(_)));
    }
}
