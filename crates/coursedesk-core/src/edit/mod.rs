// ── Edit-state machines ──
//
// One generic VIEW/EDIT machine drives every editable entity. Each
// entity type supplies its field buffer, the commands for create,
// update and delete, and a policy saying which of those go through a
// confirmation gate first.

mod course;
mod discipline;
mod session;
mod workload;

use std::fmt;

use crate::command::Command;

pub use course::CourseBuffer;
pub use discipline::DisciplineBuffer;
pub use session::EditSession;
pub use workload::coerce_workload;

/// Display mode of an editable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Read-only display of the last committed values.
    #[default]
    View,
    /// Buffered, user-mutable values.
    Edit,
}

/// The three mutations an edit session can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

/// Per-entity behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct EditPolicy {
    pub confirm_create: bool,
    pub confirm_save: bool,
    pub confirm_delete: bool,
    /// Clear the buffer after a successful create.
    pub reset_after_create: bool,
    /// Close the create slot after a successful create.
    pub close_after_create: bool,
}

/// Title and body shown by a confirmation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub description: String,
}

impl Prompt {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A command waiting on explicit user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub description: String,
    pub command: Command,
}

impl ConfirmRequest {
    pub fn new(prompt: Prompt, command: Command) -> Self {
        Self {
            title: prompt.title,
            description: prompt.description,
            command,
        }
    }
}

/// What the caller should do after a session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Local state changed; nothing to send.
    None,
    /// Send this command right away.
    Submit { op: Operation, command: Command },
    /// Open a confirmation gate bound to this request.
    Confirm {
        op: Operation,
        request: ConfirmRequest,
    },
    /// The buffer failed validation; nothing was sent.
    Invalid(String),
}

/// Whether the session survives an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Keep,
    /// The session's slot should be removed (created, deleted, or cancelled create).
    Close,
}

/// An entity that can be viewed, edited, created and deleted.
pub trait Editable: Clone {
    /// Candidate field values while editing.
    type Buffer: Clone + Default + PartialEq + fmt::Debug;
    /// Context needed to create a new instance (e.g. the owning course id).
    type Parent: Clone + fmt::Debug;

    const POLICY: EditPolicy;

    /// Buffer holding the entity's committed values.
    fn seed(&self) -> Self::Buffer;

    /// Check a create buffer before anything is sent.
    fn validate(buffer: &Self::Buffer) -> Result<(), String>;

    fn create_command(parent: &Self::Parent, buffer: &Self::Buffer) -> Command;
    fn update_command(&self, buffer: &Self::Buffer) -> Command;
    fn delete_command(&self) -> Command;

    fn create_prompt(buffer: &Self::Buffer) -> Prompt;
    fn delete_prompt(&self) -> Prompt;

    fn save_prompt(&self, _buffer: &Self::Buffer) -> Prompt {
        Prompt::new("Salvar alterações", "Deseja salvar as alterações?")
    }
}
