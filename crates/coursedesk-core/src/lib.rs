//! Reactive data layer between `coursedesk-api` and the terminal UI.
//!
//! This crate owns the domain model, the course store, and the edit-state
//! machines that drive every form in the UI:
//!
//! - **[`Controller`]**: Facade over the API client and the store.
//!   [`connect()`](Controller::connect) performs the initial load,
//!   [`execute()`](Controller::execute) runs a [`Command`] and refreshes the
//!   whole course list when it succeeds.
//!
//! - **[`CourseStore`]**: Holds exactly what the last successful
//!   `GET /courses` returned, published through `tokio::sync::watch`.
//!
//! - **[`CourseFeed`]**: Subscription handle vended by the store.
//!   `current()` for the first paint, `changed()` for every refresh after.
//!
//! - **[`edit`]**: One generic VIEW/EDIT machine ([`EditSession`]) shared by
//!   courses, disciplines, and their create slots. Sessions return an
//!   [`Intent`] instead of doing I/O; confirmation gating is a per-entity
//!   [`EditPolicy`].

pub mod command;
pub mod config;
pub mod controller;
pub mod convert;
pub mod edit;
pub mod error;
pub mod feed;
pub mod model;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{Command, CommandResult, CourseRequest, Feedback};
pub use config::{DEFAULT_BASE_URL, ServerConfig};
pub use controller::{ConnectionState, Controller};
pub use edit::{
    ConfirmRequest, CourseBuffer, DisciplineBuffer, Disposition, EditPolicy, EditSession,
    Editable, Intent, Mode, Operation, Prompt, coerce_workload,
};
pub use error::CoreError;
pub use feed::{CourseFeed, CourseList};
pub use model::{Course, Discipline, EntityId};
pub use store::CourseStore;
