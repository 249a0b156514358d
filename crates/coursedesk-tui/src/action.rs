//! Actions flowing through the app loop.
//!
//! Key events and data updates are turned into [`Action`]s; the app
//! processes them one at a time and forwards what concerns the screen.

use std::fmt;

use coursedesk_core::{Command, ConfirmRequest, ConnectionState, CourseList, EntityId, Operation};

#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // ── Overlays ──
    ToggleHelp,

    // ── Data ──
    /// Re-fetch the course list.
    Refresh,
    CoursesUpdated(CourseList),
    ConnectionChanged(ConnectionState),

    // ── Command pipeline ──
    /// Send a command right away.
    Submit {
        origin: Origin,
        op: Operation,
        command: Command,
    },
    /// Open the confirmation gate for a command.
    RequestConfirm {
        origin: Origin,
        op: Operation,
        request: ConfirmRequest,
    },
    ConfirmYes,
    ConfirmNo,
    /// A command for `origin` has been handed to the controller.
    CommandStarted { origin: Origin },
    CommandFinished {
        origin: Origin,
        op: Operation,
        ok: bool,
    },

    // ── Notifications ──
    Notify(Notification),
}

/// The edit session a command was issued from.
///
/// Outcomes are routed back by origin; an origin whose session no longer
/// exists (its entity vanished in a refresh) is simply ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The create-course form.
    NewCourse,
    Course(EntityId),
    /// The discipline create slot of a course.
    NewDiscipline(EntityId),
    Discipline(EntityId),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewCourse => f.write_str("new-course"),
            Self::Course(id) => write!(f, "course:{id}"),
            Self::NewDiscipline(course_id) => write!(f, "new-discipline:{course_id}"),
            Self::Discipline(id) => write!(f, "discipline:{id}"),
        }
    }
}

/// Toast notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Warning,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}
