// ── Controller ──
//
// Owns the API client and the course store. Every successful mutation
// is followed by a full list refresh; there are no incremental updates.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use coursedesk_api::{CourseBody, CourseClient, TransportConfig};

use crate::command::{Command, CommandResult};
use crate::config::ServerConfig;
use crate::error::CoreError;
use crate::feed::{CourseFeed, CourseList};
use crate::model::{Course, EntityId};
use crate::store::CourseStore;

// ── ConnectionState ──────────────────────────────────────────────

/// Outcome of the most recent list refresh, observable by consumers.
#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
pub enum ConnectionState {
    #[strum(to_string = "disconnected")]
    Disconnected,
    #[strum(to_string = "loading")]
    Connecting,
    #[strum(to_string = "connected")]
    Connected,
    #[strum(to_string = "failed")]
    Failed,
}

// ── Controller ───────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<ControllerInner>`, so it can be moved
/// into spawned tasks. Mutations may run concurrently; the store is
/// last-write-wins.
#[derive(Clone)]
pub struct Controller {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    config: ServerConfig,
    client: CourseClient,
    store: Arc<CourseStore>,
    connection_state: watch::Sender<ConnectionState>,
}

impl Controller {
    /// Build a controller and its HTTP client from configuration.
    /// Does NOT fetch anything -- call [`connect()`](Self::connect).
    pub fn new(config: ServerConfig) -> Result<Self, CoreError> {
        let mut transport = TransportConfig::default();
        if let Some(timeout) = config.timeout {
            transport = transport.with_timeout(timeout);
        }
        let client = CourseClient::new(config.url.as_str(), &transport)?;
        Ok(Self::with_client(config, client))
    }

    /// Build a controller around an existing client.
    pub fn with_client(config: ServerConfig, client: CourseClient) -> Self {
        let (connection_state, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            inner: Arc::new(ControllerInner {
                config,
                client,
                store: Arc::new(CourseStore::new()),
                connection_state,
            }),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &Arc<CourseStore> {
        &self.inner.store
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Perform the initial list load.
    pub async fn connect(&self) -> Result<(), CoreError> {
        self.inner
            .connection_state
            .send_replace(ConnectionState::Connecting);
        self.refresh().await?;
        info!(url = %self.inner.config.url, "connected to course API");
        Ok(())
    }

    /// Replace the in-memory course list with the server's.
    ///
    /// On failure the previous list stays in place.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        match self.inner.client.list_courses().await {
            Ok(raw) => {
                let courses: Vec<Course> = raw.into_iter().map(Course::from).collect();
                debug!(count = courses.len(), "course list refreshed");
                self.inner.store.replace(courses);
                self.inner
                    .connection_state
                    .send_replace(ConnectionState::Connected);
                Ok(())
            }
            Err(e) => {
                self.inner
                    .connection_state
                    .send_replace(ConnectionState::Failed);
                Err(e.into())
            }
        }
    }

    // ── Command execution ────────────────────────────────────────

    /// Execute a mutation, then refresh the list.
    ///
    /// The result reflects the mutation only: if the follow-up refresh
    /// fails it is logged and the last good list stays displayed.
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        let name = cmd.name();
        cmd.validate()?;

        let result = route_command(&self.inner.client, cmd).await;
        if let Err(ref e) = result {
            warn!(command = name, error = %e, "command failed");
            return result;
        }

        debug!(command = name, "command succeeded, refreshing");
        if let Err(e) = self.refresh().await {
            warn!(command = name, error = %e, "refresh after command failed");
        }
        result
    }

    // ── State observation ────────────────────────────────────────

    pub fn connection_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.connection_state.subscribe()
    }

    pub fn courses(&self) -> CourseFeed {
        self.inner.store.subscribe_courses()
    }

    pub fn courses_snapshot(&self) -> CourseList {
        self.inner.store.courses_snapshot()
    }

    pub fn course_by_id(&self, id: &EntityId) -> Option<Arc<Course>> {
        self.inner.store.course_by_id(id)
    }
}

// ── Command routing ──────────────────────────────────────────────

async fn route_command(client: &CourseClient, cmd: Command) -> Result<CommandResult, CoreError> {
    match cmd {
        // ── Courses ──────────────────────────────────────────────
        Command::CreateCourse(req) => {
            client.create_course(&CourseBody::from(&req)).await?;
            Ok(CommandResult::Ok)
        }

        Command::UpdateCourse { id, update } => {
            client
                .update_course(id.as_str(), &CourseBody::from(&update))
                .await?;
            Ok(CommandResult::Ok)
        }

        Command::DeleteCourse { id } => {
            client.delete_course(id.as_str()).await?;
            Ok(CommandResult::Ok)
        }

        // ── Disciplines ──────────────────────────────────────────
        Command::CreateDiscipline { course_id, name } => {
            client.create_discipline(course_id.as_str(), &name).await?;
            Ok(CommandResult::Ok)
        }

        Command::UpdateDiscipline { id, name } => {
            client.update_discipline(id.as_str(), &name).await?;
            Ok(CommandResult::Ok)
        }

        Command::DeleteDiscipline { course_id, id } => {
            client
                .delete_discipline(course_id.as_str(), id.as_str())
                .await?;
            Ok(CommandResult::Ok)
        }
    }
}
