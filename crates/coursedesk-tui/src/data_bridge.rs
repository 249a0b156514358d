//! Data bridge: forwards [`Controller`] state into the TUI action loop.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use coursedesk_core::Controller;

use crate::action::{Action, Notification};

/// Performs the initial load, then forwards every course list and
/// connection-state change as an [`Action`] until cancelled.
///
/// A failed initial load is not fatal: the bridge keeps running so a
/// later refresh can still deliver data.
pub async fn spawn_data_bridge(
    controller: Controller,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut courses = controller.courses();
    let mut conn_state = controller.connection_state();

    if let Err(e) = controller.connect().await {
        warn!(error = %e, "initial course load failed");
        let _ = action_tx.send(Action::Notify(Notification::error(
            "Erro ao carregar cursos",
        )));
    }

    let _ = action_tx.send(Action::CoursesUpdated(courses.current().clone()));
    let _ = action_tx.send(Action::ConnectionChanged(
        conn_state.borrow_and_update().clone(),
    ));

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(list) = courses.changed() => {
                debug!(count = list.len(), "dispatching CoursesUpdated");
                let _ = action_tx.send(Action::CoursesUpdated(list));
            }
            Ok(()) = conn_state.changed() => {
                let state = conn_state.borrow_and_update().clone();
                let _ = action_tx.send(Action::ConnectionChanged(state));
            }
        }
    }

    debug!("data bridge shut down");
}
