//! Application core: event loop, command execution, overlays.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use coursedesk_core::{Command, ConfirmRequest, ConnectionState, Controller, Feedback, Operation};

use crate::action::{Action, Notification, NotificationLevel, Origin};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::CoursesScreen;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::confirm_gate::ConfirmGate;

/// How long a toast stays on screen.
pub(crate) const TOAST_TTL: Duration = Duration::from_secs(3);

/// The confirmation gate currently on screen.
#[derive(Debug, Clone)]
struct PendingConfirm {
    origin: Origin,
    op: Operation,
    request: ConfirmRequest,
    /// The request was confirmed and its outcome has not arrived yet.
    busy: bool,
}

/// Top-level application state and event loop.
pub struct App {
    screen: Box<dyn Component>,
    running: bool,
    connection: ConnectionState,
    course_count: usize,
    help_visible: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    controller: Controller,
    /// Cancellation token for the data bridge task.
    data_cancel: CancellationToken,
    /// Pending confirmation gate (blocks other input while open).
    pending_confirm: Option<PendingConfirm>,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
    /// Commands handed to the controller without an outcome yet.
    in_flight: usize,
    throbber_state: ThrobberState,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: Box::new(CoursesScreen::new()),
            running: true,
            connection: ConnectionState::Disconnected,
            course_count: 0,
            help_visible: false,
            action_tx,
            action_rx,
            controller,
            data_cancel: CancellationToken::new(),
            pending_confirm: None,
            notification: None,
            in_flight: 0,
            throbber_state: ThrobberState::default(),
        }
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let (width, height) = tui.size()?;
        debug!(width, height, "terminal ready");

        self.screen.init(self.action_tx.clone())?;
        self.screen.set_focused(true);
        debug!(screen = self.screen.id(), "screen mounted");

        let controller = self.controller.clone();
        let cancel = self.data_cancel.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            crate::data_bridge::spawn_data_bridge(controller, tx, cancel).await;
        });

        let mut events = EventReader::spawn();

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.data_cancel.cancel();
        events.stop();
        tui.exit()?;
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Overlays take keys first, then a
    /// screen that is taking text input, then the global bindings.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.pending_confirm.is_some() {
            return Ok(match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmYes),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmNo),
                _ => None,
            });
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        if self.screen.captures_input() {
            return self.screen.handle_key_event(key);
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char('r')) => return Ok(Some(Action::Refresh)),
            _ => {}
        }

        self.screen.handle_key_event(key)
    }

    /// Process a single action: update app state and propagate to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,

            Action::Resize(w, h) => debug!(width = w, height = h, "terminal resized"),

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::Render => {}

            Action::Tick => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|(_, created)| created.elapsed() > TOAST_TTL)
                {
                    self.notification = None;
                }
                if self.is_loading() {
                    self.throbber_state.calc_next();
                }
            }

            Action::Refresh => self.refresh(),

            Action::ConnectionChanged(state) => {
                debug!(%state, "connection state changed");
                self.connection = state.clone();
            }

            Action::CoursesUpdated(courses) => {
                self.course_count = courses.len();
                self.forward(action)?;
            }

            // ── Command pipeline ──────────────────────────────────────
            Action::Submit {
                origin,
                op,
                command,
            } => self.execute_command(origin.clone(), *op, command.clone()),

            Action::RequestConfirm {
                origin,
                op,
                request,
            } => {
                if self.pending_confirm.is_some() {
                    debug!(%origin, "confirmation already open, request ignored");
                } else {
                    self.pending_confirm = Some(PendingConfirm {
                        origin: origin.clone(),
                        op: *op,
                        request: request.clone(),
                        busy: false,
                    });
                }
            }

            Action::ConfirmYes => {
                let Some(pending) = self.pending_confirm.as_mut() else {
                    return Ok(());
                };
                if pending.busy {
                    return Ok(());
                }
                pending.busy = true;
                let (origin, op, command) = (
                    pending.origin.clone(),
                    pending.op,
                    pending.request.command.clone(),
                );
                self.execute_command(origin, op, command);
            }

            Action::ConfirmNo => self.pending_confirm = None,

            Action::CommandStarted { .. } => {
                self.in_flight += 1;
                self.forward(action)?;
            }

            Action::CommandFinished { origin, ok, .. } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if let Some(pending) = &mut self.pending_confirm {
                    if pending.busy && pending.origin == *origin {
                        if *ok {
                            self.pending_confirm = None;
                        } else {
                            pending.busy = false;
                        }
                    }
                }
                self.forward(action)?;
            }

            // ── Notifications ─────────────────────────────────────────
            Action::Notify(n) => self.notification = Some((n.clone(), Instant::now())),
        }

        Ok(())
    }

    fn forward(&mut self, action: &Action) -> Result<()> {
        if let Some(follow_up) = self.screen.update(action)? {
            self.action_tx.send(follow_up)?;
        }
        Ok(())
    }

    fn is_loading(&self) -> bool {
        self.in_flight > 0 || self.connection == ConnectionState::Connecting
    }

    // ── Command execution ─────────────────────────────────────────

    /// Hand a command to the controller on a background task.
    ///
    /// `CommandStarted` is queued before the task runs, `CommandFinished`
    /// after the controller returns. Toasts follow [`Command::feedback`].
    fn execute_command(&self, origin: Origin, op: Operation, cmd: Command) {
        let _ = self.action_tx.send(Action::CommandStarted {
            origin: origin.clone(),
        });

        let controller = self.controller.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let feedback = cmd.feedback();
            let ok = match controller.execute(cmd).await {
                Ok(_) => {
                    if let Feedback::Toast { success, .. } = feedback {
                        let _ = tx.send(Action::Notify(Notification::success(success)));
                    }
                    true
                }
                Err(e) => {
                    debug!(%origin, error = %e, "command outcome: failed");
                    if let Feedback::Toast { failure, .. } = feedback {
                        let _ = tx.send(Action::Notify(Notification::error(failure)));
                    }
                    false
                }
            };
            let _ = tx.send(Action::CommandFinished { origin, op, ok });
        });
    }

    /// Re-fetch the course list. New data arrives through the data bridge.
    fn refresh(&self) {
        let controller = self.controller.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let notification = match controller.refresh().await {
                Ok(()) => Notification::info("Lista atualizada"),
                Err(e) => {
                    debug!(error = %e, "manual refresh failed");
                    Notification::error("Erro ao carregar cursos")
                }
            };
            let _ = tx.send(Action::Notify(notification));
        });
    }

    // ── Rendering ─────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Length(1), // Title bar
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.render_title_bar(frame, layout[0]);
        self.screen.render(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays, last = topmost.
        if let Some((notif, _)) = &self.notification {
            render_notification(frame, area, notif);
        }

        if let Some(pending) = &self.pending_confirm {
            let gate = ConfirmGate::new(&pending.request.title, &pending.request.description)
                .busy(pending.busy);
            let gate_area = gate.area(area);
            frame.render_widget(gate, gate_area);
        }

        if self.help_visible {
            render_help_overlay(frame, area);
        }
    }

    #[allow(clippy::unused_self)]
    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " coursedesk ",
                Style::default()
                    .fg(theme::BG_DARK)
                    .bg(theme::ELECTRIC_PURPLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" cursos e disciplinas", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Status bar: connection state, course count and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let layout =
            Layout::horizontal([Constraint::Length(18), Constraint::Min(0)]).split(area);

        if self.is_loading() {
            let label = if self.in_flight > 0 {
                "enviando"
            } else {
                "carregando"
            };
            let throbber = Throbber::default()
                .label(label)
                .style(Style::default().fg(theme::NEON_CYAN))
                .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
            frame.render_stateful_widget(throbber, layout[0], &mut self.throbber_state.clone());
        } else {
            let indicator = match self.connection {
                ConnectionState::Connected => {
                    Span::styled(" ● conectado", Style::default().fg(theme::SUCCESS_GREEN))
                }
                ConnectionState::Failed => {
                    Span::styled(" ✗ falhou", Style::default().fg(theme::ERROR_RED))
                }
                ConnectionState::Disconnected | ConnectionState::Connecting => {
                    Span::styled(" ○ desconectado", Style::default().fg(theme::CORAL))
                }
            };
            frame.render_widget(Paragraph::new(indicator), layout[0]);
        }

        let line = Line::from(vec![
            Span::styled(
                format!("│ {} cursos ", self.course_count),
                Style::default().fg(theme::DIM_WHITE),
            ),
            Span::styled("│ ", theme::key_hint()),
            Span::styled("?", theme::key_hint_key()),
            Span::styled(" ajuda  ", theme::key_hint()),
            Span::styled("r", theme::key_hint_key()),
            Span::styled(" atualizar  ", theme::key_hint()),
            Span::styled("q", theme::key_hint_key()),
            Span::styled(" sair", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), layout[1]);
    }
}

fn help_row(keys: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
        Span::styled(what, theme::key_hint()),
    ])
}

fn help_section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default().fg(theme::NEON_CYAN),
    ))
}

/// Render the help overlay centered on screen.
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_width = 60u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Atalhos ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_text = vec![
        help_section("Lista"),
        help_row("j/k ↑/↓", "Mover seleção"),
        help_row("g/G", "Início / fim"),
        help_row("Enter e", "Editar item"),
        help_row("d", "Excluir item"),
        help_row("a", "Adicionar disciplina"),
        help_row("n Tab", "Formulário de novo curso"),
        Line::from(""),
        help_section("Edição"),
        help_row("Enter", "Salvar"),
        help_row("Esc", "Cancelar"),
        help_row("Tab", "Próximo campo"),
        help_row("Espaço", "Escolher data"),
        help_row("Ctrl+D", "Excluir"),
        Line::from(""),
        help_section("Geral"),
        help_row("r", "Atualizar lista"),
        help_row("?", "Esta ajuda"),
        help_row("q Ctrl+C", "Sair"),
        Line::from(""),
        Line::from(Span::styled("  Esc ou ? para fechar", theme::key_hint())),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}

/// Render a notification toast in the bottom-right corner.
fn render_notification(frame: &mut Frame, area: Rect, notif: &Notification) {
    let msg_len = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
    let width = msg_len
        .saturating_add(6)
        .clamp(20, 60)
        .min(area.width.saturating_sub(1));
    let height = 3u16;

    let x = area.width.saturating_sub(width + 1);
    let y = area.height.saturating_sub(height + 1); // above status bar
    let toast_area = Rect::new(area.x + x, area.y + y, width, height);

    let (border_color, icon) = match notif.level {
        NotificationLevel::Success => (theme::SUCCESS_GREEN, "✓"),
        NotificationLevel::Error => (theme::ERROR_RED, "✗"),
        NotificationLevel::Warning => (theme::ELECTRIC_YELLOW, "!"),
        NotificationLevel::Info => (theme::NEON_CYAN, "·"),
    };

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::BG_DARK));

    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
        Span::styled(notif.message.as_str(), Style::default().fg(theme::DIM_WHITE)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use coursedesk_core::{CourseRequest, ServerConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn app() -> App {
        let config = ServerConfig::new("http://localhost:3333".parse().unwrap());
        App::new(Controller::new(config).unwrap())
    }

    fn delete_request(origin: &str) -> Action {
        Action::RequestConfirm {
            origin: Origin::Course(origin.into()),
            op: Operation::Delete,
            request: ConfirmRequest {
                title: "Excluir curso".into(),
                description: format!("Excluir {origin}?"),
                command: Command::DeleteCourse { id: origin.into() },
            },
        }
    }

    fn app_for(server: &MockServer) -> App {
        let config = ServerConfig::new(server.uri().parse().unwrap());
        App::new(Controller::new(config).unwrap())
    }

    fn create_request() -> Action {
        Action::RequestConfirm {
            origin: Origin::NewCourse,
            op: Operation::Create,
            request: ConfirmRequest {
                title: "Criar curso".into(),
                description: "Deseja criar o curso \"Elixir\"?".into(),
                command: Command::CreateCourse(CourseRequest {
                    name: "Elixir".into(),
                    workload: 30,
                    start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
                }),
            },
        }
    }

    /// Feed queued actions back through the app until the command
    /// outcome arrives, then collect whatever else was already queued.
    async fn run_until_finished(app: &mut App) -> Vec<Action> {
        let mut seen = Vec::new();
        loop {
            let action = tokio::time::timeout(Duration::from_secs(5), app.action_rx.recv())
                .await
                .unwrap()
                .unwrap();
            app.process_action(&action).unwrap();
            let finished = matches!(action, Action::CommandFinished { .. });
            seen.push(action);
            if finished {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        while let Ok(action) = app.action_rx.try_recv() {
            app.process_action(&action).unwrap();
            seen.push(action);
        }
        seen
    }

    fn notifications(actions: &[Action]) -> Vec<Notification> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Notify(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn gate_captures_keys_until_answered() {
        let mut app = app();
        app.process_action(&delete_request("c1")).unwrap();
        assert!(app.pending_confirm.is_some());

        assert!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap().is_none());
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::ConfirmNo)
        ));
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ConfirmYes)
        ));

        app.process_action(&Action::ConfirmNo).unwrap();
        assert!(app.pending_confirm.is_none());
    }

    #[test]
    fn only_one_gate_at_a_time() {
        let mut app = app();
        app.process_action(&delete_request("c1")).unwrap();
        app.process_action(&delete_request("c2")).unwrap();

        let pending = app.pending_confirm.as_ref().unwrap();
        assert_eq!(pending.origin, Origin::Course("c1".into()));
    }

    #[test]
    fn failed_outcome_reopens_the_gate_and_success_closes_it() {
        let mut app = app();
        app.process_action(&delete_request("c1")).unwrap();
        app.pending_confirm.as_mut().unwrap().busy = true;

        let finished = |ok| Action::CommandFinished {
            origin: Origin::Course("c1".into()),
            op: Operation::Delete,
            ok,
        };

        app.in_flight = 1;
        app.process_action(&finished(false)).unwrap();
        let pending = app.pending_confirm.as_ref().unwrap();
        assert!(!pending.busy);
        assert_eq!(app.in_flight, 0);

        app.pending_confirm.as_mut().unwrap().busy = true;
        app.process_action(&finished(true)).unwrap();
        assert!(app.pending_confirm.is_none());
    }

    #[test]
    fn outcome_from_another_origin_leaves_the_gate_alone() {
        let mut app = app();
        app.process_action(&delete_request("c1")).unwrap();
        app.pending_confirm.as_mut().unwrap().busy = true;

        app.process_action(&Action::CommandFinished {
            origin: Origin::Discipline("d9".into()),
            op: Operation::Update,
            ok: true,
        })
        .unwrap();
        assert!(app.pending_confirm.as_ref().unwrap().busy);
    }

    #[test]
    fn global_keys_map_to_actions() {
        let mut app = app();
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::Quit)
        ));
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Char('r'))).unwrap(),
            Some(Action::Refresh)
        ));
        assert!(matches!(
            app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn text_entry_shadows_global_keys() {
        let mut app = app();
        // `n` focuses the create form, which takes text input.
        app.handle_key_event(key(KeyCode::Char('n'))).unwrap();
        assert!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap().is_none());
        assert!(app.running);
    }

    #[test]
    fn toasts_expire_on_tick() {
        let mut app = app();
        app.process_action(&Action::Notify(Notification::info("Lista atualizada")))
            .unwrap();
        assert!(app.notification.is_some());

        if let Some((_, created)) = &mut app.notification {
            *created = Instant::now().checked_sub(TOAST_TTL * 2).unwrap();
        }
        app.process_action(&Action::Tick).unwrap();
        assert!(app.notification.is_none());
    }

    #[tokio::test]
    async fn confirmed_create_toasts_success_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "c9" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.process_action(&create_request()).unwrap();
        app.process_action(&Action::ConfirmYes).unwrap();
        // A second press while the request is out sends nothing.
        app.process_action(&Action::ConfirmYes).unwrap();

        let actions = run_until_finished(&mut app).await;
        assert_eq!(
            notifications(&actions),
            vec![Notification::success("Curso criado com sucesso")]
        );

        let notify_at = actions
            .iter()
            .position(|a| matches!(a, Action::Notify(_)))
            .unwrap();
        let finished_at = actions
            .iter()
            .position(|a| {
                matches!(
                    a,
                    Action::CommandFinished {
                        origin: Origin::NewCourse,
                        op: Operation::Create,
                        ok: true,
                    }
                )
            })
            .unwrap();
        assert!(notify_at < finished_at);
        assert!(app.pending_confirm.is_none());
        assert_eq!(app.in_flight, 0);
    }

    #[tokio::test]
    async fn failed_create_toasts_error_and_keeps_the_gate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/courses"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.process_action(&create_request()).unwrap();
        app.process_action(&Action::ConfirmYes).unwrap();

        let actions = run_until_finished(&mut app).await;
        assert_eq!(
            notifications(&actions),
            vec![Notification::error("Erro ao criar curso")]
        );
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::CommandFinished { ok: false, .. }))
        );

        let pending = app.pending_confirm.as_ref().unwrap();
        assert!(!pending.busy);
        assert_eq!(app.in_flight, 0);
    }
}
