//! Courses screen: the create-course form beside the course list, with
//! inline editing of courses and their disciplines.
//!
//! Every course, discipline and discipline create slot owns an
//! [`EditSession`]. Keys are turned into session inputs, and the
//! resulting [`Intent`] becomes an [`Action`] for the app to execute.
//! Outcomes come back as [`Action::CommandFinished`] keyed by [`Origin`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::debug;

use coursedesk_core::{
    Course, CourseBuffer, CourseList, Discipline, Disposition, EditSession, EntityId, Intent,
    Operation,
};

use crate::action::{Action, Notification, Origin};
use crate::component::Component;
use crate::theme;
use crate::widgets::date_fmt::{fmt_date_display, fmt_picker_label};
use crate::widgets::date_picker::{DatePicker, PICKER_HEIGHT, PICKER_WIDTH, PickerOutcome};

const FORM_WIDTH: u16 = 36;
const CURSOR: &str = "▎";

// ── Field and row model ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pane {
    Form,
    #[default]
    List,
}

/// Fields of a course buffer, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CourseField {
    #[default]
    Name,
    Workload,
    StartDate,
}

impl CourseField {
    const ALL: [Self; 3] = [Self::Name, Self::Workload, Self::StartDate];

    fn next(self) -> Self {
        match self {
            Self::Name => Self::Workload,
            Self::Workload => Self::StartDate,
            Self::StartDate => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::StartDate,
            Self::Workload => Self::Name,
            Self::StartDate => Self::Workload,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome do curso",
            Self::Workload => "Carga horária",
            Self::StartDate => "Data de início",
        }
    }
}

/// One entry of the flattened course list.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Course(EntityId),
    Discipline { course_id: EntityId, id: EntityId },
    /// The open discipline create slot of a course.
    NewDiscipline(EntityId),
    /// The control that opens a course's create slot.
    AddDiscipline(EntityId),
}

/// Buffer the open date picker writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PickerTarget {
    Form,
    Course(EntityId),
}

// ── Key editing helpers ──────────────────────────────────────────────

fn is_ctrl(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

fn edit_course_field(buffer: &mut CourseBuffer, field: CourseField, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match (field, key.code) {
        (CourseField::Name, KeyCode::Char(c)) => buffer.name.push(c),
        (CourseField::Name, KeyCode::Backspace) => {
            buffer.name.pop();
        }
        (CourseField::Workload, KeyCode::Char(c)) => buffer.push_workload(c),
        (CourseField::Workload, KeyCode::Backspace) => buffer.pop_workload(),
        (CourseField::StartDate, KeyCode::Backspace | KeyCode::Delete) => {
            buffer.start_date = None;
        }
        _ => {}
    }
}

fn edit_text(text: &mut String, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Char(c) => text.push(c),
        KeyCode::Backspace => {
            text.pop();
        }
        _ => {}
    }
}

/// Map a session intent onto the action the app should process.
fn intent_action(origin: Origin, intent: Intent) -> Option<Action> {
    match intent {
        Intent::None => None,
        Intent::Submit { op, command } => Some(Action::Submit {
            origin,
            op,
            command,
        }),
        Intent::Confirm { op, request } => Some(Action::RequestConfirm {
            origin,
            op,
            request,
        }),
        Intent::Invalid(message) => Some(Action::Notify(Notification::warning(message))),
    }
}

// ── Screen ───────────────────────────────────────────────────────────

pub struct CoursesScreen {
    focused: bool,
    courses: CourseList,
    pane: Pane,
    form: EditSession<Course>,
    form_field: CourseField,
    course_sessions: HashMap<EntityId, EditSession<Course>>,
    discipline_sessions: HashMap<EntityId, EditSession<Discipline>>,
    /// Discipline create slots, keyed by course id. At most one per course.
    discipline_slots: HashMap<EntityId, EditSession<Discipline>>,
    selected: usize,
    course_field: CourseField,
    picker: Option<(PickerTarget, DatePicker)>,
}

impl CoursesScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            courses: Arc::new(Vec::new()),
            pane: Pane::default(),
            form: EditSession::create(()),
            form_field: CourseField::default(),
            course_sessions: HashMap::new(),
            discipline_sessions: HashMap::new(),
            discipline_slots: HashMap::new(),
            selected: 0,
            course_field: CourseField::default(),
            picker: None,
        }
    }

    fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for course in self.courses.iter() {
            rows.push(Row::Course(course.id.clone()));
            rows.extend(course.disciplines.iter().map(|d| Row::Discipline {
                course_id: course.id.clone(),
                id: d.id.clone(),
            }));
            if self.discipline_slots.contains_key(&course.id) {
                rows.push(Row::NewDiscipline(course.id.clone()));
            } else {
                rows.push(Row::AddDiscipline(course.id.clone()));
            }
        }
        rows
    }

    fn selected_row(&self) -> Option<Row> {
        self.rows().into_iter().nth(self.selected)
    }

    fn select_row(&mut self, row: &Row) {
        if let Some(idx) = self.rows().iter().position(|r| r == row) {
            self.selected = idx;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.rows().len().saturating_sub(1));
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
        self.course_field = CourseField::default();
    }

    fn find_course(&self, id: &EntityId) -> Option<&Arc<Course>> {
        self.courses.iter().find(|c| &c.id == id)
    }

    fn find_discipline(&self, id: &EntityId) -> Option<&Discipline> {
        self.courses
            .iter()
            .flat_map(|c| c.disciplines.iter())
            .find(|d| &d.id == id)
    }

    /// Session for a listed course, recreated from the list if it was closed.
    fn course_session(&mut self, id: &EntityId) -> Option<&mut EditSession<Course>> {
        if !self.course_sessions.contains_key(id) {
            let course = Course::clone(self.find_course(id)?);
            self.course_sessions
                .insert(id.clone(), EditSession::existing((), course));
        }
        self.course_sessions.get_mut(id)
    }

    fn discipline_session(&mut self, id: &EntityId) -> Option<&mut EditSession<Discipline>> {
        if !self.discipline_sessions.contains_key(id) {
            let discipline = self.find_discipline(id)?.clone();
            self.discipline_sessions.insert(
                id.clone(),
                EditSession::existing(discipline.course_id.clone(), discipline),
            );
        }
        self.discipline_sessions.get_mut(id)
    }

    fn open_slot(&mut self, course_id: &EntityId) {
        self.discipline_slots
            .entry(course_id.clone())
            .or_insert_with(|| EditSession::create(course_id.clone()));
        self.select_row(&Row::NewDiscipline(course_id.clone()));
    }

    fn open_picker(&mut self, target: PickerTarget, current: Option<NaiveDate>) {
        let today = Local::now().date_naive();
        self.picker = Some((target, DatePicker::new(current, today)));
    }

    // ── Data reconciliation ─────────────────────────────────────

    /// Adopt a freshly fetched list. Sessions follow their entity by id;
    /// sessions whose entity is gone are dropped, along with any
    /// in-flight outcome they were waiting on.
    fn apply_courses(&mut self, courses: CourseList) {
        let previous = self.selected_row();
        self.courses = courses;

        let mut course_sessions = HashMap::with_capacity(self.courses.len());
        let mut discipline_sessions = HashMap::new();
        for course in self.courses.iter() {
            let session = match self.course_sessions.remove(&course.id) {
                Some(mut session) => {
                    session.sync(Course::clone(course));
                    session
                }
                None => EditSession::existing((), Course::clone(course)),
            };
            course_sessions.insert(course.id.clone(), session);

            for discipline in &course.disciplines {
                let session = match self.discipline_sessions.remove(&discipline.id) {
                    Some(mut session) => {
                        session.sync(discipline.clone());
                        session
                    }
                    None => EditSession::existing(course.id.clone(), discipline.clone()),
                };
                discipline_sessions.insert(discipline.id.clone(), session);
            }
        }

        if !self.course_sessions.is_empty() || !self.discipline_sessions.is_empty() {
            debug!(
                courses = self.course_sessions.len(),
                disciplines = self.discipline_sessions.len(),
                "dropping sessions of removed entities"
            );
        }
        self.course_sessions = course_sessions;
        self.discipline_sessions = discipline_sessions;
        self.discipline_slots
            .retain(|course_id, _| self.courses.iter().any(|c| &c.id == course_id));

        let rows = self.rows();
        self.selected = previous
            .and_then(|row| rows.iter().position(|r| *r == row))
            .unwrap_or(self.selected)
            .min(rows.len().saturating_sub(1));
    }

    fn on_started(&mut self, origin: &Origin) {
        match origin {
            Origin::NewCourse => self.form.dispatched(),
            Origin::Course(id) => {
                if let Some(session) = self.course_sessions.get_mut(id) {
                    session.dispatched();
                }
            }
            Origin::Discipline(id) => {
                if let Some(session) = self.discipline_sessions.get_mut(id) {
                    session.dispatched();
                }
            }
            Origin::NewDiscipline(course_id) => {
                if let Some(session) = self.discipline_slots.get_mut(course_id) {
                    session.dispatched();
                }
            }
        }
    }

    fn on_finished(&mut self, origin: &Origin, op: Operation, ok: bool) {
        let disposition = match origin {
            Origin::NewCourse => Some(self.form.on_outcome(op, ok)),
            Origin::Course(id) => self
                .course_sessions
                .get_mut(id)
                .map(|s| s.on_outcome(op, ok)),
            Origin::Discipline(id) => self
                .discipline_sessions
                .get_mut(id)
                .map(|s| s.on_outcome(op, ok)),
            Origin::NewDiscipline(course_id) => self
                .discipline_slots
                .get_mut(course_id)
                .map(|s| s.on_outcome(op, ok)),
        };

        match disposition {
            None => debug!(%origin, %op, "outcome for a closed session ignored"),
            Some(Disposition::Keep) => {}
            Some(Disposition::Close) => {
                match origin {
                    Origin::NewCourse => {}
                    Origin::Course(id) => {
                        self.course_sessions.remove(id);
                    }
                    Origin::Discipline(id) => {
                        self.discipline_sessions.remove(id);
                    }
                    Origin::NewDiscipline(course_id) => {
                        self.discipline_slots.remove(course_id);
                    }
                }
                self.clamp_selection();
            }
        }
    }

    // ── Key handling ────────────────────────────────────────────

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some((target, picker)) = self.picker.as_mut() else {
            return;
        };
        match picker.handle_key(key) {
            PickerOutcome::Pending => {}
            PickerOutcome::Dismissed => self.picker = None,
            PickerOutcome::Selected(date) => {
                let target = target.clone();
                self.picker = None;
                let buffer = match target {
                    PickerTarget::Form => self.form.buffer_mut(),
                    PickerTarget::Course(id) => self
                        .course_sessions
                        .get_mut(&id)
                        .and_then(EditSession::buffer_mut),
                };
                if let Some(buffer) = buffer {
                    buffer.start_date = Some(date);
                }
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => intent_action(Origin::NewCourse, self.form.primary()),
            KeyCode::Esc => {
                self.pane = Pane::List;
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form_field = self.form_field.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_field = self.form_field.prev();
                None
            }
            KeyCode::Char(' ') if self.form_field == CourseField::StartDate => {
                let current = self.form.buffer().start_date;
                self.open_picker(PickerTarget::Form, current);
                None
            }
            _ => {
                let field = self.form_field;
                if let Some(buffer) = self.form.buffer_mut() {
                    edit_course_field(buffer, field, key);
                }
                None
            }
        }
    }

    /// Keys shared by every row that is not being edited.
    fn handle_list_key(&mut self, course_id: &EntityId, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('g') => self.selected = 0,
            KeyCode::Char('G') => self.selected = self.rows().len().saturating_sub(1),
            KeyCode::Char('n') | KeyCode::Tab => self.pane = Pane::Form,
            KeyCode::Char('a') => self.open_slot(course_id),
            _ => {}
        }
        None
    }

    fn handle_course_key(&mut self, id: &EntityId, key: KeyEvent) -> Option<Action> {
        let origin = Origin::Course(id.clone());
        let field = self.course_field;
        let session = self.course_session(id)?;

        if !session.is_editing() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('e') => {
                    session.primary();
                    self.course_field = CourseField::Name;
                    None
                }
                KeyCode::Char('d') => intent_action(origin, session.delete()),
                _ => self.handle_list_key(id, key),
            };
        }

        if is_ctrl(key, 'd') {
            return intent_action(origin, session.delete());
        }
        match key.code {
            KeyCode::Enter => intent_action(origin, session.primary()),
            KeyCode::Esc => {
                session.cancel();
                None
            }
            KeyCode::Tab => {
                self.course_field = field.next();
                None
            }
            KeyCode::BackTab => {
                self.course_field = field.prev();
                None
            }
            KeyCode::Char(' ') if field == CourseField::StartDate => {
                let current = session.buffer().start_date;
                self.open_picker(PickerTarget::Course(id.clone()), current);
                None
            }
            _ => {
                if let Some(buffer) = session.buffer_mut() {
                    edit_course_field(buffer, field, key);
                }
                None
            }
        }
    }

    fn handle_discipline_key(
        &mut self,
        course_id: &EntityId,
        id: &EntityId,
        key: KeyEvent,
    ) -> Option<Action> {
        let origin = Origin::Discipline(id.clone());
        let session = self.discipline_session(id)?;

        if !session.is_editing() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('e') => {
                    session.primary();
                    None
                }
                KeyCode::Char('d') => intent_action(origin, session.delete()),
                _ => self.handle_list_key(course_id, key),
            };
        }

        if is_ctrl(key, 'd') {
            return intent_action(origin, session.delete());
        }
        match key.code {
            KeyCode::Enter => intent_action(origin, session.primary()),
            KeyCode::Esc => {
                session.cancel();
                None
            }
            _ => {
                if let Some(buffer) = session.buffer_mut() {
                    edit_text(&mut buffer.name, key);
                }
                None
            }
        }
    }

    fn handle_slot_key(&mut self, course_id: &EntityId, key: KeyEvent) -> Option<Action> {
        let origin = Origin::NewDiscipline(course_id.clone());
        let session = self.discipline_slots.get_mut(course_id)?;
        match key.code {
            KeyCode::Enter => intent_action(origin, session.primary()),
            KeyCode::Esc => {
                if session.cancel() == Disposition::Close {
                    self.discipline_slots.remove(course_id);
                    self.select_row(&Row::AddDiscipline(course_id.clone()));
                }
                None
            }
            _ => {
                if let Some(buffer) = session.buffer_mut() {
                    edit_text(&mut buffer.name, key);
                }
                None
            }
        }
    }

    fn handle_add_key(&mut self, course_id: &EntityId, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Enter {
            self.open_slot(course_id);
            return None;
        }
        self.handle_list_key(course_id, key)
    }

    // ── Rendering ───────────────────────────────────────────────

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let active = self.focused() && self.pane == Pane::Form;
        let block = Block::default()
            .title(" Criar curso ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if active {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let buffer = self.form.buffer();
        let mut lines = Vec::new();
        for field in CourseField::ALL {
            let is_focused = active && field == self.form_field;
            let (marker, label_style) = if is_focused {
                ("▸ ", theme::field_label_focused())
            } else {
                ("  ", theme::field_label())
            };
            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(field.label(), label_style),
            ]));

            let (value, style) = match field {
                CourseField::Name if buffer.name.is_empty() => {
                    (field.label().to_owned(), theme::placeholder())
                }
                CourseField::Name => (buffer.name.clone(), theme::field_value()),
                CourseField::Workload => (buffer.workload_text(), theme::field_value()),
                CourseField::StartDate => (
                    fmt_picker_label(buffer.start_date),
                    if buffer.start_date.is_some() {
                        theme::field_value()
                    } else {
                        theme::placeholder()
                    },
                ),
            };
            let mut value_line = vec![Span::raw("    "), Span::styled(value, style)];
            if is_focused && field != CourseField::StartDate {
                value_line.push(Span::styled(CURSOR, theme::field_label_focused()));
            }
            if field == CourseField::StartDate {
                value_line.push(Span::styled(" ▾", theme::key_hint()));
            }
            lines.push(Line::from(value_line));
            lines.push(Line::from(""));
        }

        let mut button = vec![Span::styled("  Criar curso  ", theme::button_primary())];
        if self.form.is_busy() {
            button.push(Span::styled("  enviando…", theme::key_hint()));
        }
        lines.push(Line::from(button));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", theme::key_hint_key()),
            Span::styled(" criar  ", theme::key_hint()),
            Span::styled("Tab", theme::key_hint_key()),
            Span::styled(" campo", theme::key_hint()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Espaço", theme::key_hint_key()),
            Span::styled(" data  ", theme::key_hint()),
            Span::styled("Esc", theme::key_hint_key()),
            Span::styled(" lista", theme::key_hint()),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn course_text(&self, course: &Course, selected: bool) -> Text<'static> {
        let session = self.course_sessions.get(&course.id);
        let busy = session.is_some_and(EditSession::is_busy);
        let busy_span = Span::styled(if busy { "  …" } else { "" }, theme::key_hint());

        let Some(session) = session.filter(|s| s.is_editing()) else {
            return Text::from(vec![
                Line::from(vec![
                    Span::styled(
                        course.name.clone(),
                        Style::default()
                            .fg(theme::NEON_CYAN)
                            .add_modifier(Modifier::BOLD),
                    ),
                    busy_span,
                ]),
                Line::from(format!("  Carga horária: {}", course.workload)),
                Line::from(format!(
                    "  Data de Início: {}",
                    fmt_date_display(course.start_date)
                )),
                Line::from("  Disciplinas:"),
            ]);
        };

        let buffer = session.buffer();
        let mut lines = vec![Line::from(vec![
            Span::styled("✎ ", Style::default().fg(theme::ELECTRIC_YELLOW)),
            Span::styled(course.name.clone(), theme::field_label()),
            busy_span,
        ])];
        for field in CourseField::ALL {
            let is_focused = selected && field == self.course_field;
            let label_style = if is_focused {
                theme::field_label_focused()
            } else {
                theme::field_label()
            };
            let value = match field {
                CourseField::Name => buffer.name.clone(),
                CourseField::Workload => buffer.workload_text(),
                CourseField::StartDate => fmt_picker_label(buffer.start_date),
            };
            let mut spans = vec![
                Span::styled(format!("  {:<15}", field.label()), label_style),
                Span::styled(value, theme::field_value()),
            ];
            if is_focused && field != CourseField::StartDate {
                spans.push(Span::styled(CURSOR, theme::field_label_focused()));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from("  Disciplinas:"));
        Text::from(lines)
    }

    fn discipline_text(&self, discipline: &Discipline) -> Text<'static> {
        let session = self.discipline_sessions.get(&discipline.id);
        let busy = if session.is_some_and(EditSession::is_busy) {
            "  …"
        } else {
            ""
        };

        match session.filter(|s| s.is_editing()) {
            Some(session) => Line::from(vec![
                Span::styled("    ✎ Nome: ", theme::field_label_focused()),
                Span::styled(session.buffer().name.clone(), theme::field_value()),
                Span::styled(CURSOR, theme::field_label_focused()),
                Span::styled(busy, theme::key_hint()),
            ])
            .into(),
            None => Line::from(vec![
                Span::styled("    Nome: ", theme::field_label()),
                Span::raw(discipline.name.clone()),
                Span::styled(busy, theme::key_hint()),
            ])
            .into(),
        }
    }

    fn row_text(&self, row: &Row, selected: bool) -> Text<'static> {
        match row {
            Row::Course(id) => self
                .find_course(id)
                .map(|course| self.course_text(course, selected))
                .unwrap_or_default(),
            Row::Discipline { id, .. } => self
                .find_discipline(id)
                .map(|d| self.discipline_text(d))
                .unwrap_or_default(),
            Row::NewDiscipline(course_id) => {
                let name = self
                    .discipline_slots
                    .get(course_id)
                    .map(|s| s.buffer().name.clone())
                    .unwrap_or_default();
                let busy = self
                    .discipline_slots
                    .get(course_id)
                    .is_some_and(EditSession::is_busy);
                Line::from(vec![
                    Span::styled("    + Nome: ", theme::field_label_focused()),
                    Span::styled(name, theme::field_value()),
                    Span::styled(CURSOR, theme::field_label_focused()),
                    Span::styled(if busy { "  …" } else { "" }, theme::key_hint()),
                ])
                .into()
            }
            Row::AddDiscipline(_) => {
                Line::from(Span::styled("    + Adicionar disciplina", theme::key_hint())).into()
            }
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let active = self.focused() && self.pane == Pane::List;
        let block = Block::default()
            .title(format!(" Cursos ({}) ", self.courses.len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if active {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let rows = self.rows();
        if rows.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("  Nenhum curso cadastrado", theme::key_hint())),
                layout[0],
            );
        } else {
            let items: Vec<ListItem> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    ListItem::new(self.row_text(row, active && i == self.selected))
                        .style(theme::list_row())
                })
                .collect();
            let list = List::new(items)
                .highlight_style(if active {
                    theme::list_selected()
                } else {
                    Style::default()
                })
                .highlight_symbol("▸ ");
            let mut state = ListState::default().with_selected(Some(self.selected));
            frame.render_stateful_widget(list, layout[0], &mut state);
        }

        let hints = if self.captures_input() && self.pane == Pane::List {
            Line::from(vec![
                Span::styled("  Enter ", theme::key_hint_key()),
                Span::styled("salvar  ", theme::key_hint()),
                Span::styled("Esc ", theme::key_hint_key()),
                Span::styled("cancelar  ", theme::key_hint()),
                Span::styled("Tab ", theme::key_hint_key()),
                Span::styled("campo  ", theme::key_hint()),
                Span::styled("Ctrl+D ", theme::key_hint_key()),
                Span::styled("excluir", theme::key_hint()),
            ])
        } else {
            Line::from(vec![
                Span::styled("  j/k ", theme::key_hint_key()),
                Span::styled("navegar  ", theme::key_hint()),
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("editar  ", theme::key_hint()),
                Span::styled("d ", theme::key_hint_key()),
                Span::styled("excluir  ", theme::key_hint()),
                Span::styled("a ", theme::key_hint_key()),
                Span::styled("disciplina  ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("novo curso", theme::key_hint()),
            ])
        };
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }
}

impl Default for CoursesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CoursesScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.picker.is_some() {
            self.handle_picker_key(key);
            return Ok(None);
        }
        if self.pane == Pane::Form {
            return Ok(self.handle_form_key(key));
        }

        // Arrows move between rows even while a row is being edited.
        match key.code {
            KeyCode::Up => {
                self.move_selection(-1);
                return Ok(None);
            }
            KeyCode::Down => {
                self.move_selection(1);
                return Ok(None);
            }
            _ => {}
        }

        let Some(row) = self.selected_row() else {
            if matches!(key.code, KeyCode::Char('n') | KeyCode::Tab) {
                self.pane = Pane::Form;
            }
            return Ok(None);
        };

        let action = match row {
            Row::Course(id) => self.handle_course_key(&id, key),
            Row::Discipline { course_id, id } => self.handle_discipline_key(&course_id, &id, key),
            Row::NewDiscipline(course_id) => self.handle_slot_key(&course_id, key),
            Row::AddDiscipline(course_id) => self.handle_add_key(&course_id, key),
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CoursesUpdated(courses) => self.apply_courses(Arc::clone(courses)),
            Action::CommandStarted { origin } => self.on_started(origin),
            Action::CommandFinished { origin, op, ok } => self.on_finished(origin, *op, *ok),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout =
            Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(30)]).split(area);
        self.render_form(frame, layout[0]);
        self.render_list(frame, layout[1]);

        if let Some((_, picker)) = &self.picker {
            let width = PICKER_WIDTH.min(area.width);
            let height = PICKER_HEIGHT.min(area.height);
            let x = area.x + (area.width.saturating_sub(width)) / 2;
            let y = area.y + (area.height.saturating_sub(height)) / 2;
            frame.render_widget(picker, Rect::new(x, y, width, height));
        }
    }

    fn captures_input(&self) -> bool {
        if self.picker.is_some() || self.pane == Pane::Form {
            return true;
        }
        match self.selected_row() {
            Some(Row::Course(id)) => self
                .course_sessions
                .get(&id)
                .is_some_and(EditSession::is_editing),
            Some(Row::Discipline { id, .. }) => self
                .discipline_sessions
                .get(&id)
                .is_some_and(EditSession::is_editing),
            Some(Row::NewDiscipline(_)) => true,
            Some(Row::AddDiscipline(_)) | None => false,
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Courses"
    }
}
