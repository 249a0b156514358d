//! Confirmation gate: a modal that holds a command until the user picks
//! "Confirmar" or "Cancelar".
//!
//! The gate is controlled. The app owns whether it is open and which
//! request it shows; this widget only draws it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::theme;

pub const CANCEL_LABEL: &str = "Cancelar";
pub const CONFIRM_LABEL: &str = "Confirmar";

const GATE_WIDTH: u16 = 56;

pub struct ConfirmGate<'a> {
    title: &'a str,
    description: &'a str,
    /// The bound command has been sent and no outcome has arrived yet.
    busy: bool,
}

impl<'a> ConfirmGate<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self {
            title,
            description,
            busy: false,
        }
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Centered area for the gate inside `area`.
    pub fn area(&self, area: Rect) -> Rect {
        let width = GATE_WIDTH.min(area.width.saturating_sub(4));
        let text_width = usize::from(width.saturating_sub(4)).max(1);
        let wrapped = self.description.chars().count().div_ceil(text_width);
        let body = u16::try_from(wrapped).unwrap_or(u16::MAX);
        let height = body.saturating_add(6).min(area.height);

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for ConfirmGate<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ELECTRIC_YELLOW))
            .style(Style::default().bg(theme::BG_DARK));
        let inner = block.inner(area);
        block.render(area, buf);

        let actions = if self.busy {
            Line::from(Span::styled("Enviando…", theme::key_hint()))
        } else {
            Line::from(vec![
                Span::styled(format!(" {CANCEL_LABEL} "), theme::button_secondary()),
                Span::styled(" n/Esc   ", theme::key_hint()),
                Span::styled(format!(" {CONFIRM_LABEL} "), theme::button_primary()),
                Span::styled(" y/Enter", theme::key_hint()),
            ])
        }
        .alignment(Alignment::Right);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.description.to_owned(),
                Style::default().fg(theme::DIM_WHITE),
            )),
            Line::from(""),
            actions,
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(1)))
            .render(inner, buf);
    }
}
