//! Single-day calendar picker shown as a popup.
//!
//! Choosing a day closes the picker immediately; there is no separate
//! "apply" step.

use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::date_fmt::fmt_month_caption;
use crate::theme;

/// Outer size of the popup, borders included.
pub const PICKER_WIDTH: u16 = 24;
pub const PICKER_HEIGHT: u16 = 12;

const WEEKDAYS: [&str; 7] = ["Do", "Se", "Te", "Qu", "Qu", "Se", "Sá"];

/// Result of feeding a key to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Still open.
    Pending,
    /// A day was chosen; the picker should close.
    Selected(NaiveDate),
    /// Closed without choosing.
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
}

impl DatePicker {
    /// Open on `selected`, or on `today` when nothing is chosen yet.
    pub fn new(selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            cursor: selected.unwrap_or(today),
            selected,
        }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerOutcome {
        let moved = match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.cursor.checked_sub_days(Days::new(1)),
            KeyCode::Right | KeyCode::Char('l') => self.cursor.checked_add_days(Days::new(1)),
            KeyCode::Up | KeyCode::Char('k') => self.cursor.checked_sub_days(Days::new(7)),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.checked_add_days(Days::new(7)),
            KeyCode::PageUp => self.cursor.checked_sub_months(Months::new(1)),
            KeyCode::PageDown => self.cursor.checked_add_months(Months::new(1)),
            KeyCode::Home => self.cursor.with_day(1),
            KeyCode::End => Some(last_of_month(self.cursor)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selected = Some(self.cursor);
                return PickerOutcome::Selected(self.cursor);
            }
            KeyCode::Esc => return PickerOutcome::Dismissed,
            _ => None,
        };

        if let Some(date) = moved {
            self.cursor = date;
        }
        PickerOutcome::Pending
    }

    /// Day cells for the cursor's month, `None` padding the first week.
    fn month_cells(&self) -> Vec<Option<NaiveDate>> {
        let Some(first) = self.cursor.with_day(1) else {
            return Vec::new();
        };
        let lead = first.weekday().num_days_from_sunday();
        let mut cells: Vec<Option<NaiveDate>> = (0..lead).map(|_| None).collect();
        cells.extend(first.iter_days().take_while(|d| d.month() == first.month()).map(Some));
        cells
    }
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

impl Widget for &DatePicker {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!(" {} ", fmt_month_caption(self.cursor())))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(
            WEEKDAYS
                .iter()
                .map(|d| Span::styled(format!("{d:>3}"), theme::key_hint()))
                .collect::<Vec<_>>(),
        )];

        for week in self.month_cells().chunks(7) {
            let spans: Vec<Span> = week
                .iter()
                .map(|cell| match cell {
                    None => Span::raw("   "),
                    Some(day) => {
                        let style = if *day == self.cursor {
                            theme::list_selected()
                        } else if Some(*day) == self.selected {
                            theme::field_value().add_modifier(Modifier::UNDERLINED)
                        } else {
                            theme::list_row()
                        };
                        Span::styled(format!("{:>3}", day.day()), style)
                    }
                })
                .collect();
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Enter", theme::key_hint_key()),
            Span::styled(" ok  ", theme::key_hint()),
            Span::styled("PgUp/Dn", theme::key_hint_key()),
            Span::styled(" mês", theme::key_hint()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
