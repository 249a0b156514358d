//! Date formatting for the two places dates are shown.
//!
//! Committed dates use the Brazilian `dd/mm/yyyy` form. The date picker
//! trigger shows the locale-neutral `%x` form instead, or a placeholder
//! when nothing is chosen yet. The two are kept separate on purpose.

use chrono::NaiveDate;

/// Placeholder on the picker trigger while no date is set.
pub const DATE_PLACEHOLDER: &str = "Data de início";

/// Static display of a committed start date.
pub fn fmt_date_display(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "—".into(), |d| d.format("%d/%m/%Y").to_string())
}

/// Label on the date picker trigger.
pub fn fmt_picker_label(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| DATE_PLACEHOLDER.into(), |d| d.format("%x").to_string())
}

/// "março de 2024"
pub fn fmt_month_caption(date: NaiveDate) -> String {
    use chrono::Datelike;

    const MONTHS: [&str; 12] = [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ];
    let name = usize::try_from(date.month0())
        .ok()
        .and_then(|i| MONTHS.get(i))
        .copied()
        .unwrap_or_default();
    format!("{name} de {}", date.year())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn display_uses_day_month_year() {
        assert_eq!(fmt_date_display(date(2024, 3, 1)), "01/03/2024");
        assert_eq!(fmt_date_display(None), "—");
    }

    #[test]
    fn picker_label_differs_from_display() {
        assert_eq!(fmt_picker_label(date(2024, 3, 1)), "03/01/24");
        assert_eq!(fmt_picker_label(None), DATE_PLACEHOLDER);
    }

    #[test]
    fn month_caption_is_portuguese() {
        assert_eq!(
            fmt_month_caption(date(2024, 3, 15).unwrap()),
            "março de 2024"
        );
    }
}
