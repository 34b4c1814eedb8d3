//! Bordered table of per-hop delays and the centered total line.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use unicode_width::UnicodeWidthStr;

use crate::config::TableStyle;
use crate::i18n;
use crate::model::delay::{Delay, DelayReport};

/// Render the delay table. Hop 1 (the origin) is shown with `*`.
pub fn render_delay_table(report: &DelayReport, style: TableStyle) -> String {
    let preset = match style {
        TableStyle::Utf8 => UTF8_FULL,
        TableStyle::Ascii => ASCII_FULL,
    };

    let mut table = Table::new();
    table
        .load_preset(preset)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec![centered(i18n::table_hop()), centered(i18n::table_delay())]);

    if report.entries > 0 {
        table.add_row(vec![centered("1"), centered("*")]);
    }
    for row in &report.rows {
        let delay = match &row.delay {
            Delay::Measured { seconds } => format_seconds(*seconds),
            Delay::Unavailable { .. } => i18n::msg_invalid_date().to_string(),
        };
        table.add_row(vec![centered(row.hop), centered(delay)]);
    }

    table.to_string()
}

/// `"Total: 4 sec."` centered in `width` columns.
pub fn render_total(total_seconds: f64, width: usize) -> String {
    let text = format!("{}: {}", i18n::msg_total(), format_total(total_seconds));
    center(&text, width)
}

/// `"<M> min. <S> sec."` from one minute on, `"<S> sec."` below.
pub fn format_total(seconds: f64) -> String {
    if seconds.abs() >= 60.0 {
        let whole = seconds.trunc() as i64;
        format!(
            "{} {} {} {}",
            whole / 60,
            i18n::unit_min(),
            (whole % 60).abs(),
            i18n::unit_sec()
        )
    } else {
        format!("{} {}", format_seconds(seconds), i18n::unit_sec())
    }
}

/// Seconds without float noise: `4` for 4.0, `0.233` for 0.233000001.
pub fn format_seconds(seconds: f64) -> String {
    let rounded = (seconds * 1_000_000.0).round() / 1_000_000.0;
    format!("{rounded}")
}

fn centered(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Center)
}

/// Pad `text` on both sides to `width` display columns (extra space goes right).
fn center(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::delay::DelayRow;

    #[test]
    fn test_format_total_seconds() {
        assert_eq!(format_total(4.0), "4 sec.");
        assert_eq!(format_total(0.0), "0 sec.");
        assert_eq!(format_total(2.5), "2.5 sec.");
    }

    #[test]
    fn test_format_total_minutes() {
        assert_eq!(format_total(60.0), "1 min. 0 sec.");
        assert_eq!(format_total(125.7), "2 min. 5 sec.");
        assert_eq!(format_total(-75.0), "-1 min. 15 sec.");
    }

    #[test]
    fn test_format_seconds_rounding() {
        assert_eq!(format_seconds(0.1 + 0.2), "0.3");
        assert_eq!(format_seconds(-6.0), "-6");
    }

    #[test]
    fn test_render_total_centered() {
        let line = render_total(4.0, 30);
        assert_eq!(line.len(), 30);
        assert_eq!(line.trim(), "Total: 4 sec.");
        assert!(line.starts_with("        Total"));
    }

    #[test]
    fn test_center_wider_text_untouched() {
        assert_eq!(center("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_table_rows() {
        let report = DelayReport {
            entries: 3,
            rows: vec![
                DelayRow {
                    hop: 2,
                    delay: Delay::Measured { seconds: 4.0 },
                },
                DelayRow {
                    hop: 3,
                    delay: Delay::Unavailable {
                        reason: "bad".into(),
                    },
                },
            ],
            total_seconds: 4.0,
            unparsed: vec!["Received: by c; ???".into()],
        };
        let table = render_delay_table(&report, TableStyle::Ascii);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[1].contains("Hop #"));
        assert!(lines[1].contains("Delay (in seconds)"));
        assert!(table.contains('*'));
        assert!(table.contains("Invalid date"));
        assert!(lines.iter().any(|l| l.contains(" 2 ") && l.contains(" 4 ")));
    }

    #[test]
    fn test_empty_table_has_only_header() {
        let table = render_delay_table(&DelayReport::default(), TableStyle::Utf8);
        assert!(table.contains("Hop #"));
        assert!(!table.contains('*'));
    }
}
