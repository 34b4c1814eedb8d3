//! Line-oriented text report for one message.

use crate::config::ReportConfig;
use crate::i18n;
use crate::model::delay::DelayReport;
use crate::model::hop::ParsedHop;
use crate::model::message::{MessageReport, Sections};

use super::table;

/// Render the report the way it is printed to stdout (without the divider).
pub fn render_report(report: &MessageReport, sections: Sections, config: &ReportConfig) -> String {
    let h = &report.headers;
    let mut content = String::new();

    content.push_str(&format!(
        "\n{}: {}\n",
        i18n::msg_information_for(),
        report.file.display()
    ));
    content.push_str(&field_line(i18n::label_to(), &h.to));
    content.push_str(&field_line(i18n::label_from(), &h.from));
    content.push_str(&field_line(i18n::label_subject(), &h.subject));
    content.push_str(&field_line(i18n::label_date(), &h.date));

    if sections.origin {
        content.push_str(&field_line(i18n::label_originating_ip(), &h.originating_ip));
    }
    if sections.user_agent {
        content.push_str(&field_line(i18n::label_user_agent(), &h.user_agent));
    }
    if sections.message_id {
        content.push_str(&field_line(i18n::label_message_id(), &h.message_id));
    }

    if let Some(route) = &report.route {
        content.push_str(&render_route(route));
    }
    if let Some(delays) = &report.delays {
        content.push_str(&render_delays(delays, config));
    }

    content
}

/// `"Label: value"`, or `"Label: Not found"` for absent fields.
fn field_line(label: &str, value: &Option<String>) -> String {
    format!(
        "{label}: {}\n",
        value.as_deref().unwrap_or(i18n::msg_not_found())
    )
}

/// The hop listing, origin first.
pub fn render_route(route: &[ParsedHop]) -> String {
    let mut content = format!("\n\n{}\n", i18n::msg_route_heading());
    if route.is_empty() {
        content.push_str(&format!("{}\n", i18n::msg_no_received()));
    }
    for (i, parsed) in route.iter().enumerate() {
        let line = match parsed.hop() {
            Some(hop) => hop.to_string(),
            None => format!("({})", i18n::msg_malformed_hop()),
        };
        content.push_str(&format!("{} {}: {}\n", i18n::msg_hop(), i + 1, line.trim_end()));
    }
    content
}

/// The delay table followed by the centered total.
pub fn render_delays(delays: &DelayReport, config: &ReportConfig) -> String {
    let mut content = String::from("\n\n");

    if config.echo_unparsed_dates {
        for line in &delays.unparsed {
            content.push_str(&format!("Debug: '{line}'\n"));
        }
    }

    content.push_str(&table::render_delay_table(delays, config.table_style));
    content.push('\n');
    content.push_str(&table::render_total(delays.total_seconds, config.total_width));
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::model::hop::Hop;
    use crate::model::message::HeaderSummary;
    use crate::model::received::ReceivedEntry;
    use crate::trace::delay::compute_delays;

    fn report() -> MessageReport {
        MessageReport {
            file: PathBuf::from("msg.eml"),
            headers: HeaderSummary {
                to: Some("alice@example.org".into()),
                subject: Some("Hi".into()),
                ..Default::default()
            },
            route: None,
            delays: None,
        }
    }

    #[test]
    fn test_basic_fields_always_printed() {
        let text = render_report(&report(), Sections::default(), &ReportConfig::default());
        assert!(text.starts_with("\nInformation for email: msg.eml\n"));
        assert!(text.contains("To: alice@example.org\n"));
        assert!(text.contains("From: Not found\n"));
        assert!(!text.contains("Message-ID"));
    }

    #[test]
    fn test_optional_fields_marked_not_found() {
        let text = render_report(&report(), Sections::all(), &ReportConfig::default());
        assert!(text.contains("Originating-IP: Not found\n"));
        assert!(text.contains("User-Agent: Not found\n"));
        assert!(text.contains("Message-ID: Not found\n"));
    }

    #[test]
    fn test_route_lines() {
        let route = vec![
            ParsedHop::Origin(Hop::origin("a.example")),
            ParsedHop::Malformed {
                entry: "Received: ???".into(),
            },
            ParsedHop::Transit(Hop {
                from_host: "a.example".into(),
                from_addr: "[1.2.3.4]".into(),
                to_host: "b.example".into(),
                to_addr: "".into(),
            }),
        ];
        let text = render_route(&route);
        assert!(text.contains("Hop #: From --> By\n"));
        assert!(text.contains("Hop 1: unknown none --> a.example\n"));
        assert!(text.contains("Hop 2: (unrecognized Received field)\n"));
        assert!(text.contains("Hop 3: a.example [1.2.3.4] --> b.example\n"));
    }

    #[test]
    fn test_empty_route() {
        assert!(render_route(&[]).contains("No Received fields found"));
    }

    #[test]
    fn test_echo_unparsed_dates() {
        let entries: Vec<ReceivedEntry> = [
            "Received: by c; later that day",
            "Received: by b; sometime on Saturday",
            "Received: by a; Sat, 28 Dec 2019 18:11:46 -0800",
        ]
        .iter()
        .map(|l| ReceivedEntry::normalize(l))
        .collect();
        let delays = compute_delays(&entries);

        let mut config = ReportConfig::default();
        assert!(!render_delays(&delays, &config).contains("Debug:"));

        config.echo_unparsed_dates = true;
        let text = render_delays(&delays, &config);
        assert_eq!(text.matches("Debug: ").count(), 2);
        assert_eq!(text.matches("Debug: 'Received: by b; sometime on Saturday'\n").count(), 1);
        assert_eq!(text.matches("Debug: 'Received: by c; later that day'\n").count(), 1);
        assert!(text.contains("Invalid date"));
        assert!(text.contains("Total: 0 sec."));
    }
}
