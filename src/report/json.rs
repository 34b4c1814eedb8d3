//! JSON output of a [`MessageReport`].

use crate::model::message::MessageReport;

/// Serialize a report as pretty-printed JSON.
pub fn to_json(report: &MessageReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::model::message::Sections;
    use crate::parser::eml::parse_message;
    use crate::trace::analyze_message;

    #[test]
    fn test_json_shape() {
        let raw = parse_message(
            b"Received: from a.example ([1.2.3.4]) by b.example; Sat, 28 Dec 2019 18:11:50 -0800\n\
              Received: by a.example; Sat, 28 Dec 2019 18:11:46 -0800\n\
              Subject: Hi\n\nbody\n",
        );
        let report = analyze_message(Path::new("m.eml"), &raw, Sections::all());
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert_eq!(value["file"], "m.eml");
        assert_eq!(value["headers"]["subject"], "Hi");
        assert!(value["headers"]["to"].is_null());
        assert_eq!(value["route"][0]["kind"], "origin");
        assert_eq!(value["route"][0]["from_host"], "unknown");
        assert_eq!(value["route"][1]["kind"], "transit");
        assert_eq!(value["route"][1]["from_addr"], "[1.2.3.4]");
        assert_eq!(value["delays"]["rows"][0]["hop"], 2);
        assert_eq!(value["delays"]["rows"][0]["delay"]["measured"]["seconds"], 4.0);
        assert_eq!(value["delays"]["total_seconds"], 4.0);
    }

    #[test]
    fn test_unrequested_sections_are_omitted() {
        let raw = parse_message(b"Subject: Hi\n\n");
        let report = analyze_message(Path::new("m.eml"), &raw, Sections::default());
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert!(value.get("route").is_none());
        assert!(value.get("delays").is_none());
    }
}
