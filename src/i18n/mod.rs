//! Localized strings for CLI help and report output.
//!
//! English is the default; Spanish is available through `--lang es` or the
//! usual locale variables.

use std::sync::OnceLock;

static CURRENT_LANG: OnceLock<Lang> = OnceLock::new();

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// English (default)
    En,
    /// Spanish
    Es,
}

impl Lang {
    /// Parse a language code string (e.g. "en", "es", "en_US", "es-MX").
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.to_lowercase();
        let prefix = normalized.split(['_', '-', '.']).next().unwrap_or("");
        match prefix {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Return the ISO 639-1 code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

/// Initialize the global language. Only the first call has an effect.
pub fn set_lang(lang: Lang) {
    let _ = CURRENT_LANG.set(lang);
}

/// Get the configured language (English until [`set_lang`] is called).
pub fn lang() -> Lang {
    CURRENT_LANG.get().copied().unwrap_or(Lang::En)
}

/// Detect language from `TRACEMAIL_LANG`, `LC_MESSAGES` or `LANG`.
pub fn detect_system_lang() -> Lang {
    ["TRACEMAIL_LANG", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| Lang::from_code(&v))
        .unwrap_or(Lang::En)
}

macro_rules! msg {
    ($name:ident, $en:expr, $es:expr) => {
        /// Returns a localized string for the current language.
        pub fn $name() -> &'static str {
            match lang() {
                Lang::En => $en,
                Lang::Es => $es,
            }
        }
    };
}

// ── CLI help ─────────────────────────────────────────────────────

msg!(
    app_about,
    "Analyze e-mail messages saved as plain text",
    "Analiza mensajes de correo guardados como texto plano"
);
msg!(
    app_long_about,
    "Analyze e-mail messages saved as plain text.\nShows the basic headers, the route the message took through mail relays\n(from its Received fields) and the delay introduced by each hop.",
    "Analiza mensajes de correo guardados como texto plano.\nMuestra las cabeceras b\u{e1}sicas, la ruta que sigui\u{f3} el mensaje entre\nservidores (a partir de los campos Received) y el retraso de cada salto."
);
msg!(
    app_after_help,
    "Example: tracemail analyze --all message.eml",
    "Ejemplo: tracemail analyze --all mensaje.eml"
);
msg!(
    help_cmd_analyze,
    "Analyze one or more messages",
    "Analizar uno o varios mensajes"
);
msg!(
    help_cmd_completions,
    "Generate shell completions",
    "Generar completions para tu shell"
);
msg!(
    help_cmd_manpage,
    "Generate a man page",
    "Generar p\u{e1}gina de manual"
);

// ── Report output ────────────────────────────────────────────────

msg!(
    msg_information_for,
    "Information for email",
    "Informaci\u{f3}n del correo"
);
msg!(label_to, "To", "Para");
msg!(label_from, "From", "De");
msg!(label_subject, "Subject", "Asunto");
msg!(label_date, "Date", "Fecha");
msg!(label_originating_ip, "Originating-IP", "IP de origen");
msg!(label_user_agent, "User-Agent", "Agente de usuario");
msg!(label_message_id, "Message-ID", "Message-ID");
msg!(msg_not_found, "Not found", "No encontrado");
msg!(msg_route_heading, "Hop #: From --> By", "Salto #: Desde --> Por");
msg!(msg_hop, "Hop", "Salto");
msg!(
    msg_malformed_hop,
    "unrecognized Received field",
    "campo Received no reconocido"
);
msg!(
    msg_no_received,
    "No Received fields found",
    "No se encontraron campos Received"
);
msg!(table_hop, "Hop #", "Salto #");
msg!(
    table_delay,
    "Delay (in seconds)",
    "Retraso (en segundos)"
);
msg!(msg_invalid_date, "Invalid date", "Fecha no v\u{e1}lida");
msg!(msg_total, "Total", "Total");
msg!(unit_min, "min.", "min.");
msg!(unit_sec, "sec.", "seg.");

// ── Errors ───────────────────────────────────────────────────────

msg!(
    err_file_not_found,
    "File not found",
    "Fichero no encontrado"
);
msg!(err_not_a_file, "Not a file", "No es un fichero");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_from_code() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("es_ES.UTF-8"), Some(Lang::Es));
        assert_eq!(Lang::from_code("es-MX"), Some(Lang::Es));
        assert_eq!(Lang::from_code("C"), None);
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn test_lang_code_roundtrip() {
        assert_eq!(Lang::from_code(Lang::En.code()), Some(Lang::En));
        assert_eq!(Lang::from_code(Lang::Es.code()), Some(Lang::Es));
    }

    #[test]
    fn test_messages_return_strings() {
        assert!(!app_about().is_empty());
        assert!(!msg_invalid_date().is_empty());
        assert!(!err_not_a_file().is_empty());
    }
}
