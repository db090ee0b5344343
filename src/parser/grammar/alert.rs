use crate::model::{Alert, AlertKind};

/// Alert bodies are kept verbatim.
pub fn parse_alert(kind: AlertKind, content: &str) -> Alert {
    Alert {
        kind,
        content: content.to_string(),
    }
}
