//! `@deprecated [from VERSION | VERSION]`

use regex::Regex;
use std::sync::LazyLock;

static RE_FROM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bfrom\b").unwrap());

/// Version the item was deprecated in, if the content names one.
pub fn parse_deprecated(content: &str) -> Option<String> {
    let content = content.trim();
    let version = match RE_FROM.find(content) {
        Some(m) => content[m.end()..].trim(),
        None => content,
    };
    (!version.is_empty()).then(|| version.to_string())
}
