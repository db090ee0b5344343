//! Shellcheck directive records.

use crate::model::ShellcheckDirective;

/// Build a record from directive text such as
/// `shellcheck disable=SC2034 # assigned for callers`.
///
/// The code is the text after `disable=`/`enable=` up to whitespace or `#`;
/// the reason is whatever follows a later `#`. A directive naming no code
/// keeps its whole text as the code.
pub fn parse_directive(directive: &str) -> ShellcheckDirective {
    let directive = directive.trim();
    let code_start = ["disable=", "enable="]
        .iter()
        .filter_map(|key| directive.find(key).map(|at| at + key.len()))
        .min();

    let (code, reason) = match code_start {
        Some(start) => {
            let tail = &directive[start..];
            let end = tail
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(tail.len());
            let reason = tail[end..]
                .split_once('#')
                .map(|(_, r)| r.trim())
                .filter(|r| !r.is_empty());
            (&tail[..end], reason)
        }
        None => (directive, None),
    };

    ShellcheckDirective {
        code: code.to_string(),
        directive: directive.to_string(),
        reason: reason.map(str::to_string),
    }
}
