//! Line classifier. Pure, per-line categorisation of shell source.

use crate::parser::tag::{self, RawTag};
use regex::Regex;
use std::sync::LazyLock;

// `function name() {`, `function name {`
static RE_FUNC_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:space:]]*function[[:space:]]+([A-Za-z0-9_]+)[[:space:]]*(\([^)]*\))?[[:space:]]*\{")
        .unwrap()
});

// `name() {`
static RE_FUNC_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:space:]]*([A-Za-z0-9_]+)[[:space:]]*\([^)]*\)[[:space:]]*\{").unwrap()
});

/// Category of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#!` at column 0, carrying the interpreter text
    Shebang(&'a str),
    /// `# shellcheck ...`, carrying the directive without `#`
    Shellcheck(&'a str),
    Tag(RawTag<'a>),
    /// Plain comment, carrying the text after `#` and whitespace
    Comment(&'a str),
    /// Function declaration, carrying the name
    Function(&'a str),
    /// Blank lines and ordinary code
    Other,
}

impl LineKind<'_> {
    /// Any `#` line, shebangs and directives included.
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            LineKind::Shebang(_) | LineKind::Shellcheck(_) | LineKind::Tag(_) | LineKind::Comment(_)
        )
    }
}

pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix("#!") {
        return LineKind::Shebang(rest.trim());
    }
    if let Some(body) = comment_body(line) {
        let text = body.trim_start();
        if is_shellcheck_text(text) {
            return LineKind::Shellcheck(text.trim_end());
        }
        if is_tag_body(body) {
            if let Some(raw) = tag::extract(line) {
                return LineKind::Tag(raw);
            }
        }
        return LineKind::Comment(text);
    }
    match function_name(line) {
        Some(name) => LineKind::Function(name),
        None => LineKind::Other,
    }
}

/// Text after the first `#` when the first non-whitespace character is `#`.
fn comment_body(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('#')
}

fn is_shellcheck_text(text: &str) -> bool {
    text.get(..10)
        .is_some_and(|head| head.eq_ignore_ascii_case("shellcheck"))
}

/// `# @name ...` (whitespace between `#` and `@`) or any comment where the
/// first `@name` token is immediately followed by `:`.
fn is_tag_body(body: &str) -> bool {
    let trimmed = body.trim_start();
    if trimmed.len() < body.len() {
        if let Some(after_at) = trimmed.strip_prefix('@') {
            if after_at.starts_with(is_tag_char) {
                return true;
            }
        }
    }
    let Some(at) = body.find('@') else {
        return false;
    };
    let after_at = &body[at + 1..];
    let name_len = after_at
        .find(|c: char| !is_tag_char(c))
        .unwrap_or(after_at.len());
    name_len > 0 && after_at[name_len..].starts_with(':')
}

pub(crate) fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Name of the function declared on this line, if any.
pub fn function_name(line: &str) -> Option<&str> {
    RE_FUNC_KEYWORD
        .captures(line)
        .or_else(|| RE_FUNC_BARE.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
