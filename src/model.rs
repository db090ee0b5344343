//! Data model for extracted documentation, one `Docblock` per file or function.
//!
//! `Docblock` index 0 always describes the file itself; every later entry
//! describes one function in source order. The renderer only ever sees
//! these records read-only.

use serde::Serialize;

/// Separator placed between bodies of repeated `@example` tags.
pub const EXAMPLE_SEPARATOR: &str = "\n\n";

/// A single documentation unit: the file (index 0) or one function.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Docblock {
    // File metadata (meaningful on index 0 only)
    pub file_name: Option<String>,
    pub brief: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub author_contact: Option<String>,
    pub since: Option<String>,
    pub project: Option<String>,
    pub repository: Option<String>,
    pub license: Option<String>,
    pub copyright: Option<String>,
    /// From the `#!` line
    pub interpreter: Option<String>,

    // Function identity
    pub function_name: Option<String>,
    pub function_brief: Option<String>,
    pub function_description: Option<String>,
    pub alias: Option<String>,
    pub section: Option<Section>,

    // Parameters
    pub arguments: Vec<Argument>,
    pub params: Vec<Parameter>,
    pub no_args: bool,

    // Contract
    pub return_desc: Option<String>,
    pub returns: Vec<ReturnValue>,
    pub stdin_doc: Option<String>,
    pub stdout_doc: Option<String>,
    pub stderr_doc: Option<String>,
    pub exit_codes: Vec<ExitCode>,

    pub options: Vec<OptionEntry>,

    pub env_vars: Vec<EnvVar>,
    pub set_vars: Vec<SetVar>,

    // Narrative
    /// Bodies of every `@example`, joined by [`EXAMPLE_SEPARATOR`]
    pub example: Option<String>,
    pub alerts: Vec<Alert>,
    pub warnings: Vec<String>,

    // Relationships
    pub dependencies: Vec<String>,
    pub internal_calls: Vec<String>,
    pub requires: Vec<String>,
    pub used_by: Vec<String>,
    pub calls: Vec<String>,
    pub provides: Vec<String>,
    pub see_also: Vec<SeeAlso>,

    pub is_internal: bool,
    /// `@skip`: the whole file is excluded from documentation
    pub is_skipped: bool,
    pub deprecation: Deprecation,

    /// Collected in source order, duplicates included
    pub shellcheck: Vec<ShellcheckDirective>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub description: String,
}

/// `@arg` / `@argument` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: String,
    pub arg_type: Option<String>,
    pub description: String,
}

/// `@param` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
}

/// `@retval` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnValue {
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitCode {
    /// Kept verbatim, not required to be numeric
    pub code: String,
    pub description: String,
}

/// Parsed `@option` entry. At least one of the two flags is set.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub short_opt: Option<String>,
    pub long_opt: Option<String>,
    /// Interior of `<...>`, e.g. `FILE`
    pub arg_spec: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub name: String,
    pub default_value: Option<String>,
    pub description: String,
}

/// Variable assigned by the function (`@set` / `@const`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetVar {
    pub name: String,
    pub var_type: String,
    pub default_value: Option<String>,
    pub description: String,
    pub is_readonly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeeAlso {
    pub name: String,
    pub url: Option<String>,
    /// True for bare references to something in the same docs
    pub is_internal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
    Info,
    Danger,
}

impl AlertKind {
    /// Map an alert tag name to its kind. `hint` is a tip; anything unknown is a note.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "tip" | "hint" => AlertKind::Tip,
            "important" => AlertKind::Important,
            "warning" => AlertKind::Warning,
            "caution" => AlertKind::Caution,
            "info" => AlertKind::Info,
            "danger" => AlertKind::Danger,
            _ => AlertKind::Note,
        }
    }

    /// Uppercase code used by renderers (`NOTE`, `TIP`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Note => "NOTE",
            AlertKind::Tip => "TIP",
            AlertKind::Important => "IMPORTANT",
            AlertKind::Warning => "WARNING",
            AlertKind::Caution => "CAUTION",
            AlertKind::Info => "INFO",
            AlertKind::Danger => "DANGER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub content: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Deprecation {
    pub is_deprecated: bool,
    pub version: Option<String>,
    pub replacement: Option<String>,
    pub eol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellcheckDirective {
    /// e.g. `SC2034`, or the whole directive when it names no code
    pub code: String,
    /// Directive text without the leading `#`
    pub directive: String,
    pub reason: Option<String>,
}

/// The six append-only relationship lists of a docblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Dependency,
    InternalCall,
    Requires,
    UsedBy,
    Calls,
    Provides,
}

/// Scalar file metadata fields set by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    FileName,
    Version,
    Since,
    Project,
    Repository,
    License,
    Copyright,
}

impl Docblock {
    /// A fresh file-level docblock for `file_name`.
    pub fn for_file(file_name: &str) -> Self {
        Docblock {
            file_name: Some(file_name.to_string()),
            ..Default::default()
        }
    }

    pub fn relation_mut(&mut self, relation: Relation) -> &mut Vec<String> {
        match relation {
            Relation::Dependency => &mut self.dependencies,
            Relation::InternalCall => &mut self.internal_calls,
            Relation::Requires => &mut self.requires,
            Relation::UsedBy => &mut self.used_by,
            Relation::Calls => &mut self.calls,
            Relation::Provides => &mut self.provides,
        }
    }

    pub fn meta_mut(&mut self, field: MetaField) -> &mut Option<String> {
        match field {
            MetaField::FileName => &mut self.file_name,
            MetaField::Version => &mut self.version,
            MetaField::Since => &mut self.since,
            MetaField::Project => &mut self.project,
            MetaField::Repository => &mut self.repository,
            MetaField::License => &mut self.license,
            MetaField::Copyright => &mut self.copyright,
        }
    }

    /// Append an example body, separating it from earlier ones.
    pub fn push_example(&mut self, body: &str) {
        match self.example {
            Some(ref mut ex) => {
                ex.push_str(EXAMPLE_SEPARATOR);
                ex.push_str(body);
            }
            None => self.example = Some(body.to_string()),
        }
    }

    pub fn has_multiple_examples(&self) -> bool {
        self.example
            .as_deref()
            .is_some_and(|ex| ex.contains(EXAMPLE_SEPARATOR))
    }

    /// Example bodies, split lazily on the separator. Empty pieces are dropped.
    pub fn examples(&self) -> Vec<&str> {
        match self.example.as_deref() {
            Some(ex) => ex
                .split(EXAMPLE_SEPARATOR)
                .filter(|piece| !piece.trim().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Shellcheck directives with later repeats of the same code removed.
    pub fn unique_shellcheck(&self) -> Vec<&ShellcheckDirective> {
        let mut seen: Vec<&str> = Vec::new();
        let mut out = Vec::new();
        for directive in &self.shellcheck {
            if !seen.contains(&directive.code.as_str()) {
                seen.push(&directive.code);
                out.push(directive);
            }
        }
        out
    }

    pub fn is_function(&self) -> bool {
        self.function_name.is_some()
    }
}

/// Append `text` to a cumulative field with a newline separator.
pub(crate) fn append_line(field: &mut Option<String>, text: &str) {
    match field {
        Some(existing) => {
            existing.push('\n');
            existing.push_str(text);
        }
        None => *field = Some(text.to_string()),
    }
}

/// True when the file-level block asks for the whole file to be skipped.
pub fn should_skip(blocks: &[Docblock]) -> bool {
    blocks.first().is_some_and(|file| file.is_skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_example_is_not_multiple() {
        let mut block = Docblock::default();
        block.push_example("foo --bar");
        assert!(!block.has_multiple_examples());
        assert_eq!(block.examples(), vec!["foo --bar"]);
    }

    #[test]
    fn repeated_examples_are_joined() {
        let mut block = Docblock::default();
        block.push_example("first");
        block.push_example("second\n  indented");
        assert_eq!(block.example.as_deref(), Some("first\n\nsecond\n  indented"));
        assert!(block.has_multiple_examples());
        assert_eq!(block.examples(), vec!["first", "second\n  indented"]);
    }

    #[test]
    fn shellcheck_dedup_keeps_first_per_code() {
        let mut block = Docblock::default();
        for (code, reason) in [("SC2034", Some("unused")), ("SC2154", None), ("SC2034", None)] {
            block.shellcheck.push(ShellcheckDirective {
                code: code.to_string(),
                directive: format!("shellcheck disable={}", code),
                reason: reason.map(str::to_string),
            });
        }
        let unique = block.unique_shellcheck();
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].reason.as_deref(), Some("unused"));
        assert_eq!(unique[1].code, "SC2154");
        // collection itself keeps duplicates
        assert_eq!(block.shellcheck.len(), 3);
    }

    #[test]
    fn alert_kinds() {
        assert_eq!(AlertKind::from_tag("hint"), AlertKind::Tip);
        assert_eq!(AlertKind::from_tag("danger").as_str(), "DANGER");
        assert_eq!(AlertKind::from_tag("whatever"), AlertKind::Note);
    }

    #[test]
    fn skip_reads_only_first_block() {
        let mut file = Docblock::for_file("a.sh");
        assert!(!should_skip(std::slice::from_ref(&file)));
        file.is_skipped = true;
        let func = Docblock::default();
        assert!(should_skip(&[file, func]));
        assert!(!should_skip(&[]));
    }

    #[test]
    fn relation_lists_are_independent() {
        let mut block = Docblock::default();
        block.relation_mut(Relation::Calls).push("curl".into());
        block.relation_mut(Relation::Requires).push("bash>=4".into());
        assert_eq!(block.calls, vec!["curl".to_string()]);
        assert_eq!(block.requires, vec!["bash>=4".to_string()]);
        assert!(block.dependencies.is_empty());
    }
}
