//! Tag extraction and the canonical tag vocabulary.
//!
//! Every tag name the engine understands maps to exactly one [`TagKind`];
//! the aggregator dispatches on the kind, never on raw strings.

use crate::model::{AlertKind, MetaField, Relation};
use crate::parser::line::is_tag_char;

/// `(name, content)` split out of a tag line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTag<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// Split a tag line at its first `@`.
///
/// The name runs until whitespace or `:`; the content is everything after
/// the name and an optional `:`, trimmed. Returns `None` without an `@` or
/// when the name is empty.
pub fn extract(line: &str) -> Option<RawTag<'_>> {
    let at = line.find('@')?;
    let after = &line[at + 1..];
    let name_end = after
        .find(|c: char| c.is_whitespace() || c == ':')
        .unwrap_or(after.len());
    let name = &after[..name_end];
    if name.is_empty() || !name.chars().all(is_tag_char) {
        return None;
    }
    let rest = &after[name_end..];
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    Some(RawTag {
        name,
        content: rest.trim(),
    })
}

/// Every recognised tag, grouped by what it does to a docblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Brief,
    Description,
    Author,
    Meta(MetaField),
    Skip,
    See,
    Env,
    Function,
    Alias,
    Section,
    /// `@arg` / `@argument`; option-shaped content goes to the option grammar
    Argument,
    Param,
    NoArgs,
    /// `@return` / `@returns`
    Return,
    Retval,
    ExitCode,
    Stdin,
    Stdout,
    Stderr,
    Option,
    /// `@set`, or `@const` when `readonly`
    Set { readonly: bool },
    Example,
    Internal,
    Deprecated,
    Replacement,
    Eol,
    Alert(AlertKind),
    Warn,
    Relation(Relation),
}

impl TagKind {
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "file" | "name" => TagKind::Meta(MetaField::FileName),
            "brief" => TagKind::Brief,
            "description" => TagKind::Description,
            "author" => TagKind::Author,
            "version" => TagKind::Meta(MetaField::Version),
            "since" => TagKind::Meta(MetaField::Since),
            "package" | "module" => TagKind::Meta(MetaField::Project),
            "link" | "repo" => TagKind::Meta(MetaField::Repository),
            "license" => TagKind::Meta(MetaField::License),
            "copyright" => TagKind::Meta(MetaField::Copyright),
            "skip" => TagKind::Skip,
            "see" => TagKind::See,
            "env" => TagKind::Env,
            "function" => TagKind::Function,
            "alias" => TagKind::Alias,
            "section" => TagKind::Section,
            "arg" | "argument" => TagKind::Argument,
            "param" => TagKind::Param,
            "noargs" => TagKind::NoArgs,
            "return" | "returns" => TagKind::Return,
            "retval" => TagKind::Retval,
            "exitcode" => TagKind::ExitCode,
            "stdin" => TagKind::Stdin,
            "stdout" => TagKind::Stdout,
            "stderr" => TagKind::Stderr,
            "option" => TagKind::Option,
            "set" => TagKind::Set { readonly: false },
            "const" => TagKind::Set { readonly: true },
            "example" => TagKind::Example,
            "internal" => TagKind::Internal,
            "deprecated" => TagKind::Deprecated,
            "replacement" => TagKind::Replacement,
            "eol" => TagKind::Eol,
            "note" | "tip" | "hint" | "important" | "warning" | "caution" | "info"
            | "danger" => TagKind::Alert(AlertKind::from_tag(name)),
            "warn" => TagKind::Warn,
            "dependency" => TagKind::Relation(Relation::Dependency),
            "internal-call" | "internal_call" => TagKind::Relation(Relation::InternalCall),
            "requires" => TagKind::Relation(Relation::Requires),
            "used-by" => TagKind::Relation(Relation::UsedBy),
            "calls" => TagKind::Relation(Relation::Calls),
            "provides" => TagKind::Relation(Relation::Provides),
            _ => return None,
        };
        Some(kind)
    }

    /// Tags the metadata pre-pass applies to the file block.
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            TagKind::Description
                | TagKind::Author
                | TagKind::Meta(_)
                | TagKind::Skip
                | TagKind::See
                | TagKind::Env
        )
    }

    /// File-level tags that never describe a function, even when written
    /// in a comment run that leads into one.
    pub fn is_file_only(&self) -> bool {
        matches!(self, TagKind::Author | TagKind::Meta(_) | TagKind::Skip)
    }

    /// Tags whose content continues over following plain comment lines.
    pub fn collects_continuation(&self) -> bool {
        matches!(self, TagKind::Description | TagKind::Stdout | TagKind::Example)
    }

    /// Static tag label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            TagKind::Brief => "brief",
            TagKind::Description => "description",
            TagKind::Author => "author",
            TagKind::Meta(MetaField::FileName) => "file",
            TagKind::Meta(MetaField::Version) => "version",
            TagKind::Meta(MetaField::Since) => "since",
            TagKind::Meta(MetaField::Project) => "package",
            TagKind::Meta(MetaField::Repository) => "repo",
            TagKind::Meta(MetaField::License) => "license",
            TagKind::Meta(MetaField::Copyright) => "copyright",
            TagKind::Skip => "skip",
            TagKind::See => "see",
            TagKind::Env => "env",
            TagKind::Function => "function",
            TagKind::Alias => "alias",
            TagKind::Section => "section",
            TagKind::Argument => "arg",
            TagKind::Param => "param",
            TagKind::NoArgs => "noargs",
            TagKind::Return => "return",
            TagKind::Retval => "retval",
            TagKind::ExitCode => "exitcode",
            TagKind::Stdin => "stdin",
            TagKind::Stdout => "stdout",
            TagKind::Stderr => "stderr",
            TagKind::Option => "option",
            TagKind::Set { readonly: false } => "set",
            TagKind::Set { readonly: true } => "const",
            TagKind::Example => "example",
            TagKind::Internal => "internal",
            TagKind::Deprecated => "deprecated",
            TagKind::Replacement => "replacement",
            TagKind::Eol => "eol",
            TagKind::Alert(_) => "alert",
            TagKind::Warn => "warn",
            TagKind::Relation(Relation::Dependency) => "dependency",
            TagKind::Relation(Relation::InternalCall) => "internal-call",
            TagKind::Relation(Relation::Requires) => "requires",
            TagKind::Relation(Relation::UsedBy) => "used-by",
            TagKind::Relation(Relation::Calls) => "calls",
            TagKind::Relation(Relation::Provides) => "provides",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_space_form() {
        let raw = extract("# @description   Does things  ").unwrap();
        assert_eq!(raw.name, "description");
        assert_eq!(raw.content, "Does things");
    }

    #[test]
    fn extract_colon_form() {
        let raw = extract("#@version: 1.2.3").unwrap();
        assert_eq!(raw, RawTag { name: "version", content: "1.2.3" });
        let raw = extract("# Released @version:2.0").unwrap();
        assert_eq!(raw.content, "2.0");
    }

    #[test]
    fn extract_bare_tag() {
        let raw = extract("  # @noargs").unwrap();
        assert_eq!(raw, RawTag { name: "noargs", content: "" });
    }

    #[test]
    fn extract_fails_without_at() {
        assert_eq!(extract("# nothing here"), None);
        assert_eq!(extract("# @ lonely"), None);
    }

    #[test]
    fn vocabulary() {
        assert_eq!(TagKind::from_name("argument"), Some(TagKind::Argument));
        assert_eq!(TagKind::from_name("returns"), Some(TagKind::Return));
        assert_eq!(TagKind::from_name("hint"), Some(TagKind::Alert(AlertKind::Tip)));
        assert_eq!(
            TagKind::from_name("used-by"),
            Some(TagKind::Relation(Relation::UsedBy))
        );
        assert_eq!(
            TagKind::from_name("module"),
            Some(TagKind::Meta(MetaField::Project))
        );
        assert_eq!(TagKind::from_name("frobnicate"), None);
    }

    #[test]
    fn file_and_name_set_the_file_name() {
        assert_eq!(TagKind::from_name("file"), Some(TagKind::Meta(MetaField::FileName)));
        assert_eq!(TagKind::from_name("name"), Some(TagKind::Meta(MetaField::FileName)));
    }

    #[test]
    fn file_only_set() {
        for name in ["file", "name", "version", "author", "license", "since", "repo", "skip"] {
            assert!(TagKind::from_name(name).unwrap().is_file_only(), "{name}");
        }
        for name in ["description", "see", "env", "brief"] {
            assert!(!TagKind::from_name(name).unwrap().is_file_only(), "{name}");
        }
    }

    #[test]
    fn file_level_set() {
        for name in [
            "file", "version", "author", "license", "copyright", "since", "description",
            "package", "module", "link", "repo", "see", "env", "skip",
        ] {
            assert!(TagKind::from_name(name).unwrap().is_file_level(), "{name}");
        }
        for name in ["brief", "function", "arg", "example", "note"] {
            assert!(!TagKind::from_name(name).unwrap().is_file_level(), "{name}");
        }
    }
}
