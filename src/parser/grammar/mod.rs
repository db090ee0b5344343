//! Tag grammars: turn raw tag content into typed values.
//!
//! [`parse`] is the single dispatch point: given a [`TagKind`] and the tag's
//! content it returns a [`TagValue`], which [`TagValue::apply`] then writes
//! into a docblock. A grammar failure drops only that tag.

pub mod alert;
pub mod argument;
pub mod deprecation;
pub mod exitcode;
pub mod metadata;
pub mod option;
pub mod reference;
pub mod relation;
pub mod shellcheck;
pub mod variable;

use crate::error::TagError;
use crate::model::*;
use crate::parser::tag::TagKind;

/// Which half of the docblock `@brief`/`@description` land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    File,
    Function,
}

/// A parsed tag, ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Brief(String),
    Description(String),
    Author {
        name: String,
        contact: Option<String>,
    },
    Meta(MetaField, String),
    Skip,
    See(SeeAlso),
    Env(EnvVar),
    FunctionName(String),
    Alias(String),
    Section(Section),
    Argument(Argument),
    Parameter(Parameter),
    Option(OptionEntry),
    NoArgs,
    Return(String),
    Retval(ReturnValue),
    ExitCode(ExitCode),
    Stdin(String),
    Stdout(String),
    Stderr(String),
    SetVar(SetVar),
    Example(String),
    Internal,
    Deprecated(Option<String>),
    Replacement(String),
    Eol(String),
    Alert(Alert),
    Warning(String),
    Relation(Relation, String),
}

pub fn parse(kind: TagKind, content: &str) -> Result<TagValue, TagError> {
    let value = match kind {
        TagKind::Brief => TagValue::Brief(content.to_string()),
        TagKind::Description => TagValue::Description(content.to_string()),
        TagKind::Author => {
            let (name, contact) = metadata::parse_author(content)?;
            TagValue::Author { name, contact }
        }
        TagKind::Meta(field) => TagValue::Meta(field, required(kind, content)?),
        TagKind::Skip => TagValue::Skip,
        TagKind::See => TagValue::See(reference::parse_see(content)?),
        TagKind::Env => TagValue::Env(variable::parse_env(content)?),
        TagKind::Function => TagValue::FunctionName(metadata::parse_function_name(content)?),
        TagKind::Alias => TagValue::Alias(required(kind, content)?),
        TagKind::Section => TagValue::Section(metadata::parse_section(content)?),
        TagKind::Argument => {
            if option::looks_like_option(content) {
                TagValue::Option(option::parse_option(content)?)
            } else {
                TagValue::Argument(argument::parse_argument(content)?)
            }
        }
        TagKind::Param => TagValue::Parameter(argument::parse_parameter(content)?),
        TagKind::Option => TagValue::Option(option::parse_option(content)?),
        TagKind::NoArgs => TagValue::NoArgs,
        TagKind::Return => TagValue::Return(content.to_string()),
        TagKind::Retval => TagValue::Retval(exitcode::parse_retval(content)?),
        TagKind::ExitCode => TagValue::ExitCode(exitcode::parse_exitcode(content)?),
        TagKind::Stdin => TagValue::Stdin(content.to_string()),
        TagKind::Stdout => TagValue::Stdout(content.to_string()),
        TagKind::Stderr => TagValue::Stderr(content.to_string()),
        TagKind::Set { readonly } => TagValue::SetVar(variable::parse_set(content, readonly)?),
        TagKind::Example => TagValue::Example(content.to_string()),
        TagKind::Internal => TagValue::Internal,
        TagKind::Deprecated => TagValue::Deprecated(deprecation::parse_deprecated(content)),
        TagKind::Replacement => TagValue::Replacement(required(kind, content)?),
        TagKind::Eol => TagValue::Eol(required(kind, content)?),
        TagKind::Alert(alert_kind) => TagValue::Alert(alert::parse_alert(alert_kind, content)),
        TagKind::Warn => TagValue::Warning(required(kind, content)?),
        TagKind::Relation(relation) => {
            TagValue::Relation(relation, relation::parse_relation(kind, content)?)
        }
    };
    Ok(value)
}

/// Content that must be non-empty, trimmed.
pub(crate) fn required(kind: TagKind, content: &str) -> Result<String, TagError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(TagError::EmptyContent(kind.label()));
    }
    Ok(content.to_string())
}

/// Split off the first whitespace-delimited token; the rest is left-trimmed.
pub(crate) fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim_start()),
        None => (s, ""),
    }
}

impl TagValue {
    /// Write this value into `block`. List kinds append; scalars overwrite,
    /// except descriptions, which accumulate line by line.
    pub fn apply(self, block: &mut Docblock, scope: Scope) {
        match self {
            TagValue::Brief(text) => match scope {
                Scope::File => block.brief = Some(text),
                Scope::Function => block.function_brief = Some(text),
            },
            TagValue::Description(text) => match scope {
                Scope::File => append_line(&mut block.description, &text),
                Scope::Function => append_line(&mut block.function_description, &text),
            },
            TagValue::Author { name, contact } => {
                block.author = Some(name);
                if contact.is_some() {
                    block.author_contact = contact;
                }
            }
            TagValue::Meta(field, text) => *block.meta_mut(field) = Some(text),
            TagValue::Skip => block.is_skipped = true,
            TagValue::See(see) => block.see_also.push(see),
            TagValue::Env(var) => block.env_vars.push(var),
            TagValue::FunctionName(name) => block.function_name = Some(name),
            TagValue::Alias(alias) => block.alias = Some(alias),
            TagValue::Section(section) => block.section = Some(section),
            TagValue::Argument(arg) => block.arguments.push(arg),
            TagValue::Parameter(param) => block.params.push(param),
            TagValue::Option(opt) => block.options.push(opt),
            TagValue::NoArgs => block.no_args = true,
            TagValue::Return(text) => block.return_desc = Some(text),
            TagValue::Retval(ret) => block.returns.push(ret),
            TagValue::ExitCode(code) => block.exit_codes.push(code),
            TagValue::Stdin(text) => block.stdin_doc = Some(text),
            TagValue::Stdout(text) => block.stdout_doc = Some(text),
            TagValue::Stderr(text) => block.stderr_doc = Some(text),
            TagValue::SetVar(var) => block.set_vars.push(var),
            TagValue::Example(body) => block.push_example(&body),
            TagValue::Internal => block.is_internal = true,
            TagValue::Deprecated(version) => {
                block.deprecation.is_deprecated = true;
                if version.is_some() {
                    block.deprecation.version = version;
                }
            }
            TagValue::Replacement(text) => block.deprecation.replacement = Some(text),
            TagValue::Eol(text) => block.deprecation.eol = Some(text),
            TagValue::Alert(alert) => block.alerts.push(alert),
            TagValue::Warning(text) => block.warnings.push(text),
            TagValue::Relation(relation, text) => block.relation_mut(relation).push(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(block: &mut Docblock, tag: &str, content: &str, scope: Scope) -> Result<(), TagError> {
        let kind = TagKind::from_name(tag).ok_or_else(|| TagError::UnknownTag(tag.into()))?;
        parse(kind, content)?.apply(block, scope);
        Ok(())
    }

    #[test]
    fn brief_and_description_follow_scope() {
        let mut block = Docblock::default();
        apply(&mut block, "brief", "File brief", Scope::File).unwrap();
        apply(&mut block, "brief", "Func brief", Scope::Function).unwrap();
        apply(&mut block, "description", "one", Scope::Function).unwrap();
        apply(&mut block, "description", "two", Scope::Function).unwrap();
        assert_eq!(block.brief.as_deref(), Some("File brief"));
        assert_eq!(block.function_brief.as_deref(), Some("Func brief"));
        assert_eq!(block.function_description.as_deref(), Some("one\ntwo"));
        assert_eq!(block.description, None);
    }

    #[test]
    fn scalars_overwrite() {
        let mut block = Docblock::default();
        for (tag, first, second) in [
            ("alias", "a1", "a2"),
            ("return", "r1", "r2"),
            ("stdin", "i1", "i2"),
            ("stderr", "e1", "e2"),
            ("replacement", "new1", "new2"),
            ("eol", "2024", "2025"),
            ("version", "1.0", "1.1"),
        ] {
            apply(&mut block, tag, first, Scope::Function).unwrap();
            apply(&mut block, tag, second, Scope::Function).unwrap();
        }
        assert_eq!(block.alias.as_deref(), Some("a2"));
        assert_eq!(block.return_desc.as_deref(), Some("r2"));
        assert_eq!(block.stdin_doc.as_deref(), Some("i2"));
        assert_eq!(block.stderr_doc.as_deref(), Some("e2"));
        assert_eq!(block.deprecation.replacement.as_deref(), Some("new2"));
        assert_eq!(block.deprecation.eol.as_deref(), Some("2025"));
        assert_eq!(block.version.as_deref(), Some("1.1"));
    }

    #[test]
    fn empty_required_content_is_dropped() {
        let mut block = Docblock::default();
        for tag in ["alias", "replacement", "eol", "dependency", "file", "arg", "exitcode"] {
            assert!(apply(&mut block, tag, "  ", Scope::Function).is_err(), "{tag}");
        }
        assert_eq!(block, Docblock::default());
    }

    #[test]
    fn file_and_function_names() {
        let mut block = Docblock::default();
        apply(&mut block, "name", "lib.sh", Scope::File).unwrap();
        apply(&mut block, "function", "deploy()", Scope::Function).unwrap();
        assert_eq!(block.file_name.as_deref(), Some("lib.sh"));
        assert_eq!(block.function_name.as_deref(), Some("deploy"));
        assert!(apply(&mut block, "function", "()", Scope::Function).is_err());
    }

    #[test]
    fn arg_with_flag_becomes_option() {
        let mut block = Docblock::default();
        apply(&mut block, "arg", "-f | --force Overwrite files", Scope::Function).unwrap();
        apply(&mut block, "arg", "$1 string Target", Scope::Function).unwrap();
        assert_eq!(block.options.len(), 1);
        assert_eq!(block.options[0].long_opt.as_deref(), Some("--force"));
        assert_eq!(block.arguments.len(), 1);
    }

    #[test]
    fn deprecated_keeps_earlier_version() {
        let mut block = Docblock::default();
        apply(&mut block, "deprecated", "from 2.1", Scope::Function).unwrap();
        apply(&mut block, "deprecated", "", Scope::Function).unwrap();
        assert!(block.deprecation.is_deprecated);
        assert_eq!(block.deprecation.version.as_deref(), Some("2.1"));
    }

    #[test]
    fn alerts_accumulate() {
        let mut block = Docblock::default();
        apply(&mut block, "note", "first", Scope::Function).unwrap();
        apply(&mut block, "hint", "second", Scope::Function).unwrap();
        apply(&mut block, "warn", "careful", Scope::Function).unwrap();
        assert_eq!(block.alerts.len(), 2);
        assert_eq!(block.alerts[1].kind, AlertKind::Tip);
        assert_eq!(block.warnings, vec!["careful".to_string()]);
    }

    #[test]
    fn split_token_basics() {
        assert_eq!(split_token("  one two  three"), ("one", "two  three"));
        assert_eq!(split_token("solo"), ("solo", ""));
        assert_eq!(split_token(""), ("", ""));
    }
}
