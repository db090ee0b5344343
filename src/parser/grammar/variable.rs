//! `@set`, `@const` and `@env`.

use super::split_token;
use crate::error::TagError;
use crate::model::{EnvVar, SetVar};

/// `NAME=default` → `("NAME", Some("default"))`.
fn name_and_default(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, default)) => (name, Some(default)),
        None => (token, None),
    }
}

/// `@set NAME[=default] [TYPE [DESCRIPTION]]`
pub fn parse_set(content: &str, readonly: bool) -> Result<SetVar, TagError> {
    let label = if readonly { "const" } else { "set" };
    let (token, rest) = split_token(content);
    let (name, default_value) = name_and_default(token);
    if name.is_empty() {
        return Err(TagError::MissingName(label));
    }
    let (var_type, description) = split_token(rest);
    Ok(SetVar {
        name: name.to_string(),
        var_type: var_type.to_string(),
        default_value: default_value.map(str::to_string),
        description: description.trim_end().to_string(),
        is_readonly: readonly,
    })
}

/// `@env NAME[=default] DESCRIPTION`
pub fn parse_env(content: &str) -> Result<EnvVar, TagError> {
    let (token, description) = split_token(content);
    let (name, default_value) = name_and_default(token);
    if name.is_empty() {
        return Err(TagError::MissingName("env"));
    }
    Ok(EnvVar {
        name: name.to_string(),
        default_value: default_value.map(str::to_string),
        description: description.trim_end().to_string(),
    })
}
