//! `@arg` and `@param` grammars.

use super::split_token;
use crate::error::TagError;
use crate::model::{Argument, Parameter};

/// `@arg NAME [TYPE [DESCRIPTION]]`
///
/// The type is only taken when a second token exists; everything after it
/// is the description.
pub fn parse_argument(content: &str) -> Result<Argument, TagError> {
    let (name, rest) = split_token(content);
    if name.is_empty() {
        return Err(TagError::MissingName("arg"));
    }
    let (arg_type, description) = split_token(rest);
    Ok(Argument {
        name: name.to_string(),
        arg_type: (!arg_type.is_empty()).then(|| arg_type.to_string()),
        description: description.trim_end().to_string(),
    })
}

/// `@param NAME [DESCRIPTION]`
pub fn parse_parameter(content: &str) -> Result<Parameter, TagError> {
    let (name, description) = split_token(content);
    if name.is_empty() {
        return Err(TagError::MissingName("param"));
    }
    Ok(Parameter {
        name: name.to_string(),
        description: description.trim_end().to_string(),
    })
}
