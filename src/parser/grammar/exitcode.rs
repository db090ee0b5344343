//! `@exitcode` and `@retval`: a leading value and the description after it.

use super::split_token;
use crate::error::TagError;
use crate::model::{ExitCode, ReturnValue};

fn value_and_description(
    label: &'static str,
    content: &str,
) -> Result<(String, String), TagError> {
    let (value, description) = split_token(content);
    if value.is_empty() {
        return Err(TagError::EmptyContent(label));
    }
    Ok((value.to_string(), description.trim_end().to_string()))
}

pub fn parse_exitcode(content: &str) -> Result<ExitCode, TagError> {
    let (code, description) = value_and_description("exitcode", content)?;
    Ok(ExitCode { code, description })
}

pub fn parse_retval(content: &str) -> Result<ReturnValue, TagError> {
    let (value, description) = value_and_description("retval", content)?;
    Ok(ReturnValue { value, description })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_keeps_code_verbatim() {
        let code = parse_exitcode("0 If successful").unwrap();
        assert_eq!(code.code, "0");
        assert_eq!(code.description, "If successful");

        let code = parse_exitcode(">1 On any failure").unwrap();
        assert_eq!(code.code, ">1");
    }

    #[test]
    fn code_without_description() {
        let code = parse_exitcode("127").unwrap();
        assert_eq!(code.description, "");
    }

    #[test]
    fn retval() {
        let ret = parse_retval("true When the file exists").unwrap();
        assert_eq!(ret.value, "true");
        assert_eq!(ret.description, "When the file exists");
        assert_eq!(parse_retval(""), Err(TagError::EmptyContent("retval")));
    }
}
