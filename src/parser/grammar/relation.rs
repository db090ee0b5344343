use super::required;
use crate::error::TagError;
use crate::parser::tag::TagKind;

/// Relationship tags take their content as-is; only emptiness is rejected.
pub fn parse_relation(kind: TagKind, content: &str) -> Result<String, TagError> {
    required(kind, content)
}
