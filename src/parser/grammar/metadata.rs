//! Identity tags: `@author`, `@function`, `@section`.

use super::split_token;
use crate::error::TagError;
use crate::model::Section;

/// `@author Jane Doe <jane@example.org>` → name and optional contact.
pub fn parse_author(content: &str) -> Result<(String, Option<String>), TagError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(TagError::EmptyContent("author"));
    }
    if let Some(open) = content.find('<') {
        if let Some(len) = content[open + 1..].find('>') {
            let contact = content[open + 1..open + 1 + len].trim();
            let name = content[..open].trim();
            if !name.is_empty() {
                return Ok((
                    name.to_string(),
                    (!contact.is_empty()).then(|| contact.to_string()),
                ));
            }
        }
    }
    Ok((content.to_string(), None))
}

/// `@function name` or `@function name()`.
pub fn parse_function_name(content: &str) -> Result<String, TagError> {
    let (token, _) = split_token(content);
    let name = token.strip_suffix("()").unwrap_or(token);
    if name.is_empty() {
        return Err(TagError::MissingName("function"));
    }
    Ok(name.to_string())
}

/// `@section NAME [DESCRIPTION]`
pub fn parse_section(content: &str) -> Result<Section, TagError> {
    let (name, description) = split_token(content);
    if name.is_empty() {
        return Err(TagError::MissingName("section"));
    }
    Ok(Section {
        name: name.to_string(),
        description: description.trim_end().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_with_contact() {
        let (name, contact) = parse_author("Jane Doe <jane@example.org>").unwrap();
        assert_eq!(name, "Jane Doe");
        assert_eq!(contact.as_deref(), Some("jane@example.org"));
    }

    #[test]
    fn author_plain() {
        assert_eq!(parse_author("Jane Doe").unwrap(), ("Jane Doe".to_string(), None));
        // nothing before the brackets: keep it all as the name
        assert_eq!(parse_author("<ops@example.org>").unwrap().0, "<ops@example.org>");
        assert_eq!(parse_author(""), Err(TagError::EmptyContent("author")));
    }

    #[test]
    fn function_name_strips_parens() {
        assert_eq!(parse_function_name("deploy()").unwrap(), "deploy");
        assert_eq!(parse_function_name("  deploy  ").unwrap(), "deploy");
        assert_eq!(parse_function_name("()"), Err(TagError::MissingName("function")));
    }

    #[test]
    fn section_name_and_description() {
        let section = parse_section("Networking Helpers for remote hosts").unwrap();
        assert_eq!(section.name, "Networking");
        assert_eq!(section.description, "Helpers for remote hosts");
        assert_eq!(parse_section("Utils").unwrap().description, "");
    }
}
