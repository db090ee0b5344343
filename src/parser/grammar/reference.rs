//! `@see`: a markdown link is external, anything else an internal reference.

use crate::error::TagError;
use crate::model::SeeAlso;

pub fn parse_see(content: &str) -> Result<SeeAlso, TagError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(TagError::EmptyContent("see"));
    }
    if let Some((name, url)) = markdown_link(content) {
        return Ok(SeeAlso {
            name: name.to_string(),
            url: Some(url.to_string()),
            is_internal: false,
        });
    }
    Ok(SeeAlso {
        name: content.to_string(),
        url: None,
        is_internal: true,
    })
}

/// `[name](url)`, using the first occurrence of each bracket.
fn markdown_link(s: &str) -> Option<(&str, &str)> {
    let open_name = s.find('[')?;
    let close_name = s.find(']')?;
    let open_url = s.find('(')?;
    let close_url = s.find(')')?;
    if !(open_name < close_name && close_name < open_url && open_url < close_url) {
        return None;
    }
    Some((
        s[open_name + 1..close_name].trim(),
        s[open_url + 1..close_url].trim(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_link() {
        let see = parse_see("[Bash manual](https://www.gnu.org/software/bash/manual/)").unwrap();
        assert_eq!(see.name, "Bash manual");
        assert_eq!(see.url.as_deref(), Some("https://www.gnu.org/software/bash/manual/"));
        assert!(!see.is_internal);
    }

    #[test]
    fn internal_reference() {
        let see = parse_see("other_function").unwrap();
        assert_eq!(see.name, "other_function");
        assert_eq!(see.url, None);
        assert!(see.is_internal);
    }

    #[test]
    fn out_of_order_brackets_stay_internal() {
        let see = parse_see("(not)[a link]").unwrap();
        assert!(see.is_internal);
        assert_eq!(parse_see(""), Err(TagError::EmptyContent("see")));
    }
}
