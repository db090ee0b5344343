//! `@option` grammar, also used by `@arg` when the first token is a flag.
//!
//! Accepted shapes:
//!
//! ```text
//! -v | verbose output
//! -o | --output <FILE> Write to FILE
//! --file=<PATH> input file
//! -n <COUNT> Repeat COUNT times
//! ```

use super::split_token;
use crate::error::TagError;
use crate::model::OptionEntry;

/// `@arg` content that should be treated as an option.
pub fn looks_like_option(content: &str) -> bool {
    split_token(content).0.starts_with('-')
}

pub fn parse_option(content: &str) -> Result<OptionEntry, TagError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(TagError::EmptyContent("option"));
    }

    let mut entry = OptionEntry::default();
    let flag_token;
    let mut counterpart = None;
    let mut description;

    if let Some((before, after)) = content.split_once('|') {
        flag_token = before.trim();
        let (first, rest) = split_token(after);
        if first.starts_with('-') {
            counterpart = Some(first);
            description = rest;
        } else if first.starts_with('<') {
            entry.arg_spec = angle_interior(first).map(str::to_string);
            description = rest;
        } else {
            description = after.trim();
        }
    } else {
        match content.split_once(' ') {
            Some((flag, rest)) => {
                flag_token = flag;
                description = rest.trim();
            }
            None => {
                flag_token = content;
                description = "";
            }
        }
    }

    let flag = flag_name(flag_token);
    assign_flag(&mut entry, flag).ok_or_else(|| TagError::InvalidOption(content.to_string()))?;
    if let Some(other) = counterpart {
        let other_flag = flag_name(other);
        // A second flag of the same width, or a bad one, is ignored.
        if is_long(other_flag) && entry.long_opt.is_none() {
            entry.long_opt = Some(other_flag.to_string());
        } else if is_short(other_flag) && entry.short_opt.is_none() {
            entry.short_opt = Some(other_flag.to_string());
        }
    }

    if entry.arg_spec.is_none() {
        entry.arg_spec = angle_interior(flag_token)
            .or_else(|| counterpart.and_then(angle_interior))
            .or_else(|| angle_interior(description))
            .map(str::to_string);
    }

    // `<ARG>` leading the description is the placeholder, not prose.
    let (first, rest) = split_token(description);
    if first.starts_with('<') && first.ends_with('>') {
        description = rest;
    }
    entry.description = description.to_string();
    Ok(entry)
}

fn assign_flag(entry: &mut OptionEntry, flag: &str) -> Option<()> {
    if is_long(flag) {
        entry.long_opt = Some(flag.to_string());
    } else if is_short(flag) {
        entry.short_opt = Some(flag.to_string());
    } else {
        return None;
    }
    Some(())
}

/// The flag without any `=<ARG>` or `<ARG>` suffix.
fn flag_name(token: &str) -> &str {
    let end = token
        .find(|c: char| c == '=' || c == '<' || c.is_whitespace())
        .unwrap_or(token.len());
    &token[..end]
}

fn is_long(flag: &str) -> bool {
    flag.strip_prefix("--")
        .is_some_and(|name| !name.is_empty() && !name.starts_with('-'))
}

fn is_short(flag: &str) -> bool {
    flag.strip_prefix('-')
        .is_some_and(|name| !name.is_empty() && !name.starts_with('-'))
}

/// Text between the first `<` and the following `>`, if non-empty.
fn angle_interior(s: &str) -> Option<&str> {
    let open = s.find('<')?;
    let close = s[open + 1..].find('>')? + open + 1;
    let inner = s[open + 1..close].trim();
    (!inner.is_empty()).then_some(inner)
}
