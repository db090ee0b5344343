//! Docblock aggregator: two passes over a script's lines.
//!
//! The metadata pre-pass reads the leading comment run (shebang included)
//! and applies file-level tags to Docblock[0]. The body pass walks the whole
//! file, opening a Docblock per documented function and routing every tag
//! to the current one.

use crate::config::Config;
use crate::error::TagError;
use crate::model::Docblock;
use crate::parser::cursor::LineCursor;
use crate::parser::grammar::{self, shellcheck, Scope};
use crate::parser::line::{classify, LineKind};
use crate::parser::tag::{RawTag, TagKind};

// -- Parser state -------------------------------------------------------------

struct ParserState {
    blocks: Vec<Docblock>,
    max_docblocks: usize,
    /// Index into `blocks` receiving tags.
    current: usize,
    /// Tags seen since the last function declaration, blank or code line.
    in_docblock: bool,
    /// `current` was opened by the active tag run and awaits its declaration.
    pending: bool,
    /// First line index after the header comment run.
    header_end: usize,
    stopped: bool,
}

impl ParserState {
    fn new(file_name: &str, config: &Config) -> Self {
        ParserState {
            blocks: vec![Docblock::for_file(file_name)],
            max_docblocks: config.max_docblocks,
            current: 0,
            in_docblock: false,
            pending: false,
            header_end: 0,
            stopped: false,
        }
    }

    fn scope(&self) -> Scope {
        if self.current == 0 {
            Scope::File
        } else {
            Scope::Function
        }
    }

    /// Open a function Docblock. At capacity the scan stops instead.
    fn open_block(&mut self) -> bool {
        if self.blocks.len() >= self.max_docblocks {
            tracing::debug!(
                max_docblocks = self.max_docblocks,
                "docblock capacity reached, stopping scan"
            );
            self.stopped = true;
            return false;
        }
        self.blocks.push(Docblock::default());
        self.current = self.blocks.len() - 1;
        self.pending = true;
        true
    }

    fn end_docblock(&mut self) {
        self.in_docblock = false;
        self.pending = false;
    }
}

// -- Public API ---------------------------------------------------------------

/// Extract the Docblock sequence of one script.
///
/// The result always holds the file block at index 0, followed by one block
/// per function in source order.
pub fn parse(file_name: &str, lines: &[String], config: &Config) -> Vec<Docblock> {
    let mut state = ParserState::new(file_name, config);
    let mut cursor = LineCursor::new(lines);

    scan_metadata(&mut state, &mut cursor);

    cursor.rewind();
    while let Some((index, line)) = cursor.next_line() {
        process_line(&mut state, &mut cursor, index, line);
        if state.stopped {
            break;
        }
    }

    finalize(state.blocks)
}

// -- Metadata pre-pass --------------------------------------------------------

fn scan_metadata(s: &mut ParserState, cursor: &mut LineCursor<'_>) {
    while let Some((index, line)) = cursor.next_line() {
        match classify(line) {
            LineKind::Shebang(interpreter) => {
                if index == 0 {
                    s.blocks[0].interpreter = Some(interpreter.to_string());
                }
            }
            LineKind::Tag(raw) => {
                let Some(kind) = TagKind::from_name(raw.name) else {
                    continue;
                };
                if kind.is_file_level() {
                    apply_tag(&mut s.blocks[0], Scope::File, kind, raw, index, cursor);
                }
            }
            LineKind::Shellcheck(_) | LineKind::Comment(_) => {}
            LineKind::Function(_) | LineKind::Other => {
                s.header_end = index;
                return;
            }
        }
    }
    s.header_end = cursor.position();
}

// -- Body pass ----------------------------------------------------------------

fn process_line(s: &mut ParserState, cursor: &mut LineCursor<'_>, index: usize, line: &str) {
    match classify(line) {
        LineKind::Shellcheck(directive) => {
            if s.current != 0 {
                s.blocks[s.current]
                    .shellcheck
                    .push(shellcheck::parse_directive(directive));
            }
        }
        LineKind::Tag(raw) => process_tag(s, cursor, index, raw),
        LineKind::Function(name) => process_function(s, index, name),
        LineKind::Shebang(_) | LineKind::Comment(_) => {}
        LineKind::Other => s.end_docblock(),
    }
}

fn process_tag(s: &mut ParserState, cursor: &mut LineCursor<'_>, index: usize, raw: RawTag<'_>) {
    if !s.in_docblock {
        s.in_docblock = true;
        if precedes_function(cursor.remaining()) && !s.open_block() {
            return;
        }
    }

    let Some(kind) = TagKind::from_name(raw.name) else {
        let err = TagError::UnknownTag(raw.name.to_string());
        tracing::debug!(line = index + 1, %err, "dropped tag");
        return;
    };

    if kind == TagKind::Function {
        let value = match grammar::parse(kind, raw.content) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(line = index + 1, %err, "dropped tag");
                return;
            }
        };
        let reusable = s.pending && s.blocks[s.current].function_name.is_none();
        if !reusable && !s.open_block() {
            return;
        }
        value.apply(&mut s.blocks[s.current], Scope::Function);
        return;
    }

    // The pre-pass already gave the header's file-level tags to the file
    // block. Description, see and env may still describe a function the
    // header runs into; file-only kinds never do.
    if index < s.header_end
        && kind.is_file_level()
        && (s.current == 0 || kind.is_file_only())
    {
        return;
    }

    let scope = s.scope();
    apply_tag(&mut s.blocks[s.current], scope, kind, raw, index, cursor);
}

fn process_function(s: &mut ParserState, index: usize, name: &str) {
    let reuse = s.in_docblock && s.pending;
    if !reuse && !s.open_block() {
        return;
    }
    let block = &mut s.blocks[s.current];
    match block.function_name.as_deref() {
        None => block.function_name = Some(name.to_string()),
        Some(tagged) if tagged != name => {
            tracing::warn!(
                line = index + 1,
                declared = name,
                tagged,
                "function declaration does not match @function, keeping the tag's name"
            );
        }
        Some(_) => {}
    }
    s.end_docblock();
}

/// Parse one tag and write it into `block`, collecting continuation lines
/// for the multi-line kinds. Grammar failures drop the tag.
fn apply_tag(
    block: &mut Docblock,
    scope: Scope,
    kind: TagKind,
    raw: RawTag<'_>,
    index: usize,
    cursor: &mut LineCursor<'_>,
) {
    let content = if kind.collects_continuation() {
        cursor.collect_continuation(raw.content)
    } else {
        raw.content.to_string()
    };
    match grammar::parse(kind, &content) {
        Ok(value) => value.apply(block, scope),
        Err(err) => tracing::debug!(line = index + 1, %err, "dropped tag"),
    }
}

/// True when the comment run starting at `lines[0]` ends at a function
/// declaration.
fn precedes_function(lines: &[String]) -> bool {
    lines
        .iter()
        .map(|line| classify(line))
        .find(|kind| !kind.is_comment())
        .is_some_and(|kind| matches!(kind, LineKind::Function(_)))
}

// -- Finalize -----------------------------------------------------------------

fn finalize(mut blocks: Vec<Docblock>) -> Vec<Docblock> {
    let before = blocks.len();
    let mut index = 0;
    blocks.retain(|block| {
        index += 1;
        index == 1 || block.is_function()
    });
    if blocks.len() != before {
        tracing::debug!(dropped = before - blocks.len(), "dropped unnamed function blocks");
    }

    let file_description = blocks[0].description.clone();
    for block in blocks.iter_mut().skip(1) {
        if let Some(section) = block.section.as_mut() {
            if section.description.is_empty() {
                if let Some(desc) = &file_description {
                    section.description = desc.clone();
                }
            }
        }
    }
    blocks
}
