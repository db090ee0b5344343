//! JSON output for a parsed file.
//!
//! Serializes the Docblock sequence as-is with serde; field names match the
//! model.

use crate::model::Docblock;
use serde::Serialize;

/// Top-level JSON document for one script.
#[derive(Debug, Serialize)]
pub struct FileDoc<'a> {
    pub file: &'a str,
    pub docblocks: Vec<&'a Docblock>,
}

impl<'a> FileDoc<'a> {
    /// Drop `@internal` function blocks unless `show_internal`. The file
    /// block always stays.
    pub fn new(file: &'a str, blocks: &'a [Docblock], show_internal: bool) -> Self {
        let docblocks = blocks
            .iter()
            .enumerate()
            .filter(|(index, block)| *index == 0 || show_internal || !block.is_internal)
            .map(|(_, block)| block)
            .collect();
        FileDoc { file, docblocks }
    }

    /// Document for an input marked with `@skip`.
    pub fn empty(file: &'a str) -> Self {
        FileDoc {
            file,
            docblocks: Vec::new(),
        }
    }
}

pub fn to_json(doc: &FileDoc<'_>) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}

/// Output file stem for a source path.
/// "lib/strings.sh" → "strings", "bin/deploy" → "deploy"
pub fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit('/').next().unwrap_or(source);
    filename
        .strip_suffix(".sh")
        .or_else(|| filename.strip_suffix(".bash"))
        .or_else(|| filename.strip_suffix(".zsh"))
        .unwrap_or(filename)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_from_shell_extensions() {
        assert_eq!(derive_output_name("lib/strings.sh"), "strings");
        assert_eq!(derive_output_name("deploy.bash"), "deploy");
        assert_eq!(derive_output_name("rc/prompt.zsh"), "prompt");
    }

    #[test]
    fn output_name_no_extension() {
        assert_eq!(derive_output_name("bin/deploy"), "deploy");
    }

    #[test]
    fn internal_functions_are_filtered() {
        let file = Docblock::for_file("a.sh");
        let public = Docblock {
            function_name: Some("pub_fn".into()),
            ..Default::default()
        };
        let hidden = Docblock {
            function_name: Some("_hidden".into()),
            is_internal: true,
            ..Default::default()
        };
        let blocks = vec![file, public, hidden];

        let doc = FileDoc::new("a.sh", &blocks, false);
        assert_eq!(doc.docblocks.len(), 2);
        let doc = FileDoc::new("a.sh", &blocks, true);
        assert_eq!(doc.docblocks.len(), 3);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        let json = to_json(&FileDoc::empty("<stdin>")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "<stdin>");
        assert_eq!(value["docblocks"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn json_shape() {
        let mut file = Docblock::for_file("a.sh");
        file.brief = Some("Tools".into());
        let blocks = vec![file];
        let json = to_json(&FileDoc::new("a.sh", &blocks, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "a.sh");
        assert_eq!(value["docblocks"][0]["brief"], "Tools");
        assert_eq!(value["docblocks"][0]["function_name"], serde_json::Value::Null);
        assert_eq!(value["docblocks"][0]["deprecation"]["is_deprecated"], false);
    }
}
