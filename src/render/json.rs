//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Document model directly via serde.

use crate::model::Document;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc).context("failed to serialize document")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_source, ParseOptions};
    use serde_json::Value;

    #[test]
    fn structure() {
        let input = "/// Shows a doc\n///\n/// @param docID manager ID\nfunc void Doc_Show(var int docID) {};\n\n/// Creates a map\n///\n/// @return the ID\n";
        let doc = parse_source(input, &ParseOptions::default()).unwrap();
        let out = JsonRenderer.render(&doc).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["title"], Value::Null);
        let comments = value["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 2);

        assert_eq!(comments[0]["description"], "Shows a doc");
        assert_eq!(comments[0]["params"][0]["name"], "docID");
        assert_eq!(comments[0]["params"][0]["description"], "manager ID");
        assert_eq!(comments[0]["return"], Value::Null);
        assert_eq!(comments[0]["declaration"]["name"], "Doc_Show");
        assert_eq!(comments[0]["declaration"]["params"][0], "var int docID");
        assert_eq!(comments[0]["line"], 1);

        assert_eq!(comments[1]["return"], "the ID");
        assert_eq!(comments[1]["declaration"], Value::Null);
    }
}
