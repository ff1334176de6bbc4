//! Canonical docu comment renderer.
//!
//! Writes each comment back in its normalized source form, followed by
//! its declaration. Parsing the output again with the same marker gives
//! the same document.

use crate::model::{DocComment, Document};
use crate::render::Renderer;
use anyhow::Result;

pub struct CommentRenderer {
    pub marker: String,
}

impl Renderer for CommentRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let blocks: Vec<String> = doc
            .comments
            .iter()
            .map(|comment| self.render_comment(comment))
            .collect();
        Ok(blocks.join("\n"))
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

impl CommentRenderer {
    fn render_comment(&self, comment: &DocComment) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(self.line(comment.description()));
        lines.push(self.marker.clone());
        for param in comment.params() {
            lines.push(self.line(&format!("@param {} {}", param.name, param.description)));
        }
        if let Some(ret) = comment.return_description() {
            lines.push(self.line(&format!("@return {}", ret)));
        }
        if let Some(decl) = comment.declaration() {
            lines.push(decl.signature.clone());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn line(&self, text: &str) -> String {
        format!("{} {}", self.marker, text)
    }
}
