//! MkDocs-flavored markdown renderer.
//!
//! Each comment becomes a heading plus a `!!! function` admonition holding
//! the description, the declaration as a `dae` code block, the parameter
//! list and the return value. Admonition bodies are tab-indented.

use crate::model::{DocComment, Document};
use crate::render::{comment_title, param_label, Renderer};
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer {
    pub index: bool,
}

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.index && !doc.comments.is_empty() {
            output.push_str("## Index\n\n");
            let titles: Vec<String> = doc
                .comments
                .iter()
                .enumerate()
                .map(|(i, comment)| display_title(comment, i))
                .collect();
            for (title, slug) in titles.iter().zip(toc::unique_slugs(&titles)) {
                output.push_str(&toc::render_toc_item(title, &slug));
                output.push('\n');
            }
            output.push('\n');
        }

        let blocks: Vec<String> = doc
            .comments
            .iter()
            .enumerate()
            .map(|(i, comment)| render_comment(comment, i))
            .collect();
        output.push_str(&blocks.join("\n"));

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Heading text: function names are set as code.
fn display_title(comment: &DocComment, index: usize) -> String {
    match comment.declaration() {
        Some(decl) => format!("`{}`", decl.name),
        None => comment_title(comment, index),
    }
}

/// Render a single comment block.
fn render_comment(comment: &DocComment, index: usize) -> String {
    let title = display_title(comment, index);

    let mut md = String::with_capacity(128);
    md.push_str(&format!("### {}\n", title));
    md.push_str(&format!("!!! function \"{}\"\n", title));
    md.push_str(&format!("\t{}\n", comment.description()));

    if let Some(decl) = comment.declaration() {
        md.push_str(&format!("\t```dae\n\t{}\n\t```\n", decl.signature));
    }

    if !comment.params().is_empty() {
        md.push_str("\n\t**Parameters**  \n");
        for (i, param) in comment.params().iter().enumerate() {
            md.push_str(&format!(
                "\t- `#!dae {}` - {}\n",
                param_label(comment, i),
                param.description
            ));
        }
    }

    if let Some(ret) = comment.return_description() {
        md.push_str("\n\t**Return value**  \n");
        md.push_str(&format!("\t{}\n", ret));
    }

    md
}
