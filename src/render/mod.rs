//! Renderer module — trait-based format dispatch.

pub mod comment;
pub mod html;
pub mod json;
pub mod markdown;

use crate::model::{DocComment, Document};
use crate::parser::{signature, DEFAULT_MARKER};
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Render-time configuration shared by all formats.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Marker written by the `comment` format
    pub marker: String,
    /// Prepend an index of functions to markdown output
    pub index: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            index: false,
        }
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: &RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer { index: options.index })),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "comment" => Ok(Box::new(comment::CommentRenderer {
            marker: options.marker.clone(),
        })),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, json, or comment",
            format
        )),
    }
}

/// Display title of a comment: the declared function name, or a
/// positional fallback (`index` is 0-based).
pub fn comment_title(comment: &DocComment, index: usize) -> String {
    match comment.declaration() {
        Some(decl) => decl.name.clone(),
        None => format!("Comment {}", index + 1),
    }
}

/// Label shown for the parameter at `position`: the declared signature
/// parameter with the same name, else the one at the same position, else
/// the documented name.
pub fn param_label(comment: &DocComment, position: usize) -> &str {
    let param = &comment.params()[position];
    let Some(decl) = comment.declaration() else {
        return param.name.as_str();
    };
    decl.params
        .iter()
        .find(|p| signature::param_name(p) == param.name)
        .or_else(|| decl.params.get(position))
        .map_or(param.name.as_str(), String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_block, parse_source, ParseOptions};

    #[test]
    fn known_formats() {
        let opts = RenderOptions::default();
        assert_eq!(create_renderer("markdown", &opts).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("md", &opts).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("html", &opts).unwrap().file_extension(), "html");
        assert_eq!(create_renderer("json", &opts).unwrap().file_extension(), "json");
        assert_eq!(create_renderer("comment", &opts).unwrap().file_extension(), "txt");
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml", &RenderOptions::default()).err().unwrap();
        assert!(err.to_string().contains("unknown format: xml"));
    }

    #[test]
    fn title_falls_back_to_position() {
        let doc = parse_block("Desc\n\n", &ParseOptions::default()).unwrap();
        assert_eq!(comment_title(&doc, 2), "Comment 3");
    }

    #[test]
    fn param_label_prefers_signature() {
        let input = "/// Pair\n///\n/// @param a first\n/// @param b second\nfunc void Pair(var int a) {};\n";
        let doc = parse_source(input, &ParseOptions::default()).unwrap();
        let comment = &doc.comments[0];
        assert_eq!(comment_title(comment, 0), "Pair");
        assert_eq!(param_label(comment, 0), "var int a");
        assert_eq!(param_label(comment, 1), "b");
    }

    #[test]
    fn param_label_matches_by_name() {
        let input = "/// Swap\n///\n/// @param b second\n/// @param a first\nfunc void F(var int a, var string b) {};\n";
        let doc = parse_source(input, &ParseOptions::default()).unwrap();
        let comment = &doc.comments[0];
        assert_eq!(param_label(comment, 0), "var string b");
        assert_eq!(param_label(comment, 1), "var int a");
    }
}
