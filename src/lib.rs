//! docucomment — turn docu comments into Markdown, HTML or JSON.
//!
//! A docu comment is one description line, a blank line, any number of
//! `@param <name> <description>` lines and at most one
//! `@return <description>` line:
//!
//! ```text
//! /// Display the document using the document manager ID
//! ///
//! /// @param docID document manager ID
//! func void Doc_Show(var int docID) {};
//! ```
//!
//! [`parse_block`] parses a single comment; [`parse_source`] scans a whole
//! source text and attaches the function declaration that follows each
//! comment. Renderers live in [`render`].

pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod toc;

pub use error::FormatError;
pub use model::{Declaration, DocComment, Document, Param};
pub use parser::{parse_block, parse_source, ParseOptions, DEFAULT_MARKER};
pub use render::{create_renderer, RenderOptions, Renderer};

/// Parse `input` as a source text and render it in `format`.
pub fn convert(
    input: &str,
    format: &str,
    parse_options: &ParseOptions,
    render_options: &RenderOptions,
) -> anyhow::Result<String> {
    let renderer = create_renderer(format, render_options)?;
    let doc = parse_source(input, parse_options)?;
    renderer.render(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_to_markdown() {
        let out = convert(
            "/// Resets state\n///\nfunc void Reset() {};\n",
            "markdown",
            &ParseOptions::default(),
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(out.starts_with("### `Reset`\n"));
    }

    #[test]
    fn convert_reports_format_error() {
        let err = convert(
            "/// Resets state\n/// @return x\n",
            "markdown",
            &ParseOptions::default(),
            &RenderOptions::default(),
        )
        .unwrap_err();
        let format_error = err.downcast_ref::<FormatError>().unwrap();
        assert_eq!(format_error, &FormatError::MissingSeparator { line: 2 });
    }
}
