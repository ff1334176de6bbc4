//! Parser module — marker stripping, single blocks and whole sources.

pub mod block;
pub mod signature;

use crate::error::FormatError;
use crate::model::{DocComment, Document};

/// Comment marker used when none is configured.
pub const DEFAULT_MARKER: &str = "///";

/// Parse-time configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Line prefix stripped before classification, e.g. `///` or `#`
    pub marker: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl ParseOptions {
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Strip the marker (and one following space) from a comment line.
    ///
    /// Returns `None` for lines that do not carry the marker.
    fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.trim_start().strip_prefix(self.marker.as_str())?;
        Some(rest.strip_prefix(' ').unwrap_or(rest).trim_end())
    }
}

/// Parse a single comment block.
///
/// Lines carrying the marker have it stripped; lines without it are taken
/// as they are, so plain unprefixed text parses too. Whitespace-only lines
/// before the first comment line are ignored.
pub fn parse_block(text: &str, options: &ParseOptions) -> Result<DocComment, FormatError> {
    let text = strip_bom(text);
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .skip_while(|(_, line)| line.trim().is_empty())
        .map(|(i, line)| (i + 1, options.strip(line).unwrap_or(line)))
        .collect();
    block::parse_lines(&lines)
}

/// Scan a source text for docu comments.
///
/// Every run of consecutive marker lines is one block. The declaration
/// following a block (up to the first line containing `{` or `;`) is
/// attached to it when it parses as a function declaration.
pub fn parse_source(text: &str, options: &ParseOptions) -> Result<Document, FormatError> {
    let lines: Vec<&str> = strip_bom(text).lines().collect();
    let mut comments = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if options.strip(lines[i]).is_none() {
            i += 1;
            continue;
        }

        let mut block_lines: Vec<(usize, &str)> = Vec::new();
        while let Some(content) = lines.get(i).and_then(|l| options.strip(l)) {
            block_lines.push((i + 1, content));
            i += 1;
        }

        let mut comment = block::parse_lines(&block_lines)?;
        tracing::debug!(
            line = comment.line(),
            params = comment.params().len(),
            "parsed docu comment"
        );

        if let Some((decl_text, next)) = declaration_text(&lines, i, options) {
            match signature::parse(&decl_text) {
                Some(decl) => {
                    if decl.params.len() != comment.params().len() {
                        tracing::warn!(
                            function = %decl.name,
                            documented = comment.params().len(),
                            declared = decl.params.len(),
                            "documented parameters do not match the declaration"
                        );
                    }
                    for param in comment.params() {
                        if !decl.params.iter().any(|p| signature::param_name(p) == param.name) {
                            tracing::warn!(
                                function = %decl.name,
                                param = %param.name,
                                "documented parameter is not in the declaration"
                            );
                        }
                    }
                    comment = comment.with_declaration(decl);
                }
                None if signature::is_func_keyword(&decl_text) => {
                    tracing::warn!(line = i + 1, text = %decl_text, "unparseable function declaration");
                }
                None => {
                    tracing::debug!(line = i + 1, "comment is not followed by a function declaration");
                }
            }
            i = next;
        }

        comments.push(comment);
    }

    Ok(Document {
        title: None,
        comments,
    })
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Collect the declaration lines after a block starting at `start`.
///
/// Returns the joined text and the index of the line after it, or `None`
/// when another comment or the end of input comes first.
fn declaration_text(lines: &[&str], start: usize, options: &ParseOptions) -> Option<(String, usize)> {
    let mut parts: Vec<&str> = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(start) {
        if options.strip(line).is_some() {
            return None;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        parts.push(trimmed);
        if trimmed.contains('{') || trimmed.contains(';') {
            return Some((parts.join(" "), i + 1));
        }
    }
    None
}
