//! Single-block parser — classifies the marker-stripped lines of one
//! docu comment.
//!
//! Layout: description on the first line, at least one blank line, then
//! any mix of `@param` lines, at most one `@return` line, and blank lines.

use crate::error::FormatError;
use crate::model::{DocComment, Param};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@param(\s|$)").unwrap());

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@param\s+([A-Za-z_][A-Za-z0-9_]*)\s+(\S.*)$").unwrap());

static RE_RETURN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@return(\s|$)").unwrap());

static RE_RETURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@return\s+(\S.*)$").unwrap());

/// Classification of one line in the tag section.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Param { name: &'a str, description: &'a str },
    Return(&'a str),
    MalformedParam,
    MalformedReturn,
    Text,
}

fn classify(text: &str) -> LineKind<'_> {
    if text.is_empty() {
        return LineKind::Blank;
    }
    if RE_PARAM_TAG.is_match(text) {
        return match RE_PARAM.captures(text) {
            Some(caps) => LineKind::Param {
                name: caps.get(1).map_or("", |m| m.as_str()),
                description: caps.get(2).map_or("", |m| m.as_str().trim()),
            },
            None => LineKind::MalformedParam,
        };
    }
    if RE_RETURN_TAG.is_match(text) {
        return match RE_RETURN.captures(text) {
            Some(caps) => LineKind::Return(caps.get(1).map_or("", |m| m.as_str().trim())),
            None => LineKind::MalformedReturn,
        };
    }
    LineKind::Text
}

/// Parse one block of `(line number, stripped text)` pairs.
pub(crate) fn parse_lines(lines: &[(usize, &str)]) -> Result<DocComment, FormatError> {
    let mut iter = lines.iter().map(|(n, text)| (*n, text.trim()));

    // Description
    let (desc_line, description) = match iter.next() {
        Some((n, text)) if !text.is_empty() && !text.starts_with('@') => (n, text),
        Some((n, _)) => return Err(FormatError::MissingDescription { line: n }),
        None => return Err(FormatError::MissingDescription { line: 1 }),
    };

    // Separator
    match iter.next() {
        Some((_, "")) => {}
        Some((n, _)) => return Err(FormatError::MissingSeparator { line: n }),
        None => return Err(FormatError::MissingSeparator { line: desc_line }),
    }

    let mut params: Vec<Param> = Vec::new();
    let mut return_description: Option<(usize, String)> = None;

    for (n, text) in iter {
        match classify(text) {
            LineKind::Blank => {}
            LineKind::Param { name, description } => {
                if params.iter().any(|p| p.name == name) {
                    tracing::warn!(line = n, param = name, "parameter documented more than once");
                }
                params.push(Param {
                    name: name.to_string(),
                    description: description.to_string(),
                });
            }
            LineKind::Return(text) => {
                if let Some((first, _)) = return_description {
                    return Err(FormatError::DuplicateReturn { line: n, first });
                }
                return_description = Some((n, text.to_string()));
            }
            LineKind::MalformedParam => {
                return Err(FormatError::MalformedParam {
                    line: n,
                    text: text.to_string(),
                })
            }
            LineKind::MalformedReturn => {
                return Err(FormatError::MalformedReturn {
                    line: n,
                    text: text.to_string(),
                })
            }
            LineKind::Text => {
                return Err(FormatError::UnexpectedLine {
                    line: n,
                    text: text.to_string(),
                })
            }
        }
    }

    Ok(DocComment::new(
        description.to_string(),
        params,
        return_description.map(|(_, text)| text),
        desc_line,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(text: &str) -> Vec<(usize, &str)> {
        text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect()
    }

    #[test]
    fn classify_param() {
        assert_eq!(
            classify("@param docID document manager ID"),
            LineKind::Param {
                name: "docID",
                description: "document manager ID"
            }
        );
    }

    #[test]
    fn classify_param_without_description() {
        assert_eq!(classify("@param docID"), LineKind::MalformedParam);
        assert_eq!(classify("@param"), LineKind::MalformedParam);
        assert_eq!(classify("@param 1abc text"), LineKind::MalformedParam);
    }

    #[test]
    fn classify_return() {
        assert_eq!(classify("@return the ID"), LineKind::Return("the ID"));
        assert_eq!(classify("@return"), LineKind::MalformedReturn);
    }

    #[test]
    fn classify_lookalike_tags_are_text() {
        assert_eq!(classify("@parameter x y"), LineKind::Text);
        assert_eq!(classify("@returns x"), LineKind::Text);
    }

    #[test]
    fn description_and_separator_only() {
        let doc = parse_lines(&numbered("Show a document\n")).unwrap_err();
        assert_eq!(doc, FormatError::MissingSeparator { line: 1 });

        let doc = parse_lines(&numbered("Show a document\n\n")).unwrap();
        assert_eq!(doc.description(), "Show a document");
        assert!(doc.params().is_empty());
        assert!(doc.return_description().is_none());
        assert_eq!(doc.line(), 1);
    }

    #[test]
    fn empty_first_line_is_missing_description() {
        let err = parse_lines(&numbered("\nShow a document\n\n@return nothing")).unwrap_err();
        assert_eq!(err, FormatError::MissingDescription { line: 1 });
    }

    #[test]
    fn several_blank_separators() {
        let doc = parse_lines(&numbered("Desc\n\n\n@param a first\n\n@param b second")).unwrap();
        let names: Vec<_> = doc.params().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn param_after_return_is_kept_in_order() {
        let doc = parse_lines(&numbered("Desc\n\n@param a first\n@return r\n@param b second")).unwrap();
        assert_eq!(doc.params().len(), 2);
        assert_eq!(doc.params()[1].name, "b");
        assert_eq!(doc.return_description(), Some("r"));
    }

    #[test]
    fn tag_as_first_line_is_missing_description() {
        let err = parse_lines(&numbered("@param a first\n")).unwrap_err();
        assert_eq!(err, FormatError::MissingDescription { line: 1 });
    }

    #[test]
    fn empty_block_is_missing_description() {
        assert_eq!(
            parse_lines(&[]).unwrap_err(),
            FormatError::MissingDescription { line: 1 }
        );
        assert_eq!(
            parse_lines(&[(4, ""), (5, "   ")]).unwrap_err(),
            FormatError::MissingDescription { line: 4 }
        );
    }

    #[test]
    fn second_description_line_is_missing_separator() {
        let err = parse_lines(&numbered("Desc\nmore desc\n\n@return r")).unwrap_err();
        assert_eq!(err, FormatError::MissingSeparator { line: 2 });
    }

    #[test]
    fn free_text_in_tag_section() {
        let err = parse_lines(&numbered("Desc\n\nstray text")).unwrap_err();
        assert_eq!(
            err,
            FormatError::UnexpectedLine {
                line: 3,
                text: "stray text".to_string()
            }
        );
    }

    #[test]
    fn duplicate_param_names_are_accepted() {
        let doc = parse_lines(&numbered("Desc\n\n@param a one\n@param a two")).unwrap();
        assert_eq!(doc.params().len(), 2);
    }
}
