//! Data model for parsed docu comments — format-agnostic.

use serde::Serialize;

/// All docu comments found in a single input source.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// File stem in file mode, `None` for stdin
    pub title: Option<String>,
    pub comments: Vec<DocComment>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// One parsed docu comment.
///
/// Built once by the parser and read-only afterwards; renderers only see
/// it through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocComment {
    description: String,
    params: Vec<Param>,
    #[serde(rename = "return")]
    return_description: Option<String>,
    declaration: Option<Declaration>,
    line: usize,
}

impl DocComment {
    pub(crate) fn new(
        description: String,
        params: Vec<Param>,
        return_description: Option<String>,
        line: usize,
    ) -> Self {
        Self {
            description,
            params,
            return_description,
            declaration: None,
            line,
        }
    }

    pub(crate) fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declaration = Some(declaration);
        self
    }

    /// The single description line.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// `@param` entries in input order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Text of the `@return` line, if any.
    pub fn return_description(&self) -> Option<&str> {
        self.return_description.as_deref()
    }

    /// Function declaration following the comment (source scanning only).
    pub fn declaration(&self) -> Option<&Declaration> {
        self.declaration.as_ref()
    }

    /// 1-based line of the description in the parsed input.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Parsed `@param <name> <description>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub description: String,
}

/// Function declaration such as `func void Doc_Show(var int docID) {};`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Normalized declaration text, e.g. `func void Doc_Show(var int docID) {};`
    pub signature: String,
    pub name: String,
    pub return_type: String,
    /// Signature parameters as written, e.g. `var int docID`
    pub params: Vec<String>,
}
