//! Function declaration parser for Daedalus externals.
//!
//! `func void Doc_Show(var int docID) {};` → name `Doc_Show`, return type
//! `void`, params `["var int docID"]`.

use crate::model::Declaration;
use regex::Regex;
use std::sync::LazyLock;

static RE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(func)\s+)?([A-Za-z_][A-Za-z0-9_]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)\)")
        .unwrap()
});

/// Leading keywords of non-function definitions that share the
/// `<word> <name>(...)` shape.
const DEFINITION_KEYWORDS: &[&str] = &["instance", "prototype", "class"];

/// Parse declaration text (possibly spanning several joined lines).
///
/// Returns `None` when the text is not a function declaration.
pub fn parse(text: &str) -> Option<Declaration> {
    let text = collapse_whitespace(text);
    let caps = RE_DECLARATION.captures(&text)?;

    let keyword = caps.get(1).is_some();
    if !keyword && DEFINITION_KEYWORDS.contains(&caps[2].to_ascii_lowercase().as_str()) {
        return None;
    }
    let return_type = caps[2].to_string();
    let name = caps[3].to_string();
    let params: Vec<String> = caps[4]
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    let signature = format!(
        "{}{} {}({}) {{}};",
        if keyword { "func " } else { "" },
        return_type,
        name,
        params.join(", ")
    );

    Some(Declaration {
        signature,
        name,
        return_type,
        params,
    })
}

/// Variable name of a signature parameter: `var int docID` → `docID`.
pub fn param_name(param: &str) -> &str {
    param.split_whitespace().last().unwrap_or(param)
}

/// Whether the text looks like it was meant to be a function declaration.
pub fn is_func_keyword(text: &str) -> bool {
    text.trim_start()
        .strip_prefix("func")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
