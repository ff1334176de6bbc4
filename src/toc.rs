//! Heading anchor slugs and index entries.
//!
//! Slugs follow the Python-Markdown `toc` extension used by MkDocs:
//! lowercase, drop everything but word characters, spaces and hyphens,
//! then turn runs of spaces/hyphens into a single hyphen. A slug already
//! used on the page gets `_1`, `_2`, ... appended.

use std::collections::HashSet;

/// Generate an index link to the anchor `slug`.
pub fn render_toc_link(text: &str, slug: &str) -> String {
    format!("[{}](#{})", text, slug)
}

/// Generate an index list item.
pub fn render_toc_item(title: &str, slug: &str) -> String {
    format!("* {}", render_toc_link(title, slug))
}

/// Page-unique anchor slugs for a sequence of headings, in order.
pub fn unique_slugs<I, S>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut used = HashSet::new();
    titles
        .into_iter()
        .map(|title| {
            let base = heading_slug(title.as_ref());
            let mut slug = base.clone();
            let mut n = 1;
            while slug.is_empty() || used.contains(&slug) {
                slug = format!("{}_{}", base, n);
                n += 1;
            }
            used.insert(slug.clone());
            slug
        })
        .collect()
}

/// Anchor slug of a heading.
pub fn heading_slug(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ' || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut pending_dash = false;
    for c in kept.trim().chars() {
        if c == ' ' || c == '-' {
            pending_dash = true;
            continue;
        }
        if pending_dash {
            slug.push('-');
            pending_dash = false;
        }
        slug.push(c);
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_keeps_underscores() {
        assert_eq!(heading_slug("Doc_Show"), "doc_show");
    }

    #[test]
    fn slug_strips_code_ticks() {
        assert_eq!(heading_slug("`Mdl_SetVisualBody`"), "mdl_setvisualbody");
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(heading_slug("Comment  1"), "comment-1");
        assert_eq!(heading_slug("a - b"), "a-b");
    }

    #[test]
    fn toc_link_function() {
        assert_eq!(render_toc_link("`Doc_Show`", "doc_show"), "[`Doc_Show`](#doc_show)");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("Comment 2", "comment-2"), "* [Comment 2](#comment-2)");
    }

    #[test]
    fn repeated_headings_get_suffixes() {
        assert_eq!(
            unique_slugs(["Foo", "Bar", "Foo", "`foo`"]),
            ["foo", "bar", "foo_1", "foo_2"]
        );
    }

    #[test]
    fn empty_slug_gets_suffix() {
        assert_eq!(unique_slugs(["???", "!!!"]), ["_1", "_2"]);
    }
}
