//! HTML renderer — standalone HTML page with semantic markup.

use crate::model::{DocComment, Document};
use crate::render::{comment_title, param_label, Renderer};
use crate::toc;
use anyhow::Result;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let Some(ref title) = doc.title {
            out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        if let Some(ref title) = doc.title {
            out.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
        }

        let titles: Vec<String> = doc
            .comments
            .iter()
            .enumerate()
            .map(|(i, comment)| comment_title(comment, i))
            .collect();
        let slugs = toc::unique_slugs(&titles);

        // Index
        if !doc.comments.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for (title, slug) in titles.iter().zip(&slugs) {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(slug),
                    html_escape(title)
                ));
            }
            out.push_str("</ul>\n");
        }

        for ((comment, title), slug) in doc.comments.iter().zip(&titles).zip(&slugs) {
            out.push_str(&render_comment_html(comment, title, slug));
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_comment_html(comment: &DocComment, title: &str, slug: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h3 id=\"{}\">{}</h3>\n",
        html_escape(slug),
        html_escape(title)
    ));

    out.push_str(&format!("<p>{}</p>\n", html_escape(comment.description())));

    if let Some(decl) = comment.declaration() {
        out.push_str(&format!(
            "<pre><code class=\"language-dae\">{}</code></pre>\n",
            html_escape(&decl.signature)
        ));
    }

    if !comment.params().is_empty() {
        out.push_str("<h4>Parameters</h4>\n<dl>\n");
        for (i, param) in comment.params().iter().enumerate() {
            out.push_str(&format!(
                "  <dt><code>{}</code></dt>\n  <dd>{}</dd>\n",
                html_escape(param_label(comment, i)),
                html_escape(&param.description)
            ));
        }
        out.push_str("</dl>\n");
    }

    if let Some(ret) = comment.return_description() {
        out.push_str("<h4>Return value</h4>\n");
        out.push_str(&format!("<p>{}</p>\n", html_escape(ret)));
    }

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
