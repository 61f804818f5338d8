//! Markdown to HTML rendering for documentation strings.

use docgen_api::MarkupRenderer;
use pulldown_cmark::{Options, Parser, html};

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, markup: &str) -> String {
        render_markdown(markup)
    }
}

/// Render markdown to HTML with tables and strikethrough enabled.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
