//! Minimal HTML building helpers for generated pages.

use std::fmt;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An element with attributes and already-rendered inner HTML.
#[derive(Debug, Clone, Default)]
pub struct Tag {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    content: String,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attributes.push((name, escape_html(value.as_ref())));
        self
    }

    /// Appends escaped text.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.content.push_str(&escape_html(text.as_ref()));
        self
    }

    /// Appends raw HTML.
    pub fn html(mut self, html: impl AsRef<str>) -> Self {
        self.content.push_str(html.as_ref());
        self
    }

    pub fn child(self, child: Tag) -> Self {
        let rendered = child.to_string();
        self.html(rendered)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        if self.content.is_empty() && matches!(self.name, "img" | "br" | "hr") {
            return write!(f, "/>");
        }
        write!(f, ">{}</{}>", self.content, self.name)
    }
}
