//! Label markup builder
//!
//! Provides a fluent API for building label HTML.

use crate::encoding::{escape_attr, escape_text};

/// Label markup builder
///
/// Tracks open elements so the output is always balanced. Text written
/// through [`text`](Self::text) and [`element`](Self::element) is escaped;
/// class names are attribute-escaped.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    buf: String,
    open: Vec<&'static str>,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(2048),
            open: Vec::new(),
        }
    }

    /// Number of currently open elements
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    // === Elements ===

    /// Open an element with a class attribute
    ///
    /// An empty class omits the attribute.
    pub fn open(&mut self, tag: &'static str, class: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        let class = class.trim();
        if !class.is_empty() {
            self.buf.push_str(" class=\"");
            self.buf.push_str(&escape_attr(class));
            self.buf.push('"');
        }
        self.buf.push('>');
        self.open.push(tag);
        self
    }

    /// Close the innermost open element (no-op when nothing is open)
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.open.pop() {
            self.buf.push_str("</");
            self.buf.push_str(tag);
            self.buf.push('>');
        }
        self
    }

    /// Write a complete element holding escaped text
    pub fn element(&mut self, tag: &'static str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class);
        self.text(text);
        self.close()
    }

    // === Content ===

    /// Write escaped text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape_text(s));
        self
    }

    // === Output ===

    /// Close every open element and return the markup
    pub fn build(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        self.buf
    }
}
