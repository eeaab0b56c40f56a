//! Indented XML rendering under the fixed SII output format.
//!
//! The mandated format lives in one place ([`XmlFormat::SII`]): declaration
//! line, 4-space indentation, LF line endings, and an explicit start/end
//! tag pair for every element -- the tracciato never uses self-closing
//! tags.

use crate::model::OffertaDocument;
use crate::node::{XmlContent, XmlElement};
use crate::transform::transform;
use std::fmt::Write;

/// Output formatting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlFormat {
    /// Declaration line emitted before the root element.
    pub declaration: &'static str,
    /// One unit of indentation per nesting depth.
    pub indent: &'static str,
    /// Line terminator. Never a CR/LF pair, never preceded by a BOM.
    pub newline: &'static str,
}

impl XmlFormat {
    /// The format mandated for SII offer transmission.
    pub const SII: XmlFormat = XmlFormat {
        declaration: r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        indent: "    ",
        newline: "\n",
    };
}

/// Serialize a full offer document, declaration included.
pub fn build(doc: &OffertaDocument) -> String {
    render(&transform(doc), &XmlFormat::SII)
}

/// Render an element tree under the given format.
pub fn render(root: &XmlElement, format: &XmlFormat) -> String {
    let mut out = String::new();
    out.push_str(format.declaration);
    out.push_str(format.newline);
    render_element(&mut out, root, 0, format);
    out
}

fn render_element(out: &mut String, element: &XmlElement, depth: usize, format: &XmlFormat) {
    for _ in 0..depth {
        out.push_str(format.indent);
    }
    match &element.content {
        XmlContent::Text(text) => {
            // Text is already escaped; leaves render on one line.
            let _ = write!(out, "<{}>{}</{}>", element.name, text, element.name);
        }
        XmlContent::Children(children) => {
            let _ = write!(out, "<{}>", element.name);
            out.push_str(format.newline);
            for child in children {
                render_element(out, child, depth + 1, format);
            }
            for _ in 0..depth {
                out.push_str(format.indent);
            }
            let _ = write!(out, "</{}>", element.name);
        }
    }
    out.push_str(format.newline);
}
