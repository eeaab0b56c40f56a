//! Ordered XML element tree and the append-if-present builder used by the
//! structure transformer.
//!
//! The output shape is fixed by the SII tracciato, so tag names are static
//! strings and element order is exactly append order. Optional data is
//! handled at the builder seam: an absent value appends nothing, an empty
//! list appends nothing, and a compound block with no appended children can
//! be dropped wholesale via [`ElementBuilder::build_nonempty`].

use crate::sanitize::sanitize;
use std::fmt::Display;

/// Element content: a single text node or nested child elements.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlContent {
    Text(String),
    Children(Vec<XmlElement>),
}

/// One element of the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: &'static str,
    pub content: XmlContent,
}

impl XmlElement {
    /// A leaf element. The value passes through [`sanitize`] here, so every
    /// text node in a built tree is already escaped. Line endings collapse
    /// to LF: the rendered document carries no carriage returns.
    pub fn text(name: &'static str, value: impl AsRef<str>) -> Self {
        let escaped = sanitize(value.as_ref());
        let normalized = escaped.replace("\r\n", "\n").replace('\r', "\n");
        XmlElement {
            name,
            content: XmlContent::Text(normalized),
        }
    }
}

/// Builds a compound element as a strictly ordered sequence of
/// append-if-present steps.
pub struct ElementBuilder {
    name: &'static str,
    children: Vec<XmlElement>,
}

impl ElementBuilder {
    pub fn new(name: &'static str) -> Self {
        ElementBuilder {
            name,
            children: Vec::new(),
        }
    }

    /// Append a mandatory text leaf.
    pub fn leaf(mut self, name: &'static str, value: &str) -> Self {
        self.children.push(XmlElement::text(name, value));
        self
    }

    /// Append a text leaf only when the value is present.
    pub fn leaf_opt(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.children.push(XmlElement::text(name, v));
        }
        self
    }

    /// Append a numeric leaf in natural decimal form (`Display`: no
    /// trailing zeros, leading minus for negatives, `0` for zero).
    pub fn leaf_num<T: Display>(mut self, name: &'static str, value: T) -> Self {
        self.children.push(XmlElement::text(name, value.to_string()));
        self
    }

    /// Append a numeric leaf only when the value is present. A present
    /// zero is emitted; only `None` is omitted.
    pub fn leaf_num_opt<T: Display>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.leaf_num(name, v),
            None => self,
        }
    }

    /// Append one sibling element per list item, in list order. An empty
    /// list appends nothing.
    pub fn list(mut self, name: &'static str, values: &[String]) -> Self {
        for v in values {
            self.children.push(XmlElement::text(name, v));
        }
        self
    }

    /// Append an already-built child element.
    pub fn child(mut self, element: XmlElement) -> Self {
        self.children.push(element);
        self
    }

    /// Append a child element only when present.
    pub fn child_opt(mut self, element: Option<XmlElement>) -> Self {
        if let Some(e) = element {
            self.children.push(e);
        }
        self
    }

    /// Append every element of an iterator (repeated compound blocks).
    pub fn extend(mut self, elements: impl IntoIterator<Item = XmlElement>) -> Self {
        self.children.extend(elements);
        self
    }

    pub fn build(self) -> XmlElement {
        XmlElement {
            name: self.name,
            content: XmlContent::Children(self.children),
        }
    }

    /// The built element, or `None` when no step appended anything. Used
    /// by optional blocks that are omitted when all sub-fields are absent.
    pub fn build_nonempty(self) -> Option<XmlElement> {
        if self.children.is_empty() {
            None
        } else {
            Some(self.build())
        }
    }
}
