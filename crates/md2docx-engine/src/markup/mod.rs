pub mod builder;

use std::collections::BTreeMap;

pub use builder::parse_markdown;

/// One node of the parsed markup tree: either a tagged element with
/// attributes and ordered children, or a plain text leaf.
///
/// The tree is produced once by [`parse_markdown`] and is read-only to the
/// conversion code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element {
        tag: String,
        attrs: BTreeMap<String, String>,
        children: Vec<MarkupNode>,
    },
    Text(String),
}

impl MarkupNode {
    /// Create an empty element with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        MarkupNode::Element {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a text leaf.
    pub fn text_node(text: impl Into<String>) -> Self {
        MarkupNode::Text(text.into())
    }

    /// The element tag, or `None` for text leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Element { tag, .. } => Some(tag),
            MarkupNode::Text(_) => None,
        }
    }

    /// Attribute lookup; text leaves have no attributes.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            MarkupNode::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            MarkupNode::Text(_) => None,
        }
    }

    /// Direct children in document order; empty for text leaves.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Element { children, .. } => children,
            MarkupNode::Text(_) => &[],
        }
    }

    /// Concatenation of all descendant text, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            MarkupNode::Text(text) => out.push_str(text),
            MarkupNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    pub(crate) fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        if let MarkupNode::Element { attrs, .. } = self {
            attrs.insert(name.to_string(), value.into());
        }
    }

    pub(crate) fn push_child(&mut self, child: MarkupNode) {
        if let MarkupNode::Element { children, .. } = self {
            children.push(child);
        }
    }
}
