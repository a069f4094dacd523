//! Inline run formatting for paragraph-like blocks.

use crate::document::Run;
use crate::markup::MarkupNode;

/// Convert the direct children of a paragraph-like node into formatted runs,
/// in child order. Runs are never reordered or merged.
pub fn format_inline(node: &MarkupNode) -> Vec<Run> {
    let mut runs = Vec::new();
    for child in node.children() {
        match child {
            MarkupNode::Text(text) => runs.push(Run::plain(text.clone())),
            MarkupNode::Element { tag, .. } => match tag.as_str() {
                "strong" | "b" => runs.push(Run::bold(child.text())),
                "em" | "i" => runs.push(Run::italic(child.text())),
                "code" => runs.push(Run::code(child.text())),
                "a" => runs.push(link_run(child)),
                // Everything else flattens to unformatted text.
                _ => runs.push(Run::plain(child.text())),
            },
        }
    }
    runs
}

// Link text and URL are concatenated into one visible run rather than a
// true hyperlink field.
fn link_run(anchor: &MarkupNode) -> Run {
    let text = anchor.text();
    match anchor.attr("href") {
        Some(href) if !href.is_empty() => Run::link(format!("{text} ({href})"), href),
        _ => Run::plain(text),
    }
}
