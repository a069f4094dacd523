//! Folds pulldown-cmark events into an HTML-like [`MarkupNode`] tree.
//!
//! The conversion code downstream works on element tags (`h1`, `p`, `table`,
//! ...) rather than parser events, so this builder reconstructs the element
//! tree a browser-style parser would produce for the rendered markdown.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::MarkupNode;

/// Parse markdown source into a markup tree rooted at a `body` element.
///
/// Tables, strikethrough, footnotes and task lists are enabled, matching the
/// extension set of the original converter.
pub fn parse_markdown(source: &str) -> MarkupNode {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(source, options) {
        builder.handle(event);
    }
    builder.finish()
}

struct TreeBuilder {
    // stack[0] is the root; open elements follow in nesting order.
    stack: Vec<MarkupNode>,
    in_table_header: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![MarkupNode::element("body")],
            in_table_header: false,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(end) => {
                if matches!(end, TagEnd::TableHead) {
                    self.in_table_header = false;
                }
                self.close();
            }
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let mut element = MarkupNode::element("code");
                element.push_child(MarkupNode::text_node(code.as_ref()));
                self.append(element);
            }
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.text("\n"),
            Event::Rule => self.append(MarkupNode::element("hr")),
            Event::FootnoteReference(name) => self.text(&format!("[^{name}]")),
            Event::TaskListMarker(checked) => {
                self.text(if checked { "[x] " } else { "[ ] " })
            }
            // Raw HTML passthrough is not supported.
            Event::Html(_) | Event::InlineHtml(_) => {}
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let element = match tag {
            Tag::Paragraph => MarkupNode::element("p"),
            Tag::Heading { level, .. } => MarkupNode::element(heading_tag(level)),
            Tag::BlockQuote(_) => MarkupNode::element("blockquote"),
            Tag::CodeBlock(_) => MarkupNode::element("pre"),
            Tag::List(Some(_)) => MarkupNode::element("ol"),
            Tag::List(None) => MarkupNode::element("ul"),
            Tag::Item => MarkupNode::element("li"),
            Tag::Table(_) => MarkupNode::element("table"),
            Tag::TableHead => {
                self.in_table_header = true;
                MarkupNode::element("tr")
            }
            Tag::TableRow => MarkupNode::element("tr"),
            Tag::TableCell => {
                MarkupNode::element(if self.in_table_header { "th" } else { "td" })
            }
            Tag::Emphasis => MarkupNode::element("em"),
            Tag::Strong => MarkupNode::element("strong"),
            Tag::Strikethrough => MarkupNode::element("del"),
            Tag::Link { dest_url, .. } => {
                let mut a = MarkupNode::element("a");
                a.set_attr("href", dest_url.as_ref());
                a
            }
            Tag::Image { dest_url, .. } => {
                let mut img = MarkupNode::element("img");
                img.set_attr("src", dest_url.as_ref());
                img
            }
            // Anything else becomes a neutral container; unknown tags are
            // ignored by the block dispatcher.
            _ => MarkupNode::element("div"),
        };
        self.stack.push(element);
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(mut node) = self.stack.pop() {
            // Image alt text arrives as child events; fold it into the
            // attribute the way an <img alt="..."> would carry it.
            if node.tag() == Some("img") {
                let alt = node.text();
                if !alt.is_empty() {
                    node.set_attr("alt", alt);
                }
                if let MarkupNode::Element { children, .. } = &mut node {
                    children.clear();
                }
            }
            // A paragraph holding nothing but an image is really a block
            // image; unwrap it so the dispatcher sees the `img` directly.
            if node.tag() == Some("p")
                && let Some(img) = lone_image(&node)
            {
                self.append(img);
                return;
            }
            self.append(node);
        }
    }

    fn append(&mut self, node: MarkupNode) {
        if let Some(parent) = self.stack.last_mut() {
            parent.push_child(node);
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(MarkupNode::Element { children, .. }) = self.stack.last_mut() {
            // Merge with a preceding text leaf so entity splits and soft
            // breaks do not fragment runs.
            if let Some(MarkupNode::Text(previous)) = children.last_mut() {
                previous.push_str(text);
                return;
            }
            children.push(MarkupNode::text_node(text));
        }
    }

    fn finish(mut self) -> MarkupNode {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack.pop().unwrap_or_else(|| MarkupNode::element("body"))
    }
}

fn lone_image(paragraph: &MarkupNode) -> Option<MarkupNode> {
    let mut image = None;
    for child in paragraph.children() {
        match child {
            MarkupNode::Text(text) if text.trim().is_empty() => {}
            MarkupNode::Element { tag, .. } if tag == "img" && image.is_none() => {
                image = Some(child.clone());
            }
            _ => return None,
        }
    }
    image
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}
