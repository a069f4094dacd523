//! The element-tree-to-document transformer.
//!
//! [`process_node`] walks the top-level children of the markup tree in
//! order, classifies each by tag and routes it to the matching
//! block-producing routine. Data flows one way: tree → dispatcher →
//! (inline formatter | table builder | image resolver) → assembler.

pub mod image;
pub mod inline;
pub mod table;

use std::path::Path;

use log::warn;

use crate::document::{Assembler, Block, ListKind};
use crate::error::ConvertError;
use crate::markup::{self, MarkupNode};
use crate::progress::ProgressSink;
use crate::io;
use crate::style::{Platform, StyleConfig};

/// Caller-facing knobs for one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub platform: Platform,
    /// When off, `img` nodes are ignored entirely.
    pub process_images: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Linux,
            process_images: true,
        }
    }
}

/// Closed set of block-level tags the dispatcher understands. Anything that
/// does not classify is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockTag {
    Heading(u8),
    Paragraph,
    UnorderedList,
    OrderedList,
    Quote,
    CodeBlock,
    Table,
    Image,
    Rule,
}

fn classify(tag: &str) -> Option<BlockTag> {
    match tag {
        "h1" => Some(BlockTag::Heading(1)),
        "h2" => Some(BlockTag::Heading(2)),
        "h3" => Some(BlockTag::Heading(3)),
        "h4" => Some(BlockTag::Heading(4)),
        "h5" => Some(BlockTag::Heading(5)),
        "h6" => Some(BlockTag::Heading(6)),
        "p" => Some(BlockTag::Paragraph),
        "ul" => Some(BlockTag::UnorderedList),
        "ol" => Some(BlockTag::OrderedList),
        "blockquote" => Some(BlockTag::Quote),
        "pre" => Some(BlockTag::CodeBlock),
        "table" => Some(BlockTag::Table),
        "img" => Some(BlockTag::Image),
        "hr" => Some(BlockTag::Rule),
        _ => None,
    }
}

/// Convert one top-level node into zero or more blocks.
///
/// A failure inside one node's handling is logged and recovered; conversion
/// continues with the next sibling.
pub fn process_node(
    node: &MarkupNode,
    assembler: &mut Assembler,
    base_path: &Path,
    options: &ConvertOptions,
    sink: &mut dyn ProgressSink,
) {
    let Some(tag) = node.tag() else {
        return;
    };
    let Some(kind) = classify(tag) else {
        return;
    };

    let result = match kind {
        BlockTag::Heading(level) => {
            assembler.append(Block::Heading {
                level,
                text: node.text().trim().to_string(),
            });
            Ok(())
        }
        BlockTag::Paragraph => {
            assembler.append(Block::Paragraph {
                runs: inline::format_inline(node),
            });
            Ok(())
        }
        BlockTag::UnorderedList => {
            append_list_items(node, ListKind::Unordered, assembler);
            Ok(())
        }
        BlockTag::OrderedList => {
            append_list_items(node, ListKind::Ordered, assembler);
            Ok(())
        }
        BlockTag::Quote => {
            assembler.append(Block::Quote {
                runs: inline::format_inline(node),
            });
            Ok(())
        }
        BlockTag::CodeBlock => {
            // Opaque text, internal whitespace preserved exactly.
            assembler.append(Block::CodeBlock { text: node.text() });
            Ok(())
        }
        BlockTag::Table => {
            table::build_table(node, assembler);
            Ok(())
        }
        BlockTag::Image if !options.process_images => Ok(()),
        BlockTag::Image => image::resolve_and_emit(node, assembler, base_path, sink),
        BlockTag::Rule => {
            assembler.append(Block::Rule);
            Ok(())
        }
    };

    if let Err(err) = result {
        warn!("skipping <{tag}> block: {err}");
        sink.on_log(&format!("warning: {err}"));
    }
}

// Direct `li` children only; nested lists inside an item flatten to text.
fn append_list_items(list: &MarkupNode, kind: ListKind, assembler: &mut Assembler) {
    for item in list.children() {
        if item.tag() == Some("li") {
            assembler.append(Block::ListItem {
                kind,
                runs: inline::format_inline(item),
            });
        }
    }
}

/// Convert markdown text into a finished `.docx` byte stream.
///
/// `base_path` is the directory relative image sources resolve against.
pub fn convert_str(
    markdown: &str,
    base_path: &Path,
    options: &ConvertOptions,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<u8>, ConvertError> {
    sink.on_log("parsing markdown");
    let tree = markup::parse_markdown(markdown);
    sink.on_progress(40);

    sink.on_log("creating document");
    let mut assembler = Assembler::new(StyleConfig::for_platform(options.platform));
    sink.on_progress(50);

    sink.on_log("converting content");
    for node in tree.children() {
        process_node(node, &mut assembler, base_path, options, sink);
    }
    sink.on_progress(80);

    assembler.finalize()
}

/// Full pipeline: read the source file, convert, write the output file.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    sink: &mut dyn ProgressSink,
) -> Result<(), ConvertError> {
    sink.on_status("converting");
    sink.on_progress(0);

    sink.on_log(&format!("reading {}", input.display()));
    let markdown = io::read_source(input)?;
    sink.on_progress(20);

    let base_path = input.parent().unwrap_or_else(|| Path::new("."));
    let bytes = convert_str(&markdown, base_path, options, sink)?;

    sink.on_log(&format!("saving to {}", output.display()));
    io::write_output(output, &bytes)?;
    sink.on_progress(100);

    sink.on_status("done");
    sink.on_log("conversion finished");
    Ok(())
}
