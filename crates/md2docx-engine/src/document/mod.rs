//! The output document vocabulary and the assembler that owns it.
//!
//! The conversion code emits an abstract sequence of [`Block`]s; only
//! [`Assembler::finalize`] touches the DOCX library that turns that sequence
//! into the binary container.

pub mod numbering;
pub mod styles;
pub mod writer;

use std::path::PathBuf;

use crate::error::ConvertError;
use crate::style::StyleConfig;

/// One formatted inline text fragment. Runs belong to exactly one block and
/// keep the child order of the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    /// Target URL when the run renders a link. The visible text already
    /// contains the URL; this only drives link coloring.
    pub link: Option<String>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            monospace: true,
            ..Self::plain(text)
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            link: Some(href.into()),
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// One table cell: flattened trimmed text plus a header flag. No inline
/// formatting inside cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    pub text: String,
    pub header: bool,
}

/// One structural unit of the output document, emitted in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        runs: Vec<Run>,
    },
    ListItem {
        kind: ListKind,
        runs: Vec<Run>,
    },
    Quote {
        runs: Vec<Run>,
    },
    CodeBlock {
        text: String,
    },
    /// Rectangular: every row has exactly `cols` cells, short source rows
    /// right-padded with empty ones.
    Table {
        cols: usize,
        rows: Vec<Vec<TableCell>>,
    },
    Image {
        path: PathBuf,
        /// Native pixel dimensions probed from the file header.
        px_width: u32,
        px_height: u32,
        /// Display size in EMU: fixed 6 in width, aspect-scaled height.
        width: u32,
        height: u32,
        /// Full caption text, already prefixed; rendered as a centered
        /// paragraph right after the picture.
        caption: Option<String>,
    },
    Rule,
}

/// Accumulates blocks in document order and serializes them on demand.
///
/// One assembler exists per conversion run; blocks are appended strictly
/// sequentially and never amended afterwards.
pub struct Assembler {
    style: StyleConfig,
    blocks: Vec<Block>,
}

impl Assembler {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            blocks: Vec::new(),
        }
    }

    pub fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Render the accumulated blocks into a `.docx` byte stream. Failure
    /// here is fatal to the conversion.
    pub fn finalize(self) -> Result<Vec<u8>, ConvertError> {
        writer::render(&self.blocks, &self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Platform;

    #[test]
    fn blocks_keep_append_order() {
        let mut assembler = Assembler::new(StyleConfig::for_platform(Platform::Linux));
        assembler.append(Block::Heading {
            level: 1,
            text: "T".into(),
        });
        assembler.append(Block::Rule);
        assembler.append(Block::CodeBlock { text: "x\n".into() });

        assert_eq!(assembler.blocks().len(), 3);
        assert!(matches!(assembler.blocks()[0], Block::Heading { .. }));
        assert!(matches!(assembler.blocks()[2], Block::CodeBlock { .. }));
    }

    #[test]
    fn run_constructors_set_single_flags() {
        assert!(Run::bold("b").bold);
        assert!(!Run::bold("b").italic);
        assert!(Run::italic("i").italic);
        assert!(Run::code("c").monospace);
        assert_eq!(
            Run::link("t (u)", "u").link.as_deref(),
            Some("u")
        );
        assert_eq!(Run::plain("p").link, None);
    }

    #[test]
    fn finalize_produces_zip_container() {
        let mut assembler = Assembler::new(StyleConfig::for_platform(Platform::Linux));
        assembler.append(Block::Paragraph {
            runs: vec![Run::plain("hello")],
        });

        let bytes = assembler.finalize().unwrap();
        // DOCX is a ZIP archive.
        assert_eq!(&bytes[..2], b"PK");
    }
}
