//! Renders the accumulated block sequence through docx-rs and packs the
//! final container.
//!
//! Image embedding failures here are recovered per block: the picture is
//! skipped with a warning and rendering continues. Only packing the archive
//! itself can fail the conversion.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    BreakType, Docx, IndentLevel, LineSpacing, NumberingId, Paragraph, Pic, Run, Table,
    TableCell, TableRow,
};
use log::warn;

use super::numbering::{self, ORDERED_NUM_ID, UNORDERED_NUM_ID};
use super::styles::{self, run_fonts};
use super::{Block, ListKind};
use crate::error::ConvertError;
use crate::style::StyleConfig;

pub fn render(blocks: &[Block], style: &StyleConfig) -> Result<Vec<u8>, ConvertError> {
    let mut docx = Docx::new();
    docx = styles::register_styles(docx, style);
    docx = numbering::register_numbering(docx);

    for block in blocks {
        docx = append_block(docx, block, style);
    }

    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|err| ConvertError::Finalize(err.to_string()))?;
    Ok(buffer)
}

fn append_block(docx: Docx, block: &Block, style: &StyleConfig) -> Docx {
    match block {
        Block::Heading { level, text } => docx.add_paragraph(
            Paragraph::new()
                .style(&format!("Heading{level}"))
                .add_run(Run::new().add_text(text.as_str())),
        ),
        Block::Paragraph { runs } => {
            let para = runs_to_paragraph(Paragraph::new(), runs, style).line_spacing(
                LineSpacing::new()
                    .after(style.space_after)
                    .line(style.line_spacing as i32),
            );
            docx.add_paragraph(para)
        }
        Block::ListItem { kind, runs } => {
            let num_id = match kind {
                ListKind::Ordered => ORDERED_NUM_ID,
                ListKind::Unordered => UNORDERED_NUM_ID,
            };
            let para = Paragraph::new()
                .numbering(NumberingId::new(num_id), IndentLevel::new(0));
            docx.add_paragraph(runs_to_paragraph(para, runs, style))
        }
        Block::Quote { runs } => {
            let para = Paragraph::new().style("Quote");
            docx.add_paragraph(runs_to_paragraph(para, runs, style))
        }
        Block::CodeBlock { text } => append_code_block(docx, text),
        Block::Table { cols, rows } => append_table(docx, *cols, rows),
        Block::Image {
            path,
            px_width,
            px_height,
            width,
            height,
            caption,
        } => append_image(
            docx,
            path,
            (*px_width, *px_height),
            (*width, *height),
            caption.as_deref(),
        ),
        Block::Rule => docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_break(BreakType::TextWrapping)),
        ),
    }
}

fn runs_to_paragraph(
    mut para: Paragraph,
    runs: &[super::Run],
    style: &StyleConfig,
) -> Paragraph {
    for run in runs {
        para = para.add_run(to_docx_run(run, style));
    }
    para
}

fn to_docx_run(run: &super::Run, style: &StyleConfig) -> Run {
    let mut out = Run::new().add_text(run.text.as_str());
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    if run.monospace {
        out = out
            .fonts(run_fonts(&style.code_font))
            .size(style.code_size_pt * 2);
    }
    if run.link.is_some() {
        out = out.color(style.link_color.clone());
    }
    out
}

// One CodeBlock-styled paragraph per line keeps the line breaks intact.
fn append_code_block(mut docx: Docx, text: &str) -> Docx {
    for line in text.trim_end_matches('\n').split('\n') {
        let para = Paragraph::new()
            .style("CodeBlock")
            .add_run(Run::new().add_text(line));
        docx = docx.add_paragraph(para);
    }
    docx
}

fn append_table(docx: Docx, cols: usize, rows: &[Vec<super::TableCell>]) -> Docx {
    if rows.is_empty() || cols == 0 {
        return docx;
    }

    let mut table = Table::new(vec![]);
    for row in rows {
        let cells = row
            .iter()
            .map(|cell| {
                let mut run = Run::new().add_text(cell.text.as_str());
                if cell.header {
                    run = run.bold();
                }
                TableCell::new().add_paragraph(Paragraph::new().add_run(run))
            })
            .collect();
        table = table.add_row(TableRow::new(cells));
    }
    docx.add_table(table)
}

fn append_image(
    docx: Docx,
    path: &Path,
    (px_width, px_height): (u32, u32),
    (width, height): (u32, u32),
    caption: Option<&str>,
) -> Docx {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            warn!("skipping image {}: {err}", path.display());
            return docx;
        }
    };

    // Pixel dimensions were probed at resolve time, so the bytes never need
    // to be decoded again here; `size` fixes the rendered extent in EMU.
    let pic = Pic::new_with_dimensions(data, px_width, px_height).size(width, height);
    let docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_image(pic)));

    match caption {
        Some(text) => docx.add_paragraph(
            Paragraph::new()
                .style("Caption")
                .add_run(Run::new().add_text(text)),
        ),
        None => docx,
    }
}
