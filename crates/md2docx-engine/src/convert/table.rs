//! Table reconstruction.
//!
//! Cell content is flattened plain text (trimmed); inline formatting is not
//! applied inside cells, matching the block-level fidelity target.

use crate::document::{Assembler, Block, TableCell};
use crate::markup::MarkupNode;

/// Rebuild a rectangular table from row/cell markup and append it.
///
/// Column count is the maximum cell count across all rows; shorter rows are
/// right-padded with empty cells. Header (`th`) cells are flagged bold.
/// A table with zero rows emits nothing.
pub fn build_table(table_node: &MarkupNode, assembler: &mut Assembler) {
    let mut row_nodes = Vec::new();
    collect_rows(table_node, &mut row_nodes);
    if row_nodes.is_empty() {
        return;
    }

    let cols = row_nodes
        .iter()
        .map(|row| cell_nodes(row).count())
        .max()
        .unwrap_or(0);

    let rows = row_nodes
        .iter()
        .map(|row| {
            let mut cells: Vec<TableCell> = cell_nodes(row)
                .map(|cell| TableCell {
                    text: cell.text().trim().to_string(),
                    header: cell.tag() == Some("th"),
                })
                .collect();
            cells.resize(cols, TableCell::default());
            cells
        })
        .collect();

    assembler.append(Block::Table { cols, rows });
}

// All `tr` descendants in document order, whatever section wrappers the
// source tree uses.
fn collect_rows<'a>(node: &'a MarkupNode, out: &mut Vec<&'a MarkupNode>) {
    for child in node.children() {
        if child.tag() == Some("tr") {
            out.push(child);
        } else {
            collect_rows(child, out);
        }
    }
}

fn cell_nodes(row: &MarkupNode) -> impl Iterator<Item = &MarkupNode> {
    row.children()
        .iter()
        .filter(|cell| matches!(cell.tag(), Some("td") | Some("th")))
}
