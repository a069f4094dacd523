//! Image reference resolution.
//!
//! Remote URLs are never fetched and local paths are checked for existence
//! before anything is emitted; a missing resource degrades the conversion
//! with a log line instead of failing it.

use std::path::Path;

use log::warn;

use crate::document::{Assembler, Block};
use crate::error::NodeError;
use crate::markup::MarkupNode;
use crate::progress::ProgressSink;

/// Display width for every embedded picture: 6 inches in EMU.
const DISPLAY_WIDTH_EMU: u64 = 5_486_400;

/// Resolve an `img` node against `base_path` and append an Image block when
/// the source exists and can be embedded.
pub fn resolve_and_emit(
    img_node: &MarkupNode,
    assembler: &mut Assembler,
    base_path: &Path,
    sink: &mut dyn ProgressSink,
) -> Result<(), NodeError> {
    let src = img_node.attr("src").unwrap_or("");
    if src.is_empty() {
        return Ok(());
    }

    if src.starts_with("http://") || src.starts_with("https://") {
        // Remote images are not fetched.
        warn!("skipping remote image: {src}");
        sink.on_log(&format!("skipping remote image: {src}"));
        return Ok(());
    }

    let path = base_path.join(src);
    if !path.exists() {
        warn!("image not found: {}", path.display());
        sink.on_log(&format!("image not found: {}", path.display()));
        return Ok(());
    }

    // Probing the header catches corrupt or unsupported files up front.
    let (px_width, px_height) =
        image::image_dimensions(&path).map_err(|source| NodeError::Image {
            path: path.clone(),
            source,
        })?;
    let (width, height) = display_size(px_width, px_height);

    let alt = img_node.attr("alt").unwrap_or("");
    let caption = (!alt.is_empty()).then(|| format!("图片: {alt}"));

    assembler.append(Block::Image {
        path,
        px_width,
        px_height,
        width,
        height,
        caption,
    });
    Ok(())
}

// Every picture renders at the full 6-inch width; the height preserves the
// aspect ratio and saturates rather than wrapping for degenerate inputs.
fn display_size(px_width: u32, px_height: u32) -> (u32, u32) {
    let height =
        u64::from(px_height) * DISPLAY_WIDTH_EMU / u64::from(px_width.max(1));
    (
        DISPLAY_WIDTH_EMU as u32,
        u32::try_from(height).unwrap_or(u32::MAX),
    )
}
