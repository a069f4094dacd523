pub mod convert;
pub mod document;
pub mod error;
pub mod io;
pub mod markup;
pub mod progress;
pub mod style;

// Re-export key types for easier usage
pub use convert::{ConvertOptions, convert_file, convert_str, process_node};
pub use document::{Assembler, Block, ListKind, Run, TableCell};
pub use error::{ConvertError, NodeError};
pub use markup::{MarkupNode, parse_markdown};
pub use progress::{NullSink, ProgressSink};
pub use style::{Platform, StyleConfig};
