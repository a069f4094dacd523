use std::path::PathBuf;

/// Fatal conversion failures.
///
/// Everything that can go wrong at block granularity (one image, one table
/// cell) is recovered locally and logged; only unreadable input, an
/// unserializable document or an unwritable output abort a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to build document: {0}")]
    Finalize(String),
}

/// Failure while converting a single block-level node. Callers log these and
/// continue with the next sibling; they never abort a conversion.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("cannot embed image {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}
