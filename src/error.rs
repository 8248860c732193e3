//! Error types for loading, rendering and exporting.

use thiserror::Error;

use crate::asset::AssetRef;

/// Why a single asset could not be turned into a bitmap.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No asset is registered or present under the resolved location.
    #[error("asset not found")]
    NotFound,

    /// The asset exists but could not be read or decoded.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Errors that abort a render cycle.
///
/// A failed cycle never touches the presented surface; whatever was shown
/// before the failure stays visible.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The base, pattern or overlay image could not be loaded.
    #[error("failed to load {asset}: {source}")]
    ResourceLoad {
        /// The asset that failed.
        asset: AssetRef,
        /// Underlying loader failure.
        #[source]
        source: LoadError,
    },
}

/// Errors produced when exporting the presented surface.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing has been presented yet.
    #[error("no rendered image to export")]
    NothingRendered,

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the encoded file failed.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing a hex color code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The code is not exactly six hex digits long.
    #[error("color code '{0}' must be exactly 6 hex digits")]
    InvalidLength(String),

    /// The code contains characters outside `0-9a-fA-F`.
    #[error("color code '{0}' contains non-hex characters")]
    InvalidDigit(String),
}
