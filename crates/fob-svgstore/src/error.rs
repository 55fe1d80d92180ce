//! Error types for sprite generation and injection

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SvgstoreError>;

/// Errors that can occur while injecting sprite sheets into a bundle
#[derive(Error, Debug, Diagnostic)]
pub enum SvgstoreError {
    /// An SVG referenced by a module could not be read from disk
    #[error("Failed to read SVG file {}: {source}", .path.display())]
    #[diagnostic(
        code(fob::svgstore::read_failed),
        help("Check that the file exists and is valid UTF-8")
    )]
    ReadSvg {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sprite markup could not be embedded as a string literal
    #[error("Failed to serialize sprite markup: {source}")]
    #[diagnostic(code(fob::svgstore::serialize_failed))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// A bundle required icons but no asset with its name exists
    #[error("Asset {file_name} not found")]
    #[diagnostic(
        code(fob::svgstore::asset_not_found),
        help("Set `fileName` to emit the sprite into a dedicated asset")
    )]
    AssetNotFound { file_name: String },
}

impl SvgstoreError {
    pub fn read_svg(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadSvg {
            path: path.into(),
            source,
        }
    }

    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }

    pub fn asset_not_found(file_name: impl Into<String>) -> Self {
        Self::AssetNotFound {
            file_name: file_name.into(),
        }
    }

    /// Whether processing may continue with the remaining outputs
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AssetNotFound { .. })
    }
}
