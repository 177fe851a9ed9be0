use std::path::PathBuf;

use painting::SurfaceError;

/// Errors that can occur while writing icons or updating the manifest
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Output directory could not be created
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rendered surface could not be turned into an image buffer
    #[error("Failed to export {size}px icon: {source}")]
    Export { size: u32, source: SurfaceError },

    /// PNG encoding or file write failed
    #[error("Failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Manifest file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    ReadManifest {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON
    #[error("Failed to parse {}: {source}", .path.display())]
    ParseManifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Manifest JSON does not have the expected structure
    #[error("Unexpected manifest structure in {}: {reason}", .path.display())]
    ManifestShape { path: PathBuf, reason: String },

    /// Updated manifest could not be serialized
    #[error("Failed to serialize {}: {source}", .path.display())]
    SerializeManifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Manifest file could not be written back
    #[error("Failed to write {}: {source}", .path.display())]
    WriteManifest {
        path: PathBuf,
        source: std::io::Error,
    },
}
