//! Shared configuration for sakura-icons
//!
//! This crate provides the single source of truth for the icon sizes, the
//! output directory and the file naming used by both the generator and the
//! manifest updater.

use std::path::{Path, PathBuf};

/// Icon sizes in pixels, generated in this order
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Output directory relative to the repository root
pub const OUTPUT_SUBDIR: &str = "public/icons";

/// Extension manifest file name at the repository root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Repository root, two levels above this crate
pub fn repo_root() -> PathBuf {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    crate_dir.ancestors().nth(2).unwrap_or(crate_dir).to_path_buf()
}

/// File name for an icon of the given size, e.g. `icon48.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Icon set configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSetConfig {
    /// Sizes to render, in generation order
    pub sizes: Vec<u32>,
    /// Directory the PNG files are written into
    pub output_dir: PathBuf,
    /// Path of the extension manifest to update
    pub manifest_path: PathBuf,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        let root = repo_root();
        Self {
            sizes: ICON_SIZES.to_vec(),
            output_dir: root.join(OUTPUT_SUBDIR),
            manifest_path: root.join(MANIFEST_FILE),
        }
    }
}

impl IconSetConfig {
    /// Create a config with the default sizes writing into `output_dir`
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the PNG for a size
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }

    /// Manifest-relative path of the PNG for a size, always `/`-separated
    pub fn manifest_icon_path(&self, size: u32) -> String {
        format!("{OUTPUT_SUBDIR}/{}", icon_file_name(size))
    }
}
