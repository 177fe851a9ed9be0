//! Writing rendered icons to disk

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use painting::CpuSurface;
use sakura_icons_config::IconSetConfig;
use tracing::{debug, info};

use crate::composer::compose_icon;
use crate::error::IconError;

/// One icon written by [`generate_icons`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

impl GeneratedIcon {
    /// File name without the directory, e.g. `icon16.png`
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Create the output directory and any missing parents
pub fn ensure_output_dir(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Encode a surface as PNG at `path`, replacing any existing file
pub fn save_icon(surface: &CpuSurface, path: &Path) -> Result<(), IconError> {
    let image = surface.to_rgba_image().map_err(|source| IconError::Export {
        size: surface.width,
        source,
    })?;

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("save_icon: wrote {}x{} to {}", surface.width, surface.height, path.display());
    Ok(())
}

/// Render and save the icon for one size
pub fn write_icon(config: &IconSetConfig, size: u32) -> Result<GeneratedIcon, IconError> {
    let path = config.icon_path(size);
    let surface = compose_icon(size);
    save_icon(&surface, &path)?;
    Ok(GeneratedIcon { size, path })
}

/// Render every configured size in order and write it into the output directory
///
/// Stops at the first failure; files already written are left in place.
pub fn generate_icons(config: &IconSetConfig) -> Result<Vec<GeneratedIcon>, IconError> {
    ensure_output_dir(&config.output_dir)?;
    info!(
        "Generating {} icons into {}",
        config.sizes.len(),
        config.output_dir.display()
    );

    config
        .sizes
        .iter()
        .map(|&size| write_icon(config, size))
        .collect()
}
