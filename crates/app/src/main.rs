//! sakura-icons - writes icon16/32/48/128.png into public/icons

use sakura_icons::{generate_icons, logging};
use sakura_icons_config::IconSetConfig;
use tracing::error;

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("Failed to initialize logging: {err}");
    }

    let config = IconSetConfig::default();

    match generate_icons(&config) {
        Ok(icons) => {
            for icon in &icons {
                println!("Created: {}", icon.file_name());
            }
            println!("\nIcons saved to: {}", config.output_dir.display());
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
