//! Points manifest.json at the generated PNG icons

use sakura_icons::{logging, manifest};
use sakura_icons_config::IconSetConfig;
use tracing::error;

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("Failed to initialize logging: {err}");
    }

    let config = IconSetConfig::default();

    if let Err(err) = manifest::update_icon_entries(&config) {
        error!("{err}");
        std::process::exit(1);
    }

    println!("Updated manifest.json to use PNG icons");
}
