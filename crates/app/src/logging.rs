//! Console logging setup for the binaries

use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::layer,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Registry,
};

/// Install an INFO-level console subscriber without timestamps or targets
pub fn init() -> Result<(), TryInitError> {
    Registry::default()
        .with(LevelFilter::from(Level::INFO))
        .with(layer().with_ansi(true).with_target(false).without_time())
        .try_init()
}
