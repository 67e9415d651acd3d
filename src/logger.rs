//! Tracing subscriber setup.
//!
//! The first [`init`] call installs the fmt subscriber behind a reloadable
//! filter; later calls swap the filter in place. Startup bootstraps at
//! "info", then re-inits once the configured level is known. `RUST_LOG`,
//! when set, wins over the level passed in.

use std::sync::OnceLock;

use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    layer::SubscriberExt,
    reload,
    util::SubscriberInitExt,
};

use crate::error::AppError;

type FilterHandle = reload::Handle<EnvFilter, Registry>;

static FILTER_HANDLE: OnceLock<FilterHandle> = OnceLock::new();

/// Install the subscriber at `level`, or reload the filter if one is
/// already installed.
pub fn init(level: &str) -> Result<(), AppError> {
    let filter = build_filter(level)?;

    if let Some(handle) = FILTER_HANDLE.get() {
        return handle
            .reload(filter)
            .map_err(|e| AppError::Logger(format!("filter reload failed: {e}")));
    }

    let (filter_layer, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer())
        .try_init()
        .map_err(|e| AppError::Logger(format!("subscriber install failed: {e}")))?;
    let _ = FILTER_HANDLE.set(handle);
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, AppError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| AppError::Logger(format!("bad log directive {level:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers both paths; parallel inits would race on the global
    // subscriber slot.
    #[test]
    fn init_then_reload() {
        init("info").expect("first init installs the subscriber");
        init("debug").expect("second init reloads the filter");
    }
}
