//! Logger initialisation and the log targets used across the crate.
//!
//! Actor events log under [`GEOMETRY_LOG_TARGET`] and hub events under
//! [`HUB_LOG_TARGET`], so either stream can be filtered on its own with
//! `RUST_LOG`, e.g. `RUST_LOG=info,geometry_hub=debug`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Log target for geometry actor events.
pub const GEOMETRY_LOG_TARGET: &str = "geometry";
/// Log target for hub events.
pub const HUB_LOG_TARGET: &str = "geometry_hub";

/// Builds the default filter directive used when `RUST_LOG` is unset.
///
/// Verbose mode keeps third-party crates at `info` and raises only the two
/// crate targets to `debug`.
///
/// # Examples
///
/// ```
/// use geometry_hub::logging::default_filter;
///
/// assert_eq!(default_filter(false), "info");
/// assert!(default_filter(true).contains("geometry=debug"));
/// ```
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    if !verbose {
        return LevelFilter::Info.to_string().to_lowercase();
    }

    let debug = LevelFilter::Debug.to_string().to_lowercase();
    format!(
        "{},{GEOMETRY_LOG_TARGET}={debug},{HUB_LOG_TARGET}={debug}",
        LevelFilter::Info.to_string().to_lowercase()
    )
}

/// Initializes the global logger.
///
/// `RUST_LOG` wins over [`default_filter`] when it is set.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
