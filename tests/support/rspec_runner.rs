//! Runs `rspec` suites on the calling thread.

use rspec::report::Report;
use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use std::sync::Arc;

/// Runs `suite` serially so the shared Bevy `App` is only touched by one
/// example at a time.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let report = Runner::new(config, vec![logger]).run(suite);
    assert!(report.is_success(), "rspec suite reported failures");
}
