//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`, defaulting to `warn`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    if try_init().is_err() {
        trace!("logger already initialized");
    }
}

/// Initialize the logging system, reporting if a logger was already installed
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init()
}
