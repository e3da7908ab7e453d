// ============================================================================
// Utilities Module
// Helpers for binaries, demos and benches embedding the crate
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
