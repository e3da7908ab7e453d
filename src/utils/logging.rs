// ============================================================================
// Logging Setup
// tracing-subscriber initialization for coercion diagnostics
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber at `level`.
///
/// Returns `false` when a subscriber was already installed, which is the
/// normal case when several tests or demos race to initialize logging.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}
