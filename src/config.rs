//! Runtime configuration for a rental session.

use std::time::Duration;

/// Default duration of the simulated processing step.
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 1000;

/// Session configuration, built from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalConfig {
    /// How long the worker spends "processing" a rental before completing it.
    pub processing_delay: Duration,
}

impl RentalConfig {
    pub fn with_processing_delay_ms(ms: u64) -> Self {
        Self {
            processing_delay: Duration::from_millis(ms),
        }
    }
}
