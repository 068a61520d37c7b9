//! Module: config
//!
//! Purpose: Build-time configuration for the beacon.
//!
//! The base time unit is the only timing parameter; every other duration is
//! derived from it (see [`TimingProfile`]). Pin assignment lives with the
//! board wiring in `main.rs`. No persistence, no environment, no command line.

use crate::error::BeaconError;
use crate::timing::{TimingProfile, DEFAULT_DOT_UNIT_MS, MAX_DOT_UNIT_MS};

/// Beacon configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeaconConfig {
    /// Base unit (dot length) in milliseconds.
    pub dot_unit_ms: u32,
    /// Serial console baud rate.
    pub uart_baud: u32,
}

impl BeaconConfig {
    /// Factory defaults.
    pub const DEFAULT: Self = Self {
        dot_unit_ms: DEFAULT_DOT_UNIT_MS,
        uart_baud: 115_200,
    };

    /// Reject configurations that would produce degenerate timing.
    pub fn validate(&self) -> Result<(), BeaconError> {
        if self.dot_unit_ms == 0 || self.dot_unit_ms > MAX_DOT_UNIT_MS || self.uart_baud == 0 {
            return Err(BeaconError::InvalidConfig);
        }
        Ok(())
    }

    /// Timing profile for this configuration.
    pub const fn timing(&self) -> TimingProfile {
        TimingProfile::new(self.dot_unit_ms)
    }

    /// This configuration if valid, otherwise the defaults.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("config rejected ({}), using defaults", e);
                Self::DEFAULT
            }
        }
    }
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration compiled into the firmware.
pub static CONFIG: BeaconConfig = BeaconConfig::DEFAULT;
