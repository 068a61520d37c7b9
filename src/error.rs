//! Beacon error types

/// Beacon error with code and message.
///
/// Unsupported characters are not errors; they are skipped by policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconError {
    /// E01: LED pin could not be driven
    PinWrite,
    /// E02: Configuration rejected (zero base unit)
    InvalidConfig,
    /// E03: Serial port read/write failed
    Uart,
}

impl BeaconError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::PinWrite => "E01",
            Self::InvalidConfig => "E02",
            Self::Uart => "E03",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::PinWrite => "pin write failed",
            Self::InvalidConfig => "invalid configuration",
            Self::Uart => "serial I/O failed",
        }
    }
}

impl core::fmt::Display for BeaconError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl core::error::Error for BeaconError {}
