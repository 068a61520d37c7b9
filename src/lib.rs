//! # RustCwBeacon
//!
//! Text-to-Morse light beacon.
//!
//! ## Architecture
//!
//! One blocking control loop:
//! - [`console::LineReader`] assembles a message from serial bytes
//! - [`Transmitter`] looks up each character in [`code::CODE_TABLE`] and keys
//!   the LED with [`TimingProfile`] delays, echoing status text
//! - [`decoder::Decoder`] turns light timing back into text (loopback checks,
//!   optical receivers)
//!
//! Everything except [`hal`] is hardware independent and tested on host.

#![cfg_attr(not(test), no_std)]

pub mod code;
pub mod config;
pub mod console;
pub mod decoder;
pub mod error;
pub mod sim;
pub mod timing;
pub mod transmitter;

#[cfg(target_os = "espidf")]
pub mod hal;

pub use code::{lookup, Symbol, CODE_TABLE};
pub use config::{BeaconConfig, CONFIG};
pub use decoder::Decoder;
pub use error::BeaconError;
pub use timing::TimingProfile;
pub use transmitter::{TransmitReport, Transmitter};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");
