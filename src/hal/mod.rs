//! Hardware Abstraction Layer for RustCwBeacon.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Business logic stays in core modules, HAL is just I/O.

pub mod led;
pub mod uart;

pub use led::{init_led, LedDriver};
pub use uart::{init_uart, UartSink};
