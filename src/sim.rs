//! Simulated hardware for running the transmitter off-target.
//!
//! A [`VirtualClock`] is advanced only by [`ClockDelay`], so a whole message
//! "transmits" instantly while every pin edge still carries the timestamp it
//! would have had on real hardware. [`ProbePin`] reports those edges to a
//! callback (a recorder in tests, a [`Decoder`](crate::decoder::Decoder) for
//! loopback checks).

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

const NANOS_PER_MS: u64 = 1_000_000;

/// Monotonic clock that only moves when a [`ClockDelay`] waits.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ns: Cell<u64>,
}

impl VirtualClock {
    pub const fn new() -> Self {
        Self { now_ns: Cell::new(0) }
    }

    /// Current time in milliseconds (truncated).
    pub fn now_ms(&self) -> u64 {
        self.now_ns.get() / NANOS_PER_MS
    }

    /// Current time in nanoseconds.
    pub fn now_ns(&self) -> u64 {
        self.now_ns.get()
    }

    /// Move the clock forward.
    pub fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }
}

/// Blocking delay that advances a [`VirtualClock`] instead of sleeping.
pub struct ClockDelay<'a> {
    clock: &'a VirtualClock,
}

impl<'a> ClockDelay<'a> {
    pub fn new(clock: &'a VirtualClock) -> Self {
        Self { clock }
    }
}

impl DelayNs for ClockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ns(u64::from(ms) * NANOS_PER_MS);
    }
}

/// Output pin that reports `(timestamp_ms, lit)` on every write.
pub struct ProbePin<'a, F> {
    clock: &'a VirtualClock,
    on_write: F,
    lit: bool,
}

impl<'a, F: FnMut(u64, bool)> ProbePin<'a, F> {
    pub fn new(clock: &'a VirtualClock, on_write: F) -> Self {
        Self {
            clock,
            on_write,
            lit: false,
        }
    }

    /// Last level written.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    fn write(&mut self, lit: bool) {
        self.lit = lit;
        (self.on_write)(self.clock.now_ms(), lit);
    }
}

impl<F> ErrorType for ProbePin<'_, F> {
    type Error = Infallible;
}

impl<F: FnMut(u64, bool)> OutputPin for ProbePin<'_, F> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}
