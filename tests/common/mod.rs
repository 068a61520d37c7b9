//! Shared bench: transmitter on simulated hardware.

#![allow(dead_code)]

use std::cell::RefCell;

use rust_cw_beacon::sim::{ClockDelay, ProbePin, VirtualClock};
use rust_cw_beacon::{TimingProfile, TransmitReport, Transmitter};

/// Everything observable from one transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    /// (timestamp_ms, lit) for every pin write.
    pub writes: Vec<(u64, bool)>,
    /// Status text.
    pub status: String,
    pub report: TransmitReport,
    /// Clock when `transmit` returned.
    pub end_ms: u64,
}

impl Capture {
    /// Run-length view: (lit, duration_ms), dark tail included.
    pub fn segments(&self) -> Vec<(bool, u64)> {
        let mut out = Vec::new();
        for (i, &(at, lit)) in self.writes.iter().enumerate() {
            let until = self.writes.get(i + 1).map(|w| w.0).unwrap_or(self.end_ms);
            if until > at {
                out.push((lit, until - at));
            }
        }
        out
    }

    /// Durations of the lit segments only.
    pub fn pulses(&self) -> Vec<u64> {
        self.segments()
            .into_iter()
            .filter(|(lit, _)| *lit)
            .map(|(_, d)| d)
            .collect()
    }

    /// Durations of the dark segments only (tail included).
    pub fn gaps(&self) -> Vec<u64> {
        self.segments()
            .into_iter()
            .filter(|(lit, _)| !*lit)
            .map(|(_, d)| d)
            .collect()
    }
}

/// Transmit each message in turn on one transmitter, capturing each separately.
pub fn transmit_all(messages: &[&str], unit_ms: u32) -> Vec<Capture> {
    let clock = VirtualClock::new();
    let writes = RefCell::new(Vec::new());
    let pin = ProbePin::new(&clock, |at, lit| writes.borrow_mut().push((at, lit)));
    let mut tx = Transmitter::new(pin, ClockDelay::new(&clock), TimingProfile::new(unit_ms));

    let mut captures = Vec::new();
    for message in messages {
        let start = clock.now_ms();
        let mut status = String::new();
        let report = tx.transmit(message, &mut status).expect("simulated pin never fails");

        // Rebase timestamps so repeated messages compare equal
        let writes = writes
            .borrow_mut()
            .drain(..)
            .map(|(at, lit)| (at - start, lit))
            .collect();
        captures.push(Capture {
            writes,
            status,
            report,
            end_ms: clock.now_ms() - start,
        });
    }
    captures
}

/// Transmit one message.
pub fn transmit(message: &str, unit_ms: u32) -> Capture {
    transmit_all(&[message], unit_ms).remove(0)
}
