//! Transmit on simulated hardware, decode the pin timeline back to text

use std::cell::RefCell;

use rust_cw_beacon::sim::{ClockDelay, ProbePin, VirtualClock};
use rust_cw_beacon::{Decoder, TimingProfile, Transmitter};

fn loopback(message: &str, unit_ms: u32) -> String {
    let timing = TimingProfile::new(unit_ms);
    let clock = VirtualClock::new();
    let rx: RefCell<Decoder> = RefCell::new(Decoder::new(timing));

    let pin = ProbePin::new(&clock, |at, lit| {
        rx.borrow_mut().tick(at, lit);
    });
    let mut tx = Transmitter::new(pin, ClockDelay::new(&clock), timing);
    let mut status = String::new();
    tx.transmit(message, &mut status).unwrap();
    drop(tx);

    let mut rx = rx.into_inner();
    rx.finish().to_string()
}

#[test]
fn test_sos_round_trip() {
    assert_eq!(loopback("SOS", 200), "SOS");
}

#[test]
fn test_words_round_trip() {
    assert_eq!(loopback("hi there", 60), "HI THERE");
}

#[test]
fn test_digits_round_trip() {
    assert_eq!(loopback("73 de 5B4", 20), "73 DE 5B4");
}

#[test]
fn test_unsupported_characters_vanish() {
    assert_eq!(loopback("A1!", 10), "A1");
}

#[test]
fn test_wpm_profile_round_trip() {
    let unit = TimingProfile::from_wpm(25).dot_ms();
    assert_eq!(loopback("PARIS PARIS", unit), "PARIS PARIS");
}
