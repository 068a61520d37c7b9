//! Text-to-Morse transmitter.
//!
//! Drives one output pin with blocking delays. Generic over the
//! `embedded-hal` pin and delay traits, so the same code runs on the ESP32
//! (`PinDriver` + `FreeRtos`) and on the host against simulated hardware.
//!
//! # Timing
//!
//! ```text
//! symbol:     [pulse 1|3][gap 1]
//! letter:     symbol symbol ... [+2]          = 3 units after last pulse
//! space:      [+6]                             on top of whatever preceded it
//! ```
//!
//! Every wait blocks the calling thread. A transmission cannot be cancelled.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::code::{lookup, Code, Symbol};
use crate::error::BeaconError;
use crate::timing::TimingProfile;

/// Word boundary marker in the status output.
pub const WORD_MARKER: &str = " / ";

/// Startup banner lines.
pub const READY_BANNER: &str = "--- Morse Code Transmitter Ready ---";
pub const READY_HINT: &str = "Type your message below and press Send.";

/// Completion banner.
pub const COMPLETE_BANNER: &str = "--- Transmission Complete. Type a new message. ---";

/// Summary of one call to [`Transmitter::transmit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransmitReport {
    /// False when the trimmed message was empty and nothing happened.
    pub transmitted: bool,
    /// Characters keyed.
    pub letters: u32,
    /// Characters skipped because they have no code.
    pub skipped: u32,
    /// Spaces turned into word gaps.
    pub word_gaps: u32,
    /// Total blocking time spent keying and waiting.
    pub elapsed_ms: u64,
}

/// Morse transmitter owning the indicator pin.
pub struct Transmitter<P, D> {
    pin: P,
    delay: D,
    timing: TimingProfile,
    elapsed_ms: u64,
}

impl<P: OutputPin, D: DelayNs> Transmitter<P, D> {
    /// Create a transmitter. The pin is not touched until the first symbol.
    pub fn new(pin: P, delay: D, timing: TimingProfile) -> Self {
        Self {
            pin,
            delay,
            timing,
            elapsed_ms: 0,
        }
    }

    /// Current timing.
    pub fn timing(&self) -> &TimingProfile {
        &self.timing
    }

    /// Change the speed. Takes effect with the next transmission.
    pub fn set_timing(&mut self, timing: TimingProfile) {
        self.timing = timing;
    }

    /// The output pin, e.g. to inspect a simulated LED between messages.
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Give back the pin and delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Force the pin low.
    pub fn key_up(&mut self) -> Result<(), BeaconError> {
        self.pin.set_low().map_err(|_| BeaconError::PinWrite)
    }

    /// Print the startup banner.
    pub fn ready_banner(&self, status: &mut dyn Write) {
        let _ = writeln!(status, "{}", READY_BANNER);
        let _ = writeln!(status, "{}", READY_HINT);
    }

    /// Key one symbol: pulse, then one element gap. Blocks for the whole time.
    pub fn emit_symbol(&mut self, symbol: Symbol) -> Result<(), BeaconError> {
        let on_ms = match symbol {
            Symbol::Dot => self.timing.dot_ms(),
            Symbol::Dash => self.timing.dash_ms(),
        };

        if self.pin.set_high().is_err() {
            // Never leave the light stuck on
            let _ = self.pin.set_low();
            return Err(BeaconError::PinWrite);
        }
        self.wait(on_ms);

        self.key_up()?;
        self.wait(self.timing.element_gap_ms());

        log::trace!("{} {}ms", symbol.as_char(), on_ms);
        Ok(())
    }

    /// Key a whole character, then the extra inter-letter gap.
    ///
    /// An empty pattern does nothing; callers skip unsupported characters
    /// so that no gap is emitted without a preceding pulse.
    pub fn emit_character(&mut self, code: &[Symbol]) -> Result<(), BeaconError> {
        if code.is_empty() {
            return Ok(());
        }

        for &symbol in code {
            self.emit_symbol(symbol)?;
        }
        self.wait(self.timing.inter_letter_gap_ms());
        Ok(())
    }

    /// Transmit a message, echoing progress to `status`.
    ///
    /// The message is trimmed first; if nothing is left the call returns
    /// immediately without banners or pulses. Runs to completion.
    pub fn transmit(
        &mut self,
        message: &str,
        status: &mut dyn Write,
    ) -> Result<TransmitReport, BeaconError> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(TransmitReport::default());
        }

        let mut report = TransmitReport {
            transmitted: true,
            ..TransmitReport::default()
        };
        let start_ms = self.elapsed_ms;

        let _ = writeln!(status);
        let _ = writeln!(status, "Transmitting: {}", message);
        let _ = write!(status, "Code: ");

        for c in message.chars() {
            if c == ' ' {
                self.wait(self.timing.inter_word_gap_ms());
                let _ = write!(status, "{}", WORD_MARKER);
                report.word_gaps += 1;
                continue;
            }

            let code = lookup(c);
            if code.is_empty() {
                report.skipped += 1;
                continue;
            }

            let _ = write!(status, "{}:{} ", c.to_ascii_uppercase(), Code(code));
            self.emit_character(code)?;
            report.letters += 1;
        }

        let _ = writeln!(status);
        let _ = writeln!(status, "{}", COMPLETE_BANNER);

        report.elapsed_ms = self.elapsed_ms - start_ms;
        log::debug!(
            "sent {} letters, {} skipped, {} word gaps in {}ms",
            report.letters,
            report.skipped,
            report.word_gaps,
            report.elapsed_ms
        );
        Ok(report)
    }

    fn wait(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
        self.elapsed_ms += u64::from(ms);
    }
}
