//! Morse receiver finite state machine.
//!
//! Pure logic, no hardware dependencies. Consumes light level samples with
//! timestamps, produces decoded text. Fully testable on host.
//!
//! # Classification
//!
//! - On-time below the dot/dash threshold (2 units) is a dot, otherwise a dash
//! - Off-time of 2.5 units closes a letter, 5 units closes a word
//! - A long dark period closes the word even without a following edge
//! - Patterns not in the table decode as [`UNKNOWN_CHAR`]

use heapless::{String, Vec};

use crate::code::{decode_pattern, Symbol};
use crate::timing::TimingProfile;

/// Rendered for a pattern that has no table entry.
pub const UNKNOWN_CHAR: char = '#';

/// Longest pattern kept; anything longer is unknown anyway.
const MAX_PATTERN: usize = 8;

/// Default decoded text capacity.
pub const TEXT_CAPACITY: usize = 128;

/// What a tick recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeEvent {
    Dot,
    Dash,
    /// A letter was closed and appended.
    Letter(char),
    /// A word space was appended (after flushing any pending letter).
    WordSpace,
}

/// Edge-timed Morse decoder.
///
/// # Example
///
/// ```
/// use rust_cw_beacon::decoder::Decoder;
/// use rust_cw_beacon::timing::TimingProfile;
///
/// let mut rx: Decoder = Decoder::new(TimingProfile::new(100));
/// rx.tick(0, true);
/// rx.tick(100, false); // dot
/// rx.tick(200, true);
/// rx.tick(500, false); // dash
/// assert_eq!(rx.finish(), "A");
/// ```
pub struct Decoder<const N: usize = TEXT_CAPACITY> {
    timing: TimingProfile,
    lit: bool,
    last_edge_ms: u64,
    pending: Vec<Symbol, MAX_PATTERN>,
    text: String<N>,
}

impl<const N: usize> Decoder<N> {
    /// Create a decoder; the line is assumed dark at t=0.
    pub fn new(timing: TimingProfile) -> Self {
        Self {
            timing,
            lit: false,
            last_edge_ms: 0,
            pending: Vec::new(),
            text: String::new(),
        }
    }

    /// Feed the light level observed at `now_ms`.
    pub fn tick(&mut self, now_ms: u64, lit: bool) -> Option<DecodeEvent> {
        let held_ms = now_ms.saturating_sub(self.last_edge_ms);

        if lit == self.lit {
            // Steady dark: close the word once it has been quiet long enough
            if !lit && held_ms >= u64::from(self.timing.word_gap_threshold_ms()) {
                return self.close_word();
            }
            return None;
        }

        self.lit = lit;
        self.last_edge_ms = now_ms;

        if lit {
            // Dark period ended
            if held_ms >= u64::from(self.timing.word_gap_threshold_ms()) {
                self.close_word()
            } else if held_ms >= u64::from(self.timing.letter_gap_threshold_ms()) {
                self.close_letter().map(DecodeEvent::Letter)
            } else {
                None
            }
        } else {
            // Pulse ended
            let symbol = if held_ms < u64::from(self.timing.dot_dash_threshold_ms()) {
                Symbol::Dot
            } else {
                Symbol::Dash
            };
            // Overlong patterns are unknown regardless of what is dropped
            let _ = self.pending.push(symbol);
            Some(match symbol {
                Symbol::Dot => DecodeEvent::Dot,
                Symbol::Dash => DecodeEvent::Dash,
            })
        }
    }

    /// Flush the pending letter and return the decoded text without
    /// trailing spaces.
    pub fn finish(&mut self) -> &str {
        self.close_letter();
        self.text.trim_end()
    }

    /// Text decoded so far (pending symbols not included).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Symbols of the letter currently being received.
    pub fn pending(&self) -> &[Symbol] {
        &self.pending
    }

    /// Drop all text and pending symbols; restart timing at `now_ms`.
    pub fn clear(&mut self, now_ms: u64) {
        self.pending.clear();
        self.text.clear();
        self.lit = false;
        self.last_edge_ms = now_ms;
    }

    fn close_letter(&mut self) -> Option<char> {
        if self.pending.is_empty() {
            return None;
        }
        let c = decode_pattern(&self.pending).unwrap_or(UNKNOWN_CHAR);
        self.pending.clear();
        let _ = self.text.push(c);
        Some(c)
    }

    fn close_word(&mut self) -> Option<DecodeEvent> {
        self.close_letter();
        if self.text.is_empty() || self.text.ends_with(' ') {
            return None;
        }
        let _ = self.text.push(' ');
        Some(DecodeEvent::WordSpace)
    }
}
