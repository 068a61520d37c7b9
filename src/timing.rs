//! Module: timing
//!
//! Purpose: Morse timing derived from a single base unit.
//!
//! Architecture:
//! - Standard 1:3:1:3:7 ratio (dot : dash : element gap : letter gap : word gap)
//! - Letter and word gaps are stored as the *additional* wait after the
//!   1-unit element gap that every symbol already ends with
//! - Receive thresholds for the decoder come from the same unit
//! - Derived durations saturate; `BeaconConfig::validate` keeps units in range
//!
//! Safety: Safe. Copy types only.

/// Default base unit in milliseconds.
pub const DEFAULT_DOT_UNIT_MS: u32 = 200;

/// Largest base unit whose 7-unit word spacing still fits in a `u32`.
pub const MAX_DOT_UNIT_MS: u32 = u32::MAX / 7;

/// Transmit timing, all values in milliseconds.
///
/// Every field is derived from `dot_ms`; there is no way to build a profile
/// with an inconsistent ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingProfile {
    dot_ms: u32,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::new(DEFAULT_DOT_UNIT_MS)
    }
}

impl TimingProfile {
    /// Create a profile from the base unit.
    pub const fn new(dot_ms: u32) -> Self {
        Self { dot_ms }
    }

    /// Create a profile for the given speed.
    ///
    /// PARIS timing: dot = 1.2 / WPM seconds. A speed of 0 is treated as 1 WPM.
    pub const fn from_wpm(wpm: u32) -> Self {
        let wpm = if wpm == 0 { 1 } else { wpm };
        Self::new(1_200 / wpm)
    }

    /// Equivalent PARIS speed (rounded down). Returns 0 for a zero unit.
    #[inline]
    pub const fn wpm(&self) -> u32 {
        if self.dot_ms == 0 {
            0
        } else {
            1_200 / self.dot_ms
        }
    }

    /// Dot duration and inter-element gap (1 unit).
    #[inline]
    pub const fn dot_ms(&self) -> u32 {
        self.dot_ms
    }

    /// Dash duration (3 units).
    #[inline]
    pub const fn dash_ms(&self) -> u32 {
        self.dot_ms.saturating_mul(3)
    }

    /// Inter-element gap (1 unit), following every symbol.
    #[inline]
    pub const fn element_gap_ms(&self) -> u32 {
        self.dot_ms
    }

    /// Extra gap after a letter's last element gap (2 units, 3 in total).
    #[inline]
    pub const fn inter_letter_gap_ms(&self) -> u32 {
        self.dot_ms.saturating_mul(2)
    }

    /// Extra gap for a word boundary (6 units, 7 in total after an element gap).
    #[inline]
    pub const fn inter_word_gap_ms(&self) -> u32 {
        self.dot_ms.saturating_mul(6)
    }

    /// On-time at or above which a received pulse counts as a dash (2 units).
    #[inline]
    pub const fn dot_dash_threshold_ms(&self) -> u32 {
        self.dot_ms.saturating_mul(2)
    }

    /// Off-time at or above which the receiver closes a letter (2.5 units).
    #[inline]
    pub const fn letter_gap_threshold_ms(&self) -> u32 {
        self.dot_ms.saturating_mul(5) / 2
    }

    /// Off-time at or above which the receiver closes a word (5 units).
    #[inline]
    pub const fn word_gap_threshold_ms(&self) -> u32 {
        self.dot_ms.saturating_mul(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unit() {
        let t = TimingProfile::default();
        assert_eq!(t.dot_ms(), 200);
        assert_eq!(t.dash_ms(), 600);
        assert_eq!(t.inter_letter_gap_ms(), 400);
        assert_eq!(t.inter_word_gap_ms(), 1200);
    }

    #[test]
    fn test_ratio_holds_for_any_unit() {
        for unit in [1, 7, 60, 200, 999] {
            let t = TimingProfile::new(unit);
            assert_eq!(t.dash_ms(), 3 * unit);
            assert_eq!(t.element_gap_ms() + t.inter_letter_gap_ms(), 3 * unit);
            assert_eq!(t.element_gap_ms() + t.inter_word_gap_ms(), 7 * unit);
        }
    }

    #[test]
    fn test_wpm_round_trip() {
        let t = TimingProfile::from_wpm(20);
        assert_eq!(t.dot_ms(), 60);
        assert_eq!(t.wpm(), 20);

        // 200 ms dots are 6 WPM
        assert_eq!(TimingProfile::default().wpm(), 6);
    }

    #[test]
    fn test_zero_wpm_does_not_divide_by_zero() {
        assert_eq!(TimingProfile::from_wpm(0).dot_ms(), 1_200);
        assert_eq!(TimingProfile::new(0).wpm(), 0);
    }

    #[test]
    fn test_receive_thresholds_match_receiver_defaults() {
        let t = TimingProfile::default();
        assert_eq!(t.dot_dash_threshold_ms(), 400);
        assert_eq!(t.letter_gap_threshold_ms(), 500);
        assert_eq!(t.word_gap_threshold_ms(), 1000);
    }

    #[test]
    fn test_huge_unit_saturates() {
        let t = TimingProfile::new(u32::MAX);
        assert_eq!(t.dash_ms(), u32::MAX);
        assert_eq!(t.inter_word_gap_ms(), u32::MAX);
        assert_eq!(t.word_gap_threshold_ms(), u32::MAX);
    }

    #[test]
    fn test_max_unit_keeps_exact_ratio() {
        let t = TimingProfile::new(MAX_DOT_UNIT_MS);
        assert_eq!(t.dash_ms(), 3 * MAX_DOT_UNIT_MS);
        assert_eq!(t.element_gap_ms() + t.inter_word_gap_ms(), 7 * MAX_DOT_UNIT_MS);
    }
}
