//! Module: code
//!
//! Purpose: International Morse code table for letters and digits.
//!
//! Architecture:
//! - Constant data indexed by character offset, no branching per letter
//! - Unsupported characters map to the empty pattern (not an error)
//! - Reverse lookup for the receive path
//!
//! Safety: Safe. Immutable statics only.

use core::fmt;

/// A single Morse element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short pulse (1 unit).
    Dot,
    /// Long pulse (3 units).
    Dash,
}

impl Symbol {
    /// Text rendering used in status output.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    /// Parse `.` or `-`.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

use Symbol::{Dash as H, Dot as D};

const LETTERS: [&[Symbol]; 26] = [
    &[D, H],       // A
    &[H, D, D, D], // B
    &[H, D, H, D], // C
    &[H, D, D],    // D
    &[D],          // E
    &[D, D, H, D], // F
    &[H, H, D],    // G
    &[D, D, D, D], // H
    &[D, D],       // I
    &[D, H, H, H], // J
    &[H, D, H],    // K
    &[D, H, D, D], // L
    &[H, H],       // M
    &[H, D],       // N
    &[H, H, H],    // O
    &[D, H, H, D], // P
    &[H, H, D, H], // Q
    &[D, H, D],    // R
    &[D, D, D],    // S
    &[H],          // T
    &[D, D, H],    // U
    &[D, D, D, H], // V
    &[D, H, H],    // W
    &[H, D, D, H], // X
    &[H, D, H, H], // Y
    &[H, H, D, D], // Z
];

const DIGITS: [&[Symbol]; 10] = [
    &[H, H, H, H, H], // 0
    &[D, H, H, H, H], // 1
    &[D, D, H, H, H], // 2
    &[D, D, D, H, H], // 3
    &[D, D, D, D, H], // 4
    &[D, D, D, D, D], // 5
    &[H, D, D, D, D], // 6
    &[H, H, D, D, D], // 7
    &[H, H, H, D, D], // 8
    &[H, H, H, H, D], // 9
];

/// Immutable character → pattern mapping.
///
/// Adding punctuation later means adding a row of data here, not a branch.
pub struct CodeTable {
    letters: [&'static [Symbol]; 26],
    digits: [&'static [Symbol]; 10],
}

/// The process-wide code table.
pub static CODE_TABLE: CodeTable = CodeTable {
    letters: LETTERS,
    digits: DIGITS,
};

impl CodeTable {
    /// Number of supported characters.
    pub const LEN: usize = 36;

    /// Pattern for `c`, case-insensitive. Empty for unsupported characters.
    pub fn lookup(&self, c: char) -> &'static [Symbol] {
        match c.to_ascii_uppercase() {
            up @ 'A'..='Z' => self.letters[(up as u8 - b'A') as usize],
            d @ '0'..='9' => self.digits[(d as u8 - b'0') as usize],
            _ => &[],
        }
    }

    /// Character whose pattern is exactly `pattern`.
    pub fn decode(&self, pattern: &[Symbol]) -> Option<char> {
        if pattern.is_empty() {
            return None;
        }
        self.entries()
            .find(|(_, code)| *code == pattern)
            .map(|(c, _)| c)
    }

    /// All supported characters with their patterns, letters first.
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static [Symbol])> + '_ {
        let letters = self
            .letters
            .iter()
            .enumerate()
            .map(|(i, code)| ((b'A' + i as u8) as char, *code));
        let digits = self
            .digits
            .iter()
            .enumerate()
            .map(|(i, code)| ((b'0' + i as u8) as char, *code));
        letters.chain(digits)
    }
}

/// Look up a character in [`CODE_TABLE`].
#[inline]
pub fn lookup(c: char) -> &'static [Symbol] {
    CODE_TABLE.lookup(c)
}

/// Reverse lookup in [`CODE_TABLE`].
#[inline]
pub fn decode_pattern(pattern: &[Symbol]) -> Option<char> {
    CODE_TABLE.decode(pattern)
}

/// Displays a pattern as dots and dashes, e.g. `...`.
#[derive(Clone, Copy, Debug)]
pub struct Code<'a>(pub &'a [Symbol]);

impl fmt::Display for Code<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;
        for symbol in self.0 {
            f.write_char(symbol.as_char())?;
        }
        Ok(())
    }
}
