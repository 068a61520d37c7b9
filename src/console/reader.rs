//! Byte-at-a-time line assembly for the serial port

use heapless::Vec;

/// Maximum message length in bytes. Longer input is truncated.
pub const LINE_SIZE: usize = 128;

/// Serial line reader.
///
/// Feed it every received byte; it hands back a message each time a
/// newline arrives. The returned line is raw (not trimmed).
pub struct LineReader {
    line: Vec<u8, LINE_SIZE>,
    /// Set after a line was handed out; the buffer is reset on the next byte
    complete: bool,
    /// Bytes dropped because the line was full
    overflow: u32,
}

impl LineReader {
    /// Create an empty reader
    pub const fn new() -> Self {
        Self {
            line: Vec::new(),
            complete: false,
            overflow: 0,
        }
    }

    /// Process a single input byte
    ///
    /// Returns `Some(line)` when a newline completes a message, `None` while
    /// more input is needed.
    pub fn process_byte(&mut self, byte: u8) -> Option<&str> {
        if self.complete {
            self.line.clear();
            self.complete = false;
        }

        match byte {
            b'\n' => {
                self.complete = true;
                if self.overflow > 0 {
                    log::warn!("line truncated, {} bytes dropped", self.overflow);
                    self.overflow = 0;
                }
                Some(self.text())
            }

            // CRLF terminals
            b'\r' => None,

            // Backspace / DEL
            0x7F | 0x08 => {
                self.line.pop();
                None
            }

            // Tabs are kept; trimming or the code table drops them later
            b'\t' | 0x20..=0x7E => {
                if self.line.push(byte).is_err() {
                    self.overflow += 1;
                }
                None
            }

            _ => None,
        }
    }

    /// Partial line received so far
    pub fn pending(&self) -> &str {
        if self.complete {
            ""
        } else {
            self.text()
        }
    }

    /// Hand out an unterminated last line, e.g. at end of input.
    ///
    /// Returns `None` when nothing is pending. The reader starts a fresh
    /// line on the next byte, as after a newline.
    pub fn flush(&mut self) -> Option<&str> {
        if self.complete || self.line.is_empty() {
            return None;
        }
        self.complete = true;
        Some(self.text())
    }

    /// Discard the partial line
    pub fn reset(&mut self) {
        self.line.clear();
        self.complete = false;
        self.overflow = 0;
    }

    // Only tab and printable ASCII are stored, so this never falls back
    fn text(&self) -> &str {
        core::str::from_utf8(&self.line).unwrap_or("")
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
