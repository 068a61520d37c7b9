//! Serial text input
//!
//! Polled from the main loop between transmissions.
//! Zero heap allocation: the line lives in a fixed `heapless::Vec`.

pub mod reader;

pub use reader::{LineReader, LINE_SIZE};
