//! Decoding of RIFF/WAVE files into normalized `f32` samples.
//!
//! A [`WavReader`] borrows a whole file held in memory, parses its `fmt `
//! and `data` chunks, and decodes 8/16/24/32-bit PCM, 32-bit float and
//! extensible variants of those on demand.

pub mod buffer;
pub mod chunks;
pub mod codec;
mod error;
mod reader;
pub mod time;
pub mod types;

pub use buffer::{Buffer, Interleaved, Planar};
pub use codec::{Codec, CodecFormat, Encoding};
pub use error::{Result, WavError};
pub use reader::{Status, WavReader, SPLIT_BUFFER_SIZE};
