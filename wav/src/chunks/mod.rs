//! Parsers for the chunks a WAVE file requires.

mod data;
mod fmt;
mod riff;

pub use self::data::DataChunk;
pub use self::fmt::FormatChunk;
pub use self::riff::HeaderChunk;
