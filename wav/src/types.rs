use crate::error::*;
use byteorder::{ByteOrder, LE};
use log::trace;
use std::fmt;

/// Size of a chunk header: the tag followed by the little-endian size.
pub const CHUNK_HEADER_SIZE: usize = 8;

/// The outer `RIFF` chunk only carries its form type before the sub-chunks start.
const FORM_TYPE_SIZE: usize = 4;

#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct ID(pub [u8; 4]);

impl ID {
    pub const RIFF: ID = ID(*b"RIFF");
    pub const WAVE: ID = ID(*b"WAVE");
    pub const FMT: ID = ID(*b"fmt ");
    pub const DATA: ID = ID(*b"data");

    pub fn data(&self) -> &[u8] {
        &self.0
    }
}

impl Default for ID {
    fn default() -> Self {
        ID([0; 4])
    }
}

impl fmt::Debug for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID(")?;
        fmt::Display::fmt(&self, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            match b {
                0x20..=0x7e => write!(f, "{}", b as char)?,
                _ => write!(f, "\\x{:02x}", b)?,
            }
        }
        Ok(())
    }
}

fn field(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let end = offset.saturating_add(len);
    if data.len() < end {
        return Err(WavError::Truncated {
            needed: end,
            available: data.len(),
        });
    }
    Ok(&data[offset..end])
}

pub fn read_u16_le(data: &[u8], offset: usize) -> Result<(u16, usize)> {
    Ok((LE::read_u16(field(data, offset, 2)?), 2))
}

pub fn read_u32_le(data: &[u8], offset: usize) -> Result<(u32, usize)> {
    Ok((LE::read_u32(field(data, offset, 4)?), 4))
}

pub fn read_id(data: &[u8], offset: usize) -> Result<(ID, usize)> {
    let mut id = [0; 4];
    id.copy_from_slice(field(data, offset, 4)?);
    Ok((ID(id), 4))
}

pub fn read_guid(data: &[u8], offset: usize) -> Result<([u8; 16], usize)> {
    let mut guid = [0; 16];
    guid.copy_from_slice(field(data, offset, 16)?);
    Ok((guid, 16))
}

/// Scans sibling chunks for `target`, returning the input starting at the
/// matching chunk's header.
///
/// The outer `RIFF` chunk is stepped into rather than over, so scanning may
/// start at the very beginning of a file. Every other chunk is skipped by its
/// declared size rounded up to an even length, as RIFF writers pad odd chunks.
pub fn find_chunk(data: &[u8], target: ID) -> Option<&[u8]> {
    let mut data = data;
    while data.len() >= CHUNK_HEADER_SIZE {
        let id = ID([data[0], data[1], data[2], data[3]]);
        let size = LE::read_u32(&data[4..8]) as usize;
        if id == target {
            return Some(data);
        }

        let skip = if id == ID::RIFF {
            FORM_TYPE_SIZE
        } else {
            size.saturating_add(size & 1)
        };
        let next = CHUNK_HEADER_SIZE.saturating_add(skip);
        if next > data.len() {
            trace!("chunk {} runs past the end of the input", id);
            return None;
        }

        trace!("skipping chunk {} ({} bytes)", id, size);
        data = &data[next..];
    }
    None
}
