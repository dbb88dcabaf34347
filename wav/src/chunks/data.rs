use crate::error::*;
use crate::types::*;
use log::warn;

/// The `data` chunk, borrowing the interleaved sample bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataChunk<'a> {
    pub chunk_id: ID,
    /// Declared payload size; may exceed what the file actually holds.
    pub chunk_size: u32,
    data: &'a [u8],
}

impl<'a> DataChunk<'a> {
    pub(crate) fn read(data: &mut &'a [u8]) -> Result<Self> {
        let chunk = find_chunk(*data, ID::DATA).ok_or(WavError::MissingData)?;

        let mut p = 0;
        let (chunk_id, n) = read_id(chunk, p)?;
        p += n;
        let (chunk_size, n) = read_u32_le(chunk, p)?;
        p += n;

        let mut end = p.saturating_add(chunk_size as usize);
        if end > chunk.len() {
            warn!(
                "data chunk declares {} bytes but only {} are present",
                chunk_size,
                chunk.len() - p
            );
            end = chunk.len();
        }

        let samples = &chunk[p..end];
        if end % 2 == 1 && end < chunk.len() {
            end += 1;
        }
        *data = &chunk[end..];

        Ok(Self {
            chunk_id,
            chunk_size,
            data: samples,
        })
    }

    pub fn raw_data(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_declared_payload() {
        let bytes = b"data\x04\x00\x00\x00\x01\x02\x03\x04LIST";
        let mut data = &bytes[..];
        let chunk = DataChunk::read(&mut data).unwrap();

        assert_eq!(chunk.chunk_id, ID::DATA);
        assert_eq!(chunk.chunk_size, 4);
        assert_eq!(chunk.raw_data(), &[1, 2, 3, 4]);
        assert_eq!(data, b"LIST");
    }

    #[test]
    fn clamps_truncated_payload() {
        let bytes = b"data\xff\xff\x00\x00\x01\x02\x03";
        let chunk = DataChunk::read(&mut &bytes[..]).unwrap();
        assert_eq!(chunk.chunk_size, 0xffff);
        assert_eq!(chunk.len(), 3);
        assert_eq!(chunk.raw_data(), &[1, 2, 3]);
    }

    #[test]
    fn skips_pad_byte() {
        let bytes = b"data\x01\x00\x00\x00\x7f\x00rest";
        let mut data = &bytes[..];
        let chunk = DataChunk::read(&mut data).unwrap();
        assert_eq!(chunk.raw_data(), &[0x7f]);
        assert_eq!(data, b"rest");
    }

    #[test]
    fn missing_chunk() {
        assert_eq!(
            DataChunk::read(&mut &b"LIST\x00\x00\x00\x00"[..]),
            Err(WavError::MissingData)
        );
        assert_eq!(DataChunk::read(&mut &b"dat"[..]), Err(WavError::MissingData));
    }
}
