use crate::error::*;
use crate::types::*;

/// The 12-byte descriptor at the start of every WAVE file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderChunk {
    pub chunk_id: ID,
    /// Size of everything after this field. Informational only.
    pub chunk_size: u32,
    pub form_type: ID,
}

impl HeaderChunk {
    pub(crate) fn read(data: &mut &[u8]) -> Result<Self> {
        let mut p = 0;
        let (chunk_id, n) = read_id(data, p)?;
        p += n;
        let (chunk_size, n) = read_u32_le(data, p)?;
        p += n;
        let (form_type, n) = read_id(data, p)?;
        p += n;

        if chunk_id != ID::RIFF {
            return Err(WavError::InvalidContainer);
        }
        if form_type != ID::WAVE {
            return Err(WavError::InvalidFormType);
        }

        *data = &data[p..];
        Ok(Self {
            chunk_id,
            chunk_size,
            form_type,
        })
    }
}
