use crate::codec::{CodecFormat, Encoding};
use crate::error::*;
use crate::types::*;
use byteorder::{ByteOrder, LE};
use log::debug;

/// Trailing 14 bytes shared by every `KSDATAFORMAT_SUBTYPE_*` GUID. The two
/// leading bytes hold the format code.
const SUBTYPE_GUID_TAIL: [u8; 14] = [
    0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
];

const CORE_SIZE: usize = 16;
const EXT_SIZE_END: usize = 18;
const EXTENSION_SIZE: u16 = 22;
const EXTENSION_END: usize = 40;

/// The `fmt ` chunk: how samples are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatChunk {
    pub chunk_id: ID,
    pub chunk_size: u32,
    pub encoding: Encoding,
    pub num_channels: u16,
    pub sample_rate: u32,
    /// `sample_rate * block_align`. Informational only.
    pub byte_rate: u32,
    /// Bytes per frame across all channels.
    pub block_align: u16,
    /// Container size of one sample.
    pub bits_per_sample: u16,

    // Only present for non-PCM encodings.
    pub ex_size: u16,
    pub ex_bits_per_sample: u16,
    pub ex_channel_mask: u32,
    pub ex_guid: [u8; 16],
}

impl FormatChunk {
    /// Finds the `fmt ` chunk in `data` and decodes it, leaving `data` just
    /// past the chunk.
    pub(crate) fn read(data: &mut &[u8]) -> Result<Self> {
        let chunk = find_chunk(*data, ID::FMT).ok_or(WavError::MissingFmt)?;

        let mut p = 0;
        let mut fmt = FormatChunk::default();
        let (chunk_id, n) = read_id(chunk, p)?;
        fmt.chunk_id = chunk_id;
        p += n;
        let (chunk_size, n) = read_u32_le(chunk, p)?;
        fmt.chunk_size = chunk_size;
        p += n;
        if (chunk_size as usize) < CORE_SIZE {
            return Err(WavError::Truncated {
                needed: CORE_SIZE,
                available: chunk_size as usize,
            });
        }

        let (encoding, n) = read_u16_le(chunk, p)?;
        fmt.encoding = encoding.into();
        p += n;
        let (num_channels, n) = read_u16_le(chunk, p)?;
        fmt.num_channels = num_channels;
        p += n;
        let (sample_rate, n) = read_u32_le(chunk, p)?;
        fmt.sample_rate = sample_rate;
        p += n;
        let (byte_rate, n) = read_u32_le(chunk, p)?;
        fmt.byte_rate = byte_rate;
        p += n;
        let (block_align, n) = read_u16_le(chunk, p)?;
        fmt.block_align = block_align;
        p += n;
        let (bits_per_sample, _) = read_u16_le(chunk, p)?;
        fmt.bits_per_sample = bits_per_sample;

        let body = &chunk[CHUNK_HEADER_SIZE..];
        let body_len = (chunk_size as usize).min(body.len());
        if fmt.encoding != Encoding::Pcm {
            fmt.read_extension(&body[..body_len])?;
        }

        fmt.validate()?;
        debug!(
            "format: {} channels, {} Hz, {} bits, {}",
            fmt.num_channels,
            fmt.sample_rate,
            fmt.bits_per_sample(),
            fmt.encoding
        );

        let end = body_len + (body_len & 1);
        *data = &body[end.min(body.len())..];
        Ok(fmt)
    }

    fn read_extension(&mut self, body: &[u8]) -> Result<()> {
        if body.len() < EXT_SIZE_END {
            return Ok(());
        }
        let mut p = CORE_SIZE;
        let (ex_size, n) = read_u16_le(body, p)?;
        self.ex_size = ex_size;
        p += n;

        if ex_size < EXTENSION_SIZE || body.len() < EXTENSION_END {
            return Ok(());
        }
        let (ex_bits_per_sample, n) = read_u16_le(body, p)?;
        self.ex_bits_per_sample = ex_bits_per_sample;
        p += n;
        let (ex_channel_mask, n) = read_u32_le(body, p)?;
        self.ex_channel_mask = ex_channel_mask;
        p += n;
        let (ex_guid, _) = read_guid(body, p)?;
        self.ex_guid = ex_guid;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.num_channels == 0 {
            return Err(WavError::InvalidChannelCount);
        }
        if self.sample_rate == 0 {
            return Err(WavError::InvalidSampleRate);
        }

        let expected = self.num_channels as u32 * ((self.bits_per_sample as u32 + 7) / 8);
        if self.block_align == 0 || self.block_align as u32 != expected {
            return Err(WavError::InvalidBlockAlign {
                declared: self.block_align,
                expected,
            });
        }

        let byte_rate = self.sample_rate as u64 * self.block_align as u64;
        if self.byte_rate as u64 != byte_rate {
            debug!(
                "byte rate is {}, expected {}; ignoring",
                self.byte_rate, byte_rate
            );
        }
        Ok(())
    }

    /// Bits of precision per sample: the extension's valid bits when it
    /// declares any, otherwise the container size.
    pub fn bits_per_sample(&self) -> u16 {
        if self.ex_bits_per_sample > 0 {
            self.ex_bits_per_sample
        } else {
            self.bits_per_sample
        }
    }

    /// The codec table key for this format.
    pub fn codec_format(&self) -> CodecFormat {
        CodecFormat {
            encoding: self.encoding,
            bits: self.bits_per_sample,
        }
    }

    /// The encoding carried in the sub-format GUID of an extensible format.
    pub fn sub_format_encoding(&self) -> Option<Encoding> {
        if self.encoding != Encoding::Extensible || self.ex_guid[2..] != SUBTYPE_GUID_TAIL {
            return None;
        }
        Some(LE::read_u16(&self.ex_guid[0..2]).into())
    }
}
