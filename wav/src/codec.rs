//! Conversion of raw sample bytes into normalized `f32` samples.

use crate::chunks::FormatChunk;
use byteorder::{ByteOrder, LE};
use std::fmt;

/// The format code stored in a `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Pcm,
    IeeeFloat,
    Extensible,
    Other(u16),
}

impl From<u16> for Encoding {
    fn from(value: u16) -> Self {
        match value {
            0x0001 => Encoding::Pcm,
            0x0003 => Encoding::IeeeFloat,
            0xfffe => Encoding::Extensible,
            other => Encoding::Other(other),
        }
    }
}

impl From<Encoding> for u16 {
    fn from(value: Encoding) -> Self {
        match value {
            Encoding::Pcm => 0x0001,
            Encoding::IeeeFloat => 0x0003,
            Encoding::Extensible => 0xfffe,
            Encoding::Other(other) => other,
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Pcm
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Pcm => write!(f, "PCM"),
            Encoding::IeeeFloat => write!(f, "IEEE float"),
            Encoding::Extensible => write!(f, "extensible"),
            Encoding::Other(code) => write!(f, "{:#06x}", code),
        }
    }
}

/// Key of the codec table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecFormat {
    pub encoding: Encoding,
    pub bits: u16,
}

impl fmt::Display for CodecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ encoding: {} bits: {} }}", self.encoding, self.bits)
    }
}

/// A sample decoding routine. Each variant reads one fixed storage layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Unsigned 8-bit.
    U8,
    /// Signed little-endian 16-bit.
    S16,
    /// Signed little-endian 24-bit, packed in 3 bytes.
    S24,
    /// Signed little-endian 32-bit.
    S32,
    /// IEEE-754 binary32.
    F32,
}

impl Codec {
    #[cfg(test)]
    const ALL: [Codec; 5] = [Codec::U8, Codec::S16, Codec::S24, Codec::S32, Codec::F32];

    /// The codec table.
    pub fn lookup(format: CodecFormat) -> Option<Codec> {
        match (format.encoding, format.bits) {
            (Encoding::Pcm, 8) => Some(Codec::U8),
            (Encoding::Pcm, 16) => Some(Codec::S16),
            (Encoding::Pcm, 24) => Some(Codec::S24),
            (Encoding::Pcm, 32) => Some(Codec::S32),
            (Encoding::Extensible, 24) => Some(Codec::S24),
            (Encoding::IeeeFloat, 32) => Some(Codec::F32),
            _ => None,
        }
    }

    /// Looks up the codec for a parsed format chunk.
    ///
    /// Extensible formats are tried under the encoding named by their
    /// sub-format GUID first, then under their own key.
    pub fn lookup_for(format: &FormatChunk) -> Option<Codec> {
        let key = format.codec_format();
        if key.encoding == Encoding::Extensible {
            let resolved = format
                .sub_format_encoding()
                .and_then(|encoding| Codec::lookup(CodecFormat { encoding, ..key }));
            if resolved.is_some() {
                return resolved;
            }
        }
        Codec::lookup(key)
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            Codec::U8 => 1,
            Codec::S16 => 2,
            Codec::S24 => 3,
            Codec::S32 | Codec::F32 => 4,
        }
    }

    /// Decodes `sample_count` samples from `src` into `dst`, returning the
    /// number of bytes consumed.
    ///
    /// # Panics
    ///
    /// If `src` holds fewer than `sample_count` samples or `dst` has fewer
    /// than `sample_count` slots.
    pub fn decode(self, src: &[u8], dst: &mut [f32], sample_count: usize) -> usize {
        let width = self.bytes_per_sample();
        let src = &src[..sample_count * width];
        let dst = &mut dst[..sample_count];

        match self {
            Codec::U8 => convert(src, dst, width, |b| b[0] as f32 / 128.0 - 1.0),
            Codec::S16 => convert(src, dst, width, |b| LE::read_i16(b) as f32 / 32_768.0),
            Codec::S24 => convert(src, dst, width, |b| LE::read_i24(b) as f32 / 8_388_608.0),
            Codec::S32 => convert(src, dst, width, |b| {
                LE::read_i32(b) as f32 / 2_147_483_648.0
            }),
            Codec::F32 => convert(src, dst, width, LE::read_f32),
        }

        src.len()
    }
}

fn convert<F>(src: &[u8], dst: &mut [f32], width: usize, f: F)
where
    F: Fn(&[u8]) -> f32,
{
    for (out, bytes) in dst.iter_mut().zip(src.chunks_exact(width)) {
        *out = f(bytes);
    }
}
