use crate::codec::CodecFormat;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WavError {
    #[error("truncated input: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },
    #[error("container is not RIFF")]
    InvalidContainer,
    #[error("form type is not WAVE")]
    InvalidFormType,

    #[error("missing format chunk")]
    MissingFmt,
    #[error("missing data chunk")]
    MissingData,

    #[error("channel count must be nonzero")]
    InvalidChannelCount,
    #[error("sample rate must be nonzero")]
    InvalidSampleRate,
    #[error("block align is {declared}, expected {expected}")]
    InvalidBlockAlign { declared: u16, expected: u32 },

    #[error("unsupported codec format {0}")]
    UnsupportedCodec(CodecFormat),
}

pub type Result<T> = std::result::Result<T, WavError>;
