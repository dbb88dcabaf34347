use crate::buffer::{Buffer, Interleaved};
use crate::chunks::*;
use crate::codec::{Codec, CodecFormat};
use crate::error::*;
use crate::time::*;
use log::debug;
use std::ops::Range;
use std::time::Duration;

/// Samples decoded at once when filling a [`Buffer`].
pub const SPLIT_BUFFER_SIZE: usize = 1 << 10;

/// How a [`WavReader::read`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The destination was filled and more frames remain.
    Filled,
    /// Every frame has been delivered.
    EndOfStream,
}

/// A seekable source of normalized samples over an in-memory WAVE file.
///
/// Cloning gives an independent cursor over the same borrowed bytes.
#[derive(Debug, Clone)]
pub struct WavReader<'a> {
    header: HeaderChunk,
    format: FormatChunk,
    data: DataChunk<'a>,
    /// Byte offset of the next undecoded frame in the data chunk.
    head: usize,

    block: Vec<f32>,
    /// Decoded samples in `block` not yet handed out by `read`.
    buffered: Range<usize>,
}

impl<'a> WavReader<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut rest = data;
        let header = HeaderChunk::read(&mut rest)?;
        let format = FormatChunk::read(&mut rest)?;
        let data = DataChunk::read(&mut rest)?;

        let block_len = SPLIT_BUFFER_SIZE.max(format.num_channels as usize);
        let reader = Self {
            header,
            format,
            data,
            head: 0,
            block: vec![0.0; block_len],
            buffered: 0..0,
        };
        debug!(
            "decoded {} frames ({:?}) of {}",
            reader.frame_count(),
            reader.duration(),
            reader.codec_format()
        );
        Ok(reader)
    }

    pub fn header(&self) -> &HeaderChunk {
        &self.header
    }
    pub fn format(&self) -> &FormatChunk {
        &self.format
    }
    pub fn data(&self) -> &DataChunk<'a> {
        &self.data
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.format.bits_per_sample()
    }
    pub fn frame_count(&self) -> usize {
        self.data.len() / self.block_align()
    }
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }
    pub fn channel_count(&self) -> usize {
        self.format.num_channels as usize
    }
    pub fn codec_format(&self) -> CodecFormat {
        self.format.codec_format()
    }

    pub fn duration(&self) -> Duration {
        frame_count_to_duration(self.frame_count(), self.sample_rate())
    }

    /// Time of the next frame [`read`](Self::read) will deliver.
    pub fn position(&self) -> Duration {
        let decoded = self.head / self.block_align();
        let pending = self.buffered.len() / self.channel_count();
        frame_count_to_duration(decoded - pending, self.sample_rate())
    }

    /// Moves to the frame at `offset`, or to the end if `offset` is past it,
    /// and returns the position actually reached.
    ///
    /// Samples decoded ahead by [`read`](Self::read) are discarded.
    pub fn seek(&mut self, offset: Duration) -> Duration {
        let frames = duration_to_frame_count(offset, self.sample_rate()).min(self.frame_count());
        self.head = frames * self.block_align();
        self.buffered = 0..0;
        self.position()
    }

    /// Decodes as many whole frames as fit in `block`, returning how many were
    /// written. Zero means the data chunk is exhausted.
    ///
    /// This reads from the data chunk directly and does not see samples
    /// already decoded ahead by [`read`](Self::read).
    pub fn read_block(&mut self, block: &mut [f32]) -> Result<usize> {
        let frames_left = self.frames_left();
        if frames_left == 0 {
            return Ok(0);
        }

        let channels = self.channel_count();
        let frames = (block.len() / channels).min(frames_left);
        let codec = self.codec()?;

        let src = &self.data.raw_data()[self.head..];
        self.head += codec.decode(src, block, frames * channels);
        Ok(frames)
    }

    /// Fills `buf` with frames, returning the number written and whether the
    /// source ran out.
    pub fn read<B: Buffer>(&mut self, mut buf: B) -> Result<(usize, Status)> {
        if self.is_exhausted() {
            return Ok((0, Status::EndOfStream));
        }

        let channels = self.channel_count();
        let mut total = 0;
        while !buf.is_empty() {
            if self.buffered.is_empty() {
                let frames = self.fill_block()?;
                if frames == 0 {
                    break;
                }
                self.buffered = 0..frames * channels;
            }

            let frames = buf.copy_interleaved(channels, &self.block[self.buffered.clone()]);
            self.buffered.start += frames * channels;
            buf.cut_leading(frames);
            total += frames;
        }

        if self.is_exhausted() {
            Ok((total, Status::EndOfStream))
        } else {
            Ok((total, Status::Filled))
        }
    }

    /// Decodes every remaining frame into one interleaved vector.
    pub fn read_to_end(&mut self) -> Result<Vec<f32>> {
        let channels = self.channel_count();
        let mut samples = vec![0.0; self.frames_left() * channels + self.buffered.len()];
        let (frames, _) = self.read(Interleaved::new(&mut samples, channels))?;
        samples.truncate(frames * channels);
        Ok(samples)
    }

    fn codec(&self) -> Result<Codec> {
        Codec::lookup_for(&self.format)
            .ok_or_else(|| WavError::UnsupportedCodec(self.codec_format()))
    }

    fn fill_block(&mut self) -> Result<usize> {
        let mut block = std::mem::take(&mut self.block);
        let frames = self.read_block(&mut block);
        self.block = block;
        frames
    }

    fn block_align(&self) -> usize {
        self.format.block_align as usize
    }

    fn frames_left(&self) -> usize {
        (self.data.len() - self.head) / self.block_align()
    }

    fn is_exhausted(&self) -> bool {
        self.frames_left() == 0 && self.buffered.is_empty()
    }
}
