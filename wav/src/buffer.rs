//! Destinations that [`WavReader::read`](crate::WavReader::read) fills.

/// A multi-channel sample destination with a write cursor at its front.
///
/// Readers take buffers by value: the views below only borrow the caller's
/// storage, so advancing one never moves the caller's own slices.
pub trait Buffer {
    fn channel_count(&self) -> usize;

    /// Frames that still fit in the buffer.
    fn frame_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Drops the first `frames` frames, as they have been delivered.
    fn cut_leading(&mut self, frames: usize);

    /// Copies whole frames from interleaved `src` holding `channels` channels
    /// into the front of the buffer, returning how many frames were copied.
    ///
    /// Destination channel `c` receives source channel `c % channels`.
    fn copy_interleaved(&mut self, channels: usize, src: &[f32]) -> usize;
}

/// Interleaved samples in one slice.
#[derive(Debug)]
pub struct Interleaved<'a> {
    data: &'a mut [f32],
    channels: usize,
}

impl<'a> Interleaved<'a> {
    /// # Panics
    ///
    /// If `channels` is zero.
    pub fn new(data: &'a mut [f32], channels: usize) -> Self {
        assert!(channels > 0, "an interleaved buffer needs at least one channel");
        Self { data, channels }
    }
}

impl<'a> Buffer for Interleaved<'a> {
    fn channel_count(&self) -> usize {
        self.channels
    }

    fn frame_count(&self) -> usize {
        self.data.len() / self.channels
    }

    fn cut_leading(&mut self, frames: usize) {
        let data = std::mem::take(&mut self.data);
        let skip = frames.saturating_mul(self.channels).min(data.len());
        self.data = &mut data[skip..];
    }

    fn copy_interleaved(&mut self, channels: usize, src: &[f32]) -> usize {
        if channels == 0 {
            return 0;
        }
        let frames = (src.len() / channels).min(self.frame_count());
        let dst = self.data.chunks_exact_mut(self.channels);
        for (out, frame) in dst.zip(src.chunks_exact(channels)).take(frames) {
            for (c, sample) in out.iter_mut().enumerate() {
                *sample = frame[c % channels];
            }
        }
        frames
    }
}

/// One slice per channel.
#[derive(Debug, Default)]
pub struct Planar<'a> {
    channels: Vec<&'a mut [f32]>,
}

impl<'a> Planar<'a> {
    pub fn new(channels: Vec<&'a mut [f32]>) -> Self {
        Self { channels }
    }
}

impl<'a> Buffer for Planar<'a> {
    fn channel_count(&self) -> usize {
        self.channels.len()
    }

    fn frame_count(&self) -> usize {
        self.channels.iter().map(|ch| ch.len()).min().unwrap_or(0)
    }

    fn cut_leading(&mut self, frames: usize) {
        for ch in self.channels.iter_mut() {
            let data = std::mem::take(ch);
            let skip = frames.min(data.len());
            *ch = &mut data[skip..];
        }
    }

    fn copy_interleaved(&mut self, channels: usize, src: &[f32]) -> usize {
        if channels == 0 {
            return 0;
        }
        let frames = (src.len() / channels).min(self.frame_count());
        for (c, ch) in self.channels.iter_mut().enumerate() {
            let samples = src.iter().skip(c % channels).step_by(channels);
            for (out, &sample) in ch[..frames].iter_mut().zip(samples) {
                *out = sample;
            }
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_copies_whole_frames() {
        let mut storage = [0.0; 5];
        let mut buf = Interleaved::new(&mut storage, 2);
        assert_eq!(buf.frame_count(), 2);

        let copied = buf.copy_interleaved(2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(copied, 2);
        assert_eq!(storage, [1.0, 2.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn interleaved_cut_leading_advances_view_only() {
        let mut storage = [0.0; 6];
        {
            let mut buf = Interleaved::new(&mut storage, 2);
            buf.cut_leading(1);
            assert_eq!(buf.frame_count(), 2);
            assert_eq!(buf.copy_interleaved(2, &[7.0, 8.0]), 1);
            buf.cut_leading(5);
            assert!(buf.is_empty());
        }
        assert_eq!(storage, [0.0, 0.0, 7.0, 8.0, 0.0, 0.0]);
    }

    #[test]
    fn interleaved_maps_channels_by_modulo() {
        let mut storage = [0.0; 4];
        let mut buf = Interleaved::new(&mut storage, 2);
        assert_eq!(buf.copy_interleaved(1, &[0.25, 0.5]), 2);
        assert_eq!(storage, [0.25, 0.25, 0.5, 0.5]);
    }

    #[test]
    fn planar_deinterleaves() {
        let mut left = [0.0; 3];
        let mut right = [0.0; 2];
        {
            let mut buf = Planar::new(vec![&mut left[..], &mut right[..]]);
            assert_eq!(buf.channel_count(), 2);
            assert_eq!(buf.frame_count(), 2);

            assert_eq!(buf.copy_interleaved(2, &[1.0, -1.0]), 1);
            buf.cut_leading(1);
            assert_eq!(buf.copy_interleaved(2, &[2.0, -2.0, 3.0, -3.0]), 1);
            buf.cut_leading(1);
            assert!(buf.is_empty());
        }
        assert_eq!(left, [1.0, 2.0, 0.0]);
        assert_eq!(right, [-1.0, -2.0]);
    }

    #[test]
    fn empty_planar_buffer_is_full() {
        let buf = Planar::default();
        assert!(buf.is_empty());
    }

    #[test]
    #[should_panic]
    fn interleaved_needs_a_channel() {
        Interleaved::new(&mut [], 0);
    }
}
