//! Conversions between frame counts and durations at a given sample rate.
//!
//! Both directions truncate toward zero.

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

pub fn frame_count_to_duration(frames: usize, sample_rate: u32) -> Duration {
    if sample_rate == 0 {
        return Duration::from_secs(0);
    }
    let nanos = frames as u128 * NANOS_PER_SEC / sample_rate as u128;
    Duration::new(
        (nanos / NANOS_PER_SEC) as u64,
        (nanos % NANOS_PER_SEC) as u32,
    )
}

pub fn duration_to_frame_count(duration: Duration, sample_rate: u32) -> usize {
    let frames = duration.as_nanos() * sample_rate as u128 / NANOS_PER_SEC;
    if frames > usize::MAX as u128 {
        usize::MAX
    } else {
        frames as usize
    }
}
