//! Timestamp sampling for snapshot extraction.
//!
//! Snapshots are taken from the 5%-35% window of the video, which skips
//! intros while staying in material that is representative of the whole.
//! The window is split into `count + 1` equal intervals; each timestamp
//! sits on its interval boundary plus a random offset.

use rand::{Rng, SeedableRng, rngs::StdRng, thread_rng};

use crate::error::{CoreError, CoreResult};

/// Integer bounds of the sampling window for a given duration and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingWindow {
    /// 5% of the duration
    pub start: u64,
    /// 35% of the duration
    pub end: u64,
    /// Minimum spacing between consecutive timestamps
    pub interval: u64,
}

impl SamplingWindow {
    /// Computes the window, failing when it cannot hold `count` samples.
    pub fn new(duration_secs: u64, count: u32) -> CoreResult<Self> {
        if count == 0 {
            return Err(CoreError::Config(
                "Number of snapshots must be a positive integer, got 0".to_string(),
            ));
        }

        let start = duration_secs / 20;
        let end = duration_secs.saturating_mul(35) / 100;
        if end <= start {
            return Err(CoreError::InsufficientDuration(format!(
                "A {duration_secs}s video has no usable sampling window ({start}s-{end}s)"
            )));
        }

        let interval = (end - start) / (u64::from(count) + 1);
        if interval < 1 {
            return Err(CoreError::InvalidDuration(format!(
                "A {duration_secs}s video is too short for {count} snapshots \
                 (window {start}s-{end}s)"
            )));
        }

        Ok(Self { start, end, interval })
    }
}

/// Samples `count` timestamps for a video of `duration_secs` seconds.
///
/// Uses a seeded generator when `seed` is given so runs are reproducible.
pub fn sample_timestamps(duration_secs: u64, count: u32, seed: Option<u64>) -> CoreResult<Vec<u64>> {
    match seed {
        Some(seed) => sample_timestamps_with_rng(duration_secs, count, &mut StdRng::seed_from_u64(seed)),
        None => sample_timestamps_with_rng(duration_secs, count, &mut thread_rng()),
    }
}

/// Samples `count` strictly increasing timestamps from `rng`.
///
/// Timestamp `k` (1-based) is `start + k * interval + offset_k`, where the
/// offsets are drawn from `[0, interval - 1]` and sorted. Each step from the
/// previous timestamp is therefore `interval` plus a non-negative random
/// amount, and the last timestamp never passes `end - 1`.
pub fn sample_timestamps_with_rng<R: Rng>(
    duration_secs: u64,
    count: u32,
    rng: &mut R,
) -> CoreResult<Vec<u64>> {
    let window = SamplingWindow::new(duration_secs, count)?;

    let mut offsets: Vec<u64> = (0..count)
        .map(|_| rng.gen_range(0..window.interval))
        .collect();
    offsets.sort_unstable();

    let timestamps: Vec<u64> = offsets
        .iter()
        .zip(1..=u64::from(count))
        .map(|(offset, k)| window.start + k * window.interval + offset)
        .collect();

    log::debug!(
        "Sampling window {}s-{}s, interval {}s, timestamps {:?}",
        window.start,
        window.end,
        window.interval,
        timestamps
    );
    Ok(timestamps)
}
