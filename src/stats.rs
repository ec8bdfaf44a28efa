use crate::models::{Reading, Stats};

pub fn compute_stats(readings: &[Reading]) -> Stats {
    if readings.is_empty() {
        return Stats::empty();
    }

    let mut min = u32::MAX;
    let mut max = 0u32;
    let mut sum = 0u64;
    for reading in readings {
        min = min.min(reading.value);
        max = max.max(reading.value);
        sum += u64::from(reading.value);
    }

    // Round half up, matching the original client's Math.round.
    let avg = (sum as f64 / readings.len() as f64).round() as u32;

    Stats {
        avg,
        min,
        max,
        count: readings.len(),
    }
}
