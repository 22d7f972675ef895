//! Benchmark support for clockspan
//!
//! Deterministic input builders shared by the criterion benches.

use clockspan_core::Duration;

/// Build a list of valid durations with varied fields
pub fn sample_durations(len: usize) -> Vec<Duration> {
    (0..len)
        .map(|i| {
            let i = i as i64;
            Duration::new(i % 48, (i * 7) % 60, (i * 13) % 60)
        })
        .collect()
}

/// A first element large enough that subtracting `sample_durations(len)`
/// from it never underflows
pub fn difference_seed(len: usize) -> Duration {
    Duration::new(48 * len as i64, 0, 0)
}
