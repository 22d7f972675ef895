//! Checked arithmetic over durations
//!
//! Scalar add/subtract plus variadic sum/difference. Every operation
//! routes through the flat seconds representation: validate, convert,
//! compute, convert back. A result that would be negative is a hard
//! error, never a clamp to zero.

use tracing::debug;

use crate::duration::{find_invalid, Duration};
use crate::error::{DurationError, DurationResult};

impl Duration {
    /// Add a non-negative second count.
    pub fn plus_seconds(&self, seconds: i64) -> DurationResult<Duration> {
        if !self.is_valid() {
            return Err(DurationError::InvalidDuration {
                op: "plus_seconds",
                inputs: format!("{{duration: {self:?}}}, {{seconds: {seconds}}}"),
                offending: format!("{self:?}"),
            });
        }
        if seconds < 0 {
            return Err(DurationError::NegativeSeconds {
                op: "plus_seconds",
                inputs: format!("{{duration: {self}}}, {{seconds: {seconds}}}"),
                advice: "; use `minus_seconds` to subtract seconds",
            });
        }

        Duration::from_seconds(self.to_seconds()? + seconds)
    }

    /// Subtract a non-negative second count.
    pub fn minus_seconds(&self, seconds: i64) -> DurationResult<Duration> {
        if !self.is_valid() {
            return Err(DurationError::InvalidDuration {
                op: "minus_seconds",
                inputs: format!("{{duration: {self:?}}}, {{seconds: {seconds}}}"),
                offending: format!("{self:?}"),
            });
        }
        if seconds < 0 {
            return Err(DurationError::NegativeSeconds {
                op: "minus_seconds",
                inputs: format!("{{duration: {self}}}, {{seconds: {seconds}}}"),
                advice: "; use `plus_seconds` to add seconds",
            });
        }

        let total = self.to_seconds()?;
        if total < seconds {
            return Err(DurationError::Underflow {
                op: "minus_seconds",
                inputs: format!("{{duration: {self}}}, {{seconds: {seconds}}}"),
            });
        }

        Duration::from_seconds(total - seconds)
    }
}

/// Sum a non-empty list of durations.
///
/// Every element is validated up front and the error names the first
/// offender. The fold is seeded with the first element, so no identity
/// value is ever fabricated; argument order does not affect the result.
pub fn sum(durations: &[Duration]) -> DurationResult<Duration> {
    let (&first, rest) = durations
        .split_first()
        .ok_or(DurationError::EmptyInput { op: "sum" })?;

    if let Some(bad) = find_invalid(durations) {
        return Err(DurationError::InvalidDuration {
            op: "sum",
            inputs: format!("{{durations: {}}}", debug_list(durations)),
            offending: format!("{bad:?}"),
        });
    }

    let mut total = first;
    for d in rest {
        total = total.plus_seconds(d.to_seconds()?)?;
    }

    Ok(total)
}

/// Subtract all subsequent durations from the first one.
///
/// Every element is validated up front. If any step of the fold would
/// go negative, the whole call fails with an error naming the complete
/// argument list; the caller asked for the end-to-end difference, not
/// for a particular reduction step.
pub fn difference(durations: &[Duration]) -> DurationResult<Duration> {
    let (&first, rest) = durations
        .split_first()
        .ok_or(DurationError::EmptyInput { op: "difference" })?;

    if let Some(bad) = find_invalid(durations) {
        return Err(DurationError::InvalidDuration {
            op: "difference",
            inputs: format!("{{durations: {}}}", debug_list(durations)),
            offending: format!("{bad:?}"),
        });
    }

    let mut total = first;
    for d in rest {
        total = match total.minus_seconds(d.to_seconds()?) {
            Ok(next) => next,
            Err(DurationError::Underflow { .. }) => {
                debug!(running = %total, subtrahend = %d, "difference underflowed");
                return Err(DurationError::NegativeDifference {
                    op: "difference",
                    inputs: format!("{{durations: {}}}", clock_list(durations)),
                });
            }
            Err(other) => return Err(other),
        };
    }

    Ok(total)
}

fn debug_list(durations: &[Duration]) -> String {
    let rendered: Vec<String> = durations.iter().map(|d| format!("{d:?}")).collect();
    format!("[{}]", rendered.join(", "))
}

fn clock_list(durations: &[Duration]) -> String {
    let rendered: Vec<String> = durations.iter().map(Duration::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
