//! Clock-string rendering with field selection and unit suffixes
//!
//! Rendering always emits fields in hours -> minutes -> seconds order,
//! zero-padded to two digits, with a literal `:` between consecutive
//! rendered fields only. Fields that are not included contribute
//! nothing, separator included.

use crate::duration::Duration;
use crate::error::{DurationError, DurationResult};

/// Which duration fields to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncludeFields {
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
}

impl IncludeFields {
    /// Render all three fields
    pub const ALL: IncludeFields = IncludeFields {
        hours: true,
        minutes: true,
        seconds: true,
    };

    /// Render nothing
    pub const NONE: IncludeFields = IncludeFields {
        hours: false,
        minutes: false,
        seconds: false,
    };
}

impl Default for IncludeFields {
    fn default() -> Self {
        IncludeFields::ALL
    }
}

/// Unit suffix appended directly after each rendered field, e.g. "h"/"m"/"s"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitSuffixes<'a> {
    pub hours: &'a str,
    pub minutes: &'a str,
    pub seconds: &'a str,
}

impl UnitSuffixes<'static> {
    /// No suffixes
    pub const NONE: UnitSuffixes<'static> = UnitSuffixes {
        hours: "",
        minutes: "",
        seconds: "",
    };
}

impl Duration {
    /// Render to a clock string, keeping only the fields selected by
    /// `include`. An all-false `include` yields the empty string, but
    /// the duration is validated regardless.
    pub fn format(&self, include: IncludeFields, units: UnitSuffixes<'_>) -> DurationResult<String> {
        if !self.is_valid() {
            return Err(DurationError::InvalidDuration {
                op: "format",
                inputs: format!(
                    "{{duration: {self:?}}}, {{include: {include:?}}}, {{units: {units:?}}}"
                ),
                offending: format!("{self:?}"),
            });
        }

        let mut out = String::new();

        if include.hours {
            out.push_str(&format!("{:02}{}", self.hours, units.hours));
            if include.minutes || include.seconds {
                out.push(':');
            }
        }

        if include.minutes {
            out.push_str(&format!("{:02}{}", self.minutes, units.minutes));
            if include.seconds {
                out.push(':');
            }
        }

        if include.seconds {
            out.push_str(&format!("{:02}{}", self.seconds, units.seconds));
        }

        Ok(out)
    }
}
