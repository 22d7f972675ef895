//! Clockspan Core - Clock-style duration values
//!
//! This crate defines the duration value type consumed by
//! duration-picker widgets, and the operations over it:
//! - Validity checking of the hours/minutes/seconds domain invariant
//! - Conversion to and from flat second counts
//! - Checked arithmetic (scalar add/subtract, variadic sum/difference)
//! - Field-selective clock-string formatting
//! - A single structured error type for every domain-rule violation
//!
//! All operations are pure, synchronous functions over `Copy` values;
//! the crate holds no state and performs no I/O.

pub mod arith;
pub mod duration;
pub mod error;
pub mod format;

pub use arith::*;
pub use duration::*;
pub use error::*;
pub use format::*;
