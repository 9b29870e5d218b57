//! Pure scheduling computations over an appointment snapshot.
//!
//! Everything here takes the collection as an explicit slice and returns a
//! fresh result; nothing mutates the store. Conflict detection is advisory:
//! callers decide what to do with a non-empty result.

mod conflicts;
mod query;
mod utilization;

pub use conflicts::*;
pub use query::*;
pub use utilization::*;

use crate::models::ClockTime;

/// Check whether half-open intervals `[s1, e1)` and `[s2, e2)` share an instant.
///
/// Touching endpoints do not overlap, and an empty interval overlaps nothing.
pub fn intervals_overlap(a: (ClockTime, ClockTime), b: (ClockTime, ClockTime)) -> bool {
    let (s1, e1) = a;
    let (s2, e2) = b;
    s1 < e1 && s2 < e2 && s1 < e2 && s2 < e1
}
