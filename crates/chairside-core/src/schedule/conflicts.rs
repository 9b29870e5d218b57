//! Appointment conflict detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Appointment, AppointmentCandidate, ClockTime};

use super::intervals_overlap;

/// Two existing appointments that collide on the same chair and day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConflictPair {
    /// ID of the earlier appointment in collection order
    pub first_id: String,
    /// ID of the later appointment in collection order
    pub second_id: String,
    pub resource_id: u32,
    /// Shared instants, `[start, end)`
    pub overlap_start: ClockTime,
    pub overlap_end: ClockTime,
}

impl ConflictPair {
    pub fn overlap_minutes(&self) -> i32 {
        self.overlap_start.minutes_until(self.overlap_end)
    }
}

/// Find every existing appointment that collides with `candidate`.
///
/// Only appointments on the same resource and date are compared, and the
/// candidate's own ID (when set) is skipped so an edit can be re-checked
/// against the collection that still holds its old version. Results keep
/// collection order. An empty or inverted candidate interval collides with
/// nothing.
pub fn find_conflicts<'a>(
    candidate: &AppointmentCandidate,
    existing: &'a [Appointment],
) -> Vec<&'a Appointment> {
    if candidate.start_time >= candidate.end_time {
        return Vec::new();
    }

    let conflicts: Vec<&Appointment> = existing
        .iter()
        .filter(|apt| apt.resource_id == candidate.resource_id && apt.date == candidate.date)
        .filter(|apt| candidate.id.as_deref() != Some(apt.id.as_str()))
        .filter(|apt| {
            intervals_overlap(
                (candidate.start_time, candidate.end_time),
                apt.interval(),
            )
        })
        .collect();

    debug!(
        resource_id = candidate.resource_id,
        date = %candidate.date,
        start = %candidate.start_time,
        end = %candidate.end_time,
        conflicts = conflicts.len(),
        "conflict check"
    );

    conflicts
}

/// Check whether `candidate` collides with anything in `existing`.
pub fn has_conflicts(candidate: &AppointmentCandidate, existing: &[Appointment]) -> bool {
    !find_conflicts(candidate, existing).is_empty()
}

/// The instants two appointments share, as `[start, end)`.
///
/// Returns `None` when they are on different chairs or days, or do not overlap.
pub fn overlap_window(a: &Appointment, b: &Appointment) -> Option<(ClockTime, ClockTime)> {
    if a.resource_id != b.resource_id || a.date != b.date {
        return None;
    }
    if !intervals_overlap(a.interval(), b.interval()) {
        return None;
    }
    Some((a.start_time.max(b.start_time), a.end_time.min(b.end_time)))
}

/// List every colliding pair in a collection.
///
/// Pairs are ordered by the position of their first member, then of their
/// second. Used to badge the day grid; nothing is removed or rejected.
pub fn scan_conflicts(existing: &[Appointment]) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();

    for (i, first) in existing.iter().enumerate() {
        for second in &existing[i + 1..] {
            if let Some((overlap_start, overlap_end)) = overlap_window(first, second) {
                pairs.push(ConflictPair {
                    first_id: first.id.clone(),
                    second_id: second.id.clone(),
                    resource_id: first.resource_id,
                    overlap_start,
                    overlap_end,
                });
            }
        }
    }

    debug!(appointments = existing.len(), pairs = pairs.len(), "conflict scan");
    pairs
}
