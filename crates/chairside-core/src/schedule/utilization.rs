//! Chair utilization over a working day.
//!
//! Utilization = booked minutes / working-day minutes, as a whole percentage.
//! Rounding is half-up. Results are not clamped: double-booked chairs can
//! report more than 100%.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::Appointment;

/// Length of the default working day (08:00–18:00).
pub const DEFAULT_WORKING_DAY_MINUTES: u32 = 600;

/// Sum of `end - start` for every appointment on `resource_id`, across all dates.
pub fn booked_minutes(appointments: &[Appointment], resource_id: u32) -> i64 {
    appointments
        .iter()
        .filter(|apt| apt.resource_id == resource_id)
        .map(|apt| i64::from(apt.duration_minutes()))
        .sum()
}

/// Percent of the working day booked on each resource.
///
/// Appointments are summed regardless of their date. A resource with no
/// appointments reports 0. A zero-length working day reports 0 everywhere.
pub fn compute_utilization(
    appointments: &[Appointment],
    resource_ids: &[u32],
    working_day_minutes: u32,
) -> BTreeMap<u32, i64> {
    utilization_from(appointments.iter(), resource_ids, working_day_minutes)
}

/// Like [`compute_utilization`], but only counts appointments on `date`.
pub fn compute_utilization_on(
    date: NaiveDate,
    appointments: &[Appointment],
    resource_ids: &[u32],
    working_day_minutes: u32,
) -> BTreeMap<u32, i64> {
    utilization_from(
        appointments.iter().filter(|apt| apt.date == date),
        resource_ids,
        working_day_minutes,
    )
}

fn utilization_from<'a>(
    appointments: impl Iterator<Item = &'a Appointment>,
    resource_ids: &[u32],
    working_day_minutes: u32,
) -> BTreeMap<u32, i64> {
    let mut booked: BTreeMap<u32, i64> = resource_ids.iter().map(|&id| (id, 0)).collect();

    for apt in appointments {
        if let Some(total) = booked.get_mut(&apt.resource_id) {
            *total += i64::from(apt.duration_minutes());
        }
    }

    if working_day_minutes == 0 {
        warn!("working day has zero length; reporting 0% utilization");
        return booked.into_keys().map(|id| (id, 0)).collect();
    }

    let percentages: BTreeMap<u32, i64> = booked
        .into_iter()
        .map(|(id, minutes)| (id, percent_of(minutes, working_day_minutes)))
        .collect();

    debug!(resources = percentages.len(), working_day_minutes, "utilization computed");
    percentages
}

/// `round(minutes / total * 100)` with half-up rounding, in exact integer math.
fn percent_of(minutes: i64, total: u32) -> i64 {
    let total = i64::from(total);
    (minutes * 200 + total).div_euclid(2 * total)
}
