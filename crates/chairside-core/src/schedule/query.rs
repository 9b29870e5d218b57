//! Lookup helpers for the schedule grid.
//!
//! Linear scans; a miss is `None`, never an error.

use crate::config::WorkingDay;
use crate::models::{
    Appointment, AppointmentTypeInfo, ClockTime, Provider, Resource, APPOINTMENT_TYPES,
};

/// The appointment occupying `resource_id` at `slot`, if any.
///
/// First match in collection order wins when a chair is double-booked.
pub fn find_appointment_at(
    resource_id: u32,
    slot: ClockTime,
    appointments: &[Appointment],
) -> Option<&Appointment> {
    appointments
        .iter()
        .find(|apt| apt.resource_id == resource_id && apt.occupies(slot))
}

/// Metadata for an appointment type key (case-insensitive).
pub fn find_appointment_type(key: &str) -> Option<&'static AppointmentTypeInfo> {
    let key = key.trim();
    APPOINTMENT_TYPES
        .iter()
        .find(|info| info.key.eq_ignore_ascii_case(key))
}

pub fn find_provider(id: u32, providers: &[Provider]) -> Option<&Provider> {
    providers.iter().find(|p| p.id == id)
}

pub fn find_resource(id: u32, resources: &[Resource]) -> Option<&Resource> {
    resources.iter().find(|r| r.id == id)
}

/// Grid rows from opening (inclusive) to closing (exclusive), `slot_minutes` apart.
pub fn time_slots(working_day: &WorkingDay, slot_minutes: u16) -> Vec<ClockTime> {
    let mut slots = Vec::new();
    if slot_minutes == 0 {
        return slots;
    }

    let mut current = Some(working_day.opens_at);
    while let Some(slot) = current {
        if slot >= working_day.closes_at {
            break;
        }
        slots.push(slot);
        current = slot.checked_add_minutes(slot_minutes);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentKind, AppointmentStatus, ResourceStatus};
    use chrono::NaiveDate;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn apt(id: &str, resource_id: u32, start: &str, end: &str) -> Appointment {
        Appointment {
            id: id.into(),
            patient_name: "Test Patient".into(),
            provider_id: 1,
            resource_id,
            kind: AppointmentKind::Filling,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            start_time: t(start),
            end_time: t(end),
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_find_appointment_at() {
        let appointments = vec![
            apt("a", 1, "09:00", "10:00"),
            apt("b", 2, "09:00", "09:30"),
        ];

        assert_eq!(find_appointment_at(1, t("09:30"), &appointments).unwrap().id, "a");
        assert_eq!(find_appointment_at(2, t("09:00"), &appointments).unwrap().id, "b");
        assert!(find_appointment_at(2, t("09:30"), &appointments).is_none());
        assert!(find_appointment_at(3, t("09:00"), &appointments).is_none());
    }

    #[test]
    fn test_find_appointment_at_prefers_first() {
        let appointments = vec![
            apt("first", 1, "09:00", "10:00"),
            apt("second", 1, "09:30", "10:30"),
        ];
        assert_eq!(find_appointment_at(1, t("09:45"), &appointments).unwrap().id, "first");
        assert_eq!(find_appointment_at(1, t("10:00"), &appointments).unwrap().id, "second");
    }

    #[test]
    fn test_find_appointment_type() {
        let info = find_appointment_type("Root-Canal").unwrap();
        assert_eq!(info.kind, Some(AppointmentKind::RootCanal));
        assert!(find_appointment_type("whitening").is_none());

        let shown = find_appointment_type("whitening").unwrap_or(AppointmentTypeInfo::fallback());
        assert_eq!(shown.label, "Appointment");
    }

    #[test]
    fn test_find_provider_and_resource() {
        let providers = vec![Provider {
            id: 7,
            name: "Dr. Sarah Wilson".into(),
            specialty: "General Dentistry".into(),
            color: "#3b82f6".into(),
        }];
        let mut chair = Resource::new(2, "Chair 2".into());
        chair.status = ResourceStatus::Maintenance;
        let resources = vec![chair];

        assert_eq!(find_provider(7, &providers).unwrap().name, "Dr. Sarah Wilson");
        assert!(find_provider(8, &providers).is_none());
        assert_eq!(find_resource(2, &resources).unwrap().status, ResourceStatus::Maintenance);
        assert!(find_resource(1, &resources).is_none());
    }

    #[test]
    fn test_time_slots() {
        let day = WorkingDay::default();
        let slots = time_slots(&day, 30);
        assert_eq!(slots.len(), 20);
        assert_eq!(slots[0], t("08:00"));
        assert_eq!(slots[19], t("17:30"));

        let hourly = time_slots(&day, 60);
        assert_eq!(hourly.len(), 10);

        assert!(time_slots(&day, 0).is_empty());
    }

    #[test]
    fn test_time_slots_stop_before_midnight() {
        let day = WorkingDay {
            opens_at: t("22:00"),
            closes_at: t("23:59"),
        };
        let slots = time_slots(&day, 45);
        assert_eq!(slots, vec![t("22:00"), t("22:45"), t("23:30")]);
    }
}
