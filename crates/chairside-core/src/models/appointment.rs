//! Appointment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::ClockTime;

/// The fixed set of appointment types offered by the practice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentKind {
    Cleaning,
    Checkup,
    Filling,
    RootCanal,
    Crown,
    Extraction,
    Consultation,
    Emergency,
    Orthodontic,
}

/// Display and booking metadata for an appointment type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentTypeInfo {
    pub kind: Option<AppointmentKind>,
    /// Stable key (e.g., "root-canal")
    pub key: &'static str,
    pub label: &'static str,
    /// Length offered by default when booking
    pub default_duration_minutes: u16,
    /// Grid color
    pub color: &'static str,
}

/// Metadata for every appointment type, in display order.
pub static APPOINTMENT_TYPES: [AppointmentTypeInfo; 9] = [
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Cleaning),
        key: "cleaning",
        label: "Cleaning",
        default_duration_minutes: 60,
        color: "#3b82f6",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Checkup),
        key: "checkup",
        label: "Checkup",
        default_duration_minutes: 30,
        color: "#22c55e",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Filling),
        key: "filling",
        label: "Filling",
        default_duration_minutes: 60,
        color: "#eab308",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::RootCanal),
        key: "root-canal",
        label: "Root Canal",
        default_duration_minutes: 90,
        color: "#ef4444",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Crown),
        key: "crown",
        label: "Crown",
        default_duration_minutes: 90,
        color: "#a855f7",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Extraction),
        key: "extraction",
        label: "Extraction",
        default_duration_minutes: 45,
        color: "#f97316",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Consultation),
        key: "consultation",
        label: "Consultation",
        default_duration_minutes: 30,
        color: "#14b8a6",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Emergency),
        key: "emergency",
        label: "Emergency",
        default_duration_minutes: 30,
        color: "#e11d48",
    },
    AppointmentTypeInfo {
        kind: Some(AppointmentKind::Orthodontic),
        key: "orthodontic",
        label: "Orthodontic",
        default_duration_minutes: 45,
        color: "#6366f1",
    },
];

/// Neutral metadata shown when a type key is unknown.
static FALLBACK_TYPE: AppointmentTypeInfo = AppointmentTypeInfo {
    kind: None,
    key: "other",
    label: "Appointment",
    default_duration_minutes: 30,
    color: "#6b7280",
};

impl AppointmentTypeInfo {
    /// Default display value for lookups that miss.
    pub fn fallback() -> &'static AppointmentTypeInfo {
        &FALLBACK_TYPE
    }
}

impl AppointmentKind {
    /// Static metadata for this type.
    pub fn info(self) -> &'static AppointmentTypeInfo {
        APPOINTMENT_TYPES
            .iter()
            .find(|info| info.kind == Some(self))
            .unwrap_or(&FALLBACK_TYPE)
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn default_duration_minutes(self) -> u16 {
        self.info().default_duration_minutes
    }
}

/// Appointment status. Descriptive only; never consulted by conflict checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Parse the kebab-case form used on the wire.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "in-progress" => Some(AppointmentStatus::InProgress),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

/// A booked appointment on one chair for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique appointment ID
    pub id: String,
    /// Free-text patient name
    pub patient_name: String,
    /// Provider reference (not validated)
    pub provider_id: u32,
    /// Chair reference
    pub resource_id: u32,
    /// Appointment type
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    /// Calendar day
    pub date: NaiveDate,
    /// Start of the half-open interval
    pub start_time: ClockTime,
    /// End of the half-open interval
    pub end_time: ClockTime,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Appointment {
    /// Create a confirmed appointment with a fresh ID.
    pub fn new(
        patient_name: String,
        provider_id: u32,
        resource_id: u32,
        kind: AppointmentKind,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_name,
            provider_id,
            resource_id,
            kind,
            date,
            start_time,
            end_time,
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    /// Booked minutes. Negative if the end precedes the start.
    pub fn duration_minutes(&self) -> i32 {
        self.start_time.minutes_until(self.end_time)
    }

    /// The half-open `[start, end)` interval.
    pub fn interval(&self) -> (ClockTime, ClockTime) {
        (self.start_time, self.end_time)
    }

    /// Check whether `slot` falls inside `[start, end)`.
    pub fn occupies(&self, slot: ClockTime) -> bool {
        self.start_time <= slot && slot < self.end_time
    }
}

/// Input to a conflict check: where and when a booking would go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCandidate {
    /// Own ID when re-validating an edit; excluded from the results
    #[serde(default)]
    pub id: Option<String>,
    pub resource_id: u32,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl AppointmentCandidate {
    /// Candidate for a new booking (no own ID).
    pub fn new(resource_id: u32, date: NaiveDate, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            id: None,
            resource_id,
            date,
            start_time,
            end_time,
        }
    }
}

impl From<&Appointment> for AppointmentCandidate {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: Some(appointment.id.clone()),
            resource_id: appointment.resource_id,
            date: appointment.date,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
        }
    }
}
