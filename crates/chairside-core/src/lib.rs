//! Chairside Core Library
//!
//! Operatory scheduling for a dental practice: advisory conflict detection
//! and chair utilization over an in-memory appointment snapshot.
//!
//! # Architecture
//!
//! ```text
//!   Resource Catalog          Appointment Store
//!  (chairs, providers)     (snapshot, keyed by id)
//!           │                        │
//!           └───────────┬────────────┘
//!                       │
//!        ┌──────────────┼──────────────┐
//!        │              │              │
//!        ▼              ▼              ▼
//!    Conflict      Utilization      Slot/Type
//!    Checker       Calculator        Lookups
//!        │              │              │
//!        └──────────────┼──────────────┘
//!                       ▼
//!             Host UI (via UniFFI)
//! ```
//!
//! # Core Principle
//!
//! **Conflicts are advisory.** A collision is reported back to the caller but
//! does not block the write unless the host opts into [`ConflictPolicy::Enforce`].
//!
//! # Modules
//!
//! - [`models`]: Domain types (Resource, Provider, Appointment, ClockTime)
//! - [`schedule`]: Pure conflict, utilization and lookup functions
//! - [`store`]: In-memory appointment store
//! - [`catalog`]: Resource catalog and bundled demo data
//! - [`config`]: Working day, slot length, conflict policy
//! - [`logging`]: Tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod logging;
pub mod models;
pub mod schedule;
pub mod store;

// Re-export commonly used types
pub use catalog::{DemoDay, ResourceCatalog};
pub use config::{ConflictPolicy, ScheduleConfig, WorkingDay};
pub use models::{
    Appointment, AppointmentCandidate, AppointmentKind, AppointmentStatus, AppointmentTypeInfo,
    ClockTime, Provider, Resource, ResourceStatus,
};
pub use schedule::{
    compute_utilization, compute_utilization_on, find_appointment_at, find_appointment_type,
    find_conflicts, scan_conflicts, ConflictPair,
};
pub use store::AppointmentStore;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ChairsideError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<store::StoreError> for ChairsideError {
    fn from(e: store::StoreError) -> Self {
        match e {
            store::StoreError::NotFound(_) => ChairsideError::NotFound(e.to_string()),
            store::StoreError::Conflict { .. } => ChairsideError::Conflict(e.to_string()),
            store::StoreError::DuplicateId(_) => ChairsideError::InvalidInput(e.to_string()),
        }
    }
}

impl From<config::ConfigError> for ChairsideError {
    fn from(e: config::ConfigError) -> Self {
        ChairsideError::ConfigError(e.to_string())
    }
}

impl From<catalog::CatalogError> for ChairsideError {
    fn from(e: catalog::CatalogError) -> Self {
        ChairsideError::CatalogError(e.to_string())
    }
}

impl From<models::TimeParseError> for ChairsideError {
    fn from(e: models::TimeParseError) -> Self {
        ChairsideError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ChairsideError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ChairsideError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Install the tracing subscriber. Returns false if one was already installed.
#[uniffi::export]
pub fn init_logging(filter: Option<String>) -> bool {
    logging::init(filter.as_deref())
}

/// Open an empty schedule.
///
/// Both arguments are JSON; `None` means defaults and an empty catalog.
#[uniffi::export]
pub fn open_schedule(
    config_json: Option<String>,
    catalog_json: Option<String>,
) -> Result<Arc<ChairsideCore>, ChairsideError> {
    let config = load_config(config_json.as_deref())?;
    let catalog = match catalog_json {
        Some(json) => ResourceCatalog::from_json(&json)?,
        None => ResourceCatalog::default(),
    };
    let store = AppointmentStore::new(config.conflict_policy);
    Ok(Arc::new(ChairsideCore::new(config, catalog, store)))
}

/// Open a schedule loaded with the bundled demo clinic (for previews and testing).
#[uniffi::export]
pub fn open_demo_schedule(config_json: Option<String>) -> Result<Arc<ChairsideCore>, ChairsideError> {
    let config = load_config(config_json.as_deref())?;
    let day = DemoDay::bundled()?;
    let store = AppointmentStore::with_appointments(config.conflict_policy, day.appointments);
    Ok(Arc::new(ChairsideCore::new(config, day.catalog, store)))
}

/// Metadata for every appointment type, in display order.
#[uniffi::export]
pub fn appointment_types() -> Vec<FfiAppointmentType> {
    models::APPOINTMENT_TYPES.iter().map(|info| info.into()).collect()
}

fn load_config(json: Option<&str>) -> Result<ScheduleConfig, ChairsideError> {
    match json {
        Some(json) => Ok(ScheduleConfig::from_json(json)?),
        None => Ok(ScheduleConfig::default()),
    }
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe schedule wrapper for FFI.
#[derive(uniffi::Object)]
pub struct ChairsideCore {
    config: ScheduleConfig,
    catalog: ResourceCatalog,
    store: Arc<Mutex<AppointmentStore>>,
}

impl ChairsideCore {
    fn new(config: ScheduleConfig, catalog: ResourceCatalog, store: AppointmentStore) -> Self {
        Self {
            config,
            catalog,
            store: Arc::new(Mutex::new(store)),
        }
    }
}

#[uniffi::export]
impl ChairsideCore {
    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Book a new appointment.
    ///
    /// Without an end time the type's default duration is used. Conflicts are
    /// returned alongside the saved appointment unless the policy enforces them.
    pub fn add_appointment(
        &self,
        request: FfiNewAppointment,
    ) -> Result<FfiWriteResult, ChairsideError> {
        let kind = parse_kind(&request.appointment_type)?;
        let date = parse_date(&request.date)?;
        let start_time: ClockTime = request.start_time.parse()?;
        let end_time = match request.end_time {
            Some(end) => end.parse()?,
            None => start_time
                .checked_add_minutes(kind.default_duration_minutes())
                .ok_or_else(|| {
                    ChairsideError::InvalidInput(format!(
                        "{} at {} runs past midnight",
                        kind.key(),
                        start_time
                    ))
                })?,
        };

        let mut appointment = Appointment::new(
            request.patient_name,
            request.provider_id,
            request.resource_id,
            kind,
            date,
            start_time,
            end_time,
        );
        appointment.notes = request.notes;

        let mut store = self.store.lock()?;
        let conflicts = store.insert(appointment.clone())?;
        Ok(FfiWriteResult::new(appointment, conflicts))
    }

    /// Replace an existing appointment (matched by ID).
    pub fn update_appointment(
        &self,
        appointment: FfiAppointment,
    ) -> Result<FfiWriteResult, ChairsideError> {
        let appointment = Appointment::try_from(appointment)?;
        let mut store = self.store.lock()?;
        let conflicts = store.update(appointment.clone())?;
        Ok(FfiWriteResult::new(appointment, conflicts))
    }

    /// Remove an appointment, returning what was removed.
    pub fn remove_appointment(&self, id: String) -> Result<FfiAppointment, ChairsideError> {
        let mut store = self.store.lock()?;
        Ok(store.remove(&id)?.into())
    }

    /// Change an appointment's status ("confirmed", "in-progress", ...).
    pub fn set_appointment_status(&self, id: String, status: String) -> Result<(), ChairsideError> {
        let status = AppointmentStatus::parse(&status)
            .ok_or_else(|| ChairsideError::InvalidInput(format!("Unknown status: {}", status)))?;
        let mut store = self.store.lock()?;
        store.set_status(&id, status)?;
        Ok(())
    }

    /// Get an appointment by ID.
    pub fn get_appointment(&self, id: String) -> Result<Option<FfiAppointment>, ChairsideError> {
        let store = self.store.lock()?;
        Ok(store.get(&id).cloned().map(Into::into))
    }

    /// List appointments, optionally for one date.
    pub fn list_appointments(
        &self,
        date: Option<String>,
    ) -> Result<Vec<FfiAppointment>, ChairsideError> {
        let date = date.as_deref().map(parse_date).transpose()?;
        let store = self.store.lock()?;
        Ok(store
            .all()
            .iter()
            .filter(|apt| date.map_or(true, |d| apt.date == d))
            .cloned()
            .map(Into::into)
            .collect())
    }

    // =========================================================================
    // Schedule Computations
    // =========================================================================

    /// Existing appointments that collide with a prospective booking.
    pub fn check_conflicts(
        &self,
        candidate: FfiCandidate,
    ) -> Result<Vec<FfiAppointment>, ChairsideError> {
        let candidate = AppointmentCandidate::try_from(candidate)?;
        let store = self.store.lock()?;
        Ok(find_conflicts(&candidate, store.all())
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Every colliding pair, optionally limited to one date.
    pub fn scan_conflicts(
        &self,
        date: Option<String>,
    ) -> Result<Vec<FfiConflictPair>, ChairsideError> {
        let date = date.as_deref().map(parse_date).transpose()?;
        let store = self.store.lock()?;
        let pairs = match date {
            Some(date) => {
                let day: Vec<Appointment> = store.on_date(date).into_iter().cloned().collect();
                scan_conflicts(&day)
            }
            None => scan_conflicts(store.all()),
        };
        Ok(pairs.into_iter().map(Into::into).collect())
    }

    /// Utilization per chair, in catalog order.
    ///
    /// `date` only narrows the count when the configuration asks for
    /// date-scoped utilization; otherwise every booking on the chair counts.
    pub fn utilization(&self, date: String) -> Result<Vec<FfiUtilization>, ChairsideError> {
        let date = parse_date(&date)?;
        let resource_ids = self.catalog.resource_ids();
        let working_day_minutes = self.config.working_day_minutes();
        let store = self.store.lock()?;

        let percentages = if self.config.utilization_by_date {
            compute_utilization_on(date, store.all(), &resource_ids, working_day_minutes)
        } else {
            compute_utilization(store.all(), &resource_ids, working_day_minutes)
        };

        Ok(resource_ids
            .iter()
            .map(|id| FfiUtilization {
                resource_id: *id,
                percent: percentages.get(id).copied().unwrap_or(0),
            })
            .collect())
    }

    /// The appointment occupying a chair at a grid slot, optionally on one date.
    pub fn appointment_at(
        &self,
        resource_id: u32,
        slot: String,
        date: Option<String>,
    ) -> Result<Option<FfiAppointment>, ChairsideError> {
        let slot: ClockTime = slot.parse()?;
        let date = date.as_deref().map(parse_date).transpose()?;
        let store = self.store.lock()?;
        let found = match date {
            Some(date) => {
                let day: Vec<Appointment> = store.on_date(date).into_iter().cloned().collect();
                find_appointment_at(resource_id, slot, &day).cloned()
            }
            None => find_appointment_at(resource_id, slot, store.all()).cloned(),
        };
        Ok(found.map(Into::into))
    }

    /// Grid rows for the configured working day.
    pub fn time_slots(&self) -> Vec<String> {
        schedule::time_slots(&self.config.working_day, self.config.slot_minutes)
            .into_iter()
            .map(|slot| slot.to_string())
            .collect()
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    pub fn resources(&self) -> Vec<FfiResource> {
        self.catalog.resources.iter().cloned().map(Into::into).collect()
    }

    pub fn providers(&self) -> Vec<FfiProvider> {
        self.catalog.providers.iter().cloned().map(Into::into).collect()
    }

    /// Metadata for a type key, falling back to a neutral entry on a miss.
    pub fn appointment_type(&self, key: String) -> FfiAppointmentType {
        find_appointment_type(&key)
            .unwrap_or(AppointmentTypeInfo::fallback())
            .into()
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ChairsideError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| ChairsideError::InvalidInput(format!("Invalid date {:?}: {}", s, e)))
}

fn parse_kind(key: &str) -> Result<AppointmentKind, ChairsideError> {
    find_appointment_type(key)
        .and_then(|info| info.kind)
        .ok_or_else(|| ChairsideError::InvalidInput(format!("Unknown appointment type: {}", key)))
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient_name: String,
    pub provider_id: u32,
    pub resource_id: u32,
    pub appointment_type: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub notes: Option<String>,
}

impl From<Appointment> for FfiAppointment {
    fn from(apt: Appointment) -> Self {
        Self {
            id: apt.id,
            patient_name: apt.patient_name,
            provider_id: apt.provider_id,
            resource_id: apt.resource_id,
            appointment_type: apt.kind.key().to_string(),
            date: apt.date.format("%Y-%m-%d").to_string(),
            start_time: apt.start_time.to_string(),
            end_time: apt.end_time.to_string(),
            status: apt.status.as_str().to_string(),
            notes: apt.notes,
        }
    }
}

impl TryFrom<FfiAppointment> for Appointment {
    type Error = ChairsideError;

    fn try_from(apt: FfiAppointment) -> Result<Self, Self::Error> {
        let status = AppointmentStatus::parse(&apt.status).ok_or_else(|| {
            ChairsideError::InvalidInput(format!("Unknown status: {}", apt.status))
        })?;
        Ok(Appointment {
            kind: parse_kind(&apt.appointment_type)?,
            date: parse_date(&apt.date)?,
            start_time: apt.start_time.parse()?,
            end_time: apt.end_time.parse()?,
            status,
            id: apt.id,
            patient_name: apt.patient_name,
            provider_id: apt.provider_id,
            resource_id: apt.resource_id,
            notes: apt.notes,
            created_at: None,
        })
    }
}

/// FFI-safe booking request.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewAppointment {
    pub patient_name: String,
    pub provider_id: u32,
    pub resource_id: u32,
    pub appointment_type: String,
    pub date: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub notes: Option<String>,
}

/// FFI-safe conflict-check input.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCandidate {
    /// Own ID when re-checking an edit
    pub id: Option<String>,
    pub resource_id: u32,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl TryFrom<FfiCandidate> for AppointmentCandidate {
    type Error = ChairsideError;

    fn try_from(candidate: FfiCandidate) -> Result<Self, Self::Error> {
        Ok(AppointmentCandidate {
            id: candidate.id,
            resource_id: candidate.resource_id,
            date: parse_date(&candidate.date)?,
            start_time: candidate.start_time.parse()?,
            end_time: candidate.end_time.parse()?,
        })
    }
}

/// FFI-safe write outcome: the saved appointment plus advisory conflicts.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWriteResult {
    pub appointment: FfiAppointment,
    pub conflicts: Vec<FfiAppointment>,
}

impl FfiWriteResult {
    fn new(appointment: Appointment, conflicts: Vec<Appointment>) -> Self {
        Self {
            appointment: appointment.into(),
            conflicts: conflicts.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-safe conflict pair.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConflictPair {
    pub first_id: String,
    pub second_id: String,
    pub resource_id: u32,
    pub overlap_start: String,
    pub overlap_end: String,
}

impl From<ConflictPair> for FfiConflictPair {
    fn from(pair: ConflictPair) -> Self {
        Self {
            first_id: pair.first_id,
            second_id: pair.second_id,
            resource_id: pair.resource_id,
            overlap_start: pair.overlap_start.to_string(),
            overlap_end: pair.overlap_end.to_string(),
        }
    }
}

/// FFI-safe utilization entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUtilization {
    pub resource_id: u32,
    pub percent: i64,
}

/// FFI-safe chair.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiResource {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub capabilities: Vec<String>,
    pub location: String,
}

impl From<Resource> for FfiResource {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            status: resource.status.as_str().to_string(),
            capabilities: resource.capabilities,
            location: resource.location,
        }
    }
}

/// FFI-safe provider.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProvider {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub color: String,
}

impl From<Provider> for FfiProvider {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            specialty: provider.specialty,
            color: provider.color,
        }
    }
}

/// FFI-safe appointment type metadata.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointmentType {
    pub key: String,
    pub label: String,
    pub default_duration_minutes: u16,
    pub color: String,
}

impl From<&AppointmentTypeInfo> for FfiAppointmentType {
    fn from(info: &AppointmentTypeInfo) -> Self {
        Self {
            key: info.key.to_string(),
            label: info.label.to_string(),
            default_duration_minutes: info.default_duration_minutes,
            color: info.color.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_request(resource_id: u32, start: &str, end: Option<&str>) -> FfiNewAppointment {
        FfiNewAppointment {
            patient_name: "Anna Kim".into(),
            provider_id: 1,
            resource_id,
            appointment_type: "checkup".into(),
            date: "2025-01-15".into(),
            start_time: start.into(),
            end_time: end.map(Into::into),
            notes: None,
        }
    }

    #[test]
    fn test_add_uses_default_duration() {
        let core = open_schedule(None, None).unwrap();
        let result = core.add_appointment(new_request(1, "09:00", None)).unwrap();
        assert_eq!(result.appointment.end_time, "09:30");
        assert!(result.conflicts.is_empty());
    }

    #[test]
    fn test_add_reports_advisory_conflict() {
        let core = open_schedule(None, None).unwrap();
        let first = core.add_appointment(new_request(1, "09:00", Some("10:00"))).unwrap();
        let second = core.add_appointment(new_request(1, "09:30", Some("10:30"))).unwrap();

        assert_eq!(second.conflicts.len(), 1);
        assert_eq!(second.conflicts[0].id, first.appointment.id);
        assert_eq!(core.list_appointments(None).unwrap().len(), 2);
    }

    #[test]
    fn test_enforced_policy_rejects() {
        let core = open_schedule(Some(r#"{"conflictPolicy": "enforce"}"#.into()), None).unwrap();
        core.add_appointment(new_request(1, "09:00", Some("10:00"))).unwrap();
        let result = core.add_appointment(new_request(1, "09:30", Some("10:30")));
        assert!(matches!(result, Err(ChairsideError::Conflict(_))));
    }

    #[test]
    fn test_invalid_inputs() {
        let core = open_schedule(None, None).unwrap();

        let mut bad_type = new_request(1, "09:00", None);
        bad_type.appointment_type = "whitening".into();
        assert!(matches!(core.add_appointment(bad_type), Err(ChairsideError::InvalidInput(_))));

        let mut bad_date = new_request(1, "09:00", None);
        bad_date.date = "15/01/2025".into();
        assert!(matches!(core.add_appointment(bad_date), Err(ChairsideError::InvalidInput(_))));

        let bad_time = new_request(1, "9am", None);
        assert!(matches!(core.add_appointment(bad_time), Err(ChairsideError::InvalidInput(_))));

        assert!(matches!(
            core.set_appointment_status("missing".into(), "completed".into()),
            Err(ChairsideError::NotFound(_))
        ));
    }

    #[test]
    fn test_demo_schedule() {
        let core = open_demo_schedule(None).unwrap();
        assert_eq!(core.resources().len(), 4);
        assert_eq!(core.providers().len(), 4);
        assert_eq!(core.list_appointments(Some("2025-01-15".into())).unwrap().len(), 6);

        let utilization = core.utilization("2025-01-15".into()).unwrap();
        let percents: Vec<i64> = utilization.iter().map(|u| u.percent).collect();
        // Chair 2 includes the following day's emergency visit
        assert_eq!(percents, vec![35, 25, 0, 8]);

        let pairs = core.scan_conflicts(Some("2025-01-15".into())).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first_id, "apt-003");
        assert_eq!(pairs[0].second_id, "apt-006");
        assert_eq!(pairs[0].overlap_start, "11:00");
    }

    #[test]
    fn test_utilization_by_date_config() {
        let core = open_demo_schedule(Some(r#"{"utilizationByDate": true}"#.into())).unwrap();
        let utilization = core.utilization("2025-01-15".into()).unwrap();
        assert_eq!(utilization[1].percent, 20);
    }

    #[test]
    fn test_appointment_at_and_slots() {
        let core = open_demo_schedule(None).unwrap();
        let found = core
            .appointment_at(1, "09:15".into(), Some("2025-01-15".into()))
            .unwrap()
            .unwrap();
        assert_eq!(found.id, "apt-002");
        assert!(core
            .appointment_at(2, "08:30".into(), Some("2025-01-15".into()))
            .unwrap()
            .is_none());

        let slots = core.time_slots();
        assert_eq!(slots.first().map(String::as_str), Some("08:00"));
        assert_eq!(slots.len(), 20);
    }

    #[test]
    fn test_update_round_trip_through_ffi() {
        let core = open_demo_schedule(None).unwrap();
        let mut apt = core.get_appointment("apt-004".into()).unwrap().unwrap();
        apt.end_time = "14:15".into();

        let result = core.update_appointment(apt).unwrap();
        assert!(result.conflicts.is_empty());
        assert_eq!(
            core.get_appointment("apt-004".into()).unwrap().unwrap().end_time,
            "14:15"
        );
    }

    #[test]
    fn test_update_through_ffi_keeps_created_at() {
        let core = open_schedule(None, None).unwrap();
        let added = core.add_appointment(new_request(1, "09:00", Some("09:30"))).unwrap();
        let id = added.appointment.id.clone();
        let created_at = core.store.lock().unwrap().get(&id).unwrap().created_at.clone();
        assert!(created_at.is_some());

        let mut apt = added.appointment;
        apt.end_time = "09:45".into();
        core.update_appointment(apt).unwrap();

        let store = core.store.lock().unwrap();
        let stored = store.get(&id).unwrap();
        assert_eq!(stored.end_time.to_string(), "09:45");
        assert_eq!(stored.created_at, created_at);
    }

    #[test]
    fn test_check_conflicts_excludes_self() {
        let core = open_demo_schedule(None).unwrap();
        let candidate = FfiCandidate {
            id: Some("apt-003".into()),
            resource_id: 2,
            date: "2025-01-15".into(),
            start_time: "10:00".into(),
            end_time: "11:30".into(),
        };
        let conflicts = core.check_conflicts(candidate).unwrap();
        let ids: Vec<&str> = conflicts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["apt-006"]);
    }

    #[test]
    fn test_appointment_type_fallback() {
        let core = open_schedule(None, None).unwrap();
        assert_eq!(core.appointment_type("crown".into()).default_duration_minutes, 90);
        assert_eq!(core.appointment_type("bleaching".into()).key, "other");
        assert_eq!(appointment_types().len(), 9);
    }
}
