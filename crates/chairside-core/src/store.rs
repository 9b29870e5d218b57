//! In-memory appointment store.
//!
//! Holds the current snapshot of appointments keyed by ID, in insertion
//! order. Writes run the conflict checker first; under the advisory policy
//! collisions are returned to the caller and the write goes through anyway.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ConflictPolicy;
use crate::models::{Appointment, AppointmentCandidate, AppointmentStatus};
use crate::schedule::find_conflicts;

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Appointment already exists: {0}")]
    DuplicateId(String),

    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Appointment {id} conflicts with {conflicting:?}")]
    Conflict {
        id: String,
        conflicting: Vec<String>,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Appointment collection owned by one schedule view.
#[derive(Debug, Clone, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    policy: ConflictPolicy,
}

impl AppointmentStore {
    /// Create an empty store with the given conflict policy.
    pub fn new(policy: ConflictPolicy) -> Self {
        Self {
            appointments: Vec::new(),
            policy,
        }
    }

    /// Create a store pre-loaded with fixture data.
    ///
    /// Fixtures are taken as-is: existing collisions are kept, and a repeated
    /// ID keeps its first occurrence.
    pub fn with_appointments(policy: ConflictPolicy, appointments: Vec<Appointment>) -> Self {
        let mut store = Self::new(policy);
        for apt in appointments {
            if store.position(&apt.id).is_some() {
                warn!(id = %apt.id, "skipping duplicate fixture appointment");
                continue;
            }
            warn_if_inverted(&apt);
            store.appointments.push(apt);
        }
        store
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Add a new appointment.
    ///
    /// Returns the existing appointments it collides with (empty if none).
    pub fn insert(&mut self, appointment: Appointment) -> StoreResult<Vec<Appointment>> {
        if self.position(&appointment.id).is_some() {
            return Err(StoreError::DuplicateId(appointment.id));
        }

        let conflicts = self.check(&appointment)?;
        debug!(id = %appointment.id, resource_id = appointment.resource_id, "appointment added");
        self.appointments.push(appointment);
        Ok(conflicts)
    }

    /// Replace an existing appointment, keeping its position.
    ///
    /// The appointment's previous version is not counted as a collision. A
    /// missing `created_at` keeps the stored one.
    pub fn update(&mut self, mut appointment: Appointment) -> StoreResult<Vec<Appointment>> {
        let index = self
            .position(&appointment.id)
            .ok_or_else(|| StoreError::NotFound(appointment.id.clone()))?;

        let conflicts = self.check(&appointment)?;
        if appointment.created_at.is_none() {
            appointment.created_at = self.appointments[index].created_at.take();
        }
        debug!(id = %appointment.id, "appointment updated");
        self.appointments[index] = appointment;
        Ok(conflicts)
    }

    /// Remove an appointment, returning it.
    pub fn remove(&mut self, id: &str) -> StoreResult<Appointment> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        debug!(id, "appointment removed");
        Ok(self.appointments.remove(index))
    }

    /// Change an appointment's descriptive status.
    pub fn set_status(&mut self, id: &str, status: AppointmentStatus) -> StoreResult<()> {
        let apt = self
            .appointments
            .iter_mut()
            .find(|apt| apt.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        apt.status = status;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| apt.id == id)
    }

    /// The full snapshot, in insertion order.
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn on_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|apt| apt.date == date)
            .collect()
    }

    pub fn for_resource(&self, resource_id: u32) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|apt| apt.resource_id == resource_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.appointments.iter().position(|apt| apt.id == id)
    }

    /// Run the conflict checker and apply the policy.
    fn check(&self, appointment: &Appointment) -> StoreResult<Vec<Appointment>> {
        warn_if_inverted(appointment);

        let candidate = AppointmentCandidate::from(appointment);
        let conflicts: Vec<Appointment> = find_conflicts(&candidate, &self.appointments)
            .into_iter()
            .cloned()
            .collect();

        if conflicts.is_empty() {
            return Ok(conflicts);
        }

        match self.policy {
            ConflictPolicy::Advisory => {
                warn!(
                    id = %appointment.id,
                    resource_id = appointment.resource_id,
                    conflicts = conflicts.len(),
                    "saving appointment despite conflicts"
                );
                Ok(conflicts)
            }
            ConflictPolicy::Enforce => Err(StoreError::Conflict {
                id: appointment.id.clone(),
                conflicting: conflicts.into_iter().map(|apt| apt.id).collect(),
            }),
        }
    }
}

fn warn_if_inverted(appointment: &Appointment) {
    if appointment.end_time < appointment.start_time {
        warn!(
            id = %appointment.id,
            start = %appointment.start_time,
            end = %appointment.end_time,
            "appointment ends before it starts"
        );
    }
}
