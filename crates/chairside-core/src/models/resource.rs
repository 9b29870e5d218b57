//! Schedulable resources (chairs/operatories) and providers.

use serde::{Deserialize, Serialize};

/// Operational status of a chair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Available,
    Occupied,
    Maintenance,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "available",
            ResourceStatus::Occupied => "occupied",
            ResourceStatus::Maintenance => "maintenance",
        }
    }
}

/// A treatment chair or operatory that hosts one appointment at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Unique identifier
    pub id: u32,
    /// Display label (e.g., "Chair 1")
    pub name: String,
    /// Current status (read-only for scheduling)
    pub status: ResourceStatus,
    /// Equipment tags (e.g., ["x-ray", "intraoral camera"]); display/filter only
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Free-text location (e.g., "Room A")
    #[serde(default)]
    pub location: String,
}

impl Resource {
    /// Create an available resource with no equipment tags.
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            status: ResourceStatus::Available,
            capabilities: Vec::new(),
            location: String::new(),
        }
    }

    /// Check whether this chair carries an equipment tag (case-insensitive).
    pub fn has_capability(&self, tag: &str) -> bool {
        let tag_lower = tag.to_lowercase();
        self.capabilities
            .iter()
            .any(|c| c.to_lowercase() == tag_lower)
    }

    pub fn is_available(&self) -> bool {
        self.status == ResourceStatus::Available
    }
}

/// A clinician who sees patients. Purely descriptive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: u32,
    pub name: String,
    /// Specialty (e.g., "General Dentistry", "Orthodontics")
    pub specialty: String,
    /// Display color used on the schedule grid
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_lookup() {
        let mut chair = Resource::new(1, "Chair 1".into());
        chair.capabilities = vec!["X-Ray".into(), "Intraoral Camera".into()];

        assert!(chair.has_capability("x-ray"));
        assert!(chair.has_capability("INTRAORAL CAMERA"));
        assert!(!chair.has_capability("laser"));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ResourceStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");

        let chair: Resource = serde_json::from_str(
            r#"{"id": 3, "name": "Chair 3", "status": "occupied"}"#,
        )
        .unwrap();
        assert_eq!(chair.status, ResourceStatus::Occupied);
        assert!(chair.capabilities.is_empty());
        assert!(!chair.is_available());
    }
}
