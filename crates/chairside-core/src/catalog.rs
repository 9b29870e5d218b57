//! Resource catalog and bundled demo data.
//!
//! The catalog is static for the lifetime of a schedule. Hosts inject it as
//! JSON; the bundled demo day mirrors the practice's sample clinic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Appointment, Provider, Resource};
use crate::schedule::{find_provider, find_resource};

/// Demo data compiled into the library.
const DEMO_DAY_JSON: &str = include_str!("../fixtures/demo_day.json");

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Chairs and providers available to the schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceCatalog {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

impl ResourceCatalog {
    pub fn new(resources: Vec<Resource>, providers: Vec<Provider>) -> CatalogResult<Self> {
        let catalog = Self {
            resources,
            providers,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: ResourceCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Resource IDs in catalog order.
    pub fn resource_ids(&self) -> Vec<u32> {
        self.resources.iter().map(|r| r.id).collect()
    }

    pub fn resource(&self, id: u32) -> Option<&Resource> {
        find_resource(id, &self.resources)
    }

    pub fn provider(&self, id: u32) -> Option<&Provider> {
        find_provider(id, &self.providers)
    }

    /// Resources carrying an equipment tag.
    pub fn with_capability(&self, tag: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.has_capability(tag))
            .collect()
    }

    fn validate(&self) -> CatalogResult<()> {
        for (i, resource) in self.resources.iter().enumerate() {
            if self.resources[..i].iter().any(|r| r.id == resource.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "resource",
                    id: resource.id,
                });
            }
        }
        for (i, provider) in self.providers.iter().enumerate() {
            if self.providers[..i].iter().any(|p| p.id == provider.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "provider",
                    id: provider.id,
                });
            }
        }
        Ok(())
    }
}

/// A catalog plus a day's worth of appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoDay {
    #[serde(flatten)]
    pub catalog: ResourceCatalog,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl DemoDay {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let day: DemoDay = serde_json::from_str(json)?;
        day.catalog.validate()?;
        Ok(day)
    }

    /// The sample clinic bundled with the library.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(DEMO_DAY_JSON)
    }
}
