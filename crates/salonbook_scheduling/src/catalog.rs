// --- File: crates/salonbook_scheduling/src/catalog.rs ---
//! The canonical service catalog, loaded once at startup.

use crate::error::AvailabilityError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub id: String,
    pub name: String,
    pub duration_minutes: u16,
}

/// Immutable service → duration table. Injected into the engine instead of
/// being re-declared per component.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    services: Vec<ServiceSpec>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<ServiceSpec>) -> Result<Self, AvailabilityError> {
        if let Some(bad) = services.iter().find(|s| s.duration_minutes == 0) {
            return Err(AvailabilityError::Config(format!(
                "service '{}' has a non-positive duration",
                bad.id
            )));
        }
        Ok(ServiceCatalog { services })
    }

    pub fn from_config(
        entries: &[salonbook_config::ServiceEntry],
    ) -> Result<Self, AvailabilityError> {
        ServiceCatalog::new(
            entries
                .iter()
                .map(|entry| ServiceSpec {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    duration_minutes: entry.duration_minutes,
                })
                .collect(),
        )
    }

    pub fn get(&self, id: &str) -> Option<&ServiceSpec> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn services(&self) -> &[ServiceSpec] {
        &self.services
    }
}
