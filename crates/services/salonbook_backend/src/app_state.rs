// --- File: crates/services/salonbook_backend/src/app_state.rs ---
use salonbook_config::AppConfig;
use salonbook_scheduling::AvailabilityService;
use std::sync::Arc;

/// Shared state for the availability routes.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub availability: Arc<AvailabilityService>,
}
