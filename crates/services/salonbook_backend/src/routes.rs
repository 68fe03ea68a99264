// --- File: crates/services/salonbook_backend/src/routes.rs ---
use crate::app_state::AppState;
use crate::handlers::{
    get_availability_handler, get_availability_range_handler, list_services_handler,
};
use axum::{routing::get, Router};
use chrono_tz::Tz;
use salonbook_config::AppConfig;
use salonbook_gcal::GoogleCalendarService;
use salonbook_scheduling::AvailabilityService;
use std::str::FromStr;
use std::sync::Arc;

/// Creates the availability router. Any missing or malformed configuration
/// aborts startup here; the service never runs half-configured.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let gcal_config = config.gcal.as_ref().expect("Google Calendar config missing");
    let calendar = GoogleCalendarService::from_config(gcal_config)
        .expect("Google Calendar collaborator init failed");
    let tz = Tz::from_str(&config.time_zone).expect("time_zone is not a valid IANA zone");
    let availability =
        AvailabilityService::from_config(&config.scheduling, tz, Arc::new(calendar))
            .expect("scheduling configuration invalid");

    let state = Arc::new(AppState {
        config: config.clone(),
        availability: Arc::new(availability),
    });

    Router::new()
        .route("/availability", get(get_availability_handler))
        .route(
            "/availability/range",
            get(get_availability_range_handler),
        )
        .route("/services", get(list_services_handler))
        .with_state(state)
}
