// --- File: crates/services/salonbook_backend/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{AvailabilityRangeResponse, DayAvailabilityResponse, ServiceDto, SlotDto};
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "The bookable service catalog", body = Vec<ServiceDto>,
         example = json!([
             { "id": "8", "name": "Esmaltado Permanente", "duration_minutes": 90 }
         ])
        )
    )
)]
fn doc_list_services_handler() {}

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("date" = String, Query, description = "Date in YYYY-MM-DD format, local to the salon time zone", example = "2025-06-10", format = "date"),
        ("service_id" = String, Query, description = "Key into the service catalog", example = "8"),
        ("mode" = Option<String>, Query, description = "Booking mode: 'normal' (default) or 'extra'"),
        ("open_hour" = Option<u16>, Query, description = "Open hour override (0..23), for testing"),
        ("close_hour" = Option<u16>, Query, description = "Close hour override (0..24), for testing"),
        ("duration" = Option<u16>, Query, description = "Duration override in minutes, for testing")
    ),
    responses(
        (status = 200, description = "Slot records plus the legacy times projection", body = DayAvailabilityResponse,
         example = json!({
             "date": "2025-06-10",
             "extended": false,
             "slots": [
                 { "start": "2025-06-10T10:00:00-04:00", "end": "2025-06-10T11:30:00-04:00", "available": true }
             ],
             "times": ["10:00"]
         })
        ),
        (status = 400, description = "Malformed date, unknown service, or bad overrides", body = String),
        (status = 502, description = "The calendar backend failed", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    get,
    path = "/availability/range",
    params(
        ("from" = String, Query, description = "First date (inclusive), YYYY-MM-DD", format = "date"),
        ("to" = String, Query, description = "Last date (inclusive), YYYY-MM-DD", format = "date"),
        ("service_id" = String, Query, description = "Key into the service catalog"),
        ("mode" = Option<String>, Query, description = "Booking mode: 'normal' (default) or 'extra'")
    ),
    responses(
        (status = 200, description = "One entry per day; closed days are present but empty", body = AvailabilityRangeResponse),
        (status = 400, description = "Malformed dates or unknown service", body = String),
        (status = 502, description = "The calendar backend failed", body = String)
    )
)]
fn doc_get_availability_range_handler() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salonbook API",
        version = "0.1.0",
        description = "Availability endpoints for the salon booking front end",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        doc_get_availability_handler,
        doc_get_availability_range_handler,
        doc_list_services_handler
    ),
    components(schemas(
        SlotDto,
        DayAvailabilityResponse,
        AvailabilityRangeResponse,
        ServiceDto
    )),
    tags((name = "Availability", description = "Slot computation endpoints")),
    servers((url = "/api", description = "Main API prefix"))
)]
pub struct ApiDoc;
