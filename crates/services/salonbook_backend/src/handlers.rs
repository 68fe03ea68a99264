// --- File: crates/services/salonbook_backend/src/handlers.rs ---
use crate::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono_tz::Tz;
use salonbook_common::error::HttpStatusCode;
use salonbook_scheduling::{
    AvailabilityError, BookingMode, DayAvailability, QueryOverrides, Slot,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct AvailabilityQuery {
    /// Date in YYYY-MM-DD format, local to the salon time zone
    pub date: String,
    /// Key into the service catalog
    pub service_id: String,
    /// "normal" (default) or "extra"
    #[serde(default)]
    pub mode: Option<String>,
    /// Open hour override (0..23), for testing the windows
    pub open_hour: Option<u16>,
    /// Close hour override (0..24), for testing the windows
    pub close_hour: Option<u16>,
    /// Duration override in minutes
    pub duration: Option<u16>,
}

#[derive(Deserialize, Debug)]
pub struct AvailabilityRangeQuery {
    /// First date in YYYY-MM-DD format (inclusive)
    pub from: String,
    /// Last date in YYYY-MM-DD format (inclusive)
    pub to: String,
    pub service_id: String,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceDto {
    pub id: String,
    pub name: String,
    pub duration_minutes: u16,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotDto {
    /// RFC 3339 start in the salon time zone
    pub start: String,
    pub end: String,
    pub available: bool,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DayAvailabilityResponse {
    pub date: String,
    /// True when the close hour was widened into the extra window
    pub extended: bool,
    pub slots: Vec<SlotDto>,
    /// Available local "HH:MM" starts, kept for older clients. A projection
    /// of `slots`, not an independent source of truth.
    pub times: Vec<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityRangeResponse {
    pub days: Vec<DayAvailabilityResponse>,
}

fn slot_dto(slot: &Slot, tz: Tz) -> SlotDto {
    SlotDto {
        start: slot.start.with_timezone(&tz).to_rfc3339(),
        end: slot.end.with_timezone(&tz).to_rfc3339(),
        available: slot.available,
    }
}

fn day_response(day: &DayAvailability, tz: Tz) -> DayAvailabilityResponse {
    DayAvailabilityResponse {
        date: day.date.to_string(),
        extended: day.extended,
        slots: day.slots.iter().map(|slot| slot_dto(slot, tz)).collect(),
        times: day.available_starts(tz),
    }
}

fn parse_mode(raw: Option<&str>) -> Result<BookingMode, (StatusCode, String)> {
    match raw {
        None | Some("normal") => Ok(BookingMode::Normal),
        Some("extra") => Ok(BookingMode::Extra),
        Some(other) => Err((
            StatusCode::BAD_REQUEST,
            format!("unknown mode '{other}': expected 'normal' or 'extra'"),
        )),
    }
}

fn error_response(err: AvailabilityError) -> (StatusCode, String) {
    info!("availability request failed: {err}");
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

/// Handler to list the bookable service catalog.
#[axum::debug_handler]
pub async fn list_services_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceDto>> {
    let services = state
        .availability
        .catalog()
        .services()
        .iter()
        .map(|spec| ServiceDto {
            id: spec.id.clone(),
            name: spec.name.clone(),
            duration_minutes: spec.duration_minutes,
        })
        .collect();
    Json(services)
}

/// Handler to get one day's slots.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<DayAvailabilityResponse>, (StatusCode, String)> {
    let mode = parse_mode(query.mode.as_deref())?;
    let overrides = QueryOverrides {
        // Saturate rather than overflow; the window constructor rejects
        // anything past 24:00 with a proper 400.
        open_minute: query.open_hour.map(|h| h.saturating_mul(60)),
        close_minute: query.close_hour.map(|h| h.saturating_mul(60)),
        duration_minutes: query.duration,
    };
    let day = state
        .availability
        .get_availability_with(&query.date, &query.service_id, mode, overrides)
        .await
        .map_err(error_response)?;
    Ok(Json(day_response(&day, state.availability.zone())))
}

/// Handler to get slots for an inclusive date range, one fetch per day.
#[axum::debug_handler]
pub async fn get_availability_range_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityRangeQuery>,
) -> Result<Json<AvailabilityRangeResponse>, (StatusCode, String)> {
    let mode = parse_mode(query.mode.as_deref())?;
    let days = state
        .availability
        .get_availability_range(&query.from, &query.to, &query.service_id, mode)
        .await
        .map_err(error_response)?;
    let tz = state.availability.zone();
    Ok(Json(AvailabilityRangeResponse {
        days: days.iter().map(|day| day_response(day, tz)).collect(),
    }))
}
