// --- File: crates/salonbook_scheduling/src/error.rs ---
use salonbook_common::error::HttpStatusCode;
use salonbook_common::services::CalendarApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid date range: {0}")]
    InvalidRange(String),

    #[error("unknown service id '{0}'")]
    UnknownService(String),

    #[error("invalid booking window: {0}")]
    InvalidWindow(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// The calendar backend failed. Carries the upstream HTTP status where
    /// one exists plus a short operator hint; a failed fetch is never folded
    /// into "no busy intervals" or "fully booked".
    #[error("calendar backend error: {message} ({hint})")]
    Calendar {
        status: Option<u16>,
        message: String,
        hint: String,
    },
}

impl From<CalendarApiError> for AvailabilityError {
    fn from(err: CalendarApiError) -> Self {
        AvailabilityError::Calendar {
            status: err.status,
            message: err.message,
            hint: err.hint,
        }
    }
}

impl HttpStatusCode for AvailabilityError {
    fn status_code(&self) -> u16 {
        match self {
            AvailabilityError::InvalidDate(_)
            | AvailabilityError::InvalidRange(_)
            | AvailabilityError::UnknownService(_)
            | AvailabilityError::InvalidWindow(_) => 400,
            AvailabilityError::Config(_) => 500,
            AvailabilityError::Calendar { .. } => 502,
        }
    }
}
