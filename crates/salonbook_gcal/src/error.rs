// --- File: crates/salonbook_gcal/src/error.rs ---
use salonbook_common::services::CalendarApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcalError {
    #[error("missing Google Calendar configuration: {0}")]
    MissingConfig(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Google Calendar returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to parse calendar response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GcalError {
    /// Short operator guidance for the usual public-calendar misconfigurations.
    pub fn hint(&self) -> &'static str {
        match self {
            GcalError::Api { status: 403, .. } => {
                "API key restrictions: application restrictions must be None and the key must allow the Google Calendar API"
            }
            GcalError::Api { status: 404, .. } => {
                "calendar id is wrong or the calendar is not public"
            }
            GcalError::MissingConfig(_) => "set gcal.calendar_id and GCAL_API_KEY",
            _ => "verify the calendar id, the API key, and that the calendar is public",
        }
    }

    fn upstream_status(&self) -> Option<u16> {
        match self {
            GcalError::Api { status, .. } => Some(*status),
            GcalError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<GcalError> for CalendarApiError {
    fn from(err: GcalError) -> Self {
        CalendarApiError {
            status: err.upstream_status(),
            hint: err.hint().to_string(),
            message: err.to_string(),
        }
    }
}
