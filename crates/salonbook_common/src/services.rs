// --- File: crates/salonbook_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The scheduling core never talks to a concrete calendar backend; it goes
//! through the [`CalendarService`] trait defined here. This keeps the core
//! testable with an in-memory fake and decouples it from transport details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A raw event record as the external calendar reports it.
///
/// Timed events carry `start_date_time`/`end_date_time` (RFC 3339). All-day
/// events carry `start_date`/`end_date` (`YYYY-MM-DD`, end exclusive). A
/// record may be partial; the normalizer decides what to do with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
}

impl RawEvent {
    /// Timed event convenience constructor, mostly for tests.
    pub fn timed(start: &str, end: &str, summary: &str) -> Self {
        RawEvent {
            start_date_time: Some(start.to_string()),
            end_date_time: Some(end.to_string()),
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    /// All-day event convenience constructor, mostly for tests.
    pub fn all_day(start_date: &str, end_date: &str, summary: &str) -> Self {
        RawEvent {
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }
}

/// Failure reported by a calendar backend.
///
/// The upstream HTTP status is preserved where one exists so that callers can
/// tell a permission problem from a missing calendar, and `hint` carries a
/// short actionable message for the operator. A backend failure must never be
/// interpreted as "no busy intervals" or as "fully booked".
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CalendarApiError {
    pub status: Option<u16>,
    pub message: String,
    pub hint: String,
}

/// A trait for read access to the external calendar.
pub trait CalendarService: Send + Sync {
    /// Fetch raw events overlapping `[start_time, end_time)`.
    fn fetch_events(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<RawEvent>, CalendarApiError>;
}
