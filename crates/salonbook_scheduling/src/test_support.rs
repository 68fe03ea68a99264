//! Shared fixtures for the scheduling tests: a pinned wall clock and
//! in-memory calendar collaborators.

use crate::clock::{Clock, TimeZoneClock};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::Santiago;
use chrono_tz::Tz;
use salonbook_common::services::{BoxFuture, CalendarApiError, CalendarService, RawEvent};
use std::sync::Arc;

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub const SALON_TZ: Tz = Santiago;

/// Clock pinned far in the past so the today-cutoff never interferes unless a
/// test wants it to.
pub fn pinned_clock() -> TimeZoneClock {
    clock_at(Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap())
}

pub fn clock_at(now: DateTime<Utc>) -> TimeZoneClock {
    TimeZoneClock::with_clock(SALON_TZ, Arc::new(FixedClock(now)))
}

/// Calendar collaborator that returns a fixed event list.
pub struct StaticCalendar {
    pub events: Vec<RawEvent>,
}

impl CalendarService for StaticCalendar {
    fn fetch_events(
        &self,
        _start_time: DateTime<Utc>,
        _end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<RawEvent>, CalendarApiError> {
        let events = self.events.clone();
        Box::pin(async move { Ok(events) })
    }
}

/// Calendar collaborator that always fails with the given upstream status.
pub struct FailingCalendar {
    pub status: u16,
}

impl CalendarService for FailingCalendar {
    fn fetch_events(
        &self,
        _start_time: DateTime<Utc>,
        _end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<RawEvent>, CalendarApiError> {
        let status = self.status;
        Box::pin(async move {
            Err(CalendarApiError {
                status: Some(status),
                message: format!("upstream returned {status}"),
                hint: "check the calendar id and API key".to_string(),
            })
        })
    }
}
