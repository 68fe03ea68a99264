// --- File: crates/salonbook_scheduling/src/busy.rs ---
//! Turns heterogeneous calendar events into uniform busy intervals.

use crate::clock::TimeZoneClock;
use crate::models::BusyInterval;
use chrono::{DateTime, NaiveDate, Utc};
use salonbook_common::services::RawEvent;
use tracing::debug;

/// All-day events only block booking when the title announces a closure.
/// Birthdays, reminders and the like must not empty the agenda.
const CLOSURE_KEYWORDS: &[&str] = &["cerrado", "bloqueo", "bloqueado", "closed", "blocked"];

/// Normalizes raw events to absolute busy intervals in the salon zone.
///
/// Timed events map directly. All-day events are dropped unless their title
/// matches a closure keyword, in which case they block the full local day
/// range (the all-day end date is exclusive). Events with only one resolvable
/// endpoint are dropped: partial data must neither block everything nor
/// silently free the time. Order and duplicates are irrelevant downstream.
pub fn normalize_busy(events: &[RawEvent], clock: &TimeZoneClock) -> Vec<BusyInterval> {
    let mut intervals = Vec::with_capacity(events.len());
    for event in events {
        match interval_for(event, clock) {
            Some(interval) if interval.start < interval.end => intervals.push(interval),
            Some(interval) => {
                debug!(?interval, "dropping inverted busy interval");
            }
            None => {}
        }
    }
    intervals
}

fn interval_for(event: &RawEvent, clock: &TimeZoneClock) -> Option<BusyInterval> {
    if event.start_date_time.is_some() || event.end_date_time.is_some() {
        let start = parse_instant(event.start_date_time.as_deref()?)?;
        let end = parse_instant(event.end_date_time.as_deref()?)?;
        return Some(BusyInterval { start, end });
    }

    let summary = event.summary.as_deref().unwrap_or("").to_lowercase();
    if !CLOSURE_KEYWORDS.iter().any(|kw| summary.contains(kw)) {
        return None;
    }
    let start_date = parse_date(event.start_date.as_deref()?)?;
    let end_date = parse_date(event.end_date.as_deref()?)?;
    let start = clock.day_start_utc(start_date)?;
    let end = clock.day_start_utc(end_date)?;
    Some(BusyInterval { start, end })
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
