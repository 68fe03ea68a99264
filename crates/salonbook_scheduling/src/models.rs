// --- File: crates/salonbook_scheduling/src/models.rs ---
use crate::error::AvailabilityError;
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A daily booking window expressed in minutes of the local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub open_minute: u16,
    pub close_minute: u16,
    pub step_minutes: u16,
}

impl TimeWindow {
    pub fn new(
        open_minute: u16,
        close_minute: u16,
        step_minutes: u16,
    ) -> Result<Self, AvailabilityError> {
        if open_minute >= close_minute || close_minute > MINUTES_PER_DAY {
            return Err(AvailabilityError::InvalidWindow(format!(
                "open minute {open_minute} and close minute {close_minute} must satisfy 0 <= open < close <= {MINUTES_PER_DAY}"
            )));
        }
        if step_minutes == 0 {
            return Err(AvailabilityError::InvalidWindow(
                "step_minutes must be positive".to_string(),
            ));
        }
        Ok(TimeWindow {
            open_minute,
            close_minute,
            step_minutes,
        })
    }

    /// Builds a window from the "HH:MM" strings used in configuration.
    pub fn from_config(config: &salonbook_config::WindowConfig) -> Result<Self, AvailabilityError> {
        TimeWindow::new(
            parse_minute_of_day(&config.open)?,
            parse_minute_of_day(&config.close)?,
            config.step_minutes,
        )
    }

    /// Same opening and step, close pushed out to `close_minute`. Widening
    /// only; the result must still satisfy the window invariant.
    pub fn widened_to(self, close_minute: u16) -> Self {
        debug_assert!(close_minute >= self.close_minute);
        TimeWindow {
            close_minute,
            ..self
        }
    }
}

fn parse_minute_of_day(raw: &str) -> Result<u16, AvailabilityError> {
    let time = NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| {
        AvailabilityError::InvalidWindow(format!("'{raw}' is not a valid HH:MM time"))
    })?;
    Ok((time.hour() * 60 + time.minute()) as u16)
}

/// Which booking page the request came from. Normal gets the regular window
/// plus the dynamic extension; Extra books the surcharge evening window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    Normal,
    Extra,
}

/// End-of-day boundary policy for candidate slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndPolicy {
    /// The full service must finish at or before the close minute.
    Strict,
    /// A slot only needs to start before the close minute; the service may
    /// finish after it.
    Overflow,
}

/// An absolute time range during which the salon is already committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    /// Half-open overlap test against `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end && end > self.start
    }
}

/// A candidate appointment start plus its implied end and availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub available: bool,
}

/// One day's computed slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// True when the close hour was silently widened into the extra window.
    pub extended: bool,
    pub slots: Vec<Slot>,
}

impl DayAvailability {
    pub fn closed(date: NaiveDate) -> Self {
        DayAvailability {
            date,
            extended: false,
            slots: Vec::new(),
        }
    }

    /// Legacy projection kept for older callers: local "HH:MM" start times of
    /// the available slots only. Derived from `slots`, never computed apart.
    pub fn available_starts(&self, tz: Tz) -> Vec<String> {
        self.slots
            .iter()
            .filter(|slot| slot.available)
            .map(|slot| slot.start.with_timezone(&tz).format("%H:%M").to_string())
            .collect()
    }
}
