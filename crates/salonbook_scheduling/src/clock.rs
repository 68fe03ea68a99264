// --- File: crates/salonbook_scheduling/src/clock.rs ---
//! The single home for timezone arithmetic.
//!
//! Dates and booking windows are wall-clock values in the salon's zone; busy
//! intervals and slots are absolute instants. Every conversion between the
//! two goes through [`TimeZoneClock`] so the rest of the engine never touches
//! offsets directly.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Wall clock, injectable so tests can pin "now".
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Clone)]
pub struct TimeZoneClock {
    tz: Tz,
    clock: Arc<dyn Clock>,
}

impl TimeZoneClock {
    pub fn new(tz: Tz) -> Self {
        TimeZoneClock {
            tz,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(tz: Tz, clock: Arc<dyn Clock>) -> Self {
        TimeZoneClock { tz, clock }
    }

    pub fn zone(&self) -> Tz {
        self.tz
    }

    pub fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now_utc()
    }

    pub fn now_in_salon_zone(&self) -> DateTime<Tz> {
        self.now_utc().with_timezone(&self.tz)
    }

    /// Today's calendar date in the salon zone, not UTC.
    pub fn today(&self) -> NaiveDate {
        self.now_in_salon_zone().date_naive()
    }

    /// Resolves a local (date, minute-of-day) to an absolute instant.
    ///
    /// Returns `None` when the local time does not exist (DST spring-forward
    /// gap); ambiguous times resolve to the earlier mapping. Minutes past
    /// 1439 roll into the next day, so a 24:00 close is representable.
    pub fn to_absolute_instant(&self, date: NaiveDate, minute_of_day: u16) -> Option<DateTime<Utc>> {
        let naive = date.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(minute_of_day));
        self.tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }

    /// Instant at which the local day begins.
    ///
    /// Chile moves its clocks at local midnight, so 00:00 itself can fall in
    /// the DST gap; in that case the day starts an hour later.
    pub fn day_start_utc(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.to_absolute_instant(date, 0)
            .or_else(|| self.to_absolute_instant(date, 60))
    }

    /// UTC bounds `[start, end)` of the full local day.
    pub fn day_bounds_utc(&self, date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.day_start_utc(date)?;
        let end = self.day_start_utc(date.succ_opt()?)?;
        Some((start, end))
    }
}
