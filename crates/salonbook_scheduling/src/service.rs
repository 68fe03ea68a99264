// --- File: crates/salonbook_scheduling/src/service.rs ---
//! Per-request orchestration: validate, gate on the business day, fetch and
//! normalize busy intervals, resolve the effective window, generate.

use crate::business_day::{is_day_open, BusinessDayRule};
use crate::busy::normalize_busy;
use crate::catalog::ServiceCatalog;
use crate::clock::TimeZoneClock;
use crate::error::AvailabilityError;
use crate::models::{BookingMode, DayAvailability, EndPolicy, TimeWindow};
use crate::slots::generate_slots;
use crate::window::resolve_effective_window;
use chrono::NaiveDate;
use chrono_tz::Tz;
use salonbook_common::services::CalendarService;
use std::sync::Arc;
use tracing::debug;

/// Explicit open/close/duration overrides, used for testing the windows from
/// the outside without touching configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOverrides {
    pub open_minute: Option<u16>,
    pub close_minute: Option<u16>,
    pub duration_minutes: Option<u16>,
}

/// Computes bookable slots for a date, a service, and a booking mode.
///
/// Holds only static configuration plus the calendar collaborator; every call
/// is independent and nothing is cached. Availability is computed from a read
/// snapshot of the calendar while the confirmed booking is written later by a
/// separate collaborator, so two concurrent requests can both see the same
/// slot free and both book it. There is no reservation step here; extenders
/// of this design should add a short-lived hold at this boundary.
pub struct AvailabilityService {
    catalog: ServiceCatalog,
    normal_window: TimeWindow,
    extra_window: TimeWindow,
    rule: BusinessDayRule,
    clock: TimeZoneClock,
    calendar: Arc<dyn CalendarService>,
}

impl AvailabilityService {
    pub fn new(
        catalog: ServiceCatalog,
        normal_window: TimeWindow,
        extra_window: TimeWindow,
        rule: BusinessDayRule,
        clock: TimeZoneClock,
        calendar: Arc<dyn CalendarService>,
    ) -> Self {
        AvailabilityService {
            catalog,
            normal_window,
            extra_window,
            rule,
            clock,
            calendar,
        }
    }

    pub fn from_config(
        config: &salonbook_config::SchedulingConfig,
        tz: Tz,
        calendar: Arc<dyn CalendarService>,
    ) -> Result<Self, AvailabilityError> {
        Ok(AvailabilityService::new(
            ServiceCatalog::from_config(&config.services)?,
            TimeWindow::from_config(&config.normal_window)?,
            TimeWindow::from_config(&config.extra_window)?,
            BusinessDayRule::from_config(&config.business_days)?,
            TimeZoneClock::new(tz),
            calendar,
        ))
    }

    /// Replaces the clock, so tests can pin the zone and "now".
    pub fn with_clock(mut self, clock: TimeZoneClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn zone(&self) -> Tz {
        self.clock.zone()
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub async fn get_availability(
        &self,
        date: &str,
        service_id: &str,
        mode: BookingMode,
    ) -> Result<DayAvailability, AvailabilityError> {
        self.get_availability_with(date, service_id, mode, QueryOverrides::default())
            .await
    }

    pub async fn get_availability_with(
        &self,
        date: &str,
        service_id: &str,
        mode: BookingMode,
        overrides: QueryOverrides,
    ) -> Result<DayAvailability, AvailabilityError> {
        let date = parse_date(date)?;
        let duration_minutes = self.resolve_duration(service_id, overrides)?;
        self.day_availability(date, duration_minutes, mode, overrides)
            .await
    }

    /// Multi-day form: one fetch per day, days independent of each other.
    /// Closed days contribute an empty (not missing) entry.
    pub async fn get_availability_range(
        &self,
        from: &str,
        to: &str,
        service_id: &str,
        mode: BookingMode,
    ) -> Result<Vec<DayAvailability>, AvailabilityError> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        if to < from {
            return Err(AvailabilityError::InvalidRange(format!(
                "'{to}' is before '{from}'"
            )));
        }
        let duration_minutes = self.resolve_duration(service_id, QueryOverrides::default())?;

        let mut days = Vec::new();
        let mut date = from;
        while date <= to {
            days.push(
                self.day_availability(date, duration_minutes, mode, QueryOverrides::default())
                    .await?,
            );
            date = date
                .succ_opt()
                .ok_or_else(|| AvailabilityError::InvalidRange("date overflow".to_string()))?;
        }
        Ok(days)
    }

    fn resolve_duration(
        &self,
        service_id: &str,
        overrides: QueryOverrides,
    ) -> Result<u16, AvailabilityError> {
        let spec = self
            .catalog
            .get(service_id)
            .ok_or_else(|| AvailabilityError::UnknownService(service_id.to_string()))?;
        let duration = overrides.duration_minutes.unwrap_or(spec.duration_minutes);
        if duration == 0 {
            return Err(AvailabilityError::InvalidWindow(
                "duration_minutes must be positive".to_string(),
            ));
        }
        Ok(duration)
    }

    fn base_window(
        &self,
        mode: BookingMode,
        overrides: QueryOverrides,
    ) -> Result<TimeWindow, AvailabilityError> {
        let base = match mode {
            BookingMode::Normal => self.normal_window,
            BookingMode::Extra => self.extra_window,
        };
        if overrides.open_minute.is_none() && overrides.close_minute.is_none() {
            return Ok(base);
        }
        TimeWindow::new(
            overrides.open_minute.unwrap_or(base.open_minute),
            overrides.close_minute.unwrap_or(base.close_minute),
            base.step_minutes,
        )
    }

    async fn day_availability(
        &self,
        date: NaiveDate,
        duration_minutes: u16,
        mode: BookingMode,
        overrides: QueryOverrides,
    ) -> Result<DayAvailability, AvailabilityError> {
        if !is_day_open(date, &self.rule) {
            debug!(%date, "day is closed, returning no slots");
            return Ok(DayAvailability::closed(date));
        }

        let (day_start, day_end) = self.clock.day_bounds_utc(date).ok_or_else(|| {
            AvailabilityError::Config(format!("cannot resolve day bounds for {date}"))
        })?;
        let raw_events = self.calendar.fetch_events(day_start, day_end).await?;
        let busy = normalize_busy(&raw_events, &self.clock);
        debug!(
            %date,
            raw = raw_events.len(),
            busy = busy.len(),
            "normalized calendar events"
        );

        let base = self.base_window(mode, overrides)?;
        let (window, end_policy, extended) = match mode {
            BookingMode::Normal => {
                let effective = resolve_effective_window(
                    date,
                    base,
                    self.extra_window,
                    duration_minutes,
                    &busy,
                    &self.clock,
                );
                (effective.window, effective.end_policy, effective.extended)
            }
            BookingMode::Extra => (base, EndPolicy::Strict, false),
        };

        let slots = generate_slots(date, window, duration_minutes, &busy, end_policy, &self.clock);
        Ok(DayAvailability {
            date,
            extended,
            slots,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AvailabilityError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AvailabilityError::InvalidDate(raw.to_string()))
}
