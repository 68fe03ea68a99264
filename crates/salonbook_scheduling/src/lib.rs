// --- File: crates/salonbook_scheduling/src/lib.rs ---
//! The availability / slot-scheduling engine.
//!
//! Given a service duration, a business-hours policy, and the busy intervals
//! already on the salon calendar, this crate computes the bookable start
//! times for a day or date range, including the secondary "extra" window and
//! the dynamic close-hour extension used when the regular window is full.
//!
//! Everything here is request-scoped: date + service + mode in, slots out.
//! No state survives between calls, and the only I/O is the calendar fetch
//! behind [`salonbook_common::services::CalendarService`].

pub mod business_day;
pub mod busy;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod models;
pub mod service;
pub mod slots;
#[cfg(test)]
mod slots_proptest;
#[cfg(test)]
pub(crate) mod test_support;
pub mod window;
#[cfg(test)]
mod window_test;

pub use error::AvailabilityError;
pub use models::{BookingMode, BusyInterval, DayAvailability, EndPolicy, Slot, TimeWindow};
pub use service::{AvailabilityService, QueryOverrides};
