// --- File: crates/salonbook_gcal/src/lib.rs ---
//! Read-only Google Calendar collaborator.
//!
//! The salon calendar is a public secondary calendar queried with an API key
//! through `events.list`; there is no OAuth flow and this crate performs no
//! writes. Booking writes belong to a different collaborator entirely.

pub mod error;
pub mod service;
#[cfg(test)]
mod service_test;

pub use error::GcalError;
pub use service::GoogleCalendarService;
