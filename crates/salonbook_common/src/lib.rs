// --- File: crates/salonbook_common/src/lib.rs ---
//! Shared building blocks for the Salonbook crates: the external calendar
//! service boundary, error-to-HTTP mapping, and logging setup.

pub mod error;
pub mod logging;
pub mod services;
