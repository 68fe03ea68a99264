// --- File: crates/salonbook_common/src/error.rs ---

/// A trait for converting errors to HTTP status codes.
///
/// Implemented by domain error types so HTTP handlers can map failures to
/// responses without matching on every variant themselves.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}
