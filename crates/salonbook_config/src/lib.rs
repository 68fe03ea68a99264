// --- File: crates/salonbook_config/src/lib.rs ---
//! Configuration loading for the Salonbook service.
//!
//! One [`AppConfig`] is loaded at startup and shared via `Arc`. Sources, in
//! order of precedence: built-in defaults, `config/default.toml` (optional),
//! then environment variables prefixed `APP_` with `__` as the nesting
//! separator (e.g. `APP_SERVER__PORT=9000`).

pub mod models;

pub use models::*;

use config::{Config, ConfigError, Environment, File};
use std::sync::Once;

static DOTENV: Once = Once::new();

/// Loads `.env` once per process, before any env-based overrides are read.
pub fn ensure_dotenv_loaded() {
    DOTENV.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the application configuration.
///
/// Missing files are fine (defaults apply); a malformed file or override is a
/// startup error and the caller is expected to fail fast rather than run with
/// partial configuration.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_full_scheduling_surface() {
        let config = AppConfig::default();
        assert_eq!(config.time_zone, "America/Santiago");
        assert_eq!(config.scheduling.normal_window.open, "10:00");
        assert_eq!(config.scheduling.normal_window.close, "18:00");
        assert_eq!(config.scheduling.extra_window.open, "18:00");
        assert_eq!(config.scheduling.extra_window.close, "20:00");
        assert_eq!(config.scheduling.normal_window.step_minutes, 30);
        assert_eq!(config.scheduling.services.len(), 8);
        assert!(config.scheduling.business_days.saturday_enabled);
        assert!(!config.scheduling.business_days.sunday_default_enabled);
    }

    #[test]
    fn catalog_defaults_keep_positive_durations() {
        for service in AppConfig::default().scheduling.services {
            assert!(service.duration_minutes > 0, "service {}", service.id);
        }
    }
}
