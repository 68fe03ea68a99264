// --- File: crates/salonbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Google Calendar Config ---
// Holds non-secret calendar config. The API key may also be loaded directly
// from the env var GCAL_API_KEY (the calendar is public, key-only access).
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct GcalConfig {
    pub calendar_id: Option<String>, // Mandatory at startup
    pub api_key: Option<String>,     // Falls back to env var: GCAL_API_KEY
}

// --- Booking windows ---
// Open/close are wall-clock "HH:MM" strings in the salon time zone.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub open: String,
    pub close: String,
    pub step_minutes: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            open: "10:00".to_string(),
            close: "18:00".to_string(),
            step_minutes: 30,
        }
    }
}

fn default_extra_window() -> WindowConfig {
    WindowConfig {
        open: "18:00".to_string(),
        close: "20:00".to_string(),
        step_minutes: 30,
    }
}

// --- Day-level opening rules ---
// Sunday overrides are keyed by "YYYY-MM" and list the ordinal Sundays
// (1st..5th) that are open in that month.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct BusinessDaysConfig {
    pub saturday_enabled: bool,
    pub sunday_default_enabled: bool,
    pub sunday_ordinal_overrides: HashMap<String, Vec<u8>>,
}

impl Default for BusinessDaysConfig {
    fn default() -> Self {
        BusinessDaysConfig {
            saturday_enabled: true,
            sunday_default_enabled: false,
            sunday_ordinal_overrides: HashMap::new(),
        }
    }
}

// --- Service catalog ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceEntry {
    pub id: String,
    pub name: String,
    pub duration_minutes: u16,
}

fn default_services() -> Vec<ServiceEntry> {
    let entries = [
        ("1", "Retoque (Mantenimiento)", 120),
        ("2", "Reconstrucción Uñas Mordidas (Onicofagía)", 180),
        ("3", "Uñas Acrílicas", 180),
        ("4", "Uñas Polygel", 180),
        ("5", "Uñas Softgel", 180),
        ("6", "Kapping o Baño Polygel o Acrílico sobre uña natural", 150),
        ("7", "Reforzamiento Nivelación Rubber", 150),
        ("8", "Esmaltado Permanente", 90),
    ];
    entries
        .iter()
        .map(|(id, name, duration_minutes)| ServiceEntry {
            id: id.to_string(),
            name: name.to_string(),
            duration_minutes: *duration_minutes,
        })
        .collect()
}

// --- Scheduling Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SchedulingConfig {
    pub normal_window: WindowConfig,
    pub extra_window: WindowConfig,
    pub business_days: BusinessDaysConfig,
    pub services: Vec<ServiceEntry>,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        SchedulingConfig {
            normal_window: WindowConfig::default(),
            extra_window: default_extra_window(),
            business_days: BusinessDaysConfig::default(),
            services: default_services(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// IANA zone the salon operates in. All dates and windows are local to it.
    pub time_zone: String,

    #[serde(default)]
    pub gcal: Option<GcalConfig>,

    pub scheduling: SchedulingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerConfig::default(),
            time_zone: "America/Santiago".to_string(),
            gcal: None,
            scheduling: SchedulingConfig::default(),
        }
    }
}
