// --- File: crates/salonbook_scheduling/src/business_day.rs ---
//! Day-level opening policy, checked before any slot is computed.

use crate::error::AvailabilityError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashMap};

/// Which calendar days the salon opens at all.
///
/// Weekdays are always open. Saturdays follow a single toggle. Sundays follow
/// a default toggle unless the month has an override, in which case only the
/// listed ordinal Sundays (1st..5th of the month) are open.
#[derive(Debug, Clone, Default)]
pub struct BusinessDayRule {
    pub saturday_enabled: bool,
    pub sunday_default_enabled: bool,
    pub sunday_ordinal_overrides: HashMap<(i32, u32), BTreeSet<u8>>,
}

impl BusinessDayRule {
    /// Builds the rule from configuration, where override keys are "YYYY-MM".
    pub fn from_config(
        config: &salonbook_config::BusinessDaysConfig,
    ) -> Result<Self, AvailabilityError> {
        let mut overrides = HashMap::new();
        for (key, ordinals) in &config.sunday_ordinal_overrides {
            let month = parse_year_month(key)?;
            if let Some(bad) = ordinals.iter().find(|o| **o < 1 || **o > 5) {
                return Err(AvailabilityError::Config(format!(
                    "sunday ordinal {bad} in override '{key}' is out of range 1..5"
                )));
            }
            overrides.insert(month, ordinals.iter().copied().collect());
        }
        Ok(BusinessDayRule {
            saturday_enabled: config.saturday_enabled,
            sunday_default_enabled: config.sunday_default_enabled,
            sunday_ordinal_overrides: overrides,
        })
    }
}

fn parse_year_month(key: &str) -> Result<(i32, u32), AvailabilityError> {
    let bad_key = || {
        AvailabilityError::Config(format!(
            "sunday override key '{key}' is not a YYYY-MM month"
        ))
    };
    let (year, month) = key.split_once('-').ok_or_else(bad_key)?;
    let year: i32 = year.parse().map_err(|_| bad_key())?;
    let month: u32 = month.parse().map_err(|_| bad_key())?;
    if !(1..=12).contains(&month) {
        return Err(bad_key());
    }
    Ok((year, month))
}

/// Nth Sunday of the month: the count of Sundays from the 1st up to and
/// including `date` (which must itself be a Sunday).
fn sunday_ordinal(date: NaiveDate) -> u8 {
    ((date.day() - 1) / 7 + 1) as u8
}

/// Pure function of date + rule; no clock involved.
pub fn is_day_open(date: NaiveDate, rule: &BusinessDayRule) -> bool {
    match date.weekday() {
        Weekday::Sat => rule.saturday_enabled,
        Weekday::Sun => match rule
            .sunday_ordinal_overrides
            .get(&(date.year(), date.month()))
        {
            Some(ordinals) => ordinals.contains(&sunday_ordinal(date)),
            None => rule.sunday_default_enabled,
        },
        _ => true,
    }
}
