// --- File: crates/salonbook_scheduling/src/slots.rs ---
//! Candidate slot generation and availability marking.

use crate::clock::TimeZoneClock;
use crate::models::{BusyInterval, EndPolicy, Slot, TimeWindow};
use chrono::{Duration, NaiveDate};

/// Generates candidate slots for one local day.
///
/// Candidates start at the window's open minute and advance by its step.
/// Under [`EndPolicy::Strict`] generation stops once the service would finish
/// after the close minute; under [`EndPolicy::Overflow`] only the start
/// boundary is enforced. Each candidate is marked against the busy intervals
/// with the half-open overlap test `start < busy.end && end > busy.start`.
///
/// The returned slots are in strictly increasing start order; callers render
/// them in that order, so the ordering is part of the contract. When `date`
/// is today in the salon zone, slots whose start is not strictly after now
/// are dropped. A duration longer than the whole window simply yields no
/// candidates. Candidates that fall into a DST gap are skipped.
pub fn generate_slots(
    date: NaiveDate,
    window: TimeWindow,
    duration_minutes: u16,
    busy: &[BusyInterval],
    end_policy: EndPolicy,
    clock: &TimeZoneClock,
) -> Vec<Slot> {
    let duration = Duration::minutes(i64::from(duration_minutes));
    let mut slots = Vec::new();
    let mut minute = window.open_minute;

    loop {
        let can_propose = match end_policy {
            EndPolicy::Strict => {
                u32::from(minute) + u32::from(duration_minutes) <= u32::from(window.close_minute)
            }
            EndPolicy::Overflow => minute < window.close_minute,
        };
        if !can_propose {
            break;
        }

        if let Some(start) = clock.to_absolute_instant(date, minute) {
            let end = start + duration;
            let available = !busy.iter().any(|b| b.overlaps(start, end));
            slots.push(Slot {
                start,
                end,
                available,
            });
        }

        minute = match minute.checked_add(window.step_minutes) {
            Some(next) => next,
            None => break,
        };
    }

    // Hide starts that have already passed when looking at today.
    if date == clock.today() {
        let now = clock.now_utc();
        slots.retain(|slot| slot.start > now);
    }

    slots
}
