// --- File: crates/salonbook_scheduling/src/window.rs ---
//! Dynamic close-hour extension for the regular booking flow.
//!
//! The evening window normally carries a surcharge, but when the regular day
//! is effectively full the business prefers to quietly widen availability
//! into it rather than turn customers away.

use crate::clock::TimeZoneClock;
use crate::models::{BusyInterval, EndPolicy, TimeWindow};
use crate::slots::generate_slots;
use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct EffectiveWindow {
    pub window: TimeWindow,
    pub end_policy: EndPolicy,
    pub extended: bool,
}

/// Decides, once per request, which window the normal flow should use.
///
/// If any busy interval already starts at or after the extra window's opening
/// instant, those evening hours are considered in play by someone else and
/// the regular window stands. Otherwise the regular window is generated
/// tentatively under Strict policy, and only if its last candidate slot is
/// blocked does the close hour widen to the extra window's close, switching
/// to Overflow policy. The last slot alone is the "day is full" signal; this
/// is not an iterative search.
pub fn resolve_effective_window(
    date: NaiveDate,
    normal_window: TimeWindow,
    extra_window: TimeWindow,
    duration_minutes: u16,
    busy: &[BusyInterval],
    clock: &TimeZoneClock,
) -> EffectiveWindow {
    let unchanged = EffectiveWindow {
        window: normal_window,
        end_policy: EndPolicy::Strict,
        extended: false,
    };

    // A widened close must actually widen; an extra window that closes inside
    // the regular day has nothing to offer.
    if extra_window.close_minute <= normal_window.close_minute {
        return unchanged;
    }

    // If the evening opening has no instant on this date (DST gap) the
    // in-play check is undecidable; keep the regular window.
    let Some(extra_open) = clock.to_absolute_instant(date, extra_window.open_minute) else {
        return unchanged;
    };
    if busy.iter().any(|b| b.start >= extra_open) {
        return unchanged;
    }

    let tentative = generate_slots(
        date,
        normal_window,
        duration_minutes,
        busy,
        EndPolicy::Strict,
        clock,
    );
    match tentative.last() {
        Some(last) if !last.available => {
            debug!(%date, "last regular slot is blocked, widening close into the extra window");
            EffectiveWindow {
                window: normal_window.widened_to(extra_window.close_minute),
                end_policy: EndPolicy::Overflow,
                extended: true,
            }
        }
        _ => unchanged,
    }
}
