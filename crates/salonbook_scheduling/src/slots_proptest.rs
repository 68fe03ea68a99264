#[cfg(test)]
mod tests {
    use crate::models::{BusyInterval, EndPolicy, TimeWindow};
    use crate::slots::generate_slots;
    use crate::test_support::pinned_clock;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    // A fixed mid-June date: far from "today" for the pinned clock and free
    // of DST transitions, so instant arithmetic matches minute arithmetic.
    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    prop_compose! {
        fn window_strategy()
            (open in 0u16..1200u16)
            (open in Just(open), close in (open + 1)..=1440u16, step in 5u16..=90u16)
            -> TimeWindow {
            TimeWindow::new(open, close, step).unwrap()
        }
    }

    fn busy_strategy() -> impl Strategy<Value = Vec<(u16, u16)>> {
        prop::collection::vec((0u16..1440u16, 15u16..240u16), 0..5)
    }

    proptest! {
        #[test]
        fn generated_slots_respect_their_contract(
            window in window_strategy(),
            duration in 15u16..=240u16,
            busy_minutes in busy_strategy(),
        ) {
            let clock = pinned_clock();
            let date = day();
            let busy: Vec<BusyInterval> = busy_minutes
                .iter()
                .filter_map(|(start, len)| {
                    Some(BusyInterval {
                        start: clock.to_absolute_instant(date, *start)?,
                        end: clock.to_absolute_instant(date, start + len)?,
                    })
                })
                .collect();
            let close = clock
                .to_absolute_instant(date, window.close_minute)
                .unwrap();

            for policy in [EndPolicy::Strict, EndPolicy::Overflow] {
                let slots = generate_slots(date, window, duration, &busy, policy, &clock);

                // Monotonic ordering at exactly the configured step.
                for pair in slots.windows(2) {
                    prop_assert_eq!(
                        pair[1].start - pair[0].start,
                        Duration::minutes(i64::from(window.step_minutes))
                    );
                }

                for slot in &slots {
                    prop_assert_eq!(
                        slot.end - slot.start,
                        Duration::minutes(i64::from(duration))
                    );
                    match policy {
                        // The full service fits before close.
                        EndPolicy::Strict => prop_assert!(slot.end <= close),
                        // Only the start boundary is enforced.
                        EndPolicy::Overflow => prop_assert!(slot.start < close),
                    }
                    // Availability is exactly the half-open overlap test.
                    let conflicted = busy
                        .iter()
                        .any(|b| slot.start < b.end && slot.end > b.start);
                    prop_assert_eq!(slot.available, !conflicted);
                }
            }
        }
    }
}
