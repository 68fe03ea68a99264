#[cfg(test)]
mod tests {
    use crate::models::{BusyInterval, EndPolicy, TimeWindow};
    use crate::test_support::pinned_clock;
    use crate::window::resolve_effective_window;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn normal() -> TimeWindow {
        TimeWindow::new(600, 1080, 30).unwrap() // 10:00-18:00
    }

    fn extra() -> TimeWindow {
        TimeWindow::new(1080, 1200, 30).unwrap() // 18:00-20:00
    }

    fn busy(open_minute: u16, close_minute: u16) -> BusyInterval {
        let clock = pinned_clock();
        BusyInterval {
            start: clock.to_absolute_instant(date(), open_minute).unwrap(),
            end: clock.to_absolute_instant(date(), close_minute).unwrap(),
        }
    }

    #[test]
    fn blocked_last_slot_widens_close_into_the_extra_window() {
        // Last 90-minute Strict slot is 16:30-18:00; busy 16:00-18:00 covers it.
        let effective = resolve_effective_window(
            date(),
            normal(),
            extra(),
            90,
            &[busy(960, 1080)],
            &pinned_clock(),
        );
        assert!(effective.extended);
        assert_eq!(effective.end_policy, EndPolicy::Overflow);
        assert_eq!(effective.window.open_minute, 600);
        assert_eq!(effective.window.close_minute, 1200);
        assert_eq!(effective.window.step_minutes, 30);
    }

    #[test]
    fn free_last_slot_keeps_the_normal_window_despite_earlier_blocks() {
        let effective = resolve_effective_window(
            date(),
            normal(),
            extra(),
            90,
            &[busy(720, 780), busy(840, 900)],
            &pinned_clock(),
        );
        assert!(!effective.extended);
        assert_eq!(effective.end_policy, EndPolicy::Strict);
        assert_eq!(effective.window, normal());
    }

    #[test]
    fn evening_bookings_suppress_the_extension() {
        // Last slot blocked, but someone already booked 18:30-19:30, so the
        // evening hours are in play and the day is not widened.
        let effective = resolve_effective_window(
            date(),
            normal(),
            extra(),
            90,
            &[busy(960, 1080), busy(1110, 1170)],
            &pinned_clock(),
        );
        assert!(!effective.extended);
        assert_eq!(effective.window, normal());
    }

    #[test]
    fn a_booking_starting_exactly_at_extra_open_counts_as_in_play() {
        let effective = resolve_effective_window(
            date(),
            normal(),
            extra(),
            90,
            &[busy(960, 1080), busy(1080, 1140)],
            &pinned_clock(),
        );
        assert!(!effective.extended);
    }

    #[test]
    fn unresolvable_extra_opening_suppresses_the_extension() {
        // Chile springs forward at local midnight on 2025-09-07, so an extra
        // window opening at 00:00 has no instant that day. The in-play check
        // cannot run; the regular window must stand even when its last slot
        // is blocked.
        let clock = pinned_clock();
        let day = NaiveDate::from_ymd_opt(2025, 9, 7).unwrap();
        let normal = TimeWindow::new(120, 240, 30).unwrap();
        let extra = TimeWindow::new(0, 300, 30).unwrap();
        assert!(clock.to_absolute_instant(day, extra.open_minute).is_none());

        let blocked_last = BusyInterval {
            start: clock.to_absolute_instant(day, 180).unwrap(),
            end: clock.to_absolute_instant(day, 240).unwrap(),
        };
        let effective =
            resolve_effective_window(day, normal, extra, 60, &[blocked_last], &clock);
        assert!(!effective.extended);
        assert_eq!(effective.window, normal);
    }

    #[test]
    fn an_extra_close_inside_the_regular_day_never_extends() {
        // Misconfigured extra window closing at the regular close: widening
        // would change nothing, so the day stays Strict and unextended.
        let effective = resolve_effective_window(
            date(),
            normal(),
            TimeWindow::new(1020, 1080, 30).unwrap(),
            90,
            &[busy(960, 1080)],
            &pinned_clock(),
        );
        assert!(!effective.extended);
        assert_eq!(effective.end_policy, EndPolicy::Strict);
        assert_eq!(effective.window, normal());
    }

    #[test]
    fn no_candidates_means_no_extension() {
        // A service longer than the whole window generates nothing to inspect.
        let effective =
            resolve_effective_window(date(), normal(), extra(), 600, &[], &pinned_clock());
        assert!(!effective.extended);
        assert_eq!(effective.end_policy, EndPolicy::Strict);
    }
}
