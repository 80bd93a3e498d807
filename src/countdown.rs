use chrono::{DateTime, Local, TimeZone};
use gloo_timers::callback::Interval;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const TICK_INTERVAL_MS: u32 = 1_000;

/// Remaining time until a target instant, split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Decompose a signed millisecond distance into days/hours/minutes/seconds.
    ///
    /// Quotients floor toward negative infinity while `%` keeps the
    /// dividend's sign, so once the distance goes negative the sub-fields
    /// carry their own signs independently of `days`.
    pub fn from_distance_ms(distance_ms: i64) -> Self {
        Self {
            days: distance_ms.div_euclid(MS_PER_DAY),
            hours: (distance_ms % MS_PER_DAY).div_euclid(MS_PER_HOUR),
            minutes: (distance_ms % MS_PER_HOUR).div_euclid(MS_PER_MINUTE),
            seconds: (distance_ms % MS_PER_MINUTE).div_euclid(MS_PER_SECOND),
        }
    }

    /// Remaining time from `now` until `target`.
    pub fn until<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        Self::from_distance_ms(
            target
                .clone()
                .signed_duration_since(now.clone())
                .num_milliseconds(),
        )
    }
}

/// Recomputes the time left to a fixed target once per second and hands
/// each value to a subscriber callback.
///
/// The clock is the sole writer; subscribers only read what they are
/// handed. Dropping the clock cancels the underlying interval.
pub struct CountdownClock {
    interval: Option<Interval>,
}

impl CountdownClock {
    pub fn new() -> Self {
        Self { interval: None }
    }

    /// Begin ticking toward `target`. Delivers one value immediately,
    /// then one every second until [`stop`](Self::stop) is called.
    /// Starting an already-running clock reschedules it.
    pub fn start<F>(&mut self, target: DateTime<Local>, mut on_tick: F)
    where
        F: FnMut(TimeLeft) + 'static,
    {
        self.stop();
        on_tick(TimeLeft::until(&target, &Local::now()));
        self.interval = Some(Interval::new(TICK_INTERVAL_MS, move || {
            on_tick(TimeLeft::until(&target, &Local::now()));
        }));
    }

    /// Cancel the tick schedule. Safe to call repeatedly, and before
    /// `start` was ever invoked; no tick is delivered after this returns.
    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn time_left(days: i64, hours: i64, minutes: i64, seconds: i64) -> TimeLeft {
        TimeLeft {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test_case(0, time_left(0, 0, 0, 0) ; "at the deadline")]
    #[test_case(1_000, time_left(0, 0, 0, 1) ; "one second out")]
    #[test_case(MS_PER_DAY, time_left(1, 0, 0, 0) ; "one day out")]
    #[test_case(MS_PER_HOUR, time_left(0, 1, 0, 0) ; "one hour out")]
    #[test_case(
        36 * MS_PER_HOUR + 61_500,
        time_left(1, 12, 1, 1) ;
        "a day and a half plus change"
    )]
    #[test_case(-MS_PER_DAY, time_left(-1, 0, 0, 0) ; "one day past")]
    #[test_case(-1_000, time_left(-1, -1, -1, -1) ; "one second past")]
    #[test_case(-90 * MS_PER_MINUTE, time_left(-1, -2, -30, 0) ; "ninety minutes past")]
    fn decomposes_distances(distance_ms: i64, expected: TimeLeft) {
        assert_eq!(TimeLeft::from_distance_ms(distance_ms), expected);
    }

    #[test]
    fn one_day_before_the_event() {
        let target = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap();
        assert_eq!(TimeLeft::until(&target, &now), time_left(1, 0, 0, 0));
    }

    #[test]
    fn one_hour_before_the_event() {
        let target = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 23, 0, 0).unwrap();
        assert_eq!(TimeLeft::until(&target, &now), time_left(0, 1, 0, 0));
    }

    #[test]
    fn one_day_after_the_event() {
        let target = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();
        assert_eq!(TimeLeft::until(&target, &now), time_left(-1, 0, 0, 0));
    }

    #[test]
    fn stop_before_start_is_a_no_op() {
        let mut clock = CountdownClock::new();
        assert!(!clock.is_running());
        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
    }

    proptest! {
        // Up to ~127 years out; comfortably past any plausible event date.
        #[test]
        fn future_distances_rebuild_within_a_second(distance_ms in 0i64..4_000_000_000_000) {
            let left = TimeLeft::from_distance_ms(distance_ms);
            prop_assert!(left.days >= 0);
            prop_assert!(left.hours >= 0);
            prop_assert!(left.minutes >= 0);
            prop_assert!(left.seconds >= 0);

            let rebuilt = left.days * MS_PER_DAY
                + left.hours * MS_PER_HOUR
                + left.minutes * MS_PER_MINUTE
                + left.seconds * MS_PER_SECOND;
            prop_assert!(rebuilt <= distance_ms);
            prop_assert!(distance_ms - rebuilt < MS_PER_SECOND);
        }

        #[test]
        fn past_distances_keep_days_nonpositive(distance_ms in -4_000_000_000_000i64..=0) {
            let left = TimeLeft::from_distance_ms(distance_ms);
            prop_assert!(left.days <= 0);
            // `days` is the floored quotient of the full distance.
            prop_assert!(left.days * MS_PER_DAY <= distance_ms);
            prop_assert!(distance_ms < (left.days + 1) * MS_PER_DAY);
            // Sub-fields stay within one unit of their carrier.
            prop_assert!((-24..24).contains(&left.hours));
            prop_assert!((-60..60).contains(&left.minutes));
            prop_assert!((-60..60).contains(&left.seconds));
        }
    }
}
