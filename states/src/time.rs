use chrono::{DateTime, NaiveDate, Utc};

use crate::State;

/// Wall clock as seen by the UI.
///
/// The app ticks it once per frame; tests freeze it so date-dependent output (export file
/// names) is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
    frozen: bool,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            virt: Utc::now(),
            frozen: false,
        }
    }
}

impl Time {
    /// A clock that stays at `at`; ticks leave it alone.
    pub fn frozen(at: DateTime<Utc>) -> Self {
        Self {
            virt: at,
            frozen: true,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.virt.date_naive()
    }

    /// Advances to the real current time unless frozen.
    pub fn tick(&mut self) {
        if !self.frozen {
            self.virt = Utc::now();
        }
    }
}

impl State for Time {}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn frozen_time_ignores_ticks() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 0).unwrap();
        let mut time = Time::frozen(at);
        time.tick();

        assert_eq!(time.today(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn unfrozen_time_follows_the_wall_clock() {
        let before = Utc::now().date_naive();
        let mut time = Time::default();
        time.tick();
        assert!(time.today() >= before);
    }
}
