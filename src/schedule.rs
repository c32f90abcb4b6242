// src/schedule.rs
use std::{thread, time::Duration};

use chrono::{Datelike, Days, Local, NaiveDateTime, NaiveTime, Weekday};

use crate::config::consts::{SCHEDULE_HOUR, SCHEDULE_TICK_SECS};

/// A fixed weekly slot in local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weekly {
    pub day: Weekday,
    pub at: NaiveTime,
}

impl Default for Weekly {
    /// Mondays at 09:00.
    fn default() -> Self {
        Self {
            day: Weekday::Mon,
            at: NaiveTime::from_hms_opt(SCHEDULE_HOUR, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl Weekly {
    /// The first slot strictly after `now`.
    pub fn next_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let ahead = (7 + self.day.num_days_from_monday() - now.weekday().num_days_from_monday()) % 7;
        let candidate = (now.date() + Days::new(u64::from(ahead))).and_time(self.at);
        if candidate > now {
            candidate
        } else {
            candidate + Days::new(7)
        }
    }
}

/// Run `job` at every slot of `plan`, forever. The clock is checked once per
/// `tick`, so a job starts up to one tick late.
pub fn run_forever<F: FnMut()>(plan: Weekly, tick: Duration, mut job: F) -> ! {
    let mut next = plan.next_after(Local::now().naive_local());
    logf!("next scheduled update at {next}");
    loop {
        let now = Local::now().naive_local();
        if now >= next {
            job();
            next = plan.next_after(Local::now().naive_local());
            logf!("next scheduled update at {next}");
        }
        thread::sleep(tick);
    }
}

/// Hourly tick.
pub fn default_tick() -> Duration {
    Duration::from_secs(SCHEDULE_TICK_SECS)
}
