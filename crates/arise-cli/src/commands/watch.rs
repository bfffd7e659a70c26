use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike};
use tracing::info;

use super::Context;

/// Check the reminder at the start of every minute until `ticks` checks have
/// run. Saved state is re-read on every tick so quests completed from another
/// shell silence the reminder.
pub fn run(ctx: &Context, ticks: Option<u64>) -> Result<(), String> {
    let config = ctx.config();
    println!(
        "  Watching daily quest {} (reminder at {:02}:{:02}). Press Ctrl-C to stop.",
        config.reminder_quest, config.reminder_hour, config.reminder_minute
    );

    let mut tick = 0u64;
    loop {
        if ticks.is_some_and(|limit| tick >= limit) {
            return Ok(());
        }
        tick += 1;
        let now = Local::now().time();
        let raised = ctx.engine().check_reminder(now).is_some();
        info!(tick, %now, raised, "reminder check");
        if ticks.is_some_and(|limit| tick >= limit) {
            return Ok(());
        }
        thread::sleep(until_next_minute(Local::now().time()));
    }
}

/// Time left until the next whole minute after `now`.
fn until_next_minute(now: NaiveTime) -> Duration {
    // Leap seconds report nanos past 1e9; clamp so they end the minute.
    let nanos = u64::from(now.nanosecond().min(999_999_999));
    let elapsed = Duration::from_secs(u64::from(now.second())) + Duration::from_nanos(nanos);
    Duration::from_secs(60).saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32, milli: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, milli).unwrap()
    }

    #[test]
    fn sleeps_to_the_minute_boundary() {
        assert_eq!(until_next_minute(at(19, 59, 0, 0)), Duration::from_secs(60));
        assert_eq!(until_next_minute(at(19, 59, 45, 0)), Duration::from_secs(15));
        assert_eq!(
            until_next_minute(at(19, 59, 59, 750)),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn leap_second_ends_the_minute() {
        assert_eq!(
            until_next_minute(at(23, 59, 59, 1_500)),
            Duration::from_nanos(1)
        );
    }
}
