//! Daily gate and consecutive-day streak tracking.
//!
//! Streaks are per emotion, but consecutiveness is judged against the single
//! most recent log of any emotion: logging something else in between breaks
//! the chain. Calendar days are taken in a fixed local offset so that a log
//! at 23:30 and one at 00:10 the next morning land on different days.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};
use tracing::debug;

/// True iff nothing was logged yet, or the last log fell on another calendar day.
pub fn can_log_on(last_log_day: Option<NaiveDate>, today: NaiveDate) -> bool {
    last_log_day.map_or(true, |last| last != today)
}

/// Same emotion as the last log, and the last log was yesterday.
pub fn is_consecutive(
    last_emotion_id: Option<&str>,
    last_log_day: Option<NaiveDate>,
    new_emotion_id: &str,
    today: NaiveDate,
) -> bool {
    let yesterday = today - Duration::days(1);
    last_emotion_id == Some(new_emotion_id) && last_log_day == Some(yesterday)
}

/// Streak after logging `new_emotion_id` today.
pub fn compute_streak(
    last_emotion_id: Option<&str>,
    last_log_day: Option<NaiveDate>,
    new_emotion_id: &str,
    today: NaiveDate,
    previous_streak: u32,
) -> u32 {
    if is_consecutive(last_emotion_id, last_log_day, new_emotion_id, today) {
        previous_streak.saturating_add(1)
    } else {
        1
    }
}

/// Result of a streak computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak: u32,
    /// Whether the log continued the previous chain.
    pub continued: bool,
}

/// Applies the streak rules to timestamps, using a local day boundary.
#[derive(Debug, Clone, Copy)]
pub struct StreakTracker {
    offset: FixedOffset,
}

impl Default for StreakTracker {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl StreakTracker {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Tracker for an offset given in minutes east of UTC. Out-of-range
    /// offsets fall back to UTC.
    pub fn from_offset_minutes(minutes: i32) -> Self {
        match FixedOffset::east_opt(minutes.saturating_mul(60)) {
            Some(offset) => Self::new(offset),
            None => Self::default(),
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local calendar day of a timestamp.
    pub fn day_of(&self, ts: DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&self.offset).date_naive()
    }

    pub fn can_log_today(&self, last_log: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        can_log_on(last_log.map(|ts| self.day_of(ts)), self.day_of(now))
    }

    pub fn compute(
        &self,
        last_emotion_id: Option<&str>,
        last_log: Option<DateTime<Utc>>,
        new_emotion_id: &str,
        now: DateTime<Utc>,
        previous_streak: u32,
    ) -> StreakUpdate {
        let last_day = last_log.map(|ts| self.day_of(ts));
        let today = self.day_of(now);
        let continued = is_consecutive(last_emotion_id, last_day, new_emotion_id, today);
        let streak = compute_streak(last_emotion_id, last_day, new_emotion_id, today, previous_streak);

        debug!(
            emotion = new_emotion_id,
            continued,
            streak,
            "streak computed"
        );

        StreakUpdate { streak, continued }
    }
}
