use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

// Every meeting in the source file is one hour; no end time is exported.
pub const MEETING_LENGTH_MINUTES: i64 = 60;
// A meeting is joinable slightly before its start.
pub const JOIN_EARLY_MINUTES: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingStatus {
    Upcoming,
    Active,
    Ended,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Meeting {
    pub raw_start_time: String,
    pub subject: String,
    pub join_link: String,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub display_time: String,
    pub status: MeetingStatus,
}

impl Meeting {
    pub fn day(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub meetings: Vec<Meeting>,
}

// Pure function of (start, end, now); status is derived on every load and
// never read back from a stored record.
pub fn classify(
    start: DateTime<Local>,
    end: DateTime<Local>,
    now: DateTime<Local>,
) -> MeetingStatus {
    if now > end {
        return MeetingStatus::Ended;
    }
    if now >= start - Duration::minutes(JOIN_EARLY_MINUTES) {
        return MeetingStatus::Active;
    }
    MeetingStatus::Upcoming
}
