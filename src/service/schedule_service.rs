use chrono::{DateTime, Duration, Local};

use crate::models::meeting::{classify, DayGroup, Meeting, MeetingStatus, MEETING_LENGTH_MINUTES};
use crate::service::start_time;

pub const FIELD_DELIMITER: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    UpcomingAndActive,
}

pub struct ScheduleService;

impl ScheduleService {
    // One line of the export: `StartTime;Subject;TeamsLink`, extra fields
    // ignored. Lines missing any of the three fields are dropped; a start
    // time no format recognizes is not grounds for dropping.
    pub fn parse_line(line: &str, now: DateTime<Local>) -> Option<Meeting> {
        let mut fields = line.split(FIELD_DELIMITER);
        let raw_start_time = fields.next().filter(|f| !f.is_empty())?;
        let subject = fields.next().filter(|f| !f.is_empty())?;
        let join_link = fields.next().filter(|f| !f.is_empty())?;

        let resolved = start_time::resolve(raw_start_time, now);
        let start = resolved.instant;
        let end = start + Duration::minutes(MEETING_LENGTH_MINUTES);
        let display_time = if resolved.recognized {
            start.format("%H:%M").to_string()
        } else {
            raw_start_time.to_string()
        };

        Some(Meeting {
            raw_start_time: raw_start_time.to_string(),
            subject: subject.to_string(),
            join_link: join_link.to_string(),
            start_time: start,
            end_time: end,
            display_time,
            status: classify(start, end, now),
        })
    }

    // Full pipeline over the file contents: drop the header line, parse,
    // drop malformed lines without reporting them, stable-sort by start.
    pub fn load_from_str(text: &str, now: DateTime<Local>) -> Vec<Meeting> {
        let mut meetings: Vec<Meeting> = text
            .lines()
            .skip(1)
            .filter_map(|line| Self::parse_line(line, now))
            .collect();
        meetings.sort_by_key(|meeting| meeting.start_time);
        meetings
    }

    pub fn filter(meetings: Vec<Meeting>, filter: StatusFilter) -> Vec<Meeting> {
        match filter {
            StatusFilter::All => meetings,
            StatusFilter::UpcomingAndActive => meetings
                .into_iter()
                .filter(|meeting| meeting.status != MeetingStatus::Ended)
                .collect(),
        }
    }

    // Partition an already-sorted sequence by local calendar day; emitted
    // group order matches the sorted sequence.
    pub fn group_by_day(meetings: Vec<Meeting>) -> Vec<DayGroup> {
        let mut groups: Vec<DayGroup> = Vec::new();
        for meeting in meetings {
            match groups.last_mut() {
                Some(group) if group.day == meeting.day() => group.meetings.push(meeting),
                _ => groups.push(DayGroup {
                    day: meeting.day(),
                    meetings: vec![meeting],
                }),
            }
        }
        groups
    }
}
