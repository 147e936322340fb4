use std::env;
use std::fs;

use chrono::{DateTime, Local, TimeZone};
use meetingLauncher::errors::ScheduleError;
use meetingLauncher::models::meeting::MeetingStatus;
use meetingLauncher::runtime;
use meetingLauncher::service::schedule_service::{ScheduleService, StatusFilter};
use meetingLauncher::tasks::refresh::RefreshScript;

fn temp_meetings_file(contents: &str) -> std::path::PathBuf {
    let dir = env::temp_dir().join(format!("meeting_launcher_it_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("meetings.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn pinned_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 2, 10, 8, 30, 0).unwrap()
}

#[tokio::test]
async fn loads_sorts_and_classifies_from_file() {
    let path = temp_meetings_file(
        "StartTime;Subject;TeamsLink\n\
         2026-02-10 14:00;Project Review;https://teams.microsoft.com/l/meetup-join/BBB\n\
         2026-02-10 09:00;Daily Standup;https://teams.microsoft.com/l/meetup-join/AAA\n\
         ;Missing Start;https://x\n",
    );

    let meetings = runtime::load_schedule(path.to_str().unwrap(), 24, None, pinned_now())
        .await
        .expect("load should succeed");

    assert_eq!(meetings.len(), 2);
    assert_eq!(meetings[0].subject, "Daily Standup");
    assert_eq!(meetings[0].status, MeetingStatus::Upcoming);
    assert_eq!(meetings[1].subject, "Project Review");
    assert_eq!(meetings[1].status, MeetingStatus::Upcoming);

    let groups = ScheduleService::group_by_day(meetings);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].day.to_string(), "2026-02-10");
}

#[tokio::test]
async fn filtered_view_regroups_without_ended_meetings() {
    let path = temp_meetings_file(
        "StartTime;Subject;TeamsLink\n\
         2026-02-09 09:00;Yesterday Sync;https://a\n\
         2026-02-10 09:00;Morning Sync;https://b\n",
    );

    let meetings = runtime::load_schedule(path.to_str().unwrap(), 24, None, pinned_now())
        .await
        .unwrap();
    assert_eq!(meetings.len(), 2);

    let filtered = ScheduleService::filter(meetings, StatusFilter::UpcomingAndActive);
    let groups = ScheduleService::group_by_day(filtered);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].meetings[0].subject, "Morning Sync");
}

#[tokio::test]
async fn missing_file_surfaces_source_unavailable() {
    let dir = env::temp_dir().join(format!("meeting_launcher_it_{}", uuid::Uuid::new_v4()));
    let path = dir.join("nowhere.csv");

    // Threshold 0 keeps the staleness check (and any refresh) out of the way.
    let result = runtime::load_schedule(path.to_str().unwrap(), 0, None, pinned_now()).await;

    let err = result.expect_err("load should fail");
    let ScheduleError::SourceUnavailable { path: reported, .. } = err;
    assert_eq!(reported, path.to_str().unwrap());
}

#[tokio::test]
async fn fresh_file_does_not_invoke_refresher() {
    let path = temp_meetings_file(
        "StartTime;Subject;TeamsLink\n\
         2026-02-10 09:00;Morning Sync;https://b\n",
    );

    struct PanickingRefresher;

    #[async_trait::async_trait]
    impl RefreshScript for PanickingRefresher {
        async fn refresh(&self) -> Result<(), String> {
            panic!("a just-written file must not be treated as stale");
        }
    }

    let meetings = runtime::load_schedule(
        path.to_str().unwrap(),
        24,
        Some(&PanickingRefresher),
        pinned_now(),
    )
    .await
    .unwrap();
    assert_eq!(meetings.len(), 1);
}
