use chrono::{DateTime, Local, Utc};

use crate::errors::ScheduleError;
use crate::models::meeting::Meeting;
use crate::service::schedule_service::ScheduleService;
use crate::tasks::refresh::{self, RefreshScript};

// Read-or-refresh-then-read, strictly sequential: a refresh racing a read
// could hand the pipeline a torn file. A failed refresh is logged and the
// read proceeds against whatever is on disk.
pub async fn load_schedule(
    path: &str,
    stale_threshold_hours: i64,
    refresher: Option<&dyn RefreshScript>,
    now: DateTime<Local>,
) -> Result<Vec<Meeting>, ScheduleError> {
    let modified = refresh::modified_at(path).await;
    if refresh::is_stale(modified, now.with_timezone(&Utc), stale_threshold_hours) {
        if let Some(refresher) = refresher {
            log::info!("Meetings file at {} is stale, refreshing", path);
            if let Err(err) = refresher.refresh().await {
                log::warn!("Refresh failed, reading existing file: {}", err);
            }
        }
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScheduleError::SourceUnavailable {
            path: path.to_string(),
            source,
        })?;

    Ok(ScheduleService::load_from_str(&text, now))
}
