use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

// Regenerating the meetings file is delegated to an external script (the
// calendar extraction lives outside this program). The only contract is
// that after a successful run the configured file holds a fresh export.
#[async_trait]
pub trait RefreshScript: Send + Sync {
    async fn refresh(&self) -> Result<(), String>;
}

pub struct ScriptRefresher {
    script_path: String,
    entry_point: Option<String>,
}

impl ScriptRefresher {
    pub fn new(script_path: String, entry_point: Option<String>) -> Self {
        Self {
            script_path,
            entry_point,
        }
    }
}

#[async_trait]
impl RefreshScript for ScriptRefresher {
    async fn refresh(&self) -> Result<(), String> {
        let mut command = tokio::process::Command::new(&self.script_path);
        if let Some(entry_point) = &self.entry_point {
            command.arg(entry_point);
        }
        let status = command
            .status()
            .await
            .map_err(|e| format!("Failed to run refresh script {}: {}", self.script_path, e))?;
        if !status.success() {
            return Err(format!("Refresh script exited with {}", status));
        }
        Ok(())
    }
}

// Threshold at or below zero disables the check entirely. An unknown
// modification time (missing or unreadable file) counts as stale: a refresh
// attempt beats silently serving nothing.
pub fn is_stale(
    modified: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    threshold_hours: i64,
) -> bool {
    if threshold_hours <= 0 {
        return false;
    }
    match modified {
        None => true,
        Some(modified) => now - modified > Duration::hours(threshold_hours),
    }
}

pub async fn modified_at(path: &str) -> Option<DateTime<Utc>> {
    let metadata = tokio::fs::metadata(path).await.ok()?;
    let modified = metadata.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}
