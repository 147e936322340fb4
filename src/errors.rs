use thiserror::Error;

// Per-line problems never surface here: malformed lines are dropped inside
// the pipeline and unparseable dates degrade to a visible fallback. Only a
// file that cannot be read at all reaches the caller.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("meetings file unavailable at {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
