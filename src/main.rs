#![allow(non_snake_case)]

mod cli;
mod config;
mod errors;
mod models;
mod runtime;
mod service;
mod tasks;

use std::env;

use crate::config::AppConfig;
use crate::tasks::refresh::ScriptRefresher;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let meetings_file = get_prop("MEETINGS_FILE")
        .expect("MEETINGS_FILE must be set (config file or environment)");
    let stale_threshold_hours = get_prop("STALE_THRESHOLD_HOURS")
        .and_then(|v| v.parse().ok())
        .unwrap_or(config::DEFAULT_STALE_THRESHOLD_HOURS);

    let refresher = get_prop("REFRESH_SCRIPT")
        .map(|script| ScriptRefresher::new(script, get_prop("REFRESH_ENTRY_POINT")));

    cli::cli(meetings_file, stale_threshold_hours, refresher).await;
}
