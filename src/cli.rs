use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::Select;

use crate::models::meeting::{DayGroup, Meeting, MeetingStatus};
use crate::runtime;
use crate::service::schedule_service::{ScheduleService, StatusFilter};
use crate::tasks::refresh::{RefreshScript, ScriptRefresher};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schedule grouped by day.
    List {
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
    /// Pick a meeting and open its join link.
    Join {
        #[arg(long)]
        all: bool,
    },
    /// Force the external refresh script to regenerate the meetings file.
    Refresh,
}

pub async fn cli(
    meetings_file: String,
    stale_threshold_hours: i64,
    refresher: Option<ScriptRefresher>,
) {
    // Fine to panic here
    let cli = Cli::parse();
    let refresher: Option<&dyn RefreshScript> =
        refresher.as_ref().map(|r| r as &dyn RefreshScript);

    match &cli.command {
        Commands::List { all, json } => {
            match load(&meetings_file, stale_threshold_hours, refresher, *all).await {
                Ok(meetings) => {
                    let groups = ScheduleService::group_by_day(meetings);
                    if *json {
                        match serde_json::to_string_pretty(&groups) {
                            Ok(payload) => println!("{}", payload),
                            Err(e) => println!("Failed to serialize schedule: {}", e),
                        }
                    } else {
                        print_groups(&groups);
                    }
                }
                Err(e) => println!("Failed to load meetings: {}", e),
            }
        }
        Commands::Join { all } => {
            match load(&meetings_file, stale_threshold_hours, refresher, *all).await {
                Ok(meetings) => join_prompt(&meetings),
                Err(e) => println!("Failed to load meetings: {}", e),
            }
        }
        Commands::Refresh => match refresher {
            Some(refresher) => match refresher.refresh().await {
                Ok(()) => println!("Meetings file refreshed."),
                Err(e) => println!("Failed to refresh meetings: {}", e),
            },
            None => println!("No refresh script configured."),
        },
    }
}

async fn load(
    meetings_file: &str,
    stale_threshold_hours: i64,
    refresher: Option<&dyn RefreshScript>,
    all: bool,
) -> Result<Vec<Meeting>, crate::errors::ScheduleError> {
    let filter = if all {
        StatusFilter::All
    } else {
        StatusFilter::UpcomingAndActive
    };
    let meetings =
        runtime::load_schedule(meetings_file, stale_threshold_hours, refresher, Local::now())
            .await?;
    Ok(ScheduleService::filter(meetings, filter))
}

fn print_groups(groups: &[DayGroup]) {
    if groups.is_empty() {
        println!("No meetings.");
        return;
    }
    for group in groups {
        println!("{}", group.day.format("%A, %d %B %Y"));
        for meeting in &group.meetings {
            println!(
                "  {}  {} [{}]",
                meeting.display_time,
                meeting.subject,
                status_label(meeting.status)
            );
        }
    }
}

fn join_prompt(meetings: &[Meeting]) {
    if meetings.is_empty() {
        println!("No joinable meetings.");
        return;
    }
    let labels: Vec<String> = meetings
        .iter()
        .map(|m| format!("{}  {}", m.display_time, m.subject))
        .collect();
    match Select::new("Select a meeting to join.", labels).raw_prompt() {
        Ok(choice) => {
            let meeting = &meetings[choice.index];
            if let Err(e) = open_link(&meeting.join_link) {
                println!("Failed to open {}: {}", meeting.join_link, e);
            }
        }
        Err(e) => println!("No meeting selected: {}", e),
    }
}

fn status_label(status: MeetingStatus) -> &'static str {
    match status {
        MeetingStatus::Upcoming => "upcoming",
        MeetingStatus::Active => "active",
        MeetingStatus::Ended => "ended",
    }
}

// Platform opener glue; the join link decides what actually handles it.
fn open_link(link: &str) -> Result<(), String> {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", "", link]);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = std::process::Command::new("open");
        c.arg(link);
        c
    } else {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(link);
        c
    };
    command
        .spawn()
        .map_err(|e| format!("Failed to launch opener: {}", e))?;
    Ok(())
}
