pub mod schedule_service;
pub mod start_time;
