#![allow(non_snake_case)]

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod service;
pub mod tasks;
