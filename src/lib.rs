pub mod airtable;
pub mod app;
pub mod config;
pub mod domain;
pub mod telemetry;
