//! Data-access layer for covid-trends.
//!
//! Responsible for the single HTTP GET against the disease.sh historical
//! endpoint and for validating the response schema before the domain layer
//! touches it.

pub mod client;

pub use trends_core as core;
