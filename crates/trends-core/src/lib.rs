//! Domain layer for covid-trends.
//!
//! Holds the data model for the disease.sh historical payload, the
//! daily-delta normalizer that turns cumulative counts into per-day series,
//! the shared error taxonomy, CLI settings, and formatting helpers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod normalizer;
pub mod settings;
