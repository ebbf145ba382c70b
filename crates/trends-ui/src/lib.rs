//! Terminal UI layer for covid-trends.
//!
//! Provides themes, the three-panel chart dashboard, and the application
//! event loop built on top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod themes;

pub use trends_core as core;
