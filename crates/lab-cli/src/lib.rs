//! CLI library components for laboratory production analytics.

pub mod config;
pub mod logging;
pub mod output;
pub mod pipeline;
