#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (integration tests use these)
pub use app::App;
pub use data::generate_dashboard;
pub use domain::{HistoricalPoint, SeriesSpec, Trend};
pub use models::DashboardModel;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start in light mode instead of the saved color scheme
    #[arg(long, default_value_t = false)]
    pub light: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
