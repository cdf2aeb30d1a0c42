//! Configuration module for the dashboard application.

mod debug;
mod persistence;

pub mod constants;

// Re-export commonly used items
pub use debug::DF;
pub use persistence::PERSISTENCE;
