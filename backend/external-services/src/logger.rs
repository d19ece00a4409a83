pub mod config;

pub mod setup;
pub use setup::{setup, LogGuard};

