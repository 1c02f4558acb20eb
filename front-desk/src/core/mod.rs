//! Core runtime concerns

pub mod config;

pub use config::Config;
