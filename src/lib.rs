// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod aggregate;
pub mod credentials;
pub mod data;
pub mod file;
pub mod progress;
pub mod report;
pub mod runner;
pub mod schedule;
pub mod store;

pub use error::{Gap, Result, TrackerError};
