//! # User Interface
//!
//! Colored terminal output and result rendering.

pub mod log;
pub mod report;

pub use log::{debug, error, header, info, print_logo, success, warn, Log};
