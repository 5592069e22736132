pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod hooks;
pub mod tags;
pub mod ui;
pub mod which;

pub use error::{GitToolsError, Result};
