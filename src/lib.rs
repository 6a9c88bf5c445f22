pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;

pub use domain::{Increment, VersionTag};
pub use error::{Result, VtagError};
