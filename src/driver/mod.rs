//! Terminal front end over [`crate::FitChecker`].

pub mod cli;

pub use cli::{CheckRequest, CliDriver, CliError, DriverResult, render_listing};
