//! Terminal registration form with inline field validation.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod shutdown;
pub mod ui;
