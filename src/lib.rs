// ABOUTME: Library root for cntnr - exposes the dispatcher for testing.
// ABOUTME: The main binary is in main.rs.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod runtime;
pub mod types;
