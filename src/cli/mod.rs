//! CLI module for taskdeck - command-line interface and subcommands.
//!
//! Provides the entry point with subcommands for task lifecycle
//! operations, CSV transfer, and the contact book.

pub mod commands;

pub use commands::Cli;
