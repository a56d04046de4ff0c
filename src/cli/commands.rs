//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add/list/edit/toggle/delete: task lifecycle
//! - export/import: CSV transfer
//! - contacts: the teacher contact book

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// taskdeck - task tracker with CSV transfer and a teacher contact book
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to list)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new task
    Add {
        /// Task description
        text: String,

        /// Assigned teacher
        #[arg(long)]
        teacher: Option<String>,

        /// Subject being taught
        #[arg(long)]
        subject: Option<String>,
    },

    /// List all tasks, most recent first
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Edit a task's fields (blank or omitted fields are left unchanged)
    Edit {
        /// Task ID to edit
        id: i64,

        /// New description
        #[arg(long)]
        text: Option<String>,

        /// New teacher
        #[arg(long)]
        teacher: Option<String>,

        /// New subject
        #[arg(long)]
        subject: Option<String>,
    },

    /// Flip a task's done flag
    Toggle {
        /// Task ID to toggle
        id: i64,
    },

    /// Delete a task permanently (its ID is never reused)
    Delete {
        /// Task ID to delete
        id: i64,
    },

    /// Export all tasks as CSV
    Export {
        /// Output path (defaults to list_of_tasks.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import tasks from a CSV file (first column only)
    Import {
        /// CSV file to import
        file: PathBuf,
    },

    /// Contact book commands
    Contacts {
        #[command(subcommand)]
        command: ContactCommands,
    },
}

/// Contact book subcommands
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a teacher assignment
    Add {
        /// First teacher
        #[arg(long)]
        teacher1: String,

        /// Second teacher
        #[arg(long, default_value = "")]
        teacher2: String,

        /// Assigned date (free text, e.g. 12-Oct)
        #[arg(long)]
        date: String,

        /// Subject they are teaching
        #[arg(long)]
        subject: String,
    },

    /// List all contacts
    List,

    /// Update a contact's fields by ID
    Update {
        /// Contact ID
        id: String,

        /// New first teacher name
        #[arg(long)]
        teacher1: Option<String>,

        /// New second teacher name
        #[arg(long)]
        teacher2: Option<String>,

        /// New assigned date
        #[arg(long)]
        date: Option<String>,

        /// New subject
        #[arg(long)]
        subject: Option<String>,
    },

    /// Set a contact's remarks
    Remarks {
        /// Contact ID
        id: String,

        /// Remarks text
        remarks: String,
    },

    /// Remove a contact (remaining IDs are renumbered from 1)
    Delete {
        /// Contact ID
        id: String,
    },

    /// Find contacts assigned on a date (case-insensitive match)
    Search {
        /// Date to search for
        date: String,
    },
}
