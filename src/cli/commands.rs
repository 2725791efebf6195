use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::storage::DEFAULT_NOTES_FILE;

#[derive(Parser, Debug)]
#[command(name = "noteone")]
#[command(version, about = "A small personal note keeper backed by a JSON file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Notes file to read and write
    #[arg(
        long,
        short = 'f',
        global = true,
        env = "NOTEONE_FILE",
        default_value = DEFAULT_NOTES_FILE
    )]
    pub file: PathBuf,

    /// Runs the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        /// Note title
        title: String,

        /// Note body
        #[arg(conflicts_with = "stdin")]
        body: Option<String>,

        /// Read the body from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Get {
        /// Note id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a note's title and body
    Update {
        /// Note id
        id: String,

        /// New title
        title: String,

        /// New body (the current body is kept when omitted)
        #[arg(conflicts_with = "stdin")]
        body: Option<String>,

        /// Read the body from stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: String,
    },

    /// Start the interactive shell
    Shell,
}
