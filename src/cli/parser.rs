use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ragenda
/// CLI application to manage a recurring meeting agenda
#[derive(Parser)]
#[command(
    name = "ragenda",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple meeting agenda CLI: compute per-item start times, archive past meetings, and reset for reuse",
    long_about = None
)]
pub struct Cli {
    /// Override workspace directory (useful for tests or shared agendas)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workspace and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file and template paths")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Build a fresh agenda from the template for a given start time
    New {
        /// Meeting start time, e.g. "7:00 PM", "19:00", "7 pm"
        #[arg(long = "at", help = "Meeting start time (e.g. 7:00 PM)")]
        at: Option<String>,

        /// Replace the existing current agenda
        #[arg(long = "force", help = "Replace the existing current agenda")]
        force: bool,
    },

    /// Print the current agenda
    Show,

    /// Fill in fields of the current agenda
    Set {
        /// Meeting date (YYYY-MM-DD or "today")
        #[arg(long = "date", help = "Meeting date (YYYY-MM-DD or 'today')")]
        date: Option<String>,

        #[arg(long = "location", help = "Meeting location")]
        location: Option<String>,

        /// Assign a responsibility, repeatable (e.g. --role "Time Keeper=Ana")
        #[arg(long = "role", help = "Assign a role: ROLE=NAME")]
        role: Vec<String>,

        /// Set the notes of an item, repeatable (e.g. --note "3=Slides ready")
        #[arg(long = "note", help = "Set item notes: ITEM#=TEXT")]
        note: Vec<String>,

        /// Tick an action-step checkbox by number
        #[arg(long = "check", help = "Tick action step number N")]
        check: Vec<usize>,

        /// Untick an action-step checkbox by number
        #[arg(long = "uncheck", help = "Untick action step number N")]
        uncheck: Vec<usize>,

        #[arg(long = "next-meeting", help = "Next meeting date/description")]
        next_meeting: Option<String>,

        #[arg(long = "host", help = "Next meeting host")]
        host: Option<String>,
    },

    /// Append the current agenda to the historical archive
    Archive {
        #[arg(long = "reset", help = "Reset the current agenda after archiving")]
        reset: bool,
    },

    /// Reset the current agenda for the next meeting (keeps structure)
    Reset,

    /// List archived meetings
    List {
        #[arg(long = "details", help = "Print each archived agenda in full")]
        details: bool,
    },

    /// Export the current or an archived agenda to a file
    Export {
        /// Output format
        #[arg(long = "format", value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file (default: agenda.<ext> in the current directory)
        #[arg(long = "file", help = "Output file path")]
        file: Option<String>,

        /// Export an archived meeting instead of the current agenda
        #[arg(long = "meeting", help = "Archived meeting date (YYYY-MM-DD)")]
        meeting: Option<String>,
    },
}
