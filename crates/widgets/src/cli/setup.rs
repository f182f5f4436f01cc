use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "widgets",
    bin_name = "widgets",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Keep short text widgets from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the widget files (overrides WIDGETS_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List widgets
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a widget (reads stdin when no text is given)
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Content words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// View one or more widgets
    #[command(alias = "v", display_order = 3)]
    View {
        /// Widget ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Replace a widget's content (reads stdin when no text is given)
    #[command(alias = "u", display_order = 4)]
    Update {
        /// Widget id
        id: String,

        /// Content words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Delete one or more widgets
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Widget ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Live-edit a widget: each stdin line replaces its content, saves are debounced
    #[command(alias = "e", display_order = 6)]
    Edit {
        /// Widget id
        id: String,
    },

    /// Import widgets from a JSON array file
    #[command(display_order = 20)]
    Import {
        /// Path to the JSON file ("-" for stdin)
        file: PathBuf,

        /// Replace the whole collection instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Export widgets as a JSON array
    #[command(display_order = 21)]
    Export {
        /// Output file (stdout if omitted)
        file: Option<PathBuf>,
    },

    /// Check content against the length limits without saving it
    #[command(display_order = 30)]
    Check {
        /// Content words (reads stdin when omitted)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Check and fix stored data (recovers from the backup when needed)
    #[command(display_order = 31)]
    Doctor,
}
