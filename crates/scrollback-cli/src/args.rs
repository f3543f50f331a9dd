use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scrollback")]
#[command(about = "Reconstruct readable transcripts from a session store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Storage root written by the session runner
    #[arg(
        long,
        default_value = "~/.local/share/opencode/storage",
        global = true
    )]
    pub storage_root: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List all sessions, most recently updated first", visible_alias = "ls")]
    List,

    #[command(about = "Print one session's transcript (compact by default)")]
    Show {
        /// Session identifier (ses_...)
        session_id: String,

        /// Render every part kind with full detail
        #[arg(long, short = 'f')]
        full: bool,

        /// Print a single message in full detail instead of the whole session
        #[arg(long, short = 'm', value_name = "MESSAGE_ID")]
        message: Option<String>,
    },
}
