use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "teachspark")]
#[command(about = "Classroom video feedback for teachers")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save the teacher profile for this session
    Profile {
        /// Path to a profile JSON file
        path: PathBuf,
    },

    /// Fetch the transcript for a YouTube teaching video
    Video {
        /// YouTube video URL
        url: String,

        /// Start of the selected range, minutes
        #[arg(long, default_value_t = 0.0)]
        start: f64,

        /// End of the selected range, minutes
        #[arg(long, default_value_t = 5.0)]
        end: f64,

        /// Preferred caption languages (comma-separated)
        #[arg(short, long, default_value = "en,es")]
        languages: String,
    },

    /// Generate feedback from the saved profile and transcript
    Feedback,

    /// Clear saved session state
    Reset,

    /// Run the HTTP API server
    Serve,
}
