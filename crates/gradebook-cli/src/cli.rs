use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Gradebook - student and course grade averages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to ./gradebook.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database URL (postgres://... or sqlite:...), overrides the settings file
    /// and environment
    #[arg(long, global = true)]
    pub database_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the average grade of every student
    Students {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the average grade of every course
    Courses {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write the student averages spreadsheet to disk
    Export {
        /// Directory to write the report into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Start API server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
}
