use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autocaption")]
#[command(author, version, about = "Caption templating for channel media posts")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a caption template from explicit file fields
    Render {
        /// Caption template
        #[arg(required = true)]
        template: String,

        /// File name
        #[arg(long, default_value = "")]
        name: String,

        /// File size in bytes
        #[arg(long, default_value = "0")]
        size: u64,

        /// Original caption
        #[arg(long, default_value = "")]
        caption: String,

        /// MIME type
        #[arg(long, default_value = "")]
        mime_type: String,

        /// Duration metadata
        #[arg(long)]
        duration: Option<String>,

        /// Video width metadata
        #[arg(long)]
        width: Option<String>,

        /// Video height metadata
        #[arg(long)]
        height: Option<String>,

        /// Resolution metadata
        #[arg(long)]
        resolution: Option<String>,

        /// Title tag
        #[arg(long)]
        title: Option<String>,

        /// Artist tag
        #[arg(long)]
        artist: Option<String>,

        /// Hour of day for {wish} (defaults to the local clock)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,

        /// Substitute in a single pass, overriding the configured mode
        #[arg(long)]
        single_pass: bool,
    },

    /// Build the caption for a local media file
    Caption {
        /// Media file
        #[arg(required = true)]
        file: PathBuf,

        /// Caption template (uses the configured default if not specified)
        #[arg(short, long)]
        template: Option<String>,

        /// Original caption
        #[arg(long, default_value = "")]
        caption: String,

        /// Output descriptor, metadata and caption as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the attributes extracted from a filename
    Analyze {
        /// Filename to analyze
        #[arg(required = true)]
        filename: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read caption metadata from a media file
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the placeholders a template can use
    Variables,

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
