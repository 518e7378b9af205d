use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Scan container images and generate daily security recommendations by language
#[derive(Parser, Debug)]
#[command(name = "basepick")]
#[command(version = "1.0.0")]
#[command(about = "Scan container images and generate daily security recommendations by language")]
#[command(
    long_about = "Scans container registries (MCR, Docker Hub, etc.) for base images,\n\
                  analyzes them with Syft (SBOM) and Trivy (vulnerabilities), stores\n\
                  results as JSON, and generates a markdown report ranking images by\n\
                  security posture per language."
)]
pub struct Cli {
    /// Path to the image store file
    #[arg(long, global = true, default_value = "images.json")]
    pub database: PathBuf,

    /// Path to configuration directory
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: PathBuf,

    /// Path to output report file
    #[arg(long, global = true, default_value = "docs/daily_recommendations.md")]
    pub output: PathBuf,

    /// Number of top images per language
    #[arg(long, global = true, default_value_t = 10)]
    pub top_n: i32,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan container registries and analyze images
    ///
    /// Discover image tags from configured registries, pull images, analyze
    /// with Syft and Trivy, and store results in the image store. A report is
    /// generated automatically after the scan.
    Scan {
        /// Maximum tags per repository (0 = all)
        #[arg(long, default_value_t = 5)]
        max_tags: i32,

        /// Enable comprehensive scanning (secrets + misconfigs)
        #[arg(long)]
        comprehensive: bool,

        /// Keep pulled images after scanning
        #[arg(long)]
        no_cleanup: bool,

        /// Rescan existing images
        #[arg(long)]
        update_existing: bool,
    },

    /// Generate the daily recommendations markdown report
    ///
    /// Reads the existing image store and generates a markdown report plus a
    /// JSON sibling, ranking images by language.
    Report,

    /// Clear all data from the image store
    ResetDb,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
