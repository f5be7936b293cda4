use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::config::Config;
use super::types::StorageBackend;

/// Command-line interface of the `survey` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "survey")]
#[command(version)]
#[command(about = "Student survey intake with locally stored responses")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, short, env = "SURVEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Storage backend, overrides `storage.backend`
    #[arg(long, env = "SURVEY_BACKEND", value_enum)]
    pub backend: Option<StorageBackend>,

    /// Store directory, overrides `storage.path`
    #[arg(long, env = "SURVEY_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Submit one response given entirely as flags
    Submit(SubmitArgs),
    /// Fill in responses interactively
    Fill,
    /// Print the three summary views
    Summary {
        /// Faculty for the faculty view
        #[arg(long)]
        faculty: Option<String>,
        /// Threshold for the average grade view
        #[arg(long)]
        min_grade: Option<f64>,
    },
    /// Print every stored response as JSON
    List,
    /// Remove everything from the store
    Clear,
}

/// One flag per form field. Omitted flags keep the form default.
#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    #[arg(long)]
    pub faculty: Option<String>,
    #[arg(long)]
    pub stream: Option<u32>,
    #[arg(long)]
    pub group: Option<String>,
    /// Repeat for every subject
    #[arg(long = "subject")]
    pub subjects: Vec<String>,
    #[arg(long)]
    pub average_grade: Option<String>,
    /// Repeat for every technology you have experience with
    #[arg(long = "technology")]
    pub technologies: Vec<String>,
    #[arg(long)]
    pub interview_time: Option<String>,
    #[arg(long)]
    pub favorite_color: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
}

impl Cli {
    /// Applies the global flags on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(backend) = self.backend {
            config.storage.backend = backend;
        }
        if let Some(path) = &self.store_path {
            config.storage.path = Some(path.clone());
        }
    }
}
