pub mod create;
pub mod list;
pub mod slug;

use crate::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tagform")]
#[command(version)]
#[command(about = "Create tags on a remote tag API", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "tagform.toml")]
    pub config: PathBuf,

    /// Overrides `api.base_url` from the config file
    #[arg(long, env = "TAGFORM_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slug a title would get
    Slug {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Validate a title and create the tag
    Create {
        title: String,
        /// Fetch and print the refreshed tag list afterwards
        #[arg(long)]
        list: bool,
    },
    /// Print the tags known to the API
    List,
}

/// Load the config, falling back to defaults when the file is absent, and
/// apply the `--api-url` override.
pub fn load_config(path: &Path, api_url: Option<&str>) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
        config.validate()?;
    }
    Ok(config)
}
