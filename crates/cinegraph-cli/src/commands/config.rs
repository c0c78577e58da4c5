use anyhow::Result;
use clap::{Args, Subcommand};

use super::OutputContext;
use crate::client::DEFAULT_URL;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set the default server URL
    SetUrl {
        /// Server URL, e.g. http://localhost:5000
        url: String,
    },
    /// Print the configuration file path
    Path,
}

pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    config_path: Option<&str>,
    output: &OutputContext,
) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            if output.json {
                output.print_json(&serde_json::json!({
                    "url": config.url.as_deref().unwrap_or(DEFAULT_URL),
                }));
            } else {
                println!("url = {}", config.url.as_deref().unwrap_or(DEFAULT_URL));
            }
        }
        ConfigCommands::SetUrl { url } => {
            let updated = Config { url: Some(url) };
            updated.save(config_path)?;
            output.print_success("Configuration saved");
        }
        ConfigCommands::Path => {
            let path = config_path
                .map(std::path::PathBuf::from)
                .unwrap_or_else(Config::default_path);
            println!("{}", path.display());
        }
    }
    Ok(())
}
