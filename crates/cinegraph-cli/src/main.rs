use anyhow::Result;
use clap::{Parser, Subcommand};

use cinegraph_cli::commands::{self, config as config_cmd, director, movie};
use cinegraph_cli::{CinegraphClient, Config};

/// Command-line interface for the Cinegraph movie catalog
#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, env = "CINEGRAPH_CONFIG")]
    pub config: Option<String>,

    /// Cinegraph server URL
    #[arg(long, env = "CINEGRAPH_URL")]
    pub url: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every movie
    Movies,
    /// List every director
    Directors,
    /// Show one movie and its director
    Movie {
        /// Movie id
        id: String,
    },
    /// Show one director and their movies
    Director {
        /// Director id
        id: String,
    },
    /// Create a director
    AddDirector {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i32,
    },
    /// Create a movie; missing fields are prompted for
    AddMovie {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        director_id: Option<String>,
    },
    /// Configuration management
    Config(config_cmd::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = Config::load(cli.config.as_deref())?;
    let client = CinegraphClient::new(cli.url.as_deref().or(cfg.url.as_deref()));
    let output = commands::OutputContext { json: cli.json };

    let result = match cli.command {
        Commands::Movies => movie::list(&client, &output).await,
        Commands::Directors => director::list(&client, &output).await,
        Commands::Movie { id } => movie::show(&client, &id, &output).await,
        Commands::Director { id } => director::show(&client, &id, &output).await,
        Commands::AddDirector { name, age } => director::add(&client, &name, age, &output).await,
        Commands::AddMovie {
            name,
            genre,
            director_id,
        } => {
            let form = movie::MovieForm {
                name,
                genre,
                director_id,
            };
            movie::add(&client, form, &output).await
        }
        Commands::Config(args) => {
            config_cmd::execute(args, &cfg, cli.config.as_deref(), &output).await
        }
    };

    if let Err(e) = &result {
        output.print_error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}
