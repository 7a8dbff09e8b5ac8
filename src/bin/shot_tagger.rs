use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shot_tagger_lib::config::{self, TaggerConfig};
use shot_tagger_lib::panel::grid_columns;
use shot_tagger_lib::TaggerSession;

#[derive(Parser)]
#[command(name = "shot-tagger", version, about = "Tag badminton shots from a glossary")]
struct Cli {
    /// Glossary location ("bundled", an http(s) URL or a file path). Overrides the config.
    #[arg(long, global = true)]
    glossary: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List shot types
    Shots,
    /// Print classification dimensions as JSON
    Dimensions,
    /// Select shot types in order and show the resulting grid
    Select {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Validate the config file
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = config::load_config_or_default();
    if let Some(location) = cli.glossary {
        config::validate_glossary_location(&location)?;
        config.glossary_location = Some(location);
    }

    match cli.command {
        Command::Shots => {
            let session = TaggerSession::from_config(&config);
            let glossary = session.glossary().await.context("loading glossary")?;
            let width = glossary.shots.iter().map(|s| s.name.len()).max().unwrap_or(0);
            for shot in &glossary.shots {
                println!("{:width$}  {}", shot.name, shot.description());
            }
        }
        Command::Dimensions => {
            let session = TaggerSession::from_config(&config);
            let glossary = session.glossary().await.context("loading glossary")?;
            for dimension in &glossary.dimensions {
                println!("{}", serde_json::to_string(dimension)?);
            }
        }
        Command::Select { names } => select(&config, &names).await?,
        Command::CheckConfig => check_config(),
    }

    Ok(())
}

async fn select(config: &TaggerConfig, names: &[String]) -> anyhow::Result<()> {
    let session = TaggerSession::from_config(config);
    if session.render_glossary().await.context("loading glossary")? == 0 {
        bail!("glossary has no shot types");
    }

    let mut grid = session.grid.lock().await;
    let mut current = session.current.lock().await;
    let mut status = |message: &str| println!("{message}");
    for name in names {
        grid.activate_by_name(name, &mut current, &mut status)?;
    }

    println!();
    println!("{}", grid.render_text(grid_columns(config.panel.width)));
    println!();
    println!("{}", serde_json::to_string_pretty(&*current)?);
    Ok(())
}

fn check_config() {
    let Some(path) = config::config_path() else {
        println!("No home directory; using defaults");
        return;
    };
    match config::load_config_from(&path) {
        None => println!("{}: not found or unreadable, using defaults", path.display()),
        Some(loaded) => match loaded.validate() {
            Ok(()) => println!("{}: ok (glossary: {})", path.display(), loaded.glossary_source()),
            Err(e) => println!("{}: {}", path.display(), e),
        },
    }
}
