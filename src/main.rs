use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use wicket_versions::choice::{GroupedChoices, render_select, render_text};
use wicket_versions::config::{AppConfig, config_path, log_path};
use wicket_versions::logging::{LogFormat, init_logging};
use wicket_versions::version::catalog::VersionCatalog;
use wicket_versions::version::indexes::MavenCentralIndex;

#[derive(Parser)]
#[command(name = "wicket-versions")]
#[command(version, about = "List published Apache Wicket releases grouped by major version")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/wicket-versions/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured group id
    #[arg(long, global = true)]
    group_id: Option<String>,

    /// Override the configured artifact id
    #[arg(long, global = true)]
    artifact_id: Option<String>,

    /// Write log records as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print versions grouped by major version
    List,
    /// Print a grouped <select> control
    Select {
        /// Name attribute of the control
        #[arg(long, default_value = "wicketVersion")]
        name: String,
        /// Version to mark as selected
        #[arg(long)]
        selected: Option<String>,
    },
    /// Print the ordered versions as a JSON array
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    let _guard = init_logging(&log_path(), format).context("Failed to initialize logging")?;

    let path = cli.config.clone().unwrap_or_else(config_path);
    let mut config = AppConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {:?}", path))?;
    if let Some(group_id) = cli.group_id {
        config.index.group_id = group_id;
    }
    if let Some(artifact_id) = cli.artifact_id {
        config.index.artifact_id = artifact_id;
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command.unwrap_or(Command::List), config))
}

async fn run(command: Command, config: AppConfig) -> anyhow::Result<()> {
    let index = MavenCentralIndex::new(&config.index)?;
    let catalog = VersionCatalog::new(index, config.index.coordinate(), &config.cache);
    info!("Listing versions of {}", catalog.coordinate());

    let result = catalog.get_versions().await;

    let choices = match command {
        Command::Json => {
            let versions = result?;
            println!("{}", serde_json::to_string_pretty(&versions)?);
            return Ok(());
        }
        Command::List => {
            let choices = GroupedChoices::from_result(result);
            print!("{}", render_text(&choices));
            choices
        }
        Command::Select { name, selected } => {
            let choices = GroupedChoices::from_result(result);
            print!("{}", render_select(&name, &choices, selected.as_deref()));
            choices
        }
    };

    match choices.error {
        Some(error) => anyhow::bail!("Failed to list versions of {}: {}", catalog.coordinate(), error),
        None => Ok(()),
    }
}
