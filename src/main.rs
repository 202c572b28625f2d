use anyhow::Context;
use clap::{Parser, Subcommand};
use desk_search::{
    config::Config,
    index::IndexTable,
    interaction::{Console, JsonPresenter, Presenter, Shell},
    loader::{DataPaths, JsonLoader, Loader},
    search::{QuerySession, ResultProjector},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "desk-search")]
#[command(about = "Search tickets, users and organizations", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding tickets.json, users.json and organizations.json
    #[arg(short, long, env = "DESK_SEARCH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print results as single-line JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search session (default)
    Shell,

    /// List the searchable fields of every entity type
    Fields,

    /// Look a value up in one field of one entity type
    Search {
        /// Entity type: 1/tickets, 2/users or 3/organizations
        #[arg(short, long)]
        entity: String,

        /// Field name, case-insensitive
        #[arg(short, long)]
        field: String,

        /// Value to look for; may be empty
        #[arg(short, long, default_value = "")]
        value: String,
    },

    /// Look a value up in every field of every entity type
    Broad {
        #[arg(short, long)]
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }
    if cli.compact {
        config.output.pretty = false;
    }

    init_tracing(&config);
    tracing::info!("Starting desk-search v{}", env!("CARGO_PKG_VERSION"));

    // Load and index; any failure here is fatal
    let loader = JsonLoader::from_files(DataPaths::from_config(&config.data));
    let dataset = loader.load()?;
    let table = IndexTable::build(&dataset)?;

    let mut presenter = JsonPresenter::new(io::stdout(), config.output.pretty);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let console = Console::new(stdin.lock(), io::stdout());
            let mut shell = Shell::new(&table, console, presenter, io::stdout());
            shell.run()?;
        }

        Commands::Fields => {
            for entity in desk_search::models::EntityType::ALL {
                println!("Search {} with", entity);
                for field in table.fields_of(entity) {
                    println!("  {} ({})", field.name, field.field_type);
                }
            }
        }

        Commands::Search {
            entity,
            field,
            value,
        } => {
            let matches = QuerySession::new(&table)
                .select_entity(&entity)?
                .select_field(&field)?
                .lookup(&value)?;
            presenter.present(&ResultProjector::new(&table).project(&matches))?;
        }

        Commands::Broad { value } => {
            let matches = QuerySession::new(&table).broad_search(&value)?;
            presenter.present_broad(&ResultProjector::new(&table).project_broad(&matches))?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only results
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("desk_search={}", config.observability.log_level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.observability.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
