use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::{Path, PathBuf};

use user_search::api::dto::{ResultUserDto, SearchPageDto};
use user_search::config::UserSearchConfig;
use user_search::contract::model::SearchRequest;
use user_search::UserSearch;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const MODULE_NAME: &str = "user_search";

/// User Search - filter, sort and paginate an in-memory user dataset
#[derive(Parser)]
#[command(name = "user-search")]
#[command(about = "User Search - filter, sort and paginate an in-memory user dataset")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the JSON dataset (overrides modules.user_search.dataset)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the matching users as JSON
    Search(SearchArgs),
    /// Check configuration and dataset
    Check,
}

#[derive(Args, Debug, Clone)]
struct SearchArgs {
    /// Free-text term matched against name and about; empty matches everyone
    #[arg(short, long, default_value = "")]
    query: String,

    /// Sort key: Id, Age or Name (module default when omitted)
    #[arg(long)]
    order_field: Option<String>,

    /// Sort direction: 1 ascending, -1 descending (required)
    #[arg(long, allow_hyphen_values = true)]
    order_by: Option<String>,

    /// Maximum number of users to return (required)
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<String>,

    /// Number of sorted matches to skip (required)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<String>,

    /// Print the page envelope (total, next-page flag) instead of a bare list
    #[arg(long)]
    page: bool,
}

impl SearchArgs {
    /// Absent values stay absent so request validation rejects them.
    fn to_request(&self) -> SearchRequest {
        SearchRequest {
            query: Some(self.query.clone()),
            order_field: self.order_field.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit.clone(),
            offset: self.offset.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI args passed down to config
    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;

    // Apply CLI overrides (verbosity / dataset)
    config.apply_cli_overrides(&args);
    if let Some(dataset) = cli.dataset.as_deref() {
        override_dataset(&mut config, dataset)?;
    }

    // Initialize logging
    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, &config.base_dir());
    tracing::info!("User Search starting");

    // Print config and exit if requested
    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        return Err(anyhow!("No command given, try 'user-search --help'"));
    };

    let module_cfg: UserSearchConfig = config.module_config(MODULE_NAME)?;
    let module = UserSearch::default();
    module.init_from_config(&module_cfg)?;

    match command {
        Commands::Search(search) => run_search(&module, &search),
        Commands::Check => check_config(&config, &module),
    }
}

/// Point `modules.user_search.dataset` at `path`, keeping any other settings.
fn override_dataset(config: &mut AppConfig, path: &Path) -> Result<()> {
    let section = config
        .modules
        .entry(MODULE_NAME.to_string())
        .or_insert_with(|| serde_json::json!({}));
    let obj = section
        .as_object_mut()
        .ok_or_else(|| anyhow!("modules.{MODULE_NAME} must be a mapping"))?;
    obj.insert(
        "dataset".to_string(),
        serde_json::Value::String(path.to_string_lossy().to_string()),
    );
    Ok(())
}

fn run_search(module: &UserSearch, args: &SearchArgs) -> Result<()> {
    tracing::debug!(?args, "Running search");
    let client = module.client()?;
    let request = args.to_request();

    let out = if args.page {
        let page = client.search_page(&request)?;
        serde_json::to_string_pretty(&SearchPageDto::from(page))
    } else {
        let users: Vec<ResultUserDto> = client
            .search(&request)?
            .into_iter()
            .map(ResultUserDto::from)
            .collect();
        serde_json::to_string_pretty(&users)
    }
    .context("Failed to serialize search result")?;

    println!("{out}");
    Ok(())
}

fn check_config(config: &AppConfig, module: &UserSearch) -> Result<()> {
    tracing::info!("Checking configuration...");

    let records = module.record_count()?;
    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Dataset records: {records}");
    println!("{}", config.to_yaml()?);

    Ok(())
}
