//! Topic Index - Main entrypoint.
//!
//! Command-line front end for the topic index. It loads configuration,
//! initializes logging, reads subscription tables and runs match, search and
//! dump queries against them.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use topic_index_lib::config::{self, AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use topic_index_lib::data_structures::TopicTree;
use topic_index_lib::error::{
    get_error_reporting, ErrorContext, TopicIndexError, TopicIndexResult,
};
use topic_index_lib::subscriptions::SubscriptionTable;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command line arguments for the topic index.
#[derive(Parser, Debug)]
#[clap(name = "topic_index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List subscribers whose topic matches a published topic
    Match {
        /// Path to the subscription table (TOML or JSON)
        #[clap(value_parser)]
        subscriptions: PathBuf,

        /// Concrete topic to match
        topic: String,
    },

    /// List subscribers stored under topics selected by a pattern
    Search {
        /// Path to the subscription table (TOML or JSON)
        #[clap(value_parser)]
        subscriptions: PathBuf,

        /// Pattern, possibly containing wildcards
        pattern: String,
    },

    /// Print the tree built from a subscription table
    Dump {
        /// Path to the subscription table (TOML or JSON)
        #[clap(value_parser)]
        subscriptions: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Match { .. } => "match",
            Command::Search { .. } => "search",
            Command::Dump { .. } => "dump",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> TopicIndexResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| TopicIndexError::Custom(format!("Invalid log filter: {e}")))?;

    let (json_layer, text_layer) = if log.json {
        let layer = fmt::layer()
            .json()
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .with_writer(std::io::stderr);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .with_thread_names(true)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| TopicIndexError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a tree from the subscription table at `path`.
fn load_tree(path: &Path, config: &AppConfig) -> TopicIndexResult<TopicTree<String>> {
    let tree = SubscriptionTable::load(path)?.into_tree(config.tree.to_tree_config())?;
    info!(topics = tree.entries().len(), subscribers = tree.count(), "tree built");
    Ok(tree)
}

/// Prints one subscriber per line, or a JSON array.
fn print_subscribers(subscribers: &[&String], json: bool) -> TopicIndexResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(subscribers)?);
    } else {
        for subscriber in subscribers {
            println!("{subscriber}");
        }
    }
    Ok(())
}

fn execute(command: Command, config: &AppConfig, json: bool) -> TopicIndexResult<()> {
    match command {
        Command::Match {
            subscriptions,
            topic,
        } => {
            let tree = load_tree(&subscriptions, config)?;
            let matched = tree.match_topic(&topic);
            info!(%topic, matched = matched.len(), "match complete");
            print_subscribers(&matched, json)
        }
        Command::Search {
            subscriptions,
            pattern,
        } => {
            let tree = load_tree(&subscriptions, config)?;
            let found = tree.search(&pattern);
            info!(%pattern, found = found.len(), "search complete");
            print_subscribers(&found, json)
        }
        Command::Dump { subscriptions } => {
            let tree = load_tree(&subscriptions, config)?;
            let entries = tree.entries();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{tree}");
                for (topic, subscribers) in entries {
                    println!("{topic} => {}", subscribers.join(", "));
                }
            }
            Ok(())
        }
        Command::Validate => {
            info!(
                separator = %config.tree.separator,
                wildcard_one = %config.tree.wildcard_one,
                wildcard_some = %config.tree.wildcard_some,
                "Configuration validated successfully"
            );
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = AppConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| TopicIndexError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), ErrorContext> {
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load().map_err(|e| {
        ErrorContext::new(e.into(), "config")
            .with_details(format!("config file: {:?}", args.config))
    })?;

    init_logging(&loaded.log).map_err(|e| ErrorContext::new(e, "logging"))?;
    topic_index_lib::init();
    config::init_global_config(loaded);
    let config: Arc<AppConfig> = config::get_global_config().unwrap_or_default();

    let span = tracing::info_span!("command", name = args.command.name());
    let _entered = span.enter();
    execute(args.command, &config, args.json)
        .map_err(|e| ErrorContext::new(e, "cli").with_span_trace())
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(context) => {
            get_error_reporting().report(context);
            ExitCode::FAILURE
        }
    }
}
