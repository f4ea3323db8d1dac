use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worksearch::engine::{EngineOptions, SearchEngine};
use worksearch::index::stats::show_stats;
use worksearch::output;
use worksearch::server::{self, ServeOptions};
use worksearch::utils::{get_config_path, AppConfig};

#[derive(Parser)]
#[command(name = "worksearch")]
#[command(about = "Substring search with context over a fixed text corpus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Corpus file to search
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// File holding the `Contents` listing
    #[arg(long, global = true)]
    toc: Option<PathBuf>,

    /// Context bytes on each side of a match
    #[arg(short, long, global = true)]
    window: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the corpus and serve searches over HTTP
    Serve {
        /// Port to listen on (overrides PORT and the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of static files
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Run a single search and print the snippets
    Search {
        /// Text to look for
        query: String,

        /// Maximum number of snippets
        #[arg(short = 'm', long)]
        limit: Option<usize>,

        /// Print a JSON array instead of highlighted text
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List the titles found in the table of contents
    Works {
        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show index statistics
    Stats,
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Serve { port, static_dir } => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }

            // Phase one: build everything; a load error stops here
            let engine = Arc::new(load_engine(&config, false)?);

            // Phase two: serve the loaded engine
            let options = ServeOptions {
                port: config.port,
                static_dir: config.static_dir.clone(),
                result_limit: config.result_limit(),
            };
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(server::serve(engine, options))?;
        }
        Commands::Search {
            query,
            limit,
            json,
            no_color,
        } => {
            if query.is_empty() {
                anyhow::bail!("Search query must not be empty");
            }
            let engine = load_engine(&config, !json)?;
            let limit = limit.or(config.result_limit());

            if json {
                output::print_json(&engine.search_limited(&query, limit))?;
            } else {
                let snippets = engine.search_snippets(&query, limit);
                if snippets.is_empty() {
                    eprintln!("No matches for {:?}", query);
                }
                output::print_snippets(&snippets, !no_color)?;
            }
        }
        Commands::Works { json } => {
            let engine = load_engine(&config, false)?;
            if json {
                output::print_json(engine.works())?;
            } else {
                output::print_works(engine.works(), true)?;
            }
        }
        Commands::Stats => {
            let engine = load_engine(&config, true)?;
            show_stats(&engine, &config);
        }
        Commands::Config { init } => {
            if init {
                let path = match &cli.config {
                    Some(path) => {
                        config.save_to(path)?;
                        path.clone()
                    }
                    None => config.save()?,
                };
                println!("Wrote {}", path.display());
            } else {
                output::print_json(&config)?;
            }
        }
    }

    Ok(())
}

/// Config file, then `PORT`, then command-line flags
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => match get_config_path() {
            Ok(_) => AppConfig::load()?,
            Err(e) => {
                tracing::warn!(error = %e, "no app data directory, using defaults");
                AppConfig::default()
            }
        },
    };

    config.apply_env()?;

    if let Some(corpus) = &cli.corpus {
        config.corpus_path = corpus.clone();
    }
    if let Some(toc) = &cli.toc {
        config.toc_path = toc.clone();
    }
    if let Some(window) = cli.window {
        config.window = window;
    }

    Ok(config)
}

fn load_engine(config: &AppConfig, show_progress: bool) -> Result<SearchEngine> {
    let mut options = EngineOptions::new(&config.corpus_path, &config.toc_path);
    options.window = config.window;
    options.show_progress = show_progress;

    SearchEngine::load(&options).context("Failed to load search engine")
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worksearch=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
