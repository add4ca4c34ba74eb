use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use todolite::cli::{self as prog_cli, parse_pairs};
use todolite::config::AppConfig;
use todolite::{api, logger};

#[derive(Parser, Debug)]
#[command(name = "todolite", version, about = "In-memory todo service with a JSON HTTP API")]
struct Cli {
    #[arg(long, global = true, help = "Path to a TOML config file (defaults to $TODOLITE_CONFIG or ./todolite.toml)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "JSON array or NDJSON file of todos to load at startup")]
    seed: Option<PathBuf>,
    #[arg(long, global = true, help = "Address to listen on, e.g. 127.0.0.1:4567")]
    bind: Option<String>,
    #[arg(long, global = true, help = "Log level: off|error|warn|info|debug|trace")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Mount point for the todo routes, e.g. /api")]
    api_prefix: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Serve the HTTP API until interrupted")]
    Serve,
    #[command(about = "List todos; prints NDJSON to stdout")]
    List {
        #[arg(help = "Query parameters as key=value, e.g. owner=chris status=complete limit=5")]
        params: Vec<String>,
    },
    #[command(about = "Count todos matching the filter parameters")]
    Count {
        #[arg(help = "Filter parameters as key=value")]
        params: Vec<String>,
    },
    #[command(about = "Print one todo by id")]
    Get {
        #[arg(help = "24-hex todo id")]
        id: String,
    },
}

fn apply_overrides(cfg: &mut AppConfig, cli: &Cli) {
    if let Some(v) = &cli.seed { cfg.seed_file = Some(v.clone()); }
    if let Some(v) = &cli.bind { cfg.bind = v.clone(); }
    if let Some(v) = &cli.log_level { cfg.log_level = v.clone(); }
    if let Some(v) = &cli.api_prefix { cfg.api_prefix = v.clone(); }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let mut cfg = match AppConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => { eprintln!("error: {e}"); std::process::exit(2); }
    };
    apply_overrides(&mut cfg, &cli);
    if let Err(e) = logger::configure_from_config(&cfg) {
        eprintln!("warning: logging not configured: {e}");
    }
    let service = match todolite::open(&cfg) {
        Ok(s) => s,
        Err(e) => { eprintln!("error: {e}"); std::process::exit(1); }
    };

    let r: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Serve => api::serve(&cfg, Arc::new(service)).await.map_err(Into::into),
        Commands::List { params } => parse_pairs(&params)
            .map_err(Into::into)
            .and_then(|params| prog_cli::run(&service, prog_cli::Command::List { params }, &mut std::io::stdout())),
        Commands::Count { params } => parse_pairs(&params)
            .map_err(Into::into)
            .and_then(|params| prog_cli::run(&service, prog_cli::Command::Count { params }, &mut std::io::stdout())),
        Commands::Get { id } => prog_cli::run(&service, prog_cli::Command::Get { id }, &mut std::io::stdout()),
    };
    if let Err(e) = r {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
