//! rdap-bootstrap: resolve RDAP request paths against local bootstrap files.

use clap::{Parser, Subcommand};
use rdap_bootstrap::{Config, Redirector, RequestScheme};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rdap-bootstrap")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Resolve RDAP queries to their authoritative registry", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Bootstrap data directory (overrides configuration)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the redirect URL for each request path
    Resolve {
        /// Request paths, e.g. /autnum/10 or /domain/example.info
        #[arg(required = true)]
        paths: Vec<String>,

        /// Scheme of the simulated inbound request
        #[arg(short, long, default_value = "https")]
        scheme: String,
    },

    /// Print the number of entries in each bootstrap table
    Stats,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Resolve { paths, scheme } => resolve_paths(&config, &paths, &scheme),
        Commands::Stats => print_stats(&config),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> rdap_bootstrap::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

/// Returns `Ok(false)` if any path was invalid input.
fn resolve_paths(
    config: &Config,
    paths: &[String],
    scheme: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scheme: RequestScheme = scheme.parse()?;
    let redirector = Redirector::from_dir(&config.data_dir, config.scheme_policy)?;

    let mut all_valid = true;
    for path in paths {
        match redirector.redirect_path(path, scheme) {
            Ok(Some(url)) => println!("{} -> {}", path, url),
            Ok(None) => println!("{} -> not found", path),
            Err(e) if e.is_client_error() => {
                println!("{} -> invalid: {}", path, e);
                all_valid = false;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(all_valid)
}

fn print_stats(config: &Config) -> Result<bool, Box<dyn std::error::Error>> {
    let redirector = Redirector::from_dir(&config.data_dir, config.scheme_policy)?;
    let stats = redirector.stats();

    println!("Data directory: {:?}", config.data_dir);
    println!("Scheme policy:  {}", redirector.policy());
    println!("ASN ranges:      {}", stats.asn_ranges);
    println!("IPv4 prefixes:   {}", stats.ipv4_prefixes);
    println!("IPv6 prefixes:   {}", stats.ipv6_prefixes);
    println!("Domain suffixes: {}", stats.domain_suffixes);
    println!("Entity tags:     {}", stats.entity_tags);
    Ok(true)
}
