//! CLI for linkstash.
//!
//! Local URL shortener over a single JSON storage blob. The three surfaces of
//! the tool map onto subcommands: `shorten`/`list` for creating and reviewing
//! links, `stats` for click statistics, and `resolve` for following a code.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (30 minute validity by default)
//! linkstash shorten https://example.com/very/long/path
//!
//! # Shorten with a custom code valid for one day
//! linkstash shorten https://example.com --code promo2025 --validity 1440
//!
//! # Resolve a code: records a click and prints the target URL
//! linkstash resolve promo2025
//!
//! # Inspect click statistics
//! linkstash stats
//! linkstash stats promo2025
//!
//! # Delete everything
//! linkstash clear
//! ```
//!
//! # Environment Variables
//!
//! - `LINKSTASH_STORAGE_PATH` - storage blob path (default: `linkstash-data.json`)
//! - `LINKSTASH_DEFAULT_VALIDITY` - default validity in minutes (default: 30)
//! - `RUST_LOG` / `LOG_FORMAT` - logging filter and format (`text` or `json`)

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use linkstash::application::dto::ShortenRequest;
use linkstash::application::services::{LinkService, LinkStats, RedirectService, StatsService};
use linkstash::config::Config;
use linkstash::domain::entities::Link;
use linkstash::error::AppError;
use linkstash::infrastructure::persistence::JsonFileStore;

/// Local URL shortener with click statistics.
#[derive(Parser)]
#[command(name = "linkstash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The URL to shorten (http/https)
        url: String,

        /// Validity period in minutes (1-525600)
        #[arg(short = 'm', long)]
        validity: Option<u32>,

        /// Custom shortcode (3-10 alphanumeric characters, auto-generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// List all stored links
    List,

    /// Resolve a shortcode: record a click and print the target URL
    Resolve {
        /// The shortcode to follow
        code: String,

        /// Referrer to record with the click
        #[arg(long)]
        referer: Option<String>,

        /// User agent to record with the click
        #[arg(long)]
        user_agent: Option<String>,
    },

    /// Show click statistics
    Stats {
        /// Shortcode to inspect (all links when omitted)
        code: Option<String>,
    },

    /// Delete all stored links
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    let cli = Cli::parse();
    let store = Arc::new(JsonFileStore::new(config.storage_path.clone()));

    match cli.command {
        Commands::Shorten {
            url,
            validity,
            code,
        } => {
            let request = ShortenRequest {
                url,
                validity_minutes: validity.unwrap_or(config.default_validity_minutes),
                custom_code: code,
            };
            run(|| shorten(&LinkService::new(store.clone()), request))
        }
        Commands::List => {
            list(&LinkService::new(store.clone()));
            Ok(())
        }
        Commands::Resolve {
            code,
            referer,
            user_agent,
        } => run(|| resolve(&RedirectService::new(store.clone()), &code, referer, user_agent)),
        Commands::Stats { code } => run(|| stats(&StatsService::new(store.clone()), code)),
        Commands::Clear { yes } => clear(&LinkService::new(store.clone()), yes),
    }
}

/// Initializes the tracing subscriber from configuration.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Runs a command, rendering application errors as inline messages.
///
/// Lookup and expiry failures are expected outcomes for this tool, not fatal
/// errors, so they print and exit cleanly.
fn run(command: impl FnOnce() -> Result<(), AppError>) -> Result<()> {
    if let Err(e) = command() {
        println!("{} {}", format!("{}:", e.code()).red().bold(), e);
    }
    Ok(())
}

fn shorten(service: &LinkService<JsonFileStore>, request: ShortenRequest) -> Result<(), AppError> {
    let link = service.shorten(request)?;

    println!("{}", "URL shortened!".green().bold());
    print_link(&link);
    Ok(())
}

fn list(service: &LinkService<JsonFileStore>) {
    let links = service.list_links();

    if links.is_empty() {
        println!("{}", "No links stored.".yellow());
        return;
    }

    println!("{}", format!("{} link(s) stored:", links.len()).bold());
    for link in &links {
        println!();
        print_link(link);
    }
}

fn resolve(
    service: &RedirectService<JsonFileStore>,
    code: &str,
    referer: Option<String>,
    user_agent: Option<String>,
) -> Result<(), AppError> {
    let redirect = service.resolve(code, referer, user_agent)?;

    println!(
        "{} {}",
        "Redirecting to:".green().bold(),
        redirect.location
    );
    println!(
        "  click recorded: {} / {} / {}",
        redirect.click.referer.cyan(),
        redirect.click.user_agent,
        redirect.click.geo.cyan()
    );
    Ok(())
}

fn stats(service: &StatsService<JsonFileStore>, code: Option<String>) -> Result<(), AppError> {
    let entries = match code {
        Some(code) => vec![service.stats_for(&code)?],
        None => service.all_stats(),
    };

    if entries.is_empty() {
        println!("{}", "No links stored.".yellow());
        return Ok(());
    }

    for entry in &entries {
        print_stats(entry);
        println!();
    }
    Ok(())
}

fn clear(service: &LinkService<JsonFileStore>, yes: bool) -> Result<()> {
    let count = service.list_links().len();
    if count == 0 {
        println!("{}", "No links stored.".yellow());
        return Ok(());
    }

    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!("Delete all {count} stored link(s)?"))
            .default(false)
            .interact()?;

    if !confirmed {
        println!("{}", "Aborted.".yellow());
        return Ok(());
    }

    service.clear_all()?;
    println!("{}", "All stored links cleared.".green().bold());
    Ok(())
}

fn print_link(link: &Link) {
    println!("  {} {}", "code:".bold(), link.shortcode.green().bold());
    println!("  {} {}", "url:".bold(), link.original_url);
    println!(
        "  {} {} ({})",
        "expires:".bold(),
        link.expires_at.format("%Y-%m-%d %H:%M:%S UTC"),
        time_until_expiry(link.expires_at)
    );
    println!("  {} {}", "clicks:".bold(), link.click_count());
}

fn print_stats(stats: &LinkStats) {
    print_link(&stats.link);
    for click in &stats.link.clicks {
        println!(
            "    {} {} / {} / {}",
            click.timestamp.format("%Y-%m-%d %H:%M:%S"),
            click.referer.cyan(),
            click.user_agent,
            click.geo.cyan()
        );
    }
}

/// Human-readable time remaining until expiry, or "Expired".
fn time_until_expiry(expires_at: DateTime<Utc>) -> String {
    let remaining = expires_at - Utc::now();
    if remaining <= chrono::Duration::zero() {
        return "Expired".to_string();
    }

    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m left")
    } else if hours > 0 {
        format!("{hours}h {minutes}m left")
    } else {
        format!("{}m left", minutes.max(1))
    }
}
