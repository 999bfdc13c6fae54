//! Command-line companion for the ShortLink demo.
//!
//! Runs the same shortening flow as the web page against a session that lives
//! only as long as the process, and prints the dashboard figures.
//!
//! # Usage
//!
//! ```bash
//! # Shorten URLs (prompts interactively when none are given)
//! cargo run --bin shortlink-cli -- shorten https://example.com/page
//!
//! # Skip the simulated latency
//! cargo run --bin shortlink-cli -- shorten --no-delay https://example.com
//!
//! # Print the analytics dashboard
//! cargo run --bin shortlink-cli -- analytics
//!
//! # Validate configuration from the environment / .env
//! cargo run --bin shortlink-cli -- config check
//! ```

use shortlink::application::services::{AnalyticsService, ShortenerService};
use shortlink::config::{self, Config};
use shortlink::domain::SessionRegistry;
use shortlink::domain::entities::{Notice, ShortenedLink};
use shortlink::infrastructure::latency::{self, LatencySimulator, NoDelay};
use shortlink::web::views::{daily_bars, location_bars};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// Bar glyphs at 100%.
const BAR_WIDTH: usize = 30;

/// CLI for the ShortLink demo.
#[derive(Parser)]
#[command(name = "shortlink-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten URLs in a session that ends with the process
    Shorten {
        /// URLs to shorten (prompted for when omitted)
        urls: Vec<String>,

        /// Skip the simulated latency
        #[arg(long)]
        no_delay: bool,

        /// Override the short URL base (defaults to SHORT_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show the analytics dashboard figures
    Analytics,

    /// Configuration tools
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Shorten {
            urls,
            no_delay,
            base_url,
        } => handle_shorten(urls, no_delay, base_url).await?,
        Commands::Analytics => handle_analytics(),
        Commands::Config { action } => match action {
            ConfigAction::Check => handle_config_check()?,
        },
    }

    Ok(())
}

/// Shortens the given URLs, or prompts for them one at a time.
///
/// Fails with a non-zero exit when any URL was rejected.
async fn handle_shorten(urls: Vec<String>, no_delay: bool, base_url: Option<String>) -> Result<()> {
    let config = config::load_from_env()?;

    let simulator: Arc<dyn LatencySimulator> = if no_delay {
        Arc::new(NoDelay::new())
    } else {
        latency::from_duration(config.simulated_latency())
    };
    let service = ShortenerService::new(
        base_url.unwrap_or(config.short_base_url),
        simulator,
    );
    let mut registry = SessionRegistry::new();
    let mut rejected = 0;

    if urls.is_empty() {
        println!("{}", "🔗 ShortLink".bright_blue().bold());
        println!();
        loop {
            let url: String = Input::new()
                .with_prompt("URL to shorten")
                .allow_empty(true)
                .interact_text()?;

            if !shorten_one(&service, &mut registry, &url).await {
                rejected += 1;
            }

            let again = Confirm::new()
                .with_prompt("Shorten another?")
                .default(true)
                .interact()?;
            if !again {
                break;
            }
        }
    } else {
        for url in &urls {
            if !shorten_one(&service, &mut registry, url).await {
                rejected += 1;
            }
        }
    }

    print_links(&registry);

    if rejected > 0 {
        anyhow::bail!("{} URL(s) rejected", rejected);
    }
    Ok(())
}

/// Runs one submission and prints its notice. Returns `false` on rejection.
async fn shorten_one(service: &ShortenerService, registry: &mut SessionRegistry, url: &str) -> bool {
    if !service.latency().is_zero() && !url.trim().is_empty() {
        println!("{}", "⏳ Shortening...".dimmed());
    }

    match service.shorten(registry, url).await {
        Ok(link) => {
            print_notice(&Notice::shortened());
            println!("  {}", link.short_url.bright_cyan().bold());
            true
        }
        Err(err) => {
            print_notice(&Notice::from(&err));
            false
        }
    }
}

fn print_notice(notice: &Notice) {
    if notice.is_destructive() {
        println!("{} {}", "❌".red(), notice.title.red().bold());
        println!("   {}", notice.description.red());
    } else {
        println!("{} {}", "✅".green(), notice.title.green().bold());
        println!("   {}", notice.description);
    }
}

/// Prints the session list, newest first.
fn print_links(registry: &SessionRegistry) {
    if registry.is_empty() {
        return;
    }

    println!();
    println!("{}", "Your Shortened URLs".bright_white().bold());
    println!("{}", "─".repeat(60).dimmed());

    for link in registry.links() {
        print_link(link);
    }
}

fn print_link(link: &ShortenedLink) {
    println!("{}", link.short_url.bright_cyan());
    println!("  {}", link.original_url.dimmed());
    println!(
        "  {} clicks · Created {}",
        link.clicks,
        link.created_on()
    );
}

/// Prints the dashboard figures with text bar charts.
fn handle_analytics() {
    let snapshot = AnalyticsService::new().snapshot();

    println!("{}", "📊 Analytics Dashboard".bright_blue().bold());
    println!();

    for stat in &snapshot.stats {
        println!(
            "  {:<16} {:>8}  {}",
            stat.title,
            stat.value.bold(),
            format!("{} from last week", stat.change).green()
        );
    }

    println!();
    println!("{}", "Clicks Over Time".bright_white().bold());
    for bar in daily_bars(&snapshot) {
        println!(
            "  {:<16} {} {}",
            bar.label,
            render_bar(bar.percent).bright_magenta(),
            bar.value
        );
    }

    println!();
    println!("{}", "Geographic Distribution".bright_white().bold());
    for bar in location_bars(&snapshot) {
        let share = bar.share.map(|s| format!(" ({s}%)")).unwrap_or_default();
        println!(
            "  {:<16} {} {}{}",
            bar.label,
            render_bar(bar.percent).bright_cyan(),
            bar.value,
            share
        );
    }

    println!();
    println!("{}", "Top Performing URLs".bright_white().bold());
    for item in &snapshot.top_urls {
        println!(
            "  {:<18} {:>4} clicks  {}",
            item.url.bright_cyan(),
            item.clicks,
            format!("{} CTR", item.ctr).green()
        );
        println!("    {}", item.original.dimmed());
    }
}

fn render_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!("{:<width$}", "█".repeat(filled), width = BAR_WIDTH)
}

/// Loads configuration and reports the effective values.
fn handle_config_check() -> Result<()> {
    println!("{}", "🔧 Configuration check".bright_blue().bold());
    println!();

    let config: Config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", "❌".red(), format!("{:#}", e).red());
            return Err(e);
        }
    };

    println!("  Listen:            {}", config.listen_addr.cyan());
    println!("  Short URL base:    {}", config.short_base_url.cyan());
    println!("  Simulated latency: {}ms", config.simulated_latency_ms);
    println!("  Session TTL:       {}s", config.session_ttl_seconds);
    println!("  Max sessions:      {}", config.max_sessions);
    println!("  Log:               {} ({})", config.log_level, config.log_format);
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());

    Ok(())
}
