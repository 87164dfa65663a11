//! Web-Harvester main entry point
//!
//! This is the command-line interface for the Web-Harvester crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use web_harvester::config::{load_config, validate, Config};
use web_harvester::crawler::run_crawl;
use web_harvester::output::{emit_report, print_statistics, ExtractionBundle, ReportSections};

/// Web-Harvester: a depth-bounded crawler with page extraction
///
/// Fetches every page reachable from the seed URL within the depth budget,
/// then reports emails, links, CSS selector text and XSS-prone query
/// parameters found across the crawl.
#[derive(Parser, Debug)]
#[command(name = "web-harvester")]
#[command(version = "1.0.0")]
#[command(about = "Advanced scraping tool with multiple options", long_about = None)]
struct Cli {
    /// Target URL to scrape
    #[arg(short, long)]
    url: String,

    /// Scrape emails
    #[arg(short, long)]
    emails: bool,

    /// Scrape links
    #[arg(short, long)]
    links: bool,

    /// Scrape by CSS selector
    #[arg(short, long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Save results to this file instead of printing them
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Crawl depth for recursive scraping (default: 1)
    #[arg(short, long, allow_negative_numbers = true)]
    depth: Option<i64>,

    /// Check for potential XSS vulnerabilities in links
    #[arg(long)]
    xss: bool,

    /// Enable verbose output (prints the total request count)
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of fetches in flight
    #[arg(short = 'j', long, value_name = "N")]
    concurrency: Option<usize>,
}

impl Cli {
    /// Applies command-line flags on top of file configuration
    fn apply(self, config: &mut Config) {
        config.crawler.seed_url = self.url;
        if let Some(depth) = self.depth {
            config.crawler.max_depth = depth;
        }
        if let Some(concurrency) = self.concurrency {
            config.crawler.max_concurrent_fetches = concurrency;
        }
        config.crawler.check_xss |= self.xss;

        config.extract.emails |= self.emails;
        config.extract.links |= self.links;
        if self.selector.is_some() {
            config.extract.selector = self.selector;
        }

        if self.output.is_some() {
            config.output.path = self.output;
        }
        config.output.verbose |= self.verbose;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?
        }
        None => Config::default(),
    };
    cli.apply(&mut config);
    validate(&config).context("invalid configuration")?;

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    tracing::info!(
        "Crawling {} to depth {} ({} concurrent fetches)",
        config.crawler.seed_url,
        config.crawler.max_depth,
        config.crawler.max_concurrent_fetches
    );

    let output = run_crawl(&config.crawler, cancel).await?;
    if output.stats.cancelled {
        tracing::warn!("Crawl was interrupted; reporting partial results");
    }

    let bundle = ExtractionBundle::aggregate(&output, &config.extract);
    let sections = ReportSections::from_config(&config);
    let output_path = config.output.path.as_deref();

    emit_report(&bundle, sections, output_path).with_context(|| match output_path {
        Some(path) => format!("failed to write results to {}", path.display()),
        None => "failed to write results to stdout".to_string(),
    })?;

    if config.output.verbose {
        print_statistics(&output.stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so a report printed on stdout stays clean. `RUST_LOG`
/// takes precedence when set.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else if verbose {
            EnvFilter::new("web_harvester=debug,info")
        } else {
            EnvFilter::new("web_harvester=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Cancels the crawl on Ctrl-C
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!("Interrupt received, stopping crawl");
                cancel.cancel();
            }
            Err(e) => tracing::error!("Failed to listen for interrupt: {}", e),
        }
    });
}
