//! Argument parsing and command dispatch for the `tpb` binary.

use std::io::Write;

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use tpb_core::url::DEFAULT_BASE_URL;
use tpb_core::{Category, ClientConfig, Ordering, TpbError, TpbScraper};

use crate::output::{ListingKind, OutputFormat, render_listings};

#[derive(Parser, Debug)]
#[command(
    name = "tpb",
    about = "Unofficial command-line client for The Pirate Bay",
    version,
    disable_version_flag = true
)]
pub(crate) struct Cli {
    #[arg(
        short = 't',
        long = "type",
        global = true,
        value_name = "TYPE",
        default_value_t = Category::All,
        help = "Media type: all|audio|video|music|applications|games|porn|other"
    )]
    pub(crate) category: Category,

    #[arg(
        short = 'o',
        long,
        global = true,
        value_name = "ORDER",
        default_value_t = Ordering::SeedersDesc,
        help = "Sorting order, e.g. seeders-desc, date-asc, name-desc"
    )]
    pub(crate) ordering: Ordering,

    #[arg(
        short = 'p',
        long,
        global = true,
        value_name = "PAGES",
        default_value = "1",
        help = "Number of result pages to display at maximum (accepted, not enforced)"
    )]
    pub(crate) pages: String,

    #[arg(
        long,
        global = true,
        default_value_t = 0,
        help = "Zero-based results page to search"
    )]
    pub(crate) page: u32,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format"
    )]
    pub(crate) output: OutputFormat,

    #[arg(
        long,
        global = true,
        env = "TPB_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the site"
    )]
    pub(crate) base_url: String,

    #[arg(
        long = "timeout",
        global = true,
        env = "TPB_TIMEOUT_SECS",
        value_name = "SECS",
        help = "HTTP request timeout in seconds"
    )]
    pub(crate) timeout_secs: Option<u64>,

    #[arg(
        long,
        global = true,
        env = "TPB_RETRIES",
        default_value_t = 0,
        help = "Retry attempts for transient HTTP failures"
    )]
    pub(crate) retries: u32,

    #[arg(short = 'v', long, action = ArgAction::Version, help = "Display this program's version")]
    #[allow(dead_code)]
    version: Option<bool>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// List recently uploaded torrents
    Recent,
    /// List the top torrents of the selected type
    Top,
    /// Search for a specific torrent
    Search {
        #[arg(required = true, num_args = 1.., help = "Search terms")]
        query: Vec<String>,
    },
    /// Download a specific torrent (not implemented)
    Download {
        #[arg(help = "Torrent identifier")]
        id: Option<String>,
    },
    /// Print the program identification
    Info,
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            max_retries: self.retries,
        }
    }
}

/// Executes the parsed command, writing its output to `out`.
pub(crate) async fn dispatch<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        writeln!(out, "{}", Cli::command().render_help())?;
        return Ok(());
    };

    if let Command::Unknown(args) = command {
        tracing::debug!(?args, "ignoring unknown command");
        return Ok(());
    }

    if cli.pages != "1" {
        tracing::debug!(
            pages = %cli.pages,
            "page limit ignored, a single result page is fetched"
        );
    }

    let scraper =
        TpbScraper::with_config(cli.client_config()).context("failed to build HTTP client")?;

    match command {
        Command::Recent => {
            let listings = scraper
                .list_recent()
                .await
                .context("failed to list recent torrents")?;
            render_listings(
                out,
                &listings,
                ListingKind::Recent,
                Ordering::SeedersDesc,
                cli.output,
            )
        }
        Command::Top => {
            let listings = scraper
                .list_top(cli.category)
                .await
                .with_context(|| format!("failed to list top {} torrents", cli.category))?;
            render_listings(
                out,
                &listings,
                ListingKind::Top,
                Ordering::SeedersDesc,
                cli.output,
            )
        }
        Command::Search { query } => {
            let query = query.join(" ");
            let listings = scraper
                .search(&query, cli.page, cli.ordering, cli.category)
                .await
                .with_context(|| format!("search for {query:?} failed"))?;
            render_listings(
                out,
                &listings,
                ListingKind::Related,
                cli.ordering,
                cli.output,
            )
        }
        Command::Download { id } => {
            match scraper.download(id.as_deref().unwrap_or_default()) {
                Ok(()) => Ok(()),
                Err(err @ TpbError::NotImplemented(_)) => {
                    writeln!(out, "{err}")?;
                    Ok(())
                }
                Err(err) => Err(err).context("download failed"),
            }
        }
        Command::Info => {
            writeln!(out, "{}", scraper.info())?;
            Ok(())
        }
        Command::Unknown(_) => Ok(()),
    }
}
