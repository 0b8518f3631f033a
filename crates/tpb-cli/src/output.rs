//! Output renderers for listing commands.

use std::io::Write;

use anyhow::Context;
use clap::ValueEnum;
use serde_json::json;
use tpb_core::{Ordering, TorrentListing};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One line per torrent followed by a summary line
    #[default]
    Text,
    /// JSON array of listings
    Json,
}

/// Which page a listing came from, as worded in the summary line
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListingKind {
    Recent,
    Top,
    Related,
}

impl ListingKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Top => "top",
            Self::Related => "related",
        }
    }
}

pub(crate) fn render_listings<W: Write>(
    out: &mut W,
    listings: &[TorrentListing],
    kind: ListingKind,
    ordering: Ordering,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let text =
                serde_json::to_string_pretty(listings).context("failed to format JSON")?;
            writeln!(out, "{text}")?;
        }
        OutputFormat::Text => {
            for (index, listing) in listings.iter().enumerate() {
                let entry = json!({
                    "info": listing.title,
                    "magnet": listing.magnet_link,
                });
                writeln!(out, "torrent_{}: {entry}", index + 1)?;
            }
            writeln!(
                out,
                "Listed {} {} torrents sorted by {}.",
                listings.len(),
                kind.as_str(),
                ordering.label()
            )?;
        }
    }
    Ok(())
}
