//! The Pirate Bay Scraper Core Library
//!
//! Provides an async API for listing recent, top and searched torrents
//! together with their magnet links.
//!
//! # Overview
//!
//! This crate provides the scraping side of the `tpb` command line tool:
//! - HTTP client with status mapping and optional retries
//! - HTML parser that pairs result rows with magnet links
//! - URL builders for the recent, top and search pages
//!
//! # Example
//!
//! ```no_run
//! use tpb_core::{Category, Ordering, Result, TpbScraper};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let scraper = TpbScraper::new()?;
//!
//!     let results = scraper
//!         .search("debian", 0, Ordering::SeedersDesc, Category::Applications)
//!         .await?;
//!
//!     for torrent in &results {
//!         println!("{}: {}", torrent.title, torrent.magnet_link);
//!     }
//!     println!("Listed {} torrents", results.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Magnet pairing
//!
//! Magnet links are selected across the whole page and attached to result
//! rows by position. A page that omits a magnet anchor for one row shifts
//! every following magnet up by one row.

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, TpbClient};

// Re-export error types
pub use error::{Result, TpbError};

// Re-export parser functions
pub use parser::{extract_info_hash, normalize_row_text, parse_listings};

// Re-export main scraper API
pub use self::scraper::{INFO, TpbScraper};

// Re-export data types
pub use types::{Category, Ordering, TorrentListing};
