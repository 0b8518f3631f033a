//! Main scraper API for the torrent index
//!
//! Provides the high-level API combining HTTP client and parsers.

use crate::client::{ClientConfig, TpbClient};
use crate::error::{Result, TpbError};
use crate::parser::parse_listings;
use crate::types::{Category, Ordering, TorrentListing};
use crate::url::{build_recent_path, build_search_path, build_top_path};

/// Identification string printed by the `info` command
pub const INFO: &str = "ThePirateBay Unofficial Rust API";

/// Main scraper API for the torrent index
///
/// Combines the HTTP client with the result table parser. Every listing
/// operation issues exactly one request and returns the listings in page
/// order; the count is the length of the returned vector.
pub struct TpbScraper {
    client: TpbClient,
}

impl TpbScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = TpbClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TpbClient::with_config(config)?;
        Ok(Self { client })
    }

    /// List recently uploaded torrents
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> tpb_core::Result<()> {
    /// use tpb_core::TpbScraper;
    /// let scraper = TpbScraper::new()?;
    /// for torrent in scraper.list_recent().await? {
    ///     println!("{}: {}", torrent.title, torrent.magnet_link);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_recent(&self) -> Result<Vec<TorrentListing>> {
        self.fetch_listings(&build_recent_path()).await
    }

    /// List the top torrents of a category
    pub async fn list_top(&self, category: Category) -> Result<Vec<TorrentListing>> {
        self.fetch_listings(&build_top_path(category)).await
    }

    /// Search torrents by query
    ///
    /// # Arguments
    /// * `query` - Search query string
    /// * `page` - Zero-based results page
    /// * `ordering` - Sort key
    /// * `category` - Media-type filter
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty or whitespace only
    /// - `HttpError`, `NotFound`, `RateLimited`, `Status` if the request fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> tpb_core::Result<()> {
    /// use tpb_core::{Category, Ordering, TpbScraper};
    /// let scraper = TpbScraper::new()?;
    /// let results = scraper
    ///     .search("ubuntu", 0, Ordering::SeedersDesc, Category::Applications)
    ///     .await?;
    /// println!("{} results", results.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        ordering: Ordering,
        category: Category,
    ) -> Result<Vec<TorrentListing>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(TpbError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        self.fetch_listings(&build_search_path(trimmed, page, ordering, category))
            .await
    }

    /// Download a torrent by ID
    ///
    /// Not implemented: always returns `NotImplemented` without touching
    /// the network.
    pub fn download(&self, _id: &str) -> Result<()> {
        Err(TpbError::NotImplemented("download"))
    }

    /// Static identification string
    pub fn info(&self) -> &'static str {
        INFO
    }

    async fn fetch_listings(&self, path: &str) -> Result<Vec<TorrentListing>> {
        let html = self.client.fetch(path).await?;
        let listings = parse_listings(&html)?;
        tracing::debug!(path, count = listings.len(), "extracted listings");
        Ok(listings)
    }
}
