//! URL helper functions for the torrent index
//!
//! Builds the request paths for the listing pages. The client prepends
//! the configured base URL.

use crate::types::{Category, Ordering};

/// Default host of the torrent index
pub const DEFAULT_BASE_URL: &str = "https://thepiratebay.org";

/// Builds the path of the recently uploaded torrents page
///
/// # Example
/// ```
/// use tpb_core::url::build_recent_path;
/// assert_eq!(build_recent_path(), "/recent");
/// ```
pub fn build_recent_path() -> String {
    "/recent".to_string()
}

/// Builds the path of the top torrents page for a category
///
/// # Example
/// ```
/// use tpb_core::Category;
/// use tpb_core::url::build_top_path;
/// assert_eq!(build_top_path(Category::All), "/top/all");
/// assert_eq!(build_top_path(Category::Audio), "/top/100");
/// ```
pub fn build_top_path(category: Category) -> String {
    format!("/top/{}", category.top_segment())
}

/// Builds the search path for a query
///
/// URL encodes the query so it stays a single path segment.
///
/// # Arguments
/// * `query` - Search query string
/// * `page` - Zero-based results page
/// * `ordering` - Sort key
/// * `category` - Media-type filter
///
/// # Example
/// ```
/// use tpb_core::{Category, Ordering};
/// use tpb_core::url::build_search_path;
/// let path = build_search_path("ubuntu iso", 0, Ordering::SeedersDesc, Category::Applications);
/// assert_eq!(path, "/search/ubuntu%20iso/0/7/300");
/// ```
pub fn build_search_path(query: &str, page: u32, ordering: Ordering, category: Category) -> String {
    let encoded = urlencoding::encode(query);
    format!(
        "/search/{}/{}/{}/{}",
        encoded,
        page,
        ordering.code(),
        category.code()
    )
}

/// Joins a base URL and a path without doubling the slash
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
