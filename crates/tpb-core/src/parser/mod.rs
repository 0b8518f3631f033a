//! HTML parsers for the torrent index
//!
//! Contains the result table parser and magnet link helpers.

pub mod listing;
pub mod magnet;

pub use listing::{normalize_row_text, parse_listings};
pub use magnet::extract_info_hash;
