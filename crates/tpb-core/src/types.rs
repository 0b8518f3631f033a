//! Core data types for the torrent index scraper
//!
//! Contains the scraped listing record and the option values the site
//! understands in its URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TpbError;
use crate::parser::extract_info_hash;

/// One scraped torrent entry from a result page
///
/// Has no identity beyond its position within the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentListing {
    /// Normalized text of the result row (category, name, upload info, seeders...)
    pub title: String,

    /// Magnet URI paired with this row, empty when the page had none left to pair
    pub magnet_link: String,

    /// Upper-cased BitTorrent info-hash taken from the magnet link
    pub info_hash: Option<String>,
}

impl TorrentListing {
    /// Creates a listing and derives its info-hash from the magnet link
    pub fn new(title: String, magnet_link: String) -> Self {
        let info_hash = extract_info_hash(&magnet_link);
        Self {
            title,
            magnet_link,
            info_hash,
        }
    }
}

/// Media-type filter recognized by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Audio,
    Video,
    Applications,
    Games,
    Porn,
    Other,
}

impl Category {
    pub const VALUES: [Category; 7] = [
        Category::All,
        Category::Audio,
        Category::Video,
        Category::Applications,
        Category::Games,
        Category::Porn,
        Category::Other,
    ];

    /// Numeric category code used in search URLs
    pub const fn code(self) -> u16 {
        match self {
            Category::All => 0,
            Category::Audio => 100,
            Category::Video => 200,
            Category::Applications => 300,
            Category::Games => 400,
            Category::Porn => 500,
            Category::Other => 600,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Applications => "applications",
            Category::Games => "games",
            Category::Porn => "porn",
            Category::Other => "other",
        }
    }

    /// Path segment for the `/top/` page, which spells out `all`
    pub fn top_segment(self) -> String {
        match self {
            Category::All => "all".to_string(),
            other => other.code().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TpbError;

    /// Accepts names (case-insensitive), the `music` alias and raw codes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        if value == "music" {
            return Ok(Category::Audio);
        }
        Category::VALUES
            .into_iter()
            .find(|c| c.name() == value || c.code().to_string() == value)
            .ok_or(TpbError::UnknownValue {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Sort key for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ordering {
    NameDesc,
    NameAsc,
    DateDesc,
    DateAsc,
    SizeDesc,
    SizeAsc,
    #[default]
    SeedersDesc,
    SeedersAsc,
    LeechersDesc,
    LeechersAsc,
    UploaderDesc,
    UploaderAsc,
    TypeDesc,
    TypeAsc,
    /// Whatever the site sorts by when no ordering is requested
    Default,
}

impl Ordering {
    pub const VALUES: [Ordering; 15] = [
        Ordering::NameDesc,
        Ordering::NameAsc,
        Ordering::DateDesc,
        Ordering::DateAsc,
        Ordering::SizeDesc,
        Ordering::SizeAsc,
        Ordering::SeedersDesc,
        Ordering::SeedersAsc,
        Ordering::LeechersDesc,
        Ordering::LeechersAsc,
        Ordering::UploaderDesc,
        Ordering::UploaderAsc,
        Ordering::TypeDesc,
        Ordering::TypeAsc,
        Ordering::Default,
    ];

    /// Numeric ordering code used in search URLs
    pub const fn code(self) -> u8 {
        match self {
            Ordering::NameDesc => 1,
            Ordering::NameAsc => 2,
            Ordering::DateDesc => 3,
            Ordering::DateAsc => 4,
            Ordering::SizeDesc => 5,
            Ordering::SizeAsc => 6,
            Ordering::SeedersDesc => 7,
            Ordering::SeedersAsc => 8,
            Ordering::LeechersDesc => 9,
            Ordering::LeechersAsc => 10,
            Ordering::UploaderDesc => 11,
            Ordering::UploaderAsc => 12,
            Ordering::TypeDesc => 13,
            Ordering::TypeAsc => 14,
            Ordering::Default => 99,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Ordering::NameDesc => "name-desc",
            Ordering::NameAsc => "name-asc",
            Ordering::DateDesc => "date-desc",
            Ordering::DateAsc => "date-asc",
            Ordering::SizeDesc => "size-desc",
            Ordering::SizeAsc => "size-asc",
            Ordering::SeedersDesc => "seeders-desc",
            Ordering::SeedersAsc => "seeders-asc",
            Ordering::LeechersDesc => "leechers-desc",
            Ordering::LeechersAsc => "leechers-asc",
            Ordering::UploaderDesc => "uploader-desc",
            Ordering::UploaderAsc => "uploader-asc",
            Ordering::TypeDesc => "type-desc",
            Ordering::TypeAsc => "type-asc",
            Ordering::Default => "default",
        }
    }

    /// Human label for summary lines, e.g. "seeders (desc)"
    pub fn label(self) -> String {
        match self.name().split_once('-') {
            Some((key, direction)) => format!("{} ({})", key, direction),
            None => "relevance".to_string(),
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ordering {
    type Err = TpbError;

    /// Accepts kebab-case names (case-insensitive) and raw codes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase().replace('_', "-");
        Ordering::VALUES
            .into_iter()
            .find(|o| o.name() == value || o.code().to_string() == value)
            .ok_or(TpbError::UnknownValue {
                kind: "ordering",
                value: s.to_string(),
            })
    }
}
