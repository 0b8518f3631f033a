//! Result table parser for the torrent index
//!
//! Parses the HTML of the recent, top and search pages and extracts
//! one listing per result row.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, TpbError};
use crate::types::TorrentListing;

/// Anchors the site labels as magnet downloads
const MAGNET_SELECTOR: &str = r#"a[title="Download this torrent using magnet"]"#;

/// Whitespace runs containing a tab or line break, compiled once per process
static ROW_BREAKS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*[\t\r\n]\s*").ok());

/// Parses a result page and returns its listings in row order
///
/// All `tr` elements are collected and the first (header) and last
/// (pagination) rows are dropped. Magnet anchors are selected separately
/// across the whole page and paired with rows by position. Rows left over
/// when the page has fewer anchors than rows keep an empty magnet link.
///
/// # Arguments
/// * `html` - Raw HTML string from a result page
///
/// # Returns
/// Vector of `TorrentListing` structs, empty if the page has no data rows
///
/// # Errors
/// Returns `ParseError` if a selector fails to compile
pub fn parse_listings(html: &str) -> Result<Vec<TorrentListing>> {
    let document = Html::parse_document(html);

    let row_selector = Selector::parse("tr")
        .map_err(|e| TpbError::ParseError(format!("Invalid selector: {:?}", e)))?;
    let magnet_selector = Selector::parse(MAGNET_SELECTOR)
        .map_err(|e| TpbError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let rows: Vec<ElementRef> = document.select(&row_selector).collect();
    let data_rows = data_rows(&rows);

    let magnets: Vec<String> = document
        .select(&magnet_selector)
        .take(data_rows.len())
        .map(|anchor| anchor.value().attr("href").unwrap_or_default().to_string())
        .collect();

    tracing::debug!(
        rows = data_rows.len(),
        magnets = magnets.len(),
        "parsed result table"
    );
    if magnets.len() < data_rows.len() {
        tracing::warn!(
            rows = data_rows.len(),
            magnets = magnets.len(),
            "fewer magnet links than result rows, trailing rows have no magnet"
        );
    }

    let listings = data_rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let title = normalize_row_text(&row.text().collect::<String>());
            let magnet_link = magnets.get(index).cloned().unwrap_or_default();
            TorrentListing::new(title, magnet_link)
        })
        .collect();

    Ok(listings)
}

/// Drops the header row and the trailing non-data row
fn data_rows<'a, 'b>(rows: &'b [ElementRef<'a>]) -> &'b [ElementRef<'a>] {
    if rows.len() < 2 {
        return &[];
    }
    &rows[1..rows.len() - 1]
}

/// Normalizes the text content of a result row
///
/// Trims whitespace from both ends of the row, not only the leading side.
/// Every whitespace run that contains a tab or line break then collapses into a
/// single space. Applying it twice yields the same text as applying it once.
///
/// # Example
/// ```
/// use tpb_core::parser::normalize_row_text;
/// let text = normalize_row_text("\n\t\tVideo\n\t(TV)\n\t\tSome.Show.S01E01\n");
/// assert_eq!(text, "Video (TV) Some.Show.S01E01");
/// ```
pub fn normalize_row_text(text: &str) -> String {
    let trimmed = text.trim();

    let Some(re) = ROW_BREAKS.as_ref() else {
        return trimmed.to_string();
    };

    re.replace_all(trimmed, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAGNET_1: &str = "magnet:?xt=urn:btih:1111111111111111111111111111111111111111&dn=First";
    const MAGNET_2: &str = "magnet:?xt=urn:btih:2222222222222222222222222222222222222222&dn=Second";
    const MAGNET_3: &str = "magnet:?xt=urn:btih:3333333333333333333333333333333333333333&dn=Third";

    fn row(name: &str, magnet: Option<&str>) -> String {
        let anchor = magnet
            .map(|m| {
                format!(
                    r#"<a href="{}" title="Download this torrent using magnet"><img src="/static/img/icon-magnet.gif" alt="Magnet link"></a>"#,
                    m
                )
            })
            .unwrap_or_default();
        format!(
            "<tr>\n\t<td class=\"vertTh\">\n\t\t<a href=\"/browse/200\">Video</a>\n\t</td>\n\t<td>\n\t\t<div class=\"detName\"><a href=\"/torrent/1\">{}</a></div>\n\t\t{}\n\t</td>\n\t<td align=\"right\">12</td>\n\t<td align=\"right\">3</td>\n</tr>",
            name, anchor
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body><table id="searchResult">
            <thead id="tableHead"><tr class="header"><th>Type</th><th>Name</th><th>SE</th><th>LE</th></tr></thead>
            {}
            <tr><td colspan="9"><a href="/recent/1">Next</a></td></tr>
            </table></body></html>"#,
            rows.join("\n")
        )
    }

    #[test]
    fn test_parse_empty_html() {
        let html = "<html><body></body></html>";
        let listings = parse_listings(html).unwrap();
        assert!(listings.is_empty());
    }

    #[test]
    fn test_parse_header_and_footer_only() {
        let listings = parse_listings(&page(&[])).unwrap();
        assert!(listings.is_empty());
    }

    #[test]
    fn test_parse_single_row_table() {
        let html = "<table><tr><th>Name</th></tr></table>";
        let listings = parse_listings(html).unwrap();
        assert!(listings.is_empty());
    }

    #[test]
    fn test_parse_pairs_rows_with_magnets_in_order() {
        let html = page(&[
            row("First Torrent", Some(MAGNET_1)),
            row("Second Torrent", Some(MAGNET_2)),
            row("Third Torrent", Some(MAGNET_3)),
        ]);

        let listings = parse_listings(&html).unwrap();
        assert_eq!(listings.len(), 3);

        assert_eq!(listings[0].title, "Video First Torrent 12 3");
        assert_eq!(listings[0].magnet_link, MAGNET_1);
        assert_eq!(
            listings[0].info_hash.as_deref(),
            Some("1111111111111111111111111111111111111111")
        );

        assert_eq!(listings[1].title, "Video Second Torrent 12 3");
        assert_eq!(listings[1].magnet_link, MAGNET_2);

        assert_eq!(listings[2].title, "Video Third Torrent 12 3");
        assert_eq!(listings[2].magnet_link, MAGNET_3);
    }

    #[test]
    fn test_parse_fewer_magnets_than_rows() {
        let html = page(&[
            row("First Torrent", Some(MAGNET_1)),
            row("Second Torrent", None),
            row("Third Torrent", None),
        ]);

        let listings = parse_listings(&html).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].magnet_link, MAGNET_1);
        assert_eq!(listings[1].magnet_link, "");
        assert_eq!(listings[1].info_hash, None);
        assert_eq!(listings[2].magnet_link, "");
    }

    #[test]
    fn test_parse_magnets_are_positional_not_nested() {
        // The magnet of the second row is missing, so the third row's
        // magnet shifts up to the second row.
        let html = page(&[
            row("First Torrent", Some(MAGNET_1)),
            row("Second Torrent", None),
            row("Third Torrent", Some(MAGNET_3)),
        ]);

        let listings = parse_listings(&html).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[1].magnet_link, MAGNET_3);
        assert_eq!(listings[2].magnet_link, "");
    }

    #[test]
    fn test_parse_extra_magnets_are_ignored() {
        let html = format!(
            r#"{}<a href="{}" title="Download this torrent using magnet">extra</a>"#,
            page(&[row("Only Torrent", Some(MAGNET_1))]),
            MAGNET_2
        );

        let listings = parse_listings(&html).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].magnet_link, MAGNET_1);
    }

    #[test]
    fn test_parse_magnet_without_href() {
        let html = page(&[
            r#"<tr><td>Broken</td><td><a title="Download this torrent using magnet">m</a></td></tr>"#
                .to_string(),
            row("Second Torrent", Some(MAGNET_2)),
        ]);

        let listings = parse_listings(&html).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].magnet_link, "");
        assert_eq!(listings[1].magnet_link, MAGNET_2);
    }

    #[test]
    fn test_parse_ignores_other_anchors() {
        let html = page(&[
            r#"<tr><td><a href="/torrent/9" title="Details for Some Torrent">Some Torrent</a></td></tr>"#
                .to_string(),
        ]);

        let listings = parse_listings(&html).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Some Torrent");
        assert_eq!(listings[0].magnet_link, "");
    }

    #[test]
    fn test_normalize_row_text() {
        assert_eq!(
            normalize_row_text("\n\t\tVideo\n\t\t(TV)\n\tName\t\n"),
            "Video (TV) Name"
        );
    }

    #[test]
    fn test_normalize_row_text_keeps_plain_spaces() {
        assert_eq!(normalize_row_text("  Size 1.2 GiB  "), "Size 1.2 GiB");
        assert_eq!(normalize_row_text("a  b"), "a  b");
    }

    #[test]
    fn test_normalize_row_text_crlf() {
        assert_eq!(normalize_row_text("one\r\ntwo"), "one two");
    }

    #[test]
    fn test_normalize_row_text_trims_both_ends() {
        assert_eq!(normalize_row_text("\t Name \n\t\t"), "Name");
        assert_eq!(normalize_row_text("   Name   "), "Name");
    }

    #[test]
    fn test_row_break_pattern_compiles() {
        assert!(ROW_BREAKS.is_some());
    }

    #[test]
    fn test_normalize_row_text_reuses_pattern_across_rows() {
        let rows: Vec<String> = (0..200)
            .map(|i| format!("\n\tVideo\n\t\tTorrent {}\n", i))
            .collect();
        for (i, text) in rows.iter().enumerate() {
            assert_eq!(normalize_row_text(text), format!("Video Torrent {}", i));
        }
    }

    #[test]
    fn test_normalize_row_text_empty() {
        assert_eq!(normalize_row_text(""), "");
        assert_eq!(normalize_row_text("\n\t \n"), "");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(text in "[ a-zA-Z0-9\\t\\r\\n().-]{0,64}") {
            let once = normalize_row_text(&text);
            let twice = normalize_row_text(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalized_text_has_no_line_breaks(text in "[ a-z\\t\\r\\n]{0,64}") {
            let normalized = normalize_row_text(&text);
            prop_assert!(!normalized.contains(['\t', '\r', '\n']));
        }

        #[test]
        fn prop_pairs_every_row_with_its_magnet(count in 0usize..12) {
            let rows: Vec<String> = (0..count)
                .map(|i| row(
                    &format!("Torrent {}", i),
                    Some(format!("magnet:?xt=urn:btih:{:040}", i).as_str()),
                ))
                .collect();

            let listings = parse_listings(&page(&rows)).unwrap();
            prop_assert_eq!(listings.len(), count);
            for (i, listing) in listings.iter().enumerate() {
                prop_assert_eq!(&listing.title, &format!("Video Torrent {} 12 3", i));
                prop_assert_eq!(&listing.magnet_link, &format!("magnet:?xt=urn:btih:{:040}", i));
            }
        }
    }
}
