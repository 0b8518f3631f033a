//! Magnet link helpers

use std::sync::LazyLock;

use regex::Regex;

static BTIH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)[?&]xt=urn:btih:([0-9a-z]+)").ok());

/// Extracts the BitTorrent info-hash from a magnet URI
///
/// Looks for the `xt=urn:btih:<hash>` parameter and accepts both the
/// 40 character hex form and the 32 character base32 form.
///
/// # Returns
/// The upper-cased hash, or `None` for empty or hash-less links
///
/// # Example
/// ```
/// use tpb_core::parser::extract_info_hash;
/// let hash = extract_info_hash("magnet:?xt=urn:btih:c9e15763f722f23e98a29decdfae341b98d53056&dn=Cosmos");
/// assert_eq!(hash.as_deref(), Some("C9E15763F722F23E98A29DECDFAE341B98D53056"));
/// ```
pub fn extract_info_hash(magnet: &str) -> Option<String> {
    if !magnet.starts_with("magnet:?") {
        return None;
    }

    let re = BTIH.as_ref()?;

    let hash = re.captures(magnet)?.get(1)?.as_str();
    match hash.len() {
        32 | 40 => Some(hash.to_ascii_uppercase()),
        _ => None,
    }
}
