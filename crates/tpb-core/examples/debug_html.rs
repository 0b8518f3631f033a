//! Debug script to inspect the result table markup served by the site

use tpb_core::url::{DEFAULT_BASE_URL, build_recent_path, join_url};
use tpb_core::{TpbClient, parse_listings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TpbClient::new()?;
    let path = build_recent_path();

    println!("Fetching {}...\n", join_url(DEFAULT_BASE_URL, &path));

    let html = client.fetch(&path).await?;

    // Save HTML to file for inspection
    std::fs::write("debug_recent.html", &html)?;
    println!("HTML saved to debug_recent.html");

    // Print a snippet around the result table
    if let Some(start) = html.find("<table") {
        let end = std::cmp::min(start + 5000, html.len());
        let snippet = html.get(start..end).unwrap_or(&html[start..]);
        println!("\n=== HTML snippet (first 5000 chars from <table>) ===\n");
        println!("{}", snippet);
    }

    let listings = parse_listings(&html)?;
    println!("\n=== {} listings parsed ===\n", listings.len());
    for listing in listings.iter().take(5) {
        println!("{}\n  {}", listing.title, listing.magnet_link);
    }

    Ok(())
}
