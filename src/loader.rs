// Market discovery and one-shot synchronous file loading.
use crate::dataset::MarketDataset;
use crate::model::{LoadError, Market};
use crate::parser::{DrawParser, Parser};
use std::fs;
use std::path::Path;
use tracing::info;

/// Lists the markets available under `dir`: every `*.txt` file is one
/// market, named after its stem. Sorted by name. An empty directory is
/// not an error; the caller decides what to tell the user.
pub fn discover_markets(dir: &Path) -> Result<Vec<Market>, LoadError> {
    let mut markets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            markets.push(Market {
                name: stem.to_uppercase(),
                path: path.clone(),
            });
        }
    }
    markets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(markets)
}

/// Reads and parses a market's source file into a fresh dataset.
/// A file from which no record survives parsing is a terminal `NoData`
/// condition for that market, distinct from a short trailing window.
pub fn load_market(market: &Market, parser: &DrawParser) -> Result<MarketDataset, LoadError> {
    let content = fs::read_to_string(&market.path)?;
    let records = parser.parse(&content);
    if records.is_empty() {
        return Err(LoadError::NoData);
    }
    info!("Loaded {} records for market {}", records.len(), market.name);
    Ok(MarketDataset::from_records(records))
}
