use crate::analyzer::frequency::{
    DEFAULT_HOT_TOP_K, DEFAULT_HOT_WINDOW, DEFAULT_OTC_TOP_K, DEFAULT_OTC_WINDOW,
};
use crate::analyzer::pattern::DEFAULT_BACKTEST_WINDOW;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding one `<MARKET>.txt` source file per market.
    pub data_dir: String,
    pub backtest_window: usize,
    pub hot_window: usize,
    pub hot_top_k: usize,
    pub otc_window: usize,
    pub otc_top_k: usize,
    /// How many trailing records the "recent draws" view shows.
    pub recent_days: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            backtest_window: DEFAULT_BACKTEST_WINDOW,
            hot_window: DEFAULT_HOT_WINDOW,
            hot_top_k: DEFAULT_HOT_TOP_K,
            otc_window: DEFAULT_OTC_WINDOW,
            otc_top_k: DEFAULT_OTC_TOP_K,
            recent_days: 7,
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
