mod analyzer;
mod config;
mod dataset;
mod display;
mod loader;
mod model;
mod parser;

use analyzer::{FrequencyAnalyzer, PatternAnalyzer};
use config::{AppConfig, load_config};
use dataset::MarketDataset;
use loader::{discover_markets, load_market};
use model::Market;
use parser::DrawParser;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file; fall back to defaults if absent
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error ({}), using defaults", e);
            AppConfig::default()
        }
    };

    let parser = DrawParser::new();

    loop {
        display::banner();
        let markets = match discover_markets(Path::new(&config.data_dir)) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Cannot read data directory '{}': {e}", config.data_dir);
                return;
            }
        };
        if markets.is_empty() {
            println!(
                "No market files found in '{}'. Add KALYAN.txt etc. and retry.",
                config.data_dir
            );
            return;
        }

        println!("\nAvailable markets:");
        for (i, market) in markets.iter().enumerate() {
            println!("  {}. {}", i + 1, market.name);
        }
        let Some(choice) = prompt_number(&format!(
            "Select market (1-{}) or 0 to exit: ",
            markets.len()
        )) else {
            continue;
        };
        if choice == 0 {
            println!("Bye!");
            return;
        }
        let Some(market) = markets.get(choice - 1) else {
            println!("No such market.");
            continue;
        };

        let dataset = match load_market(market, &parser) {
            Ok(ds) => ds,
            Err(e) => {
                warn!("Failed to load market {}: {}", market.name, e);
                println!("Cannot analyze {}: {e}", market.name);
                continue;
            }
        };

        market_menu(market, &dataset, &config);
    }
}

/// Feature menu for one loaded market. The dataset is immutable, so the
/// features can run in any order against the same load.
fn market_menu(market: &Market, dataset: &MarketDataset, config: &AppConfig) {
    let patterns = PatternAnalyzer::new(dataset);
    let frequencies = FrequencyAnalyzer::new(dataset);

    loop {
        println!("\n[{}] {} records loaded", market.name, dataset.len());
        println!("  1. Today's prediction");
        println!("  2. Pass/fail record");
        println!("  3. Last {} draws analysis", config.hot_window);
        println!("  4. Last {} draws", config.recent_days);
        println!("  5. Weekly OTC suggestion");
        println!("  0. Back to market selection");

        let Some(choice) = prompt_number("Option: ") else {
            println!("Please enter a number.");
            continue;
        };

        match choice {
            1 => match patterns.predict_next() {
                Ok(p) => display::prediction(&market.name, &p),
                Err(e) => println!("Prediction unavailable: {e}"),
            },
            2 => {
                let report = patterns.backtest(config.backtest_window);
                display::backtest(&market.name, &report);
            }
            3 => {
                let hot_digits = frequencies.hot_digits(config.hot_window, config.hot_top_k);
                let hot_jodis = frequencies.hot_jodis(config.hot_window, config.hot_top_k);
                let red_count = frequencies.red_house_count(config.hot_window);
                display::frequency(
                    &market.name,
                    config.hot_window,
                    &hot_digits,
                    &hot_jodis,
                    red_count,
                );
            }
            4 => display::recent_records(&market.name, dataset.trailing(config.recent_days)),
            5 => {
                let otc = frequencies.weekly_otc(config.otc_window, config.otc_top_k);
                display::weekly_otc(&market.name, config.otc_window, &otc);
            }
            0 => {
                info!("Leaving market {}", market.name);
                return;
            }
            _ => println!("Unknown option."),
        }
    }
}

/// Prompts on stdout and reads one line from stdin; returns `None` when
/// the input is not a non-negative number (the caller re-prompts).
fn prompt_number(message: &str) -> Option<usize> {
    print!("\n{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    line.trim().parse().ok()
}
