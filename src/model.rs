// Core structs: DrawRecord, Prediction, BacktestReport
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// One validated draw for a market: the date plus the open pana, jodi
/// and close pana observed on it.
///
/// `open_digit` and `close_digit` are the tens and units digits of the
/// zero-padded two-digit jodi, so `jodi == open_digit * 10 + close_digit`
/// holds for every constructed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    pub date: NaiveDate,
    pub open_pana: u32,
    pub jodi: u8,
    pub close_pana: u32,
    pub open_digit: u8,
    pub close_digit: u8,
}

/// Digit-sum prediction derived from the most recent record.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub last_date: NaiveDate,
    pub last_open_pana: u32,
    pub last_close_pana: u32,
    pub pred_open: u8,
    pub pred_close: u8,
}

/// One evaluated record in the pass/fail backtest.
#[derive(Debug, Clone)]
pub struct BacktestRow {
    pub date: NaiveDate,
    pub open_pana: u32,
    pub jodi: u8,
    pub predicted: u8,
    pub pass: bool,
}

#[derive(Debug, Clone)]
pub struct BacktestReport {
    pub rows: Vec<BacktestRow>,
    pub pass_count: usize,
    pub total_count: usize,
    /// Pass percentage over the evaluated window; `None` when zero
    /// records were evaluated (undefined, never a division fault).
    pub accuracy: Option<f64>,
}

/// A market discovered in the data directory. One source file per
/// market; the file stem is the market name.
#[derive(Debug, Clone)]
pub struct Market {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("dataset contains no records")]
    EmptyDataset,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read market data: {0}")]
    Io(#[from] std::io::Error),
    #[error("no parsable draw records in source file")]
    NoData,
}
