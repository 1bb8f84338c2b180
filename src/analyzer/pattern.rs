use crate::dataset::MarketDataset;
use crate::model::{AnalysisError, BacktestReport, BacktestRow, Prediction};

pub const DEFAULT_BACKTEST_WINDOW: usize = 50;

/// Sum of the decimal digits of `n`, reduced modulo 10.
pub fn digit_sum(n: u32) -> u8 {
    let mut n = n;
    let mut sum = 0u32;
    loop {
        sum += n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    (sum % 10) as u8
}

/// Digit-sum prediction and pass/fail backtest over a dataset.
/// Holds a read-only view; never mutates the records.
pub struct PatternAnalyzer<'a> {
    dataset: &'a MarketDataset,
}

impl<'a> PatternAnalyzer<'a> {
    pub fn new(dataset: &'a MarketDataset) -> Self {
        Self { dataset }
    }

    /// Predicted open/close digits for the next draw, derived from the
    /// digit sums of the most recent record's panas.
    pub fn predict_next(&self) -> Result<Prediction, AnalysisError> {
        let last = self.dataset.latest()?;
        Ok(Prediction {
            last_date: last.date,
            last_open_pana: last.open_pana,
            last_close_pana: last.close_pana,
            pred_open: digit_sum(last.open_pana),
            pred_close: digit_sum(last.close_pana),
        })
    }

    /// Evaluates the digit-sum pattern over the last `window` records
    /// (fewer if the dataset is shorter).
    ///
    /// Each record is checked against itself: PASS iff the digit sum of
    /// its own open pana equals its own open digit. This is a same-record
    /// consistency check, not a forward-looking comparison against the
    /// following draw.
    pub fn backtest(&self, window: usize) -> BacktestReport {
        let mut rows = Vec::new();
        let mut pass_count = 0;

        for record in self.dataset.trailing(window) {
            let predicted = digit_sum(record.open_pana);
            let pass = predicted == record.open_digit;
            if pass {
                pass_count += 1;
            }
            rows.push(BacktestRow {
                date: record.date,
                open_pana: record.open_pana,
                jodi: record.jodi,
                predicted,
                pass,
            });
        }

        let total_count = rows.len();
        let accuracy = if total_count == 0 {
            None
        } else {
            Some(pass_count as f64 / total_count as f64 * 100.0)
        };

        BacktestReport {
            rows,
            pass_count,
            total_count,
            accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrawRecord;
    use chrono::NaiveDate;

    fn rec(day: u32, open_pana: u32, jodi: u8) -> DrawRecord {
        DrawRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open_pana,
            jodi,
            close_pana: 100,
            open_digit: jodi / 10,
            close_digit: jodi % 10,
        }
    }

    #[test]
    fn digit_sum_stays_in_digit_range() {
        for n in [0u32, 1, 9, 10, 99, 123, 459, 999, 1000, u32::MAX] {
            assert!(digit_sum(n) <= 9, "digit_sum({n}) out of range");
        }
    }

    #[test]
    fn digit_sum_known_values() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(123), 6);
        assert_eq!(digit_sum(459), 8); // 4+5+9 = 18 -> 8
        assert_eq!(digit_sum(999), 7); // 27 -> 7
    }

    #[test]
    fn predict_next_uses_latest_record() {
        let ds = MarketDataset::from_records(vec![rec(1, 111, 11), rec(2, 459, 35)]);
        let p = PatternAnalyzer::new(&ds).predict_next().unwrap();
        assert_eq!(p.last_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(p.last_open_pana, 459);
        assert_eq!(p.pred_open, 8);
    }

    #[test]
    fn predict_next_on_empty_dataset_fails() {
        let ds = MarketDataset::from_records(Vec::new());
        assert!(matches!(
            PatternAnalyzer::new(&ds).predict_next(),
            Err(AnalysisError::EmptyDataset)
        ));
    }

    #[test]
    fn backtest_checks_record_against_itself() {
        // 123 -> 6 and jodi 67 has open digit 6: PASS.
        // 459 -> 8 and jodi 35 has open digit 3: FAIL.
        let ds = MarketDataset::from_records(vec![rec(1, 123, 67), rec(2, 459, 35)]);
        let report = PatternAnalyzer::new(&ds).backtest(DEFAULT_BACKTEST_WINDOW);
        assert_eq!(report.total_count, 2);
        assert_eq!(report.pass_count, 1);
        assert!(report.rows[0].pass);
        assert_eq!(report.rows[0].predicted, 6);
        assert!(!report.rows[1].pass);
        assert_eq!(report.rows[1].predicted, 8);
        assert_eq!(report.accuracy, Some(50.0));
    }

    #[test]
    fn backtest_window_caps_at_dataset_size() {
        let records: Vec<_> = (1..=10).map(|d| rec(d, 123, 67)).collect();
        let ds = MarketDataset::from_records(records);
        let report = PatternAnalyzer::new(&ds).backtest(50);
        assert_eq!(report.total_count, 10);
        assert!(report.accuracy.is_some());
    }

    #[test]
    fn backtest_accuracy_undefined_for_empty_window() {
        let ds = MarketDataset::from_records(Vec::new());
        let report = PatternAnalyzer::new(&ds).backtest(50);
        assert_eq!(report.total_count, 0);
        assert_eq!(report.accuracy, None);
    }
}
