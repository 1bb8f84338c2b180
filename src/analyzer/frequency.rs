use crate::dataset::MarketDataset;
use crate::model::DrawRecord;

pub const DEFAULT_HOT_WINDOW: usize = 40;
pub const DEFAULT_HOT_TOP_K: usize = 3;
pub const DEFAULT_OTC_WINDOW: usize = 10;
pub const DEFAULT_OTC_TOP_K: usize = 4;

/// Trailing-window frequency statistics: hot digits/jodis, red-house
/// count and the weekly OTC digit set. Read-only over the dataset.
pub struct FrequencyAnalyzer<'a> {
    dataset: &'a MarketDataset,
}

impl<'a> FrequencyAnalyzer<'a> {
    pub fn new(dataset: &'a MarketDataset) -> Self {
        Self { dataset }
    }

    /// Most frequent open digits over the window, descending by count.
    /// Ties rank by first appearance within the window.
    pub fn hot_digits(&self, window: usize, top_k: usize) -> Vec<(u8, usize)> {
        ranked_counts(
            self.dataset.trailing(window).iter().map(|r| r.open_digit),
            top_k,
        )
    }

    /// Most frequent full jodi values over the window, same ranking
    /// rules as `hot_digits`.
    pub fn hot_jodis(&self, window: usize, top_k: usize) -> Vec<(u8, usize)> {
        ranked_counts(self.dataset.trailing(window).iter().map(|r| r.jodi), top_k)
    }

    /// Number of records in the window whose open digit equals its
    /// close digit (a "red" jodi such as 44 or 77).
    pub fn red_house_count(&self, window: usize) -> usize {
        self.dataset
            .trailing(window)
            .iter()
            .filter(|r| r.open_digit == r.close_digit)
            .count()
    }

    /// Weekly OTC suggestion: pools the open and close digits of every
    /// record in the window into one multiset and returns the `top_k`
    /// most frequent digit values.
    pub fn weekly_otc(&self, window: usize, top_k: usize) -> Vec<u8> {
        let recent: &[DrawRecord] = self.dataset.trailing(window);
        let pooled = recent
            .iter()
            .map(|r| r.open_digit)
            .chain(recent.iter().map(|r| r.close_digit));
        ranked_counts(pooled, top_k)
            .into_iter()
            .map(|(digit, _)| digit)
            .collect()
    }
}

/// Counts occurrences in encounter order and returns the `top_k` most
/// frequent values. The count list is built in first-seen order and the
/// descending sort is stable, so ties keep that order rather than
/// falling back to numeric comparison.
fn ranked_counts(values: impl Iterator<Item = u8>, top_k: usize) -> Vec<(u8, usize)> {
    let mut counts: Vec<(u8, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_k);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(day: u32, jodi: u8) -> DrawRecord {
        DrawRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open_pana: 100,
            jodi,
            close_pana: 200,
            open_digit: jodi / 10,
            close_digit: jodi % 10,
        }
    }

    fn dataset(jodis: &[u8]) -> MarketDataset {
        let records = jodis
            .iter()
            .enumerate()
            .map(|(i, &j)| rec(i as u32 + 1, j))
            .collect();
        MarketDataset::from_records(records)
    }

    #[test]
    fn hot_digits_ranks_by_count() {
        // Open digits: 4, 4, 4, 1, 1, 2.
        let ds = dataset(&[40, 41, 42, 10, 11, 20]);
        let hot = FrequencyAnalyzer::new(&ds).hot_digits(DEFAULT_HOT_WINDOW, DEFAULT_HOT_TOP_K);
        assert_eq!(hot, vec![(4, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn hot_digits_cardinality_is_min_of_top_k_and_distinct() {
        let ds = dataset(&[40, 41, 10]);
        let analyzer = FrequencyAnalyzer::new(&ds);
        // Two distinct open digits, top_k 3: exactly two entries.
        assert_eq!(analyzer.hot_digits(40, 3).len(), 2);
        assert!(analyzer.hot_digits(40, 1).len() == 1);
    }

    #[test]
    fn hot_digits_ties_break_by_first_appearance() {
        // Open digits 7 and 2 both occur twice; 7 appears first.
        let ds = dataset(&[70, 20, 71, 21]);
        let hot = FrequencyAnalyzer::new(&ds).hot_digits(40, 2);
        assert_eq!(hot, vec![(7, 2), (2, 2)]);
    }

    #[test]
    fn hot_jodis_counts_full_jodi_values() {
        let ds = dataset(&[45, 45, 12, 45, 12, 99]);
        let hot = FrequencyAnalyzer::new(&ds).hot_jodis(40, 3);
        assert_eq!(hot, vec![(45, 3), (12, 2), (99, 1)]);
    }

    #[test]
    fn red_house_counts_matching_digit_pairs() {
        let ds = dataset(&[44, 12, 77, 30]);
        assert_eq!(FrequencyAnalyzer::new(&ds).red_house_count(40), 2);
    }

    #[test]
    fn weekly_otc_pools_open_and_close_digits() {
        // Jodis 45, 54, 45: opens 4,5,4 and closes 5,4,5 pool to
        // three 4s and three 5s; 4 is encountered first.
        let ds = dataset(&[45, 54, 45]);
        let otc = FrequencyAnalyzer::new(&ds).weekly_otc(DEFAULT_OTC_WINDOW, DEFAULT_OTC_TOP_K);
        assert_eq!(otc, vec![4, 5]);
    }

    #[test]
    fn weekly_otc_respects_window() {
        // Only the last two records (jodis 12, 34) fall inside a window
        // of 2. All four digits tie at one occurrence, and the pool
        // lists open digits before close digits, so encounter order is
        // 1, 3 then 2, 4.
        let ds = dataset(&[99, 12, 34]);
        let otc = FrequencyAnalyzer::new(&ds).weekly_otc(2, 4);
        assert_eq!(otc, vec![1, 3, 2, 4]);
    }
}
