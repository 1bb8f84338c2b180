use crate::model::{AnalysisError, DrawRecord};

/// Immutable, date-ordered collection of draw records for one market.
/// Built fresh on every load; nothing mutates it afterwards, so the
/// analyzers can borrow it freely and in any order.
#[derive(Debug)]
pub struct MarketDataset {
    records: Vec<DrawRecord>,
}

impl MarketDataset {
    /// Builds a dataset, restoring ascending date order if the input is
    /// not already sorted. Equal dates keep their input order.
    pub fn from_records(mut records: Vec<DrawRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record by date.
    pub fn latest(&self) -> Result<&DrawRecord, AnalysisError> {
        self.records.last().ok_or(AnalysisError::EmptyDataset)
    }

    /// The last `n` records, or every record when fewer than `n` exist.
    /// A short window is not an error.
    pub fn trailing(&self, n: usize) -> &[DrawRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Full ordered view.
    pub fn all(&self) -> &[DrawRecord] {
        &self.records
    }
}
