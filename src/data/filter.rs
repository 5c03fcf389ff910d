use std::collections::BTreeSet;

use log::{info, warn};

use super::model::CrimeDataset;

// ---------------------------------------------------------------------------
// Year selection: which reporting years survive into the analysis
// ---------------------------------------------------------------------------

/// The most recent reporting years picked from a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSelection {
    /// Selected years, ascending.
    years: Vec<i32>,
    /// How many years were asked for.
    requested: usize,
}

impl YearSelection {
    /// Selected years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Whether the dataset had at least as many years as requested.
    pub fn is_complete(&self) -> bool {
        self.years.len() >= self.requested
    }

    /// `(first, last)` selected year, `None` when nothing was selected.
    pub fn range(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }
}

/// Pick the `n` largest distinct years in `dataset`.
///
/// Logs the chosen years at `info`, or a `warn` when fewer than `n` exist.
pub fn select_recent_years(dataset: &CrimeDataset, n: usize) -> YearSelection {
    let distinct: BTreeSet<i32> = dataset.distinct_years();
    let skip = distinct.len().saturating_sub(n);
    let years: Vec<i32> = distinct.into_iter().skip(skip).collect();

    let selection = YearSelection { years, requested: n };
    if selection.is_complete() {
        info!("Analyzing data for years: {:?}", selection.years);
    } else {
        warn!(
            "Only {} year(s) of data found: {:?}",
            selection.years.len(),
            selection.years
        );
    }
    selection
}

/// Return indices of records whose year is in the selection.
pub fn filtered_indices(dataset: &CrimeDataset, selection: &YearSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.contains(rec.year))
        .map(|(i, _)| i)
        .collect()
}

/// Copy of `dataset` restricted to the selected years, row order preserved.
pub fn apply_selection(dataset: &CrimeDataset, selection: &YearSelection) -> CrimeDataset {
    let records = filtered_indices(dataset, selection)
        .into_iter()
        .map(|i| dataset.records[i].clone())
        .collect();
    CrimeDataset::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CrimeRecord;

    fn dataset(years: &[i32]) -> CrimeDataset {
        CrimeDataset::from_records(
            years
                .iter()
                .map(|&y| CrimeRecord::new(y, "Assam", [1, 1, 1, 1]))
                .collect(),
        )
    }

    #[test]
    fn picks_three_largest_distinct_years() {
        let ds = dataset(&[2003, 2012, 2001, 2010, 2012, 2011, 2003]);
        let sel = select_recent_years(&ds, 3);
        assert_eq!(sel.years(), &[2010, 2011, 2012]);
        assert!(sel.is_complete());
        assert_eq!(sel.range(), Some((2010, 2012)));
    }

    #[test]
    fn fewer_years_than_requested_keeps_all_and_flags_shortfall() {
        let ds = dataset(&[2012, 2011, 2012]);
        let sel = select_recent_years(&ds, 3);
        assert_eq!(sel.years(), &[2011, 2012]);
        assert!(!sel.is_complete());
    }

    #[test]
    fn empty_dataset_selects_nothing() {
        let sel = select_recent_years(&CrimeDataset::default(), 3);
        assert!(sel.years().is_empty());
        assert!(!sel.is_complete());
        assert_eq!(sel.range(), None);
    }

    #[test]
    fn filtering_drops_unselected_years() {
        let ds = dataset(&[2001, 2010, 2011, 2012, 2009, 2011]);
        let sel = select_recent_years(&ds, 3);
        let filtered = apply_selection(&ds, &sel);
        assert_eq!(filtered.len(), 4);
        assert!(filtered.records.iter().all(|r| sel.contains(r.year)));
        assert_eq!(filtered_indices(&ds, &sel), vec![1, 2, 3, 5]);
    }
}
