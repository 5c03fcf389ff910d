//! The five aggregate views behind the report charts.
//!
//! Every function here is pure: filtered dataset in, summary out.

use std::collections::BTreeMap;

use super::model::{CrimeDataset, Offense};

/// Per-category totals, indexed by [`Offense::index`].
pub type CategoryCounts = [u64; 4];

/// Year → summed Murder, ascending by year.
pub fn yearly_murders(dataset: &CrimeDataset) -> BTreeMap<i32, u64> {
    let mut totals: BTreeMap<i32, u64> = BTreeMap::new();
    for rec in &dataset.records {
        *totals.entry(rec.year).or_default() += rec.count(Offense::Murder);
    }
    totals
}

/// Regions ranked by summed Murder, largest first, at most `n` entries.
///
/// Equal sums keep ascending region-name order: the grouping is sorted by
/// name and the ranking sort is stable.
pub fn top_regions(dataset: &CrimeDataset, n: usize) -> Vec<(String, u64)> {
    let mut by_region: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in &dataset.records {
        *by_region.entry(rec.region.as_str()).or_default() += rec.count(Offense::Murder);
    }

    let mut ranked: Vec<(String, u64)> = by_region
        .into_iter()
        .map(|(region, total)| (region.to_string(), total))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Column sums of the four offense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    pub counts: CategoryCounts,
}

impl CategoryTotals {
    pub fn get(&self, offense: Offense) -> u64 {
        self.counts[offense.index()]
    }

    /// Sum over all categories (the whole of the pie).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(category, total)` pairs in column order.
    pub fn entries(&self) -> impl Iterator<Item = (Offense, u64)> + '_ {
        Offense::ALL.iter().map(move |&o| (o, self.get(o)))
    }
}

pub fn category_totals(dataset: &CrimeDataset) -> CategoryTotals {
    let mut counts = [0u64; 4];
    for rec in &dataset.records {
        for offense in Offense::ALL {
            counts[offense.index()] += rec.count(offense);
        }
    }
    CategoryTotals { counts }
}

// ---------------------------------------------------------------------------
// Region × Year pivot
// ---------------------------------------------------------------------------

/// Murder totals pivoted with regions as rows and years as columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionYearMatrix {
    /// Row labels, ascending.
    pub regions: Vec<String>,
    /// Column labels, ascending.
    pub years: Vec<i32>,
    /// `cells[row][col]`; 0 where no record exists.
    pub cells: Vec<Vec<u64>>,
}

impl RegionYearMatrix {
    /// Cell for a `(region, year)` pair, `None` if either label is unknown.
    #[cfg(test)]
    pub fn get(&self, region: &str, year: i32) -> Option<u64> {
        let row = self.regions.iter().position(|r| r == region)?;
        let col = self.years.binary_search(&year).ok()?;
        Some(self.cells[row][col])
    }

    /// Largest cell value (0 for an empty matrix).
    pub fn max_value(&self) -> u64 {
        self.cells
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

pub fn region_year_matrix(dataset: &CrimeDataset) -> RegionYearMatrix {
    let regions: Vec<String> = dataset
        .distinct_regions()
        .into_iter()
        .map(str::to_string)
        .collect();
    let years: Vec<i32> = dataset.distinct_years().into_iter().collect();

    let mut cells = vec![vec![0u64; years.len()]; regions.len()];
    for rec in &dataset.records {
        // Both lookups succeed: the labels were collected from these rows.
        let (Ok(row), Ok(col)) = (
            regions.binary_search_by(|r| r.as_str().cmp(rec.region.as_str())),
            years.binary_search(&rec.year),
        ) else {
            continue;
        };
        cells[row][col] += rec.count(Offense::Murder);
    }

    RegionYearMatrix {
        regions,
        years,
        cells,
    }
}

/// Year → per-category totals, ascending by year.
pub fn category_trend(dataset: &CrimeDataset) -> BTreeMap<i32, CategoryCounts> {
    let mut trend: BTreeMap<i32, CategoryCounts> = BTreeMap::new();
    for rec in &dataset.records {
        let counts = trend.entry(rec.year).or_default();
        for offense in Offense::ALL {
            counts[offense.index()] += rec.count(offense);
        }
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CrimeRecord;

    fn sample() -> CrimeDataset {
        CrimeDataset::from_records(vec![
            CrimeRecord::new(2011, "Bihar", [3198, 934, 4268, 1250]),
            CrimeRecord::new(2011, "Kerala", [365, 1132, 261, 1028]),
            CrimeRecord::new(2012, "Bihar", [3566, 927, 4871, 1310]),
            CrimeRecord::new(2012, "Bihar", [4, 0, 0, 0]),
            CrimeRecord::new(2010, "Goa", [20, 10, 5, 2]),
        ])
    }

    #[test]
    fn yearly_murders_sums_per_year_in_order() {
        let totals = yearly_murders(&sample());
        let pairs: Vec<(i32, u64)> = totals.into_iter().collect();
        assert_eq!(pairs, vec![(2010, 20), (2011, 3563), (2012, 3570)]);
    }

    #[test]
    fn top_regions_descending_and_truncated() {
        let ranked = top_regions(&sample(), 2);
        assert_eq!(
            ranked,
            vec![("Bihar".to_string(), 6768), ("Kerala".to_string(), 365)]
        );
        assert!(top_regions(&sample(), 10).len() <= 10);
    }

    #[test]
    fn top_regions_ties_break_by_name() {
        let ds = CrimeDataset::from_records(vec![
            CrimeRecord::new(2012, "Sikkim", [5, 0, 0, 0]),
            CrimeRecord::new(2012, "Assam", [5, 0, 0, 0]),
            CrimeRecord::new(2012, "Manipur", [9, 0, 0, 0]),
        ]);
        let names: Vec<String> = top_regions(&ds, 10).into_iter().map(|(r, _)| r).collect();
        assert_eq!(names, vec!["Manipur", "Assam", "Sikkim"]);
    }

    #[test]
    fn category_totals_are_column_sums() {
        let ds = sample();
        let totals = category_totals(&ds);
        for offense in Offense::ALL {
            let expected: u64 = ds.records.iter().map(|r| r.count(offense)).sum();
            assert_eq!(totals.get(offense), expected);
        }
        assert_eq!(totals.total(), totals.entries().map(|(_, v)| v).sum::<u64>());
    }

    #[test]
    fn matrix_cells_sum_and_fill_zero() {
        let m = region_year_matrix(&sample());
        assert_eq!(m.regions, vec!["Bihar", "Goa", "Kerala"]);
        assert_eq!(m.years, vec![2010, 2011, 2012]);
        assert_eq!(m.get("Bihar", 2012), Some(3570));
        assert_eq!(m.get("Kerala", 2012), Some(0));
        assert_eq!(m.get("Goa", 2011), Some(0));
        assert_eq!(m.get("Punjab", 2012), None);
        assert_eq!(m.max_value(), 3570);
    }

    #[test]
    fn category_trend_per_year() {
        let trend = category_trend(&sample());
        assert_eq!(trend[&2012], [3570, 927, 4871, 1310]);
        assert_eq!(trend[&2010], [20, 10, 5, 2]);
        assert_eq!(trend.len(), 3);
    }

    #[test]
    fn empty_dataset_aggregates_are_empty() {
        let ds = CrimeDataset::default();
        assert!(yearly_murders(&ds).is_empty());
        assert!(top_regions(&ds, 10).is_empty());
        assert_eq!(category_totals(&ds).total(), 0);
        assert_eq!(region_year_matrix(&ds).max_value(), 0);
        assert!(category_trend(&ds).is_empty());
    }
}
