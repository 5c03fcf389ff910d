use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Offense – the four tracked crime columns
// ---------------------------------------------------------------------------

/// One of the offense categories tracked by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Offense {
    Murder,
    Rape,
    KidnappingAbduction,
    Robbery,
}

impl Offense {
    /// All categories in column order.
    pub const ALL: [Offense; 4] = [
        Offense::Murder,
        Offense::Rape,
        Offense::KidnappingAbduction,
        Offense::Robbery,
    ];

    /// Source column header (also used as the chart label).
    pub fn label(self) -> &'static str {
        use crate::config::*;
        match self {
            Offense::Murder => COL_MURDER,
            Offense::Rape => COL_RAPE,
            Offense::KidnappingAbduction => COL_KIDNAPPING,
            Offense::Robbery => COL_ROBBERY,
        }
    }

    /// Position inside [`Offense::ALL`] and inside per-category arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Offense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// CrimeRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single region/year observation.
///
/// Blank count cells deserialize to `None` and contribute nothing to sums.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrimeRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "States/UTs")]
    pub region: String,
    #[serde(rename = "Murder")]
    pub murder: Option<u64>,
    #[serde(rename = "Rape")]
    pub rape: Option<u64>,
    #[serde(rename = "Kidnapping & Abduction")]
    pub kidnapping: Option<u64>,
    #[serde(rename = "Robbery")]
    pub robbery: Option<u64>,
}

impl CrimeRecord {
    /// Build a fully populated record.
    #[cfg(test)]
    pub fn new(year: i32, region: &str, counts: [u64; 4]) -> Self {
        CrimeRecord {
            year,
            region: region.to_string(),
            murder: Some(counts[0]),
            rape: Some(counts[1]),
            kidnapping: Some(counts[2]),
            robbery: Some(counts[3]),
        }
    }

    /// Count for one offense, treating a blank cell as zero.
    pub fn count(&self, offense: Offense) -> u64 {
        let cell = match offense {
            Offense::Murder => self.murder,
            Offense::Rape => self.rape,
            Offense::KidnappingAbduction => self.kidnapping,
            Offense::Robbery => self.robbery,
        };
        cell.unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// CrimeDataset – the loaded table
// ---------------------------------------------------------------------------

/// Ordered rows of the source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrimeDataset {
    pub records: Vec<CrimeRecord>,
}

impl CrimeDataset {
    pub fn from_records(records: Vec<CrimeRecord>) -> Self {
        CrimeDataset { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct reporting years, ascending.
    pub fn distinct_years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Distinct region names, ascending.
    pub fn distinct_regions(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.region.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_count_as_zero() {
        let rec = CrimeRecord {
            year: 2010,
            region: "Goa".into(),
            murder: Some(7),
            rape: None,
            kidnapping: Some(2),
            robbery: None,
        };
        assert_eq!(rec.count(Offense::Murder), 7);
        assert_eq!(rec.count(Offense::Rape), 0);
        assert_eq!(rec.count(Offense::Robbery), 0);
    }

    #[test]
    fn distinct_years_are_sorted_and_unique() {
        let ds = CrimeDataset::from_records(vec![
            CrimeRecord::new(2012, "A", [1, 0, 0, 0]),
            CrimeRecord::new(2009, "B", [1, 0, 0, 0]),
            CrimeRecord::new(2012, "B", [1, 0, 0, 0]),
        ]);
        let years: Vec<i32> = ds.distinct_years().into_iter().collect();
        assert_eq!(years, vec![2009, 2012]);
        assert_eq!(ds.distinct_regions().len(), 2);
    }

    #[test]
    fn offense_order_matches_indices() {
        for (i, o) in Offense::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
        assert_eq!(Offense::KidnappingAbduction.to_string(), "Kidnapping & Abduction");
    }
}
