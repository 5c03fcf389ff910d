//! Fixed run parameters. The report has no runtime configuration surface;
//! everything it needs to know lives here.

/// Source CSV (National Crime Records Bureau figures, state/UT level).
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/navneet-nmk/Indian-Crime-Data/master/crime_data.csv";

/// Caption printed under the trend chart.
pub const DATA_SOURCE: &str = "National Crime Records Bureau";

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_YEAR: &str = "Year";
pub const COL_REGION: &str = "States/UTs";
pub const COL_MURDER: &str = "Murder";
pub const COL_RAPE: &str = "Rape";
pub const COL_KIDNAPPING: &str = "Kidnapping & Abduction";
pub const COL_ROBBERY: &str = "Robbery";

/// Every column the loader insists on.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_YEAR,
    COL_REGION,
    COL_MURDER,
    COL_RAPE,
    COL_KIDNAPPING,
    COL_ROBBERY,
];

// ---------------------------------------------------------------------------
// Analysis window
// ---------------------------------------------------------------------------

/// Number of most recent reporting years kept.
pub const YEARS_TO_ANALYZE: usize = 3;

/// Length of the top-regions ranking.
pub const TOP_REGIONS: usize = 10;

// ---------------------------------------------------------------------------
// Output layout (relative to the output root)
// ---------------------------------------------------------------------------

pub const PLOTS_DIR: &str = "plots";
pub const REPORT_FILE: &str = "crime_report.html";

pub const TREND_FILE: &str = "trend.png";
pub const TOP_STATES_FILE: &str = "top_states.png";
pub const CRIME_TYPES_FILE: &str = "crime_types.png";
pub const HEATMAP_FILE: &str = "heatmap.png";
pub const CRIME_TRENDS_FILE: &str = "crime_trends.png";

// ---------------------------------------------------------------------------
// Figure sizes in pixels (width, height)
// ---------------------------------------------------------------------------

pub const TREND_SIZE: (u32, u32) = (1200, 700);
pub const TOP_STATES_SIZE: (u32, u32) = (1200, 600);
pub const CRIME_TYPES_SIZE: (u32, u32) = (1000, 1000);
pub const HEATMAP_SIZE: (u32, u32) = (1500, 1000);
pub const CRIME_TRENDS_SIZE: (u32, u32) = (1200, 600);
