use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::chart::raster::Rasterizer;
use crate::chart::{categories, category_trend, heatmap, top_regions, trend};
use crate::config::*;
use crate::data::aggregate;
use crate::data::filter::{apply_selection, select_recent_years, YearSelection};
use crate::data::model::CrimeDataset;
use crate::data::DataError;
use crate::report;

// ---------------------------------------------------------------------------
// Pipeline output
// ---------------------------------------------------------------------------

/// What a successful run produced.
#[derive(Debug)]
pub struct PipelineOutput {
    pub selection: YearSelection,
    /// Chart files in report order.
    pub charts: Vec<PathBuf>,
    pub report: PathBuf,
}

/// Run the full report over `dataset`, writing `plots/*.png` and
/// `crime_report.html` under `out_dir`.
///
/// Stages run strictly in order; the first failure aborts the run and
/// leaves whatever was already written in place.
pub fn run(dataset: &CrimeDataset, out_dir: &Path) -> Result<PipelineOutput> {
    let selection = select_recent_years(dataset, YEARS_TO_ANALYZE);
    let filtered = apply_selection(dataset, &selection);
    if filtered.is_empty() {
        warn!("No rows to analyze");
    } else {
        info!("{} of {} rows in the selected years", filtered.len(), dataset.len());
    }

    let plots = out_dir.join(PLOTS_DIR);
    std::fs::create_dir_all(&plots)
        .with_context(|| format!("creating {}", plots.display()))?;

    let rasterizer = Rasterizer::new();
    let mut charts = Vec::with_capacity(5);
    let mut emit = |file: &str, svg: String| -> Result<()> {
        let path = plots.join(file);
        rasterizer
            .write_png(&svg, &path)
            .with_context(|| format!("rendering {file}"))?;
        info!("Wrote {}", path.display());
        charts.push(path);
        Ok(())
    };

    let yearly = aggregate::yearly_murders(&filtered);
    let range = selection.range().ok_or(DataError::NoYears)?;
    emit(TREND_FILE, trend::svg(&yearly, selection.years(), range))?;

    let ranked = aggregate::top_regions(&filtered, TOP_REGIONS);
    emit(TOP_STATES_FILE, top_regions::svg(&ranked, range))?;

    let totals = aggregate::category_totals(&filtered);
    emit(CRIME_TYPES_FILE, categories::svg(&totals))?;

    let matrix = aggregate::region_year_matrix(&filtered);
    emit(HEATMAP_FILE, heatmap::svg(&matrix, range))?;

    let by_year = aggregate::category_trend(&filtered);
    emit(CRIME_TRENDS_FILE, category_trend::svg(&by_year))?;

    let report_path = out_dir.join(REPORT_FILE);
    report::write_report(&report_path, range)?;

    Ok(PipelineOutput {
        selection,
        charts,
        report: report_path,
    })
}
