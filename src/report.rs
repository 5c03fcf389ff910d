//! HTML report generation
//!
//! A single static page laying the five chart images out in a two-column
//! grid. Images are referenced by relative path so the page and the `plots/`
//! directory must stay side by side.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::{
    CRIME_TRENDS_FILE, CRIME_TYPES_FILE, HEATMAP_FILE, PLOTS_DIR, TOP_STATES_FILE, TREND_FILE,
};

/// Card heading and image file, in page order.
pub const CARDS: [(&str, &str); 5] = [
    ("Murder Trend", TREND_FILE),
    ("Top States by Murders", TOP_STATES_FILE),
    ("Crime Type Distribution", CRIME_TYPES_FILE),
    ("Murder Heatmap", HEATMAP_FILE),
    ("Crime Type Trends", CRIME_TRENDS_FILE),
];

/// Render the report page for the analysed year range.
pub fn render_html((start_year, end_year): (i32, i32)) -> String {
    let cards: String = CARDS.iter().map(|(title, file)| render_card(title, file)).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Crime Data Analysis</title>
    <style>{css}</style>
</head>
<body>
    <h1>Indian Crime Analysis ({start_year}-{end_year})</h1>
    <div class="grid">
{cards}    </div>
</body>
</html>
"#,
        css = inline_css(),
    )
}

fn render_card(title: &str, file: &str) -> String {
    format!(
        r#"        <div class="card">
            <h2>{title}</h2>
            <img src="{PLOTS_DIR}/{file}">
        </div>
"#
    )
}

fn inline_css() -> &'static str {
    r#"
        body { font-family: Arial, sans-serif; margin: 20px; }
        h1 { color: #2c3e50; text-align: center; }
        .grid {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 20px;
            max-width: 1200px;
            margin: 0 auto;
        }
        .card {
            background: #f9f9f9;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        img { width: 100%; height: auto; }
    "#
}

/// Write the report to `path`, replacing any previous file.
pub fn write_report(path: &Path, range: (i32, i32)) -> Result<()> {
    std::fs::write(path, render_html(range))
        .with_context(|| format!("writing report {}", path.display()))?;
    info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_carries_year_range() {
        let html = render_html((2010, 2012));
        assert!(html.contains("<h1>Indian Crime Analysis (2010-2012)</h1>"));
        assert!(html.contains("<title>Crime Data Analysis</title>"));
    }

    #[test]
    fn one_card_per_chart_in_order() {
        let html = render_html((2010, 2012));
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 5);
        let positions: Vec<usize> = CARDS
            .iter()
            .map(|(_, file)| html.find(&format!(r#"<img src="plots/{file}">"#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<h2>Top States by Murders</h2>"));
    }

    #[test]
    fn write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("crime_report.html");
        let err = write_report(&path, (2010, 2012)).unwrap_err();
        assert!(format!("{err}").contains("crime_report.html"));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crime_report.html");
        write_report(&path, (2001, 2003)).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Indian Crime Analysis (2001-2003)"));
    }
}
