//! Yearly murder trend: single red line with labelled markers.

use std::collections::BTreeMap;

use super::svg::{format_thousands, tick_label, Anchor, Axis, LinearScale, PlotArea, SvgDocument, TextStyle};
use super::year_span;
use crate::config::{DATA_SOURCE, TREND_SIZE};

const LINE_COLOR: &str = "#e74c3c";
const LABEL_COLOR: &str = "#2c3e50";
const CAPTION_COLOR: &str = "#7f8c8d";

/// Margins `(left, top, right, bottom)`; the bottom leaves room for rotated
/// ticks, the axis label and the two-line caption.
const MARGINS: (f64, f64, f64, f64) = (120.0, 90.0, 50.0, 190.0);

/// Build the trend chart. `years` fixes the x ticks; `range` goes into the
/// title and caption.
pub fn svg(totals: &BTreeMap<i32, u64>, years: &[i32], range: (i32, i32)) -> String {
    let mut doc = SvgDocument::new(TREND_SIZE.0, TREND_SIZE.1);
    let area = PlotArea::inset(&doc, MARGINS);
    let span = year_span(range);

    doc.text(
        doc.width() / 2.0,
        45.0,
        &format!("Murder Trend Analysis {span}"),
        &TextStyle::new(24.0).middle().bold(),
    );

    // x: selected years with a little padding on both sides.
    let (x_lo, x_hi) = match (years.first(), years.last()) {
        (Some(&a), Some(&b)) => (a as f64, b as f64),
        _ => (range.0 as f64, range.1 as f64),
    };
    let pad = ((x_hi - x_lo) * 0.1).max(0.5);
    let x = LinearScale::new((x_lo - pad, x_hi + pad), (area.left, area.right));

    // y: data range with headroom for the point labels.
    let values: Vec<f64> = totals.values().map(|&v| v as f64).collect();
    let axis = match (
        values.iter().cloned().reduce(f64::min),
        values.iter().cloned().reduce(f64::max),
    ) {
        (Some(lo), Some(hi)) => {
            let spread = if hi > lo { hi - lo } else { (hi * 0.1).max(1.0) };
            Axis::nice((lo - spread * 0.15).max(0.0), hi + spread * 0.25)
        }
        _ => Axis::from_zero(0.0),
    };
    let y = LinearScale::new((axis.min, axis.max), (area.bottom, area.top));

    // Grid and ticks.
    let tick_style = TextStyle::new(15.0).anchor(Anchor::End).vcenter();
    for tick in axis.ticks() {
        let py = y.map(tick);
        doc.grid_line(area.left, py, area.right, py);
        doc.text(area.left - 10.0, py, &tick_label(tick), &tick_style);
    }
    for &year in years {
        let px = x.map(year as f64);
        doc.grid_line(px, area.top, px, area.bottom);
        doc.text(
            px,
            area.bottom + 22.0,
            &year.to_string(),
            &TextStyle::new(15.0).anchor(Anchor::End).rotate(-45.0),
        );
    }
    doc.frame(area.left, area.top, area.width(), area.height(), "#333333");

    // Series.
    let points: Vec<(f64, f64)> = totals
        .iter()
        .map(|(&year, &v)| (x.map(year as f64), y.map(v as f64)))
        .collect();
    doc.polyline(&points, LINE_COLOR, 3.0);
    let label_style = TextStyle::new(16.0).middle().bold().fill(LABEL_COLOR);
    for ((px, py), value) in points.iter().zip(totals.values()) {
        doc.circle(*px, *py, 7.0, LINE_COLOR);
        doc.text(*px, py - 16.0, &format_thousands(*value), &label_style);
    }

    // Axis labels.
    let axis_label = TextStyle::new(17.0).middle();
    doc.text(area.center_x(), area.bottom + 85.0, "Year", &axis_label);
    doc.text(
        35.0,
        area.center_y(),
        "Total Murders Reported",
        &axis_label.clone().rotate(-90.0),
    );

    // Source caption.
    let caption = TextStyle::new(14.0).middle().fill(CAPTION_COLOR);
    let (first, last) = range;
    doc.text(
        area.center_x(),
        doc.height() - 50.0,
        &format!("Data Source: {DATA_SOURCE}"),
        &caption,
    );
    doc.text(
        area.center_x(),
        doc.height() - 28.0,
        &format!("Period: {first}-{last}"),
        &caption,
    );

    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> BTreeMap<i32, u64> {
        BTreeMap::from([(2010, 33_335), (2011, 34_305), (2012, 34_434)])
    }

    #[test]
    fn title_caption_and_labels() {
        let svg = svg(&totals(), &[2010, 2011, 2012], (2010, 2012));
        assert!(svg.contains("Murder Trend Analysis (2010-2012)"));
        assert!(svg.contains("Data Source: National Crime Records Bureau"));
        assert!(svg.contains("Period: 2010-2012"));
        assert!(svg.contains(">34,434<"));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn x_ticks_are_exactly_the_selected_years() {
        let svg = svg(&totals(), &[2010, 2011, 2012], (2010, 2012));
        let rotated = svg.matches("rotate(-45").count();
        assert_eq!(rotated, 3);
        for year in ["2010", "2011", "2012"] {
            assert!(svg.contains(&format!(">{year}<")));
        }
    }

    #[test]
    fn output_is_deterministic() {
        let a = svg(&totals(), &[2010, 2011, 2012], (2010, 2012));
        let b = svg(&totals(), &[2010, 2011, 2012], (2010, 2012));
        assert_eq!(a, b);
    }

    #[test]
    fn single_year_and_empty_inputs_render() {
        let one = BTreeMap::from([(2012, 500)]);
        assert!(svg(&one, &[2012], (2012, 2012)).contains("(2012-2012)"));
        assert!(svg(&BTreeMap::new(), &[], (2012, 2012)).starts_with("<svg"));
    }
}
