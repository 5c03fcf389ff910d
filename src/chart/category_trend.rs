//! One line per offense category across the selected years.

use std::collections::BTreeMap;

use super::svg::{tick_label, Anchor, Axis, LinearScale, PlotArea, SvgDocument, TextStyle};
use crate::color::{generate_palette, hex};
use crate::config::CRIME_TRENDS_SIZE;
use crate::data::aggregate::CategoryCounts;
use crate::data::model::Offense;

const MARGINS: (f64, f64, f64, f64) = (110.0, 70.0, 60.0, 80.0);
const MARKER: f64 = 6.0;

/// Marker glyphs, one per series.
#[derive(Debug, Clone, Copy)]
enum Marker {
    Circle,
    Square,
    Diamond,
    Triangle,
}

const MARKERS: [Marker; 4] = [Marker::Circle, Marker::Square, Marker::Diamond, Marker::Triangle];

fn draw_marker(doc: &mut SvgDocument, marker: Marker, x: f64, y: f64, fill: &str) {
    let s = MARKER;
    match marker {
        Marker::Circle => doc.circle(x, y, s, fill),
        Marker::Square => doc.path(
            &format!("M{:.1},{:.1} h{:.1} v{:.1} h{:.1} Z", x - s, y - s, 2.0 * s, 2.0 * s, -2.0 * s),
            fill,
            "#ffffff",
        ),
        Marker::Diamond => doc.path(
            &format!(
                "M{x:.1},{:.1} L{:.1},{y:.1} L{x:.1},{:.1} L{:.1},{y:.1} Z",
                y - s * 1.2,
                x + s * 1.2,
                y + s * 1.2,
                x - s * 1.2
            ),
            fill,
            "#ffffff",
        ),
        Marker::Triangle => doc.path(
            &format!(
                "M{x:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} Z",
                y - s * 1.2,
                x + s * 1.1,
                y + s * 0.8,
                x - s * 1.1,
                y + s * 0.8
            ),
            fill,
            "#ffffff",
        ),
    }
}

pub fn svg(trend: &BTreeMap<i32, CategoryCounts>) -> String {
    let mut doc = SvgDocument::new(CRIME_TRENDS_SIZE.0, CRIME_TRENDS_SIZE.1);
    let area = PlotArea::inset(&doc, MARGINS);

    doc.text(
        doc.width() / 2.0,
        40.0,
        "Crime Type Trends Over Years",
        &TextStyle::new(20.0).middle(),
    );

    let years: Vec<i32> = trend.keys().copied().collect();
    let (x_lo, x_hi) = match (years.first(), years.last()) {
        (Some(&a), Some(&b)) => (a as f64, b as f64),
        _ => (0.0, 1.0),
    };
    let pad = ((x_hi - x_lo) * 0.05).max(0.25);
    let x = LinearScale::new((x_lo - pad, x_hi + pad), (area.left, area.right));

    let max = trend
        .values()
        .flat_map(|counts| counts.iter().copied())
        .max()
        .unwrap_or(0);
    let axis = Axis::from_zero(max as f64);
    let y = LinearScale::new((axis.min, axis.max), (area.bottom, area.top));

    let tick_style = TextStyle::new(14.0).anchor(Anchor::End).vcenter();
    for tick in axis.ticks() {
        let py = y.map(tick);
        doc.grid_line(area.left, py, area.right, py);
        doc.text(area.left - 10.0, py, &tick_label(tick), &tick_style);
    }
    for &year in &years {
        let px = x.map(year as f64);
        doc.grid_line(px, area.top, px, area.bottom);
        doc.text(px, area.bottom + 24.0, &year.to_string(), &TextStyle::new(14.0).middle());
    }
    doc.frame(area.left, area.top, area.width(), area.height(), "#333333");

    let colors = generate_palette(Offense::ALL.len());
    for (offense, (color, marker)) in Offense::ALL.iter().zip(colors.iter().zip(MARKERS)) {
        let fill = hex(*color);
        let points: Vec<(f64, f64)> = trend
            .iter()
            .map(|(&year, counts)| (x.map(year as f64), y.map(counts[offense.index()] as f64)))
            .collect();
        doc.polyline(&points, &fill, 2.5);
        for (px, py) in &points {
            draw_marker(&mut doc, marker, *px, *py, &fill);
        }
    }

    draw_legend(&mut doc, &area, &colors);

    let axis_label = TextStyle::new(16.0).middle();
    doc.text(area.center_x(), doc.height() - 18.0, "Year", &axis_label);
    doc.text(
        30.0,
        area.center_y(),
        "Reported Cases",
        &axis_label.clone().rotate(-90.0),
    );

    doc.finish()
}

fn draw_legend(doc: &mut SvgDocument, area: &PlotArea, colors: &[palette::Srgb<u8>]) {
    let (w, row_h) = (240.0, 26.0);
    let left = area.left + 15.0;
    let top = area.top + 12.0;
    doc.rect(left, top, w, row_h * Offense::ALL.len() as f64 + 12.0, "#ffffff");
    doc.frame(left, top, w, row_h * Offense::ALL.len() as f64 + 12.0, "#cccccc");

    let label_style = TextStyle::new(14.0).vcenter();
    for (i, (offense, (color, marker))) in Offense::ALL
        .iter()
        .zip(colors.iter().zip(MARKERS))
        .enumerate()
    {
        let cy = top + 6.0 + row_h * (i as f64 + 0.5);
        let fill = hex(*color);
        doc.line(left + 10.0, cy, left + 44.0, cy, &fill, 2.5);
        draw_marker(doc, marker, left + 27.0, cy, &fill);
        doc.text(left + 54.0, cy, offense.label(), &label_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_series_with_legend() {
        let trend = BTreeMap::from([
            (2010, [100, 50, 80, 20]),
            (2011, [110, 60, 85, 25]),
            (2012, [120, 55, 90, 30]),
        ]);
        let svg = svg(&trend);
        assert_eq!(svg.matches("<polyline").count(), 4);
        assert!(svg.contains("Crime Type Trends Over Years"));
        assert!(svg.contains(">Reported Cases<"));
        assert!(svg.contains(">Kidnapping &amp; Abduction<"));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn single_year_has_markers_but_no_lines() {
        let trend = BTreeMap::from([(2012, [1, 2, 3, 4])]);
        let svg = svg(&trend);
        assert_eq!(svg.matches("<polyline").count(), 0);
        assert!(svg.contains(">2012<"));
    }

    #[test]
    fn empty_trend_renders() {
        assert!(svg(&BTreeMap::new()).contains("Crime Type Trends Over Years"));
    }
}
