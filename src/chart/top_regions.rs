//! Horizontal bar ranking of regions by murders.

use super::svg::{tick_label, Anchor, Axis, LinearScale, PlotArea, SvgDocument, TextStyle};
use super::year_span;
use crate::color::{hex, ColorRamp};
use crate::config::TOP_STATES_SIZE;

const MARGINS: (f64, f64, f64, f64) = (250.0, 70.0, 50.0, 80.0);

/// Build the ranking chart; `ranked` must already be sorted descending and
/// is drawn top to bottom.
pub fn svg(ranked: &[(String, u64)], range: (i32, i32)) -> String {
    let mut doc = SvgDocument::new(TOP_STATES_SIZE.0, TOP_STATES_SIZE.1);
    let area = PlotArea::inset(&doc, MARGINS);

    doc.text(
        doc.width() / 2.0,
        40.0,
        &format!("Top 10 States by Murders {}", year_span(range)),
        &TextStyle::new(20.0).middle(),
    );

    let max = ranked.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let axis = Axis::from_zero(max as f64);
    let x = LinearScale::new((axis.min, axis.max), (area.left, area.right));

    let tick_style = TextStyle::new(14.0).middle();
    for tick in axis.ticks() {
        let px = x.map(tick);
        doc.line(px, area.bottom, px, area.bottom + 6.0, "#333333", 1.0);
        doc.text(px, area.bottom + 24.0, &tick_label(tick), &tick_style);
    }

    // Darkest bar for the largest total.
    let colors = ColorRamp::reds().reversed().sample(ranked.len());
    let band = area.height() / ranked.len().max(1) as f64;
    let name_style = TextStyle::new(14.0).anchor(Anchor::End).vcenter();
    for (i, ((region, total), color)) in ranked.iter().zip(&colors).enumerate() {
        let top = area.top + i as f64 * band;
        let bar_height = band * 0.8;
        let bar_top = top + (band - bar_height) / 2.0;
        doc.rect(
            area.left,
            bar_top,
            x.map(*total as f64) - area.left,
            bar_height,
            &hex(*color),
        );
        doc.text(area.left - 8.0, top + band / 2.0, region, &name_style);
    }
    doc.frame(area.left, area.top, area.width(), area.height(), "#333333");

    let axis_label = TextStyle::new(16.0).middle();
    doc.text(area.center_x(), doc.height() - 18.0, "Total Murders", &axis_label);
    doc.text(
        25.0,
        area.center_y(),
        "States/UTs",
        &axis_label.clone().rotate(-90.0),
    );

    doc.finish()
}
