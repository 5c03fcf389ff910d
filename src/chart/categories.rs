//! Offense category pie chart.

use std::f64::consts::PI;

use super::svg::{Anchor, SvgDocument, TextStyle};
use crate::color::{hex, SET2};
use crate::config::CRIME_TYPES_SIZE;
use crate::data::aggregate::CategoryTotals;

const RADIUS: f64 = 340.0;
const START_DEGREES: f64 = 90.0;

/// Share of each category as a percentage label, e.g. `"42.3%"`.
/// Empty when the totals are all zero.
pub fn percent_labels(totals: &CategoryTotals) -> Vec<String> {
    let whole = totals.total();
    if whole == 0 {
        return Vec::new();
    }
    totals
        .entries()
        .map(|(_, v)| format!("{:.1}%", v as f64 * 100.0 / whole as f64))
        .collect()
}

/// Build the pie: wedges counter-clockwise from 12 o'clock in column order.
pub fn svg(totals: &CategoryTotals) -> String {
    let mut doc = SvgDocument::new(CRIME_TYPES_SIZE.0, CRIME_TYPES_SIZE.1);
    let (cx, cy) = (doc.width() / 2.0, doc.height() / 2.0 + 20.0);

    doc.text(
        cx,
        60.0,
        "Crime Type Distribution",
        &TextStyle::new(22.0).middle(),
    );

    let whole = totals.total();
    if whole == 0 {
        return doc.finish();
    }

    let labels = percent_labels(totals);
    let mut start = START_DEGREES.to_radians();
    for (i, (offense, value)) in totals.entries().enumerate() {
        if value == 0 {
            continue;
        }
        let fraction = value as f64 / whole as f64;
        let sweep = fraction * 2.0 * PI;
        let end = start + sweep;
        let fill = hex(SET2[i % SET2.len()]);

        if fraction >= 1.0 {
            doc.circle(cx, cy, RADIUS, &fill);
        } else {
            doc.path(&wedge_path(cx, cy, RADIUS, start, end), &fill, "#ffffff");
        }

        let mid = start + sweep / 2.0;
        let (dx, dy) = (mid.cos(), -mid.sin());
        let anchor = if dx > 0.01 {
            Anchor::Start
        } else if dx < -0.01 {
            Anchor::End
        } else {
            Anchor::Middle
        };
        doc.text(
            cx + dx * RADIUS * 1.1,
            cy + dy * RADIUS * 1.1,
            offense.label(),
            &TextStyle::new(18.0).anchor(anchor).vcenter(),
        );
        doc.text(
            cx + dx * RADIUS * 0.6,
            cy + dy * RADIUS * 0.6,
            &labels[i],
            &TextStyle::new(17.0).middle().vcenter(),
        );

        start = end;
    }

    doc.finish()
}

/// Closed wedge from `start` to `end` radians (math orientation, y up).
fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = (cx + r * start.cos(), cy - r * start.sin());
    let (x1, y1) = (cx + r * end.cos(), cy - r * end.sin());
    let large_arc = u8::from(end - start > PI);
    // sweep-flag 0: counter-clockwise on screen.
    format!("M{cx:.2},{cy:.2} L{x0:.2},{y0:.2} A{r:.2},{r:.2} 0 {large_arc} 0 {x1:.2},{y1:.2} Z")
}
