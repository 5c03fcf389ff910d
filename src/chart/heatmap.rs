//! Region × year murder heatmap with annotated cells and a colour bar.

use super::svg::{tick_label, Anchor, Axis, LinearScale, PlotArea, SvgDocument, TextStyle};
use super::year_span;
use crate::color::{hex, relative_luminance, ColorRamp};
use crate::config::HEATMAP_SIZE;
use crate::data::aggregate::RegionYearMatrix;

const MARGINS: (f64, f64, f64, f64) = (280.0, 70.0, 200.0, 70.0);
const COLORBAR_WIDTH: f64 = 28.0;
const COLORBAR_STEPS: usize = 64;

/// Below this luminance the annotation switches to white text.
const DARK_CELL: f32 = 0.408;

pub fn svg(matrix: &RegionYearMatrix, range: (i32, i32)) -> String {
    let mut doc = SvgDocument::new(HEATMAP_SIZE.0, HEATMAP_SIZE.1);
    let area = PlotArea::inset(&doc, MARGINS);
    let ramp = ColorRamp::yl_or_rd();

    doc.text(
        area.center_x(),
        40.0,
        &format!("Murder Heatmap {}", year_span(range)),
        &TextStyle::new(22.0).middle(),
    );

    let rows = matrix.regions.len();
    let cols = matrix.years.len();
    if rows == 0 || cols == 0 {
        doc.frame(area.left, area.top, area.width(), area.height(), "#333333");
        return doc.finish();
    }

    // Colour scale spans the observed cell values.
    let min = matrix
        .cells
        .iter()
        .flat_map(|r| r.iter().copied())
        .min()
        .unwrap_or(0) as f64;
    let max = matrix.max_value() as f64;
    let norm = |v: f64| {
        if max > min {
            ((v - min) / (max - min)) as f32
        } else {
            0.0
        }
    };

    let cell_w = area.width() / cols as f64;
    let cell_h = area.height() / rows as f64;
    let font = (cell_h * 0.6).clamp(6.0, 16.0);

    for (r, region) in matrix.regions.iter().enumerate() {
        let top = area.top + r as f64 * cell_h;
        for (c, value) in matrix.cells[r].iter().enumerate() {
            let left = area.left + c as f64 * cell_w;
            let color = ramp.at(norm(*value as f64));
            doc.rect(left, top, cell_w, cell_h, &hex(color));
            let text_color = if relative_luminance(color) < DARK_CELL {
                "#ffffff"
            } else {
                "#262626"
            };
            doc.text(
                left + cell_w / 2.0,
                top + cell_h / 2.0,
                &value.to_string(),
                &TextStyle::new(font).middle().vcenter().fill(text_color),
            );
        }
        doc.text(
            area.left - 8.0,
            top + cell_h / 2.0,
            region,
            &TextStyle::new(font.min(14.0)).anchor(Anchor::End).vcenter(),
        );
    }

    for (c, year) in matrix.years.iter().enumerate() {
        doc.text(
            area.left + (c as f64 + 0.5) * cell_w,
            area.bottom + 24.0,
            &year.to_string(),
            &TextStyle::new(15.0).middle(),
        );
    }
    doc.text(
        area.center_x(),
        doc.height() - 15.0,
        "Year",
        &TextStyle::new(16.0).middle(),
    );
    doc.text(
        25.0,
        area.center_y(),
        "States/UTs",
        &TextStyle::new(16.0).middle().rotate(-90.0),
    );

    draw_colorbar(&mut doc, &area, &ramp, min, max);
    doc.finish()
}

fn draw_colorbar(doc: &mut SvgDocument, area: &PlotArea, ramp: &ColorRamp, min: f64, max: f64) {
    let left = area.right + 40.0;
    let step_h = area.height() / COLORBAR_STEPS as f64;
    for i in 0..COLORBAR_STEPS {
        // Top of the bar is the high end.
        let t = 1.0 - (i as f32 + 0.5) / COLORBAR_STEPS as f32;
        doc.rect(
            left,
            area.top + i as f64 * step_h,
            COLORBAR_WIDTH,
            step_h + 0.5,
            &hex(ramp.at(t)),
        );
    }
    doc.frame(left, area.top, COLORBAR_WIDTH, area.height(), "#333333");

    let axis = Axis::nice(min, max);
    let y = LinearScale::new((min, max), (area.bottom, area.top));
    let style = TextStyle::new(13.0).vcenter();
    for tick in axis.ticks().into_iter().filter(|t| *t >= min && *t <= max) {
        let py = y.map(tick);
        doc.line(left + COLORBAR_WIDTH, py, left + COLORBAR_WIDTH + 5.0, py, "#333333", 1.0);
        doc.text(left + COLORBAR_WIDTH + 8.0, py, &tick_label(tick), &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> RegionYearMatrix {
        RegionYearMatrix {
            regions: vec!["Bihar".into(), "Kerala".into()],
            years: vec![2011, 2012],
            cells: vec![vec![3198, 3570], vec![365, 0]],
        }
    }

    #[test]
    fn annotates_every_cell_as_integer() {
        let svg = svg(&matrix(), (2011, 2012));
        assert!(svg.contains("Murder Heatmap (2011-2012)"));
        for v in ["3198", "3570", "365", "0"] {
            assert!(svg.contains(&format!(">{v}<")), "missing cell {v}");
        }
    }

    #[test]
    fn extremes_use_ramp_ends_and_readable_text() {
        let svg = svg(&matrix(), (2011, 2012));
        assert!(svg.contains(r##"fill="#800026""##));
        assert!(svg.contains(r##"fill="#ffffcc""##));
        // Dark top cell carries white text.
        assert!(svg.contains(r##"fill="#ffffff" text-anchor="middle" dominant-baseline="central">3570<"##));
    }

    #[test]
    fn empty_matrix_renders() {
        let svg = svg(&RegionYearMatrix::default(), (2012, 2012));
        assert!(svg.contains("Murder Heatmap"));
        assert!(!svg.contains("Bihar"));
    }
}
