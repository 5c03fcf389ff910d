use std::fmt::Write as _;

// ---------------------------------------------------------------------------
// Text styling
// ---------------------------------------------------------------------------

const FONT_FAMILY: &str = "DejaVu Sans, Liberation Sans, Arial, Helvetica, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Font size, alignment and colour of a text run.
#[derive(Debug, Clone)]
pub struct TextStyle {
    size: f64,
    anchor: Anchor,
    bold: bool,
    fill: String,
    rotate: Option<f64>,
    centered: bool,
}

impl TextStyle {
    pub fn new(size: f64) -> Self {
        TextStyle {
            size,
            anchor: Anchor::Start,
            bold: false,
            fill: "#333333".to_string(),
            rotate: None,
            centered: false,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn middle(self) -> Self {
        self.anchor(Anchor::Middle)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn fill(mut self, fill: &str) -> Self {
        self.fill = fill.to_string();
        self
    }

    /// Rotate around the anchor point, degrees clockwise.
    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Center vertically on `y` instead of sitting on the baseline.
    pub fn vcenter(mut self) -> Self {
        self.centered = true;
        self
    }
}

// ---------------------------------------------------------------------------
// SvgDocument – minimal append-only SVG writer
// ---------------------------------------------------------------------------

/// Accumulates SVG elements on a white canvas of fixed pixel size.
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        let mut doc = SvgDocument {
            width,
            height,
            body: String::new(),
        };
        doc.rect(0.0, 0.0, width as f64, height as f64, "#ffffff");
        doc
    }

    pub fn width(&self) -> f64 {
        self.width as f64
    }

    pub fn height(&self) -> f64 {
        self.height as f64
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = write!(
            self.body,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="{:.1}" fill="{fill}"/>"#,
            w.max(0.0),
            h.max(0.0),
        );
    }

    /// Unfilled rectangle outline.
    pub fn frame(&mut self, x: f64, y: f64, w: f64, h: f64, stroke: &str) {
        let _ = write!(
            self.body,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{stroke}" stroke-width="1"/>"#,
            w.max(0.0),
            h.max(0.0),
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = write!(
            self.body,
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{stroke}" stroke-width="{width}"/>"#,
        );
    }

    /// Dashed grid line.
    pub fn grid_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let _ = write!(
            self.body,
            r##"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="#b0b0b0" stroke-width="1" stroke-dasharray="6,4" opacity="0.7"/>"##,
        );
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        if points.len() < 2 {
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect();
        let _ = write!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{stroke}" stroke-width="{width}" stroke-linejoin="round"/>"#,
            coords.join(" "),
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = write!(
            self.body,
            r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{fill}" stroke="#ffffff" stroke-width="1"/>"##,
        );
    }

    /// Filled path from raw path data.
    pub fn path(&mut self, d: &str, fill: &str, stroke: &str) {
        let _ = write!(
            self.body,
            r#"<path d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#,
        );
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        let weight = if style.bold { "bold" } else { "normal" };
        let transform = style
            .rotate
            .map(|deg| format!(r#" transform="rotate({deg} {x:.1} {y:.1})""#))
            .unwrap_or_default();
        let baseline = if style.centered {
            r#" dominant-baseline="central""#
        } else {
            ""
        };
        let _ = write!(
            self.body,
            r#"<text x="{x:.1}" y="{y:.1}" font-family="{FONT_FAMILY}" font-size="{}" font-weight="{weight}" fill="{}" text-anchor="{}"{baseline}{transform}>{}</text>"#,
            style.size,
            style.fill,
            style.anchor.as_str(),
            escape(content),
        );
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

/// Escape text for element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Plot geometry
// ---------------------------------------------------------------------------

/// Inner plotting rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Canvas minus margins `(left, top, right, bottom)`.
    pub fn inset(doc: &SvgDocument, margins: (f64, f64, f64, f64)) -> Self {
        PlotArea {
            left: margins.0,
            top: margins.1,
            right: doc.width() - margins.2,
            bottom: doc.height() - margins.3,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Linear map from a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < f64::EPSILON {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = (v - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Value axis with "nice" bounds and tick step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    /// Smallest axis made of 1/2/2.5/5 × 10^k steps covering `lo..=hi`,
    /// aiming for about five intervals.
    ///
    /// A degenerate or non-finite interval yields `0..1`.
    pub fn nice(lo: f64, hi: f64) -> Self {
        if !lo.is_finite() || !hi.is_finite() || hi <= lo {
            if hi.is_finite() && hi == lo && hi > 0.0 {
                return Axis::nice(0.0, hi);
            }
            return Axis {
                min: 0.0,
                max: 1.0,
                step: 0.2,
            };
        }
        let raw = (hi - lo) / 5.0;
        let magnitude = 10f64.powf(raw.log10().floor());
        let step = [1.0, 2.0, 2.5, 5.0, 10.0]
            .iter()
            .map(|m| m * magnitude)
            .find(|s| *s >= raw)
            .unwrap_or(10.0 * magnitude);
        Axis {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        }
    }

    /// Axis starting at zero.
    pub fn from_zero(hi: f64) -> Self {
        Axis::nice(0.0, hi)
    }

    /// Tick positions from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let n = ((self.max - self.min) / self.step).round() as usize;
        (0..=n).map(|i| self.min + i as f64 * self.step).collect()
    }
}

/// Tick label: integers with thousands separators, otherwise one decimal.
pub fn tick_label(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        let rounded = v.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{sign}{}", format_thousands(rounded.abs() as u64))
    } else {
        format!("{v:.1}")
    }
}

/// `1234567` → `"1,234,567"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(33_908), "33,908");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn nice_axis_from_zero() {
        let axis = Axis::from_zero(6768.0);
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.step, 2000.0);
        assert_eq!(axis.max, 8000.0);
        assert_eq!(axis.ticks().len(), 5);
    }

    #[test]
    fn nice_axis_over_data_range() {
        let axis = Axis::nice(32_000.0, 35_000.0);
        assert_eq!(axis.step, 1000.0);
        assert_eq!(axis.min, 32_000.0);
        assert_eq!(axis.max, 35_000.0);
    }

    #[test]
    fn degenerate_axes() {
        assert_eq!(Axis::from_zero(0.0), Axis { min: 0.0, max: 1.0, step: 0.2 });
        assert_eq!(Axis::nice(5.0, 5.0), Axis::from_zero(5.0));
        assert_eq!(Axis::nice(f64::NAN, 3.0).max, 1.0);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(tick_label(2000.0), "2,000");
        assert_eq!(tick_label(2.5), "2.5");
        assert_eq!(tick_label(0.0), "0");
    }

    #[test]
    fn scale_maps_and_handles_zero_span() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(s.map(5.0), 150.0);
        let flat = LinearScale::new((3.0, 3.0), (0.0, 50.0));
        assert_eq!(flat.map(3.0), 25.0);
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = SvgDocument::new(10, 10);
        doc.text(0.0, 0.0, "A & N Islands", &TextStyle::new(12.0));
        let svg = doc.finish();
        assert!(svg.contains("A &amp; N Islands"));
        assert!(!svg.contains("A & N"));
    }
}
