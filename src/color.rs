use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Srgb<u8>> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format::<u8>()
        })
        .collect()
}

/// ColorBrewer "Set2", the qualitative palette used for category wedges.
pub const SET2: [Srgb<u8>; 8] = [
    Srgb::new(0x66, 0xc2, 0xa5),
    Srgb::new(0xfc, 0x8d, 0x62),
    Srgb::new(0x8d, 0xa0, 0xcb),
    Srgb::new(0xe7, 0x8a, 0xc3),
    Srgb::new(0xa6, 0xd8, 0x54),
    Srgb::new(0xff, 0xd9, 0x2f),
    Srgb::new(0xe5, 0xc4, 0x94),
    Srgb::new(0xb3, 0xb3, 0xb3),
];

/// `#rrggbb` form for SVG attributes.
pub fn hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// WCAG relative luminance in `0.0..=1.0`.
pub fn relative_luminance(color: Srgb<u8>) -> f32 {
    let lin: LinSrgb = color.into_format::<f32>().into_linear();
    0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue
}

// ---------------------------------------------------------------------------
// Sequential colour ramps
// ---------------------------------------------------------------------------

/// Piecewise-linear ramp through evenly spaced stops, mixed in linear RGB.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    stops: Vec<Srgb<u8>>,
}

impl ColorRamp {
    pub fn new(stops: &[Srgb<u8>]) -> Self {
        ColorRamp {
            stops: stops.to_vec(),
        }
    }

    /// ColorBrewer "Reds" (light to dark).
    pub fn reds() -> Self {
        Self::new(&[
            Srgb::new(0xff, 0xf5, 0xf0),
            Srgb::new(0xfe, 0xe0, 0xd2),
            Srgb::new(0xfc, 0xbb, 0xa1),
            Srgb::new(0xfc, 0x92, 0x72),
            Srgb::new(0xfb, 0x6a, 0x4a),
            Srgb::new(0xef, 0x3b, 0x2c),
            Srgb::new(0xcb, 0x18, 0x1d),
            Srgb::new(0xa5, 0x0f, 0x15),
            Srgb::new(0x67, 0x00, 0x0d),
        ])
    }

    /// ColorBrewer "YlOrRd" (light yellow to dark red).
    pub fn yl_or_rd() -> Self {
        Self::new(&[
            Srgb::new(0xff, 0xff, 0xcc),
            Srgb::new(0xff, 0xed, 0xa0),
            Srgb::new(0xfe, 0xd9, 0x76),
            Srgb::new(0xfe, 0xb2, 0x4c),
            Srgb::new(0xfd, 0x8d, 0x3c),
            Srgb::new(0xfc, 0x4e, 0x2a),
            Srgb::new(0xe3, 0x1a, 0x1c),
            Srgb::new(0xbd, 0x00, 0x26),
            Srgb::new(0x80, 0x00, 0x26),
        ])
    }

    /// Same stops, opposite direction.
    pub fn reversed(mut self) -> Self {
        self.stops.reverse();
        self
    }

    /// Colour at position `t`, clamped to `0.0..=1.0`.
    pub fn at(&self, t: f32) -> Srgb<u8> {
        match self.stops.len() {
            0 => Srgb::new(0x80, 0x80, 0x80),
            1 => self.stops[0],
            len => {
                let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
                let scaled = t * (len - 1) as f32;
                let lower = (scaled.floor() as usize).min(len - 2);
                let frac = scaled - lower as f32;
                if frac <= f32::EPSILON {
                    return self.stops[lower];
                }
                if frac >= 1.0 - f32::EPSILON {
                    return self.stops[lower + 1];
                }
                let a: LinSrgb = self.stops[lower].into_format::<f32>().into_linear();
                let b: LinSrgb = self.stops[lower + 1].into_format::<f32>().into_linear();
                let mixed: Srgb = Srgb::from_linear(a.mix(b, frac));
                mixed.into_format::<u8>()
            }
        }
    }

    /// `n` discrete colours sampled away from both ends of the ramp.
    pub fn sample(&self, n: usize) -> Vec<Srgb<u8>> {
        (0..n)
            .map(|i| self.at((i + 1) as f32 / (n + 1) as f32))
            .collect()
    }
}
