/// Chart layer: aggregate → SVG → PNG.
///
/// Each chart module is a pure function from its aggregate to an SVG string
/// of fixed size; [`raster::Rasterizer`] turns that string into the PNG file.
///
/// ```text
///   aggregate ──▶ trend / top_regions / categories / heatmap / category_trend
///                            │ SVG text
///                            ▼
///                      raster (resvg) ──▶ plots/*.png
/// ```

pub mod categories;
pub mod category_trend;
pub mod heatmap;
pub mod raster;
pub mod svg;
pub mod top_regions;
pub mod trend;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("cannot allocate {w}x{h} pixmap")]
    Pixmap { w: u32, h: u32 },

    #[error("writing {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Chart heading suffix, e.g. `(2010-2012)`.
pub fn year_span((first, last): (i32, i32)) -> String {
    format!("({first}-{last})")
}
