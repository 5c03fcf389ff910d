use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::debug;
use resvg::{tiny_skia, usvg};

use super::ChartError;

/// Turns chart SVG into PNG files. Holds the parsed font database so system
/// fonts are scanned once per run.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        debug!("Loaded {} font faces", options.fontdb.len());
        Rasterizer { options }
    }

    /// Rasterize `svg` at its declared size into an RGBA image.
    pub fn rasterize(&self, svg: &str) -> Result<RgbaImage, ChartError> {
        let tree = usvg::Tree::from_str(svg, &self.options)?;
        let size = tree.size().to_int_size();
        let (w, h) = (size.width(), size.height());

        let mut pixmap = tiny_skia::Pixmap::new(w, h).ok_or(ChartError::Pixmap { w, h })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        // Opaque background: premultiplied and straight RGBA coincide.
        RgbaImage::from_raw(w, h, pixmap.take()).ok_or(ChartError::Pixmap { w, h })
    }

    /// Rasterize and write as PNG, replacing any existing file.
    pub fn write_png(&self, svg: &str, path: &Path) -> Result<(), ChartError> {
        let image = self.rasterize(svg)?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| ChartError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
