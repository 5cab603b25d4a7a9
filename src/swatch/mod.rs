//! Solid color swatches, embedded as data URIs.
//!
//! Editors cannot resolve relative background images of the theme, so flat
//! background colors are turned into images that can be layered instead.

pub mod color;

use crate::error::StylesError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
pub use color::RGBA;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

pub const SWATCH_SIZE: u32 = 50;

pub trait SwatchEncoder {
    /// Renders `color` (any CSS color expression) into an embeddable image
    /// reference. Equal input must give byte-identical output.
    fn render_swatch(&self, color: &str) -> Result<String, StylesError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PngSwatchEncoder;

impl PngSwatchEncoder {
    /// Fill used for `color`. Like a canvas, an invalid color keeps the
    /// default black fill.
    pub fn fill(color: &str) -> RGBA {
        color.parse::<RGBA>().unwrap_or_else(|_| {
            log::warn!("Unsupported swatch color {:?}, filling with black", color);
            RGBA::BLACK
        })
    }
}

impl SwatchEncoder for PngSwatchEncoder {
    fn render_swatch(&self, color: &str) -> Result<String, StylesError> {
        let fill = PngSwatchEncoder::fill(color);
        let image = RgbaImage::from_pixel(SWATCH_SIZE, SWATCH_SIZE, fill.into());

        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|source| StylesError::SwatchEncoding {
                color: color.to_owned(),
                source,
            })?;

        log::trace!("Rendered {} swatch for {:?}", fill, color);

        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(png.into_inner())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{PngSwatchEncoder, SwatchEncoder, SWATCH_SIZE};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use image::GenericImageView;
    use pretty_assertions::assert_eq;

    fn decode(data_uri: &str) -> image::DynamicImage {
        let payload = data_uri
            .strip_prefix("data:image/png;base64,")
            .expect("png data uri");
        let bytes = STANDARD.decode(payload).unwrap();

        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    pub fn test_swatch_is_solid_fill() {
        let swatch = decode(&PngSwatchEncoder.render_swatch("rgba(255, 0, 0, 0.5)").unwrap());

        assert_eq!((SWATCH_SIZE, SWATCH_SIZE), swatch.dimensions());
        assert!(swatch
            .pixels()
            .all(|(_, _, pixel)| pixel == image::Rgba([255, 0, 0, 128])));
    }

    #[test]
    pub fn test_swatch_is_deterministic() {
        let encoder = PngSwatchEncoder;

        assert_eq!(
            encoder.render_swatch("#1a2b3c").unwrap(),
            encoder.render_swatch("#1a2b3c").unwrap()
        );
        assert_ne!(
            encoder.render_swatch("#1a2b3c").unwrap(),
            encoder.render_swatch("#1a2b3d").unwrap()
        );
    }

    #[test]
    pub fn test_invalid_color_is_black() {
        let swatch = decode(&PngSwatchEncoder.render_swatch("#zzz").unwrap());

        assert_eq!(image::Rgba([0, 0, 0, 255]), swatch.get_pixel(25, 25));
    }
}
