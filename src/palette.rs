use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, ViewerError};

/// A 1-D colour lookup table: the first row of the palette image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    texels: Vec<[u8; 4]>,
}

impl Palette {
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|source| ViewerError::PaletteLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let palette = Self::from_image(&image.to_rgba8())
            .ok_or_else(|| ViewerError::EmptyPalette(path.to_path_buf()))?;
        log::info!("loaded palette {} ({} entries)", path.display(), palette.len());
        Ok(palette)
    }

    /// Only the horizontal axis is sampled. `None` for an empty image.
    pub fn from_image(image: &RgbaImage) -> Option<Self> {
        if image.width() == 0 || image.height() == 0 {
            return None;
        }
        let texels = (0..image.width()).map(|x| image.get_pixel(x, 0).0).collect();
        Some(Self { texels })
    }

    pub fn len(&self) -> usize {
        self.texels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }

    /// Tightly packed RGBA bytes for a `len() x 1` texture upload.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.texels.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn only_the_first_row_is_used() {
        let palette = Palette::from_image(&gradient(100, 16)).unwrap();
        assert_eq!(palette.len(), 100);

        let bytes = palette.as_bytes();
        assert_eq!(bytes.len(), 100 * 4);
        assert_eq!(&bytes[..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[396..], &[99, 0, 0, 255]);
        // Every texel comes from row 0
        assert!(bytes.chunks_exact(4).all(|texel| texel[1] == 0));
    }

    #[test]
    fn bytes_are_packed_rgba() {
        let palette = Palette::from_image(&gradient(3, 2)).unwrap();
        assert_eq!(palette.as_bytes(), vec![0, 0, 0, 255, 1, 0, 0, 255, 2, 0, 0, 255]);
    }

    #[test]
    fn empty_image_is_rejected() {
        assert!(Palette::from_image(&RgbaImage::new(0, 0)).is_none());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = Palette::load(Path::new("/nonexistent/pal.png")).unwrap_err();
        assert!(matches!(err, ViewerError::PaletteLoad { .. }));
    }

    #[test]
    fn bundled_palette_loads() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pal.png"));
        let palette = Palette::load(path).unwrap();
        assert_eq!(palette.len(), 256);
    }
}
