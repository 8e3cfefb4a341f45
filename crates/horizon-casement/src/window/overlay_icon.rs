//! Badge images shown over the taskbar or dock entry.
//!
//! An [`OverlayIcon`] is handed to the taskbar collaborator by
//! `NativeWindow::set_overlay_icon`. It always holds decoded RGBA pixels so
//! the collaborator never has to deal with file formats.

use std::path::Path;

use thiserror::Error;

/// Largest accepted edge length for an overlay badge.
pub const MAX_OVERLAY_ICON_SIZE: u32 = 256;

/// Errors produced when building an [`OverlayIcon`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// Width or height is zero or larger than [`MAX_OVERLAY_ICON_SIZE`].
    #[error("invalid icon dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The pixel buffer does not match the dimensions.
    #[error("icon data size mismatch: expected {expected} bytes, got {actual}")]
    DataSizeMismatch {
        /// `width * height * 4`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// The image could not be read or decoded.
    #[error("failed to load icon: {0}")]
    LoadFailed(String),
}

/// An RGBA badge image.
///
/// ```
/// use horizon_casement::window::OverlayIcon;
///
/// let dot = OverlayIcon::from_rgba(vec![255, 0, 0, 255], 1, 1).unwrap();
/// assert_eq!((dot.width(), dot.height()), (1, 1));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OverlayIcon {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

impl OverlayIcon {
    /// Build an icon from row-major RGBA pixels (4 bytes per pixel).
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self, IconError> {
        check_dimensions(width, height)?;

        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(IconError::DataSizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }

        Ok(Self { rgba, width, height })
    }

    /// Load an icon from an image file (PNG, ICO, BMP, ...).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| IconError::LoadFailed(format!("{}: {e}", path.display())))?;
        Self::from_image(img)
    }

    /// Decode an icon from encoded image bytes; the format is sniffed.
    pub fn from_memory(data: &[u8]) -> Result<Self, IconError> {
        let img = image::load_from_memory(data).map_err(|e| IconError::LoadFailed(e.to_string()))?;
        Self::from_image(img)
    }

    fn from_image(img: image::DynamicImage) -> Result<Self, IconError> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        check_dimensions(width, height)?;
        Ok(Self {
            rgba: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA pixels.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), IconError> {
    if width == 0
        || height == 0
        || width > MAX_OVERLAY_ICON_SIZE
        || height > MAX_OVERLAY_ICON_SIZE
    {
        return Err(IconError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl std::fmt::Debug for OverlayIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayIcon")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.rgba.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_rgba_rejects_bad_input() {
        assert_eq!(
            OverlayIcon::from_rgba(vec![], 0, 4),
            Err(IconError::InvalidDimensions { width: 0, height: 4 })
        );
        assert_eq!(
            OverlayIcon::from_rgba(vec![0; 8], 2, 2),
            Err(IconError::DataSizeMismatch { expected: 16, actual: 8 })
        );
        assert!(OverlayIcon::from_rgba(vec![0; 4 * 512], 512, 1).is_err());
    }

    #[test]
    fn test_from_memory_png() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([0, 128, 255, 255]));
        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let icon = OverlayIcon::from_memory(&png).unwrap();
        assert_eq!((icon.width(), icon.height()), (3, 2));
        assert_eq!(&icon.rgba()[..4], &[0, 128, 255, 255]);
    }

    #[test]
    fn test_from_memory_garbage() {
        assert!(matches!(
            OverlayIcon::from_memory(b"not an image"),
            Err(IconError::LoadFailed(_))
        ));
    }

    #[test]
    fn test_debug_omits_pixels() {
        let icon = OverlayIcon::from_rgba(vec![0; 16], 2, 2).unwrap();
        let debug = format!("{icon:?}");
        assert!(debug.contains("data_len: 16"));
    }
}
