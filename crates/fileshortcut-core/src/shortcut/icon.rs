//! Shortcut icon rasters.
//!
//! Icons travel as PNG bytes. Whatever the user picks (a photo, a video
//! frame, a bundled drawable) is decoded, scaled down to the launcher's
//! bound and re-encoded before it is attached to a shortcut.

use crate::config::IconConfig;
use crate::error::{Result, ShortcutError};
use crate::mime::{bundled_icon_category, IconCategory};
use base64::Engine;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tracing::debug;

/// Largest icon the launcher accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IconLimits {
    pub max_width: u32,
    pub max_height: u32,
}

impl IconLimits {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Both edges must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(ShortcutError::validation(
                "icon_limits",
                format!(
                    "Icon limits must be non-zero, got {}x{}",
                    self.max_width, self.max_height
                ),
            ));
        }
        Ok(())
    }

    fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

impl Default for IconLimits {
    fn default() -> Self {
        Self::new(IconConfig::DEFAULT_MAX_EDGE, IconConfig::DEFAULT_MAX_EDGE)
    }
}

/// A PNG-encoded icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutIcon {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl ShortcutIcon {
    /// Decode an icon from PNG, JPEG or WebP bytes.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|e| ShortcutError::Image {
            message: format!("Failed to decode icon image: {}", e),
            source: Some(e),
        })?;
        Self::from_image(&decoded)
    }

    /// Encode an already decoded image.
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ShortcutError::Image {
                message: format!("Failed to encode icon as PNG: {}", e),
                source: Some(e),
            })?;

        Ok(Self { png, width, height })
    }

    /// Decode the base64 PNG form stored in launch extras.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| ShortcutError::Image {
                message: format!("Invalid base64 icon: {}", e),
                source: None,
            })?;
        Self::from_image_bytes(&bytes)
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.png)
    }

    /// Scale down to fit `limits`, keeping the aspect ratio.
    ///
    /// Icons already inside the bound are returned unchanged.
    pub fn fit_within(&self, limits: IconLimits) -> Result<Self> {
        limits.validate()?;
        if limits.contains(self.width, self.height) {
            return Ok(self.clone());
        }

        let (target_width, target_height) = target_size(self.width, self.height, limits);
        debug!(
            "Scaling icon {}x{} -> {}x{}",
            self.width, self.height, target_width, target_height
        );

        let decoded = image::load_from_memory_with_format(&self.png, ImageFormat::Png)?;
        let resized = DynamicImage::ImageRgba8(image::imageops::resize(
            &decoded,
            target_width,
            target_height,
            FilterType::Triangle,
        ));
        Self::from_image(&resized)
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

fn target_size(width: u32, height: u32, limits: IconLimits) -> (u32, u32) {
    let scale = f64::min(
        limits.max_width as f64 / width as f64,
        limits.max_height as f64 / height as f64,
    );
    let scaled = |edge: u32, max: u32| ((edge as f64 * scale).round() as u32).clamp(1, max);
    (
        scaled(width, limits.max_width),
        scaled(height, limits.max_height),
    )
}

/// Icon to offer after a file has been picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum IconSuggestion {
    /// The picked content is itself an image; use it.
    PickedContent(String),
    /// Grab a frame from the video at this path.
    VideoThumbnail(String),
    /// One of the bundled family icons.
    Bundled(IconCategory),
    /// Fall back to the app icon.
    AppIcon,
}

/// Suggest an icon for picked content.
///
/// `reference` is the picked content reference, `path` its resolved value.
pub fn suggest_icon(mime_type: &str, reference: &str, path: Option<&str>) -> IconSuggestion {
    if mime_type.starts_with("image/") {
        return IconSuggestion::PickedContent(reference.to_string());
    }
    if mime_type.starts_with("video/") {
        if let Some(path) = path {
            return IconSuggestion::VideoThumbnail(path.to_string());
        }
    }
    match bundled_icon_category(mime_type) {
        Some(category) => IconSuggestion::Bundled(category),
        None => IconSuggestion::AppIcon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image::RgbImage::new(width, height))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_dimensions() {
        let icon = ShortcutIcon::from_image_bytes(&png(40, 20)).unwrap();
        assert_eq!((icon.width(), icon.height()), (40, 20));
    }

    #[test]
    fn test_fit_within_scales_down() {
        let icon = ShortcutIcon::from_image_bytes(&png(512, 256)).unwrap();
        let fitted = icon.fit_within(IconLimits::new(192, 192)).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (192, 96));

        let decoded = image::load_from_memory(fitted.png_bytes()).unwrap();
        assert_eq!(decoded.dimensions(), (192, 96));
    }

    #[test]
    fn test_fit_within_uses_tighter_edge() {
        let icon = ShortcutIcon::from_image_bytes(&png(100, 100)).unwrap();
        let fitted = icon.fit_within(IconLimits::new(80, 40)).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (40, 40));
    }

    #[test]
    fn test_fit_within_keeps_small_icons() {
        let icon = ShortcutIcon::from_image_bytes(&png(48, 48)).unwrap();
        let fitted = icon.fit_within(IconLimits::default()).unwrap();
        assert_eq!(fitted, icon);
    }

    #[test]
    fn test_fit_within_rejects_zero_limits() {
        let icon = ShortcutIcon::from_image_bytes(&png(10, 10)).unwrap();
        for limits in [IconLimits::new(0, 96), IconLimits::new(96, 0)] {
            assert!(matches!(
                icon.fit_within(limits),
                Err(ShortcutError::Validation { ref field, .. }) if field == "icon_limits"
            ));
        }
    }

    #[test]
    fn test_base64_round_trip() {
        let icon = ShortcutIcon::from_image_bytes(&png(8, 8)).unwrap();
        let decoded = ShortcutIcon::from_base64(&icon.to_base64()).unwrap();
        assert_eq!(decoded.png_bytes(), icon.png_bytes());
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(
            ShortcutIcon::from_base64("!!not base64!!"),
            Err(ShortcutError::Image { .. })
        ));
        assert!(matches!(
            ShortcutIcon::from_image_bytes(b"plain text"),
            Err(ShortcutError::Image { .. })
        ));
    }

    #[test]
    fn test_target_size_never_zero() {
        assert_eq!(target_size(4000, 1, IconLimits::new(100, 100)), (100, 1));
    }

    #[test]
    fn test_suggest_icon() {
        assert_eq!(
            suggest_icon("image/png", "content://media/x/1", Some("/sdcard/a.png")),
            IconSuggestion::PickedContent("content://media/x/1".to_string())
        );
        assert_eq!(
            suggest_icon("video/mp4", "content://media/x/2", Some("/sdcard/v.mp4")),
            IconSuggestion::VideoThumbnail("/sdcard/v.mp4".to_string())
        );
        assert_eq!(
            suggest_icon("application/pdf", "file:///a.pdf", Some("/a.pdf")),
            IconSuggestion::Bundled(IconCategory::Pdf)
        );
        assert_eq!(
            suggest_icon("application/zip", "file:///a.zip", Some("/a.zip")),
            IconSuggestion::AppIcon
        );
    }
}
