//! Window creation options.
//!
//! [`WindowOptions`] is the dictionary-style option set a window is created
//! from. It can be built in code with the `with_*` methods or deserialized
//! from JSON with camelCase keys:
//!
//! ```
//! use horizon_casement::window::{TitleBarStyle, WindowOptions};
//!
//! let options = WindowOptions::from_dictionary(&serde_json::json!({
//!     "width": 1024,
//!     "titleBarStyle": "hiddenInset",
//!     "someFutureOption": true
//! }))
//! .unwrap();
//! assert_eq!(options.size().width, 1024);
//! assert_eq!(options.title_bar_style(), TitleBarStyle::HiddenInset);
//! ```
//!
//! Unknown keys are ignored. A recognised key with a value of the wrong type
//! or an unparsable colour is logged and treated as absent.

use horizon_casement_core::logging::targets;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::color::Color;
use crate::error::{WindowError, WindowResult};
use crate::geometry::Size;
use crate::window::decoration::{Decoration, TitleBarStyle};

/// Default content width when none is given.
pub const DEFAULT_WIDTH: i32 = 800;
/// Default content height when none is given.
pub const DEFAULT_HEIGHT: i32 = 600;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(error) => {
            tracing::warn!(target: targets::CONFIG, %error, "ignoring invalid window option");
            Ok(None)
        }
    }
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = lenient(deserializer)?;
    Ok(raw.and_then(|s| match Color::from_hex(&s) {
        Ok(color) => Some(color),
        Err(error) => {
            tracing::warn!(target: targets::CONFIG, %error, "ignoring invalid backgroundColor");
            None
        }
    }))
}

/// Options a window is created with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowOptions {
    #[serde(deserialize_with = "lenient")]
    width: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    height: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    x: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    y: Option<i32>,
    /// Width and height describe the content area rather than the frame.
    #[serde(deserialize_with = "lenient")]
    use_content_size: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    center: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    min_width: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    min_height: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    max_width: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    max_height: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    resizable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    movable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    minimizable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    maximizable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    fullscreenable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    closable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    fullscreen: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    kiosk: Option<bool>,
    /// Route every full-screen request to simple full screen.
    #[serde(deserialize_with = "lenient")]
    simple_fullscreen: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    title_bar_style: Option<TitleBarStyle>,
    #[serde(deserialize_with = "lenient")]
    frame: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    show: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    always_on_top: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    skip_taskbar: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    has_shadow: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    opacity: Option<f64>,
    #[serde(deserialize_with = "lenient_color")]
    background_color: Option<Color>,
    #[serde(deserialize_with = "lenient")]
    vibrancy: Option<String>,
    /// Maximize to the content's preferred width.
    #[serde(deserialize_with = "lenient")]
    zoom_to_page_width: Option<bool>,
    /// Keep the title visible in simple full screen.
    #[serde(deserialize_with = "lenient")]
    fullscreen_window_title: Option<bool>,
}

impl WindowOptions {
    /// Options with every value at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a JSON object. Fails only if `value` is not an
    /// object.
    pub fn from_dictionary(value: &serde_json::Value) -> WindowResult<Self> {
        if !value.is_object() {
            return Err(WindowError::InvalidOptions(format!("expected an object, got {value}")));
        }
        let options =
            Self::deserialize(value).map_err(|e| WindowError::InvalidOptions(e.to_string()))?;
        tracing::debug!(target: targets::CONFIG, ?options, "window options parsed");
        Ok(options)
    }

    // Builders

    /// Set the initial size.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the initial position.
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Interpret the size as content size rather than frame size.
    pub fn with_use_content_size(mut self, use_content_size: bool) -> Self {
        self.use_content_size = Some(use_content_size);
        self
    }

    /// Center the window on the work area.
    pub fn with_center(mut self, center: bool) -> Self {
        self.center = Some(center);
        self
    }

    /// Set the minimum content size.
    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    /// Set the maximum content size.
    pub fn with_max_size(mut self, width: i32, height: i32) -> Self {
        self.max_width = Some(width);
        self.max_height = Some(height);
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = Some(resizable);
        self
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = Some(movable);
        self
    }

    pub fn with_minimizable(mut self, minimizable: bool) -> Self {
        self.minimizable = Some(minimizable);
        self
    }

    pub fn with_maximizable(mut self, maximizable: bool) -> Self {
        self.maximizable = Some(maximizable);
        self
    }

    pub fn with_fullscreenable(mut self, fullscreenable: bool) -> Self {
        self.fullscreenable = Some(fullscreenable);
        self
    }

    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    /// Start in full screen. `false` also disables the full-screen button
    /// unless `fullscreenable` is given explicitly.
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = Some(fullscreen);
        self
    }

    pub fn with_kiosk(mut self, kiosk: bool) -> Self {
        self.kiosk = Some(kiosk);
        self
    }

    pub fn with_simple_fullscreen(mut self, simple: bool) -> Self {
        self.simple_fullscreen = Some(simple);
        self
    }

    pub fn with_title_bar_style(mut self, style: TitleBarStyle) -> Self {
        self.title_bar_style = Some(style);
        self
    }

    /// Create a frameless window when `false`.
    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Show the window on creation.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn with_always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = Some(always_on_top);
        self
    }

    pub fn with_skip_taskbar(mut self, skip: bool) -> Self {
        self.skip_taskbar = Some(skip);
        self
    }

    pub fn with_has_shadow(mut self, has_shadow: bool) -> Self {
        self.has_shadow = Some(has_shadow);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_vibrancy(mut self, kind: impl Into<String>) -> Self {
        self.vibrancy = Some(kind.into());
        self
    }

    pub fn with_zoom_to_page_width(mut self, zoom: bool) -> Self {
        self.zoom_to_page_width = Some(zoom);
        self
    }

    pub fn with_fullscreen_window_title(mut self, show_title: bool) -> Self {
        self.fullscreen_window_title = Some(show_title);
        self
    }

    // Resolved values

    /// The requested size, defaulting to 800x600.
    pub fn size(&self) -> Size {
        Size::new(self.width.unwrap_or(DEFAULT_WIDTH), self.height.unwrap_or(DEFAULT_HEIGHT))
    }

    /// The requested position, if both coordinates were given.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.x.zip(self.y)
    }

    pub fn use_content_size(&self) -> bool {
        self.use_content_size.unwrap_or(false)
    }

    /// Whether to center the window. Defaults to `true` when no position is given.
    pub fn center(&self) -> bool {
        self.center.unwrap_or(self.position().is_none())
    }

    /// The minimum content size; missing axes are unconstrained.
    pub fn min_size(&self) -> Option<Size> {
        if self.min_width.is_none() && self.min_height.is_none() {
            return None;
        }
        Some(Size::new(self.min_width.unwrap_or(0), self.min_height.unwrap_or(0)))
    }

    /// The maximum content size; missing axes are unconstrained.
    pub fn max_size(&self) -> Option<Size> {
        if self.max_width.is_none() && self.max_height.is_none() {
            return None;
        }
        Some(Size::new(
            self.max_width.unwrap_or(i32::MAX),
            self.max_height.unwrap_or(i32::MAX),
        ))
    }

    pub fn resizable(&self) -> bool {
        self.resizable.unwrap_or(true)
    }

    pub fn movable(&self) -> bool {
        self.movable.unwrap_or(true)
    }

    pub fn minimizable(&self) -> bool {
        self.minimizable.unwrap_or(true)
    }

    pub fn maximizable(&self) -> bool {
        self.maximizable.unwrap_or(true)
    }

    /// Whether the full-screen button is enabled.
    pub fn fullscreenable(&self) -> bool {
        self.fullscreenable.unwrap_or(self.fullscreen != Some(false))
    }

    pub fn closable(&self) -> bool {
        self.closable.unwrap_or(true)
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen.unwrap_or(false)
    }

    pub fn kiosk(&self) -> bool {
        self.kiosk.unwrap_or(false)
    }

    pub fn simple_fullscreen(&self) -> bool {
        self.simple_fullscreen.unwrap_or(false)
    }

    pub fn title_bar_style(&self) -> TitleBarStyle {
        self.title_bar_style.unwrap_or_default()
    }

    pub fn has_frame(&self) -> bool {
        self.frame.unwrap_or(true)
    }

    /// The fixed decoration these options describe.
    pub fn decoration(&self) -> Decoration {
        Decoration::new(self.title_bar_style(), self.has_frame())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn show(&self) -> bool {
        self.show.unwrap_or(true)
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top.unwrap_or(false)
    }

    pub fn skip_taskbar(&self) -> bool {
        self.skip_taskbar.unwrap_or(false)
    }

    pub fn has_shadow(&self) -> bool {
        self.has_shadow.unwrap_or(true)
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn vibrancy(&self) -> Option<&str> {
        self.vibrancy.as_deref()
    }

    pub fn zoom_to_page_width(&self) -> bool {
        self.zoom_to_page_width.unwrap_or(false)
    }

    pub fn fullscreen_window_title(&self) -> bool {
        self.fullscreen_window_title.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = WindowOptions::default();
        assert_eq!(options.size(), Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert!(options.center());
        assert!(options.resizable());
        assert!(options.fullscreenable());
        assert!(options.show());
        assert_eq!(options.decoration(), Decoration::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let options = WindowOptions::from_dictionary(&json!({
            "resizable": false,
            "webPreferences": { "sandbox": true },
            "tabbingIdentifier": "docs"
        }))
        .unwrap();
        assert!(!options.resizable());
    }

    #[test]
    fn test_fullscreen_false_disables_fullscreenable() {
        let options = WindowOptions::from_dictionary(&json!({ "fullscreen": false })).unwrap();
        assert!(!options.fullscreenable());

        let value = json!({ "fullscreen": false, "fullscreenable": true });
        let options = WindowOptions::from_dictionary(&value).unwrap();
        assert!(options.fullscreenable());
    }

    #[test]
    fn test_invalid_values_are_dropped() {
        let options = WindowOptions::from_dictionary(&json!({
            "width": "wide",
            "backgroundColor": "#nothex",
            "titleBarStyle": "sideways",
            "height": 300
        }))
        .unwrap();
        assert_eq!(options.size(), Size::new(DEFAULT_WIDTH, 300));
        assert_eq!(options.background_color(), None);
        assert_eq!(options.title_bar_style(), TitleBarStyle::Normal);
    }

    #[test]
    fn test_background_color_parsed() {
        let options =
            WindowOptions::from_dictionary(&json!({ "backgroundColor": "#80FF0000" })).unwrap();
        assert_eq!(options.background_color(), Some(Color::rgba(255, 0, 0, 0x80)));
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            WindowOptions::from_dictionary(&json!([1, 2])),
            Err(WindowError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_size_limits() {
        let options = WindowOptions::new().with_min_size(200, 100);
        assert_eq!(options.min_size(), Some(Size::new(200, 100)));
        assert_eq!(options.max_size(), None);

        let options = WindowOptions::from_dictionary(&json!({ "maxWidth": 1000 })).unwrap();
        assert_eq!(options.max_size(), Some(Size::new(1000, i32::MAX)));
    }
}
