//! Title bar styles and content/window bounds conversion.
//!
//! The window frame is the full rectangle including the title bar; the
//! content bounds are the drawable area. The mapping between the two depends
//! only on the decoration, which is fixed when the window is created, so the
//! conversions are pure and exact inverses of one another.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Insets, Rect};

/// Height of the standard title bar in logical pixels.
pub const TITLE_BAR_HEIGHT: i32 = 28;

/// The title bar style of a window.
///
/// Chosen at creation time; it cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleBarStyle {
    /// Standard opaque title bar.
    #[default]
    #[serde(alias = "default")]
    Normal,
    /// Title bar hidden; content extends under the traffic-light buttons.
    Hidden,
    /// Hidden title bar with the buttons inset from the edge.
    HiddenInset,
    /// Frameless; custom buttons appear when hovering the top-left corner.
    CustomButtonsOnHover,
}

impl TitleBarStyle {
    /// Whether content fills the whole frame (no title bar inset).
    pub fn has_full_size_content(self) -> bool {
        !matches!(self, TitleBarStyle::Normal)
    }

    /// Whether the style draws its own window buttons.
    pub fn has_custom_buttons(self) -> bool {
        matches!(self, TitleBarStyle::CustomButtonsOnHover)
    }
}

impl FromStr for TitleBarStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" | "normal" => Ok(TitleBarStyle::Normal),
            "hidden" => Ok(TitleBarStyle::Hidden),
            "hiddenInset" => Ok(TitleBarStyle::HiddenInset),
            "customButtonsOnHover" => Ok(TitleBarStyle::CustomButtonsOnHover),
            other => Err(format!("unknown title bar style {other:?}")),
        }
    }
}

/// The fixed decoration state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoration {
    title_bar_style: TitleBarStyle,
    has_frame: bool,
}

impl Decoration {
    /// Create a decoration from a title bar style and frame presence.
    pub fn new(title_bar_style: TitleBarStyle, has_frame: bool) -> Self {
        Self {
            title_bar_style,
            has_frame,
        }
    }

    /// The title bar style.
    pub fn title_bar_style(&self) -> TitleBarStyle {
        self.title_bar_style
    }

    /// Whether the window has a native frame.
    pub fn has_frame(&self) -> bool {
        self.has_frame
    }

    /// Whether custom window buttons are in use.
    pub fn has_custom_buttons(&self) -> bool {
        self.title_bar_style.has_custom_buttons()
    }

    /// The space the decoration adds around the content area.
    pub fn insets(&self) -> Insets {
        if self.has_frame && !self.title_bar_style.has_full_size_content() {
            Insets::new(TITLE_BAR_HEIGHT, 0, 0, 0)
        } else {
            Insets::ZERO
        }
    }

    /// Convert content bounds to the enclosing window frame.
    pub fn content_bounds_to_window_bounds(&self, content: Rect) -> Rect {
        content.outset(self.insets())
    }

    /// Convert a window frame to its content bounds.
    pub fn window_bounds_to_content_bounds(&self, window: Rect) -> Rect {
        window.inset(self.insets())
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self::new(TitleBarStyle::Normal, true)
    }
}
