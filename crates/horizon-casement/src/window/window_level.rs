//! Window levels (z-ordering bands).
//!
//! A window's level is an integer; higher levels are stacked above lower
//! ones. Named levels give the well-known bands, and callers may offset a
//! named level by a relative amount.

use std::fmt;
use std::str::FromStr;

use crate::error::WindowError;

/// Smallest absolute window level accepted by [`WindowLevel::resolve`].
pub const MIN_WINDOW_LEVEL: i64 = i32::MIN as i64 + 1;
/// Largest absolute window level accepted by [`WindowLevel::resolve`].
pub const MAX_WINDOW_LEVEL: i64 = i32::MAX as i64 - 15;

/// A named window level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowLevel {
    /// Regular application windows.
    #[default]
    Normal,
    /// Floating palettes above normal windows.
    Floating,
    /// Torn-off menus.
    TornOffMenu,
    /// Modal panels.
    ModalPanel,
    /// The application main menu band.
    MainMenu,
    /// Status items.
    Status,
    /// Pop-up menus.
    PopUpMenu,
    /// Screen savers; above almost everything.
    ScreenSaver,
    /// The dock band.
    Dock,
}

impl WindowLevel {
    /// The numeric value of this level.
    pub const fn value(self) -> i32 {
        match self {
            WindowLevel::Normal => 0,
            WindowLevel::Floating | WindowLevel::TornOffMenu => 3,
            WindowLevel::ModalPanel => 8,
            WindowLevel::Dock => 20,
            WindowLevel::MainMenu => 24,
            WindowLevel::Status => 25,
            WindowLevel::PopUpMenu => 101,
            WindowLevel::ScreenSaver => 1000,
        }
    }

    /// The level name as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            WindowLevel::Normal => "normal",
            WindowLevel::Floating => "floating",
            WindowLevel::TornOffMenu => "torn-off-menu",
            WindowLevel::ModalPanel => "modal-panel",
            WindowLevel::MainMenu => "main-menu",
            WindowLevel::Status => "status",
            WindowLevel::PopUpMenu => "pop-up-menu",
            WindowLevel::ScreenSaver => "screen-saver",
            WindowLevel::Dock => "dock",
        }
    }

    /// Apply a relative offset and validate the resulting absolute level.
    pub fn resolve(self, relative_level: i32) -> Result<i32, WindowError> {
        let level = i64::from(self.value()) + i64::from(relative_level);
        if (MIN_WINDOW_LEVEL..=MAX_WINDOW_LEVEL).contains(&level) {
            // In range, so the narrowing cannot truncate.
            Ok(level as i32)
        } else {
            Err(WindowError::RelativeLevelOutOfRange {
                min: MIN_WINDOW_LEVEL,
                max: MAX_WINDOW_LEVEL,
            })
        }
    }
}

impl FromStr for WindowLevel {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "normal" => WindowLevel::Normal,
            "floating" => WindowLevel::Floating,
            "torn-off-menu" => WindowLevel::TornOffMenu,
            "modal-panel" => WindowLevel::ModalPanel,
            "main-menu" => WindowLevel::MainMenu,
            "status" => WindowLevel::Status,
            "pop-up-menu" => WindowLevel::PopUpMenu,
            "screen-saver" => WindowLevel::ScreenSaver,
            "dock" => WindowLevel::Dock,
            other => {
                return Err(WindowError::InvalidLevel {
                    level: other.to_string(),
                });
            }
        })
    }
}

impl fmt::Display for WindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
