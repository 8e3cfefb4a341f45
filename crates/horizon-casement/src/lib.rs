//! Horizon Casement - control of a single top-level application window.
//!
//! The crate models a window's display modes (normal, maximized, minimized,
//! full screen, simple full screen and kiosk) as an explicit state machine
//! and exposes them through [`window::NativeWindow`]. Leaving any special
//! mode restores the window to the state it had before, including when
//! requests arrive while a host animation is still running.
//!
//! # Example
//!
//! ```
//! use horizon_casement::window::{HeadlessHost, NativeWindow, WindowOptions};
//!
//! let options = WindowOptions::from_dictionary(&serde_json::json!({
//!     "width": 1024,
//!     "height": 768,
//!     "titleBarStyle": "hidden"
//! }))?;
//! let mut window = NativeWindow::new(Box::new(HeadlessHost::new()), options);
//! window.maximize();
//! assert!(window.is_maximized());
//! # Ok::<(), horizon_casement::WindowError>(())
//! ```

pub use horizon_casement_core::*;

pub mod color;
pub mod error;
pub mod geometry;
pub mod window;

pub use color::Color;
pub use error::{WindowError, WindowResult};
