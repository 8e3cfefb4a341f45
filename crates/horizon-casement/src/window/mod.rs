//! Window control module.
//!
//! This module provides [`NativeWindow`], the control surface of a single
//! top-level window, together with the pieces it is built from.
//!
//! # Modes
//!
//! A window is in exactly one [`ModeState`]: normal, minimized, maximized,
//! full screen, simple full screen or kiosk. The [`ModeController`] moves
//! between them, capturing a [`TransitionSnapshot`] on entry to simple full
//! screen and kiosk so that leaving restores the window exactly:
//!
//! ```
//! use horizon_casement::window::{
//!     Collaborators, HeadlessHost, ModeState, NativeWindow, PresentationContext, WindowOptions,
//! };
//!
//! let mut window = NativeWindow::with_context(
//!     Box::new(HeadlessHost::new()),
//!     WindowOptions::new(),
//!     Collaborators::new(),
//!     PresentationContext::new(),
//! );
//!
//! window.set_full_screen(true);
//! window.set_kiosk(true);
//! window.set_kiosk(false);
//! assert_eq!(window.mode(), ModeState::Fullscreen);
//! ```
//!
//! # Hosts
//!
//! The window layer never owns the platform window. It commands a
//! [`HostWindow`]: [`HeadlessHost`] keeps everything in memory, and
//! `WinitHost` (feature `winit-host`) drives a `winit` window.

mod collaborators;
mod constraints;
mod decoration;
mod headless;
mod host;
mod mode;
mod mode_controller;
mod native_window;
mod overlay_icon;
mod presentation;
mod properties;
mod transition;
mod window_level;
mod window_options;
#[cfg(feature = "winit-host")]
mod winit_host;

pub use collaborators::{
    Collaborators, ContentView, FilePreview, ProgressState, TabGroup, TaskbarIntegration,
    TaskbarProgress, TouchBar, TouchBarItem, TouchBarItemKind, VibrancyEffect,
};
pub use constraints::{AspectRatio, ConstraintEngine, Constrained, ResizeEdge, SizeConstraints};
pub use decoration::{Decoration, TITLE_BAR_HEIGHT, TitleBarStyle};
pub use headless::{HeadlessHost, HostCall, MENU_BAR_HEIGHT};
pub use host::{HostEvent, HostTransition, HostWindow, NativeWindowId};
pub use mode::{ModeStack, ModeState, TransitionSnapshot};
pub use mode_controller::{ModeBehavior, ModeController};
pub use native_window::NativeWindow;
pub use overlay_icon::{IconError, MAX_OVERLAY_ICON_SIZE, OverlayIcon};
pub use presentation::{PresentationContext, PresentationOptions};
pub use properties::{Capability, WindowProperties};
pub use transition::{Admission, ModeRequest, TransitionToken, TransitionTracker};
pub use window_level::{MAX_WINDOW_LEVEL, MIN_WINDOW_LEVEL, WindowLevel};
pub use window_options::{DEFAULT_HEIGHT, DEFAULT_WIDTH, WindowOptions};
#[cfg(feature = "winit-host")]
pub use winit_host::WinitHost;
