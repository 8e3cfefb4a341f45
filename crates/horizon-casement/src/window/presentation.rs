//! Application presentation options.
//!
//! Presentation options are process-wide: they control whether the dock and
//! menu bar are visible, whether the user can switch applications, and so on.
//! Rather than reading that global state ambiently, the mode controller is
//! handed a [`PresentationContext`] explicitly.
//!
//! # Lifecycle
//!
//! - [`PresentationContext::global()`] returns the shared, process-wide
//!   instance. It starts out as [`PresentationOptions::DEFAULT`].
//! - [`PresentationContext::new()`] creates an isolated instance, used by
//!   tests and by embedders that manage presentation themselves.
//! - [`PresentationContext::set()`] stores a new value and emits
//!   [`PresentationContext::changed`] when the value actually changed. The
//!   platform layer connects to that signal to apply the options.

use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::sync::{Arc, OnceLock};

use horizon_casement_core::{Property, Signal};

/// A set of application presentation flags.
///
/// Flags combine with bitwise OR.
///
/// ```
/// use horizon_casement::window::PresentationOptions;
///
/// let opts = PresentationOptions::AUTO_HIDE_DOCK | PresentationOptions::AUTO_HIDE_MENU_BAR;
/// assert!(opts.has(PresentationOptions::AUTO_HIDE_DOCK));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresentationOptions(u16);

impl PresentationOptions {
    /// Standard presentation: dock and menu bar visible.
    pub const DEFAULT: PresentationOptions = PresentationOptions(0);

    /// The dock slides in only when the pointer reaches it.
    pub const AUTO_HIDE_DOCK: PresentationOptions = PresentationOptions(1 << 0);

    /// The dock is hidden entirely.
    pub const HIDE_DOCK: PresentationOptions = PresentationOptions(1 << 1);

    /// The menu bar slides in only when the pointer reaches it.
    pub const AUTO_HIDE_MENU_BAR: PresentationOptions = PresentationOptions(1 << 2);

    /// The menu bar is hidden entirely.
    pub const HIDE_MENU_BAR: PresentationOptions = PresentationOptions(1 << 3);

    /// The application menu is disabled.
    pub const DISABLE_APPLE_MENU: PresentationOptions = PresentationOptions(1 << 4);

    /// Switching to other processes is disabled.
    pub const DISABLE_PROCESS_SWITCHING: PresentationOptions = PresentationOptions(1 << 5);

    /// The force-quit panel is disabled.
    pub const DISABLE_FORCE_QUIT: PresentationOptions = PresentationOptions(1 << 6);

    /// Logout/restart/shutdown is disabled.
    pub const DISABLE_SESSION_TERMINATION: PresentationOptions = PresentationOptions(1 << 7);

    /// Hiding the application is disabled.
    pub const DISABLE_HIDE_APPLICATION: PresentationOptions = PresentationOptions(1 << 8);

    /// The application is presenting a native full-screen window.
    pub const FULL_SCREEN: PresentationOptions = PresentationOptions(1 << 9);

    /// Window toolbars auto-hide in full screen.
    pub const AUTO_HIDE_TOOLBAR: PresentationOptions = PresentationOptions(1 << 10);

    /// Options used while a window is in simple full-screen mode.
    pub const SIMPLE_FULLSCREEN: PresentationOptions =
        PresentationOptions(Self::AUTO_HIDE_DOCK.0 | Self::AUTO_HIDE_MENU_BAR.0);

    /// Options used while a window is in kiosk mode.
    pub const KIOSK: PresentationOptions = PresentationOptions(
        Self::HIDE_DOCK.0
            | Self::HIDE_MENU_BAR.0
            | Self::DISABLE_APPLE_MENU.0
            | Self::DISABLE_PROCESS_SWITCHING.0
            | Self::DISABLE_FORCE_QUIT.0
            | Self::DISABLE_SESSION_TERMINATION.0
            | Self::DISABLE_HIDE_APPLICATION.0,
    );

    /// Check if all flags in `flag` are set.
    pub fn has(&self, flag: PresentationOptions) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// The raw bit pattern.
    pub fn bits(&self) -> u16 {
        self.0
    }
}

impl BitOr for PresentationOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        PresentationOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for PresentationOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PresentationOptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        PresentationOptions(self.0 & rhs.0)
    }
}

struct PresentationState {
    options: Property<PresentationOptions>,
    changed: Signal<PresentationOptions>,
}

/// Shared handle to the process-wide presentation options.
///
/// Cloning the handle shares the underlying state.
#[derive(Clone)]
pub struct PresentationContext {
    inner: Arc<PresentationState>,
}

static GLOBAL_PRESENTATION: OnceLock<PresentationContext> = OnceLock::new();

impl PresentationContext {
    /// Create an isolated context starting at [`PresentationOptions::DEFAULT`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PresentationState {
                options: Property::new(PresentationOptions::DEFAULT),
                changed: Signal::new(),
            }),
        }
    }

    /// Get the process-wide context.
    ///
    /// Initializes the context on first call.
    pub fn global() -> &'static PresentationContext {
        GLOBAL_PRESENTATION.get_or_init(PresentationContext::new)
    }

    /// The current presentation options.
    pub fn get(&self) -> PresentationOptions {
        self.inner.options.get()
    }

    /// Replace the presentation options.
    ///
    /// Returns `true` and emits [`changed`](Self::changed) if the value changed.
    pub fn set(&self, options: PresentationOptions) -> bool {
        if self.inner.options.set(options) {
            tracing::debug!(
                target: horizon_casement_core::logging::targets::MODE,
                bits = options.bits(),
                "presentation options changed"
            );
            self.inner.changed.emit(options);
            true
        } else {
            false
        }
    }

    /// Signal emitted with the new options whenever they change.
    pub fn changed(&self) -> &Signal<PresentationOptions> {
        &self.inner.changed
    }

    /// Check whether two handles share the same underlying state.
    pub fn same_context(&self, other: &PresentationContext) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for PresentationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PresentationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationContext")
            .field("options", &self.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(PresentationContext: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_presentation_flags() {
        let kiosk = PresentationOptions::KIOSK;
        assert!(kiosk.has(PresentationOptions::HIDE_DOCK));
        assert!(kiosk.has(PresentationOptions::DISABLE_FORCE_QUIT));
        assert!(!kiosk.has(PresentationOptions::AUTO_HIDE_DOCK));

        let simple = PresentationOptions::SIMPLE_FULLSCREEN;
        assert!(simple.has(PresentationOptions::AUTO_HIDE_MENU_BAR));
        assert_eq!(simple & PresentationOptions::HIDE_DOCK, PresentationOptions::DEFAULT);
    }

    #[test]
    fn test_context_set_emits_once() {
        let ctx = PresentationContext::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        ctx.changed().connect(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });

        assert!(ctx.set(PresentationOptions::KIOSK));
        assert!(!ctx.set(PresentationOptions::KIOSK));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.get(), PresentationOptions::KIOSK);
    }

    #[test]
    fn test_contexts_are_isolated() {
        let a = PresentationContext::new();
        let b = PresentationContext::new();
        a.set(PresentationOptions::HIDE_DOCK);
        assert_eq!(b.get(), PresentationOptions::DEFAULT);
        assert!(a.same_context(&a.clone()));
        assert!(!a.same_context(&b));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(PresentationContext::global().same_context(PresentationContext::global()));
    }
}
