//! Logging facilities for Horizon Casement.
//!
//! Horizon Casement uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_casement::mode=debug")
//!     .init();
//! ```
//!
//! Mode transitions are logged at `debug`, ignored requests at `debug` and
//! stale transition completions at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_casement_core::signal";
    /// Window mode state machine target.
    pub const MODE: &str = "horizon_casement::mode";
    /// Transition token and queue target.
    pub const TRANSITION: &str = "horizon_casement::transition";
    /// Size and aspect ratio constraint target.
    pub const CONSTRAINTS: &str = "horizon_casement::constraints";
    /// Host window system target.
    pub const HOST: &str = "horizon_casement::host";
    /// Public window facade target.
    pub const FACADE: &str = "horizon_casement::facade";
    /// Creation options target.
    pub const CONFIG: &str = "horizon_casement::config";
}

/// Span names used for tracing.
pub mod span_names {
    /// A single mode transition request.
    pub const MODE_REQUEST: &str = "horizon_casement::mode_request";
    /// Processing of a host event.
    pub const HOST_EVENT: &str = "horizon_casement::host_event";
}

/// Debug-level log under the mode target.
#[macro_export]
macro_rules! mode_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::MODE, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::MODE,
            targets::TRANSITION,
            targets::CONSTRAINTS,
            targets::HOST,
            targets::FACADE,
            targets::CONFIG,
        ] {
            assert!(target.starts_with("horizon_casement::"));
        }
    }

    #[test]
    fn test_mode_debug_macro_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("horizon_casement=debug")
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            crate::mode_debug!(from = "normal", to = "kiosk", "transition");
        });
    }
}
