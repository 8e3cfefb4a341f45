//! Core primitives for Horizon Casement.
//!
//! This crate provides the small reactive toolkit the window layer is built on:
//!
//! - **Signal/Slot System**: [`Signal`] for notifying observers of window state changes
//! - **Property System**: [`Property`] for change-detecting values with idempotent setters
//! - **Logging**: tracing target names shared across the workspace
//!
//! # Signal Example
//!
//! ```
//! use horizon_casement_core::Signal;
//!
//! let bounds_changed = Signal::<(i32, i32)>::new();
//!
//! let conn_id = bounds_changed.connect(|(w, h)| {
//!     println!("resized to {w}x{h}");
//! });
//!
//! bounds_changed.emit((800, 600));
//! bounds_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_casement_core::{Property, Signal};
//!
//! struct Flag {
//!     value: Property<bool>,
//!     changed: Signal<bool>,
//! }
//!
//! impl Flag {
//!     fn set(&self, value: bool) {
//!         if self.value.set(value) {
//!             self.changed.emit(value);
//!         }
//!     }
//! }
//!
//! let flag = Flag { value: Property::new(true), changed: Signal::new() };
//! flag.set(false);
//! assert!(!flag.value.get());
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
