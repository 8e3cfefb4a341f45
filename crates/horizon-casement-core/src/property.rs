//! Change-detecting value cells.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually changed
//! it. Window attributes are stored in properties so every setter is
//! idempotent: re-applying the current value returns `false` and the caller
//! skips its change notification.
//!
//! # Example
//!
//! ```
//! use horizon_casement_core::Property;
//!
//! let opacity = Property::new(1.0_f64);
//! assert!(!opacity.set(1.0));
//! assert!(opacity.set(0.5));
//! assert_eq!(opacity.get(), 0.5);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell with change detection.
///
/// Writes go through `&self`, so a window can hand out `&WindowProperties`
/// to the mode controller while still updating individual attributes.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// The current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`, returning `true` if it differs from the current one.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current == value {
            return false;
        }
        *current = value;
        true
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let prop = Property::new(42);
        assert!(!prop.set(42));
        assert!(prop.set(7));
        assert_eq!(prop.get(), 7);
    }

    #[test]
    fn test_nan_never_compares_equal() {
        // f64 properties must not be fed NaN; hosts normalise it first.
        let prop = Property::new(f64::NAN);
        assert!(prop.set(f64::NAN));
    }

    #[test]
    fn test_default_uses_type_default() {
        let prop: Property<Option<bool>> = Property::default();
        assert_eq!(prop.get(), None);
        assert_eq!(format!("{prop:?}"), "Property(None)");
    }
}
