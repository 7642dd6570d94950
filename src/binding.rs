//! Caller-visible output cells

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared storage for one parsed variable.
///
/// The registry keeps one clone and writes into it during a parse pass, the
/// caller keeps the other and reads the value afterwards. Until the first
/// parse the cell holds `T::default()`.
pub struct Binding<T> {
    cell: Arc<Mutex<T>>,
}

impl<T: Clone + Default> Binding<T> {
    pub(crate) fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(T::default())),
        }
    }

    /// Current value of the cell
    pub fn get(&self) -> T {
        self.cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set(&self, value: T) {
        *self.cell.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

// Derive would add a `T: Clone` bound the Arc does not need
impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_tuple("Binding").field(&*guard).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        fmt::Display::fmt(&*guard, f)
    }
}
