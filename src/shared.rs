//! Strip shared between tasks
//!
//! The strip itself does no locking. `SharedStrip` serialises access with a
//! critical section, which makes it usable from interrupt handlers and
//! multiple executors alike.

use core::cell::RefCell;

use critical_section::Mutex;

/// A strip guarded by a critical section
///
/// Interrupts are masked for the duration of [`SharedStrip::lock`], so keep
/// the closure short and never call `delay` from it.
pub struct SharedStrip<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> SharedStrip<T> {
    pub const fn new(strip: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(strip)),
        }
    }

    /// Run `f` with exclusive access to the strip
    ///
    /// Panics if called re-entrantly from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| {
            let mut strip = self.inner.borrow(cs).borrow_mut();
            f(&mut strip)
        })
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner().into_inner()
    }
}
