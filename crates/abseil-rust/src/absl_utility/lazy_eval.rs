//! Lazy evaluation utilities.

use core::ops::Deref;

/// A lazily computed value (thread-safe).
///
/// The value is computed on first access and then cached.
/// This implementation uses `std::sync::OnceLock` for thread safety.
///
/// # Examples
///
/// ```rust
/// use abseil::absl_utility::lazy_eval::Lazy;
///
/// let lazy = Lazy::new(|| {
///     println!("Computing...");
///     42
/// });
/// assert_eq!(*lazy, 42);
/// assert_eq!(*lazy, 42);  // Uses cached value
/// ```
///
/// # Thread Safety
///
/// This implementation is thread-safe. Multiple threads can access
/// the Lazy value simultaneously, and the initialization function
/// will only be called once.
pub struct Lazy<T, F: FnOnce() -> T> {
    state: std::sync::OnceLock<T>,
    init: core::cell::UnsafeCell<Option<F>>,
}

// Safety: The init field is only accessed during initialization,
// which is protected by OnceLock's internal synchronization.
// After initialization, init is never accessed again.
unsafe impl<T: Send, F: Send + FnOnce() -> T> Send for Lazy<T, F> {}
unsafe impl<T: Sync, F: Sync + FnOnce() -> T> Sync for Lazy<T, F> {}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value with the given initialization function.
    #[inline]
    pub fn new(init: F) -> Self {
        Lazy {
            state: std::sync::OnceLock::new(),
            init: core::cell::UnsafeCell::new(Some(init)),
        }
    }

    /// Forces evaluation and returns a reference to the value.
    ///
    /// This method is thread-safe. Multiple threads calling this
    /// simultaneously will block until the value is initialized,
    /// then all will see the same value.
    #[inline]
    fn force(&self) -> &T {
        self.state.get_or_init(|| unsafe {
            // Safety: We only access init when the OnceLock is not yet initialized.
            // OnceLock::get_or_init ensures this is called at most once.
            // After taking the init function, we never access init again.
            let init = self.init.get().take().unwrap();
            init()
        })
    }
}

impl<T, F: FnOnce() -> T> Deref for Lazy<T, F> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.force()
    }
}
