//! Lock used for interior mutability of the game.
//!
//! Both backends expose the same `lock` signature returning a guard that
//! derefs to `T`.

#[cfg(feature = "std")]
pub type MutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type MutexGuard<'a, T> = spin::MutexGuard<'a, T>;

#[derive(Debug)]
pub struct Mutex<T> {
    #[cfg(feature = "std")]
    inner: std::sync::Mutex<T>,
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    inner: spin::Mutex<T>,
}

impl<T> Mutex<T> {
    #[cfg(feature = "std")]
    pub const fn new(value: T) -> Self {
        Self {
            inner: std::sync::Mutex::new(value),
        }
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub const fn new(value: T) -> Self {
        Self {
            inner: spin::Mutex::new(value),
        }
    }

    /// Locks the value. A poisoned lock still yields its data; every
    /// critical section leaves the game in a consistent state.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }
}
