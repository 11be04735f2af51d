//! The thread-safe image of an engine.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// An engine moved behind a shared lock.
///
/// Produced by [`DataEngine::thread_safe_image`](crate::DataEngine::thread_safe_image),
/// which consumes the engine: the unsynchronized instance no longer exists,
/// so every access goes through the lock. Cloning the handle shares the
/// engine.
#[derive(Debug)]
pub struct SharedEngine<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SharedEngine<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedEngine<T> {
    pub fn new(engine: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Blocks until the engine is available.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }

    /// Runs `f` with shared access to the engine.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Recovers the engine if this is the last handle.
    pub fn try_unwrap(self) -> Result<T, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }

    pub fn is_thread_safe(&self) -> bool {
        true
    }

    /// Number of live handles.
    pub fn handles(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}
