//! [`StoreHandle`] — the shared slot through which handlers reach the store.
//!
//! The slot is filled once, at startup, with the store returned by the
//! backend's connect call. Handlers borrow it per request. Reading an empty
//! slot fails with [`HandleError::NotInitialized`], which is reported
//! separately from storage failures.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandleError {
  #[error("database not connected: no store has been installed")]
  NotInitialized,

  #[error("database already connected: the store handle is set once")]
  AlreadyInitialized,
}

/// A set-once, read-many reference to a store.
///
/// Cloning is cheap; all clones share the same slot.
pub struct StoreHandle<S> {
  slot: Arc<OnceLock<S>>,
}

impl<S> Clone for StoreHandle<S> {
  fn clone(&self) -> Self {
    Self {
      slot: Arc::clone(&self.slot),
    }
  }
}

impl<S> Default for StoreHandle<S> {
  fn default() -> Self { Self::empty() }
}

impl<S> StoreHandle<S> {
  /// A handle with nothing installed yet.
  pub fn empty() -> Self {
    Self {
      slot: Arc::new(OnceLock::new()),
    }
  }

  /// A handle already holding `store`.
  pub fn new(store: S) -> Self {
    Self {
      slot: Arc::new(OnceLock::from(store)),
    }
  }

  /// Install `store`. A handle is never reassigned: a second call fails and
  /// leaves the first store in place.
  pub fn install(&self, store: S) -> Result<(), HandleError> {
    self
      .slot
      .set(store)
      .map_err(|_| HandleError::AlreadyInitialized)
  }

  /// Borrow the installed store.
  pub fn get(&self) -> Result<&S, HandleError> {
    self.slot.get().ok_or(HandleError::NotInitialized)
  }

  pub fn is_initialized(&self) -> bool { self.slot.get().is_some() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_handle_is_not_initialized() {
    let handle: StoreHandle<u8> = StoreHandle::empty();
    assert!(!handle.is_initialized());
    assert_eq!(handle.get(), Err(HandleError::NotInitialized));
  }

  #[test]
  fn install_is_visible_through_clones() {
    let handle = StoreHandle::empty();
    let clone = handle.clone();
    handle.install(7u8).unwrap();
    assert_eq!(clone.get(), Ok(&7));
  }

  #[test]
  fn second_install_is_rejected() {
    let handle = StoreHandle::new(1u8);
    assert_eq!(handle.install(2), Err(HandleError::AlreadyInitialized));
    assert_eq!(handle.get(), Ok(&1));
  }
}
