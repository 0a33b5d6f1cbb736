//! Guarded access to the shared stores.
//!
//! A poisoned lock means a writer panicked mid-update; the store contents can
//! no longer be trusted, so the failure surfaces as a storage backend error
//! instead of panicking the caller too.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use domo_domain::error::{DomoError, StorageError};

pub(crate) fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, DomoError> {
    lock.read()
        .map_err(|_| StorageError::Backend("store lock poisoned".to_owned()).into())
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, DomoError> {
    lock.write()
        .map_err(|_| StorageError::Backend("store lock poisoned".to_owned()).into())
}
