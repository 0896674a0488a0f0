// SPDX-License-Identifier: MPL-2.0
//! Concrete tool managers (transform, filter).

pub mod filter;
pub mod transform;

pub use filter::{FilterManager, FILTER_PRESETS, NO_FILTER};
pub use transform::{TransformManager, TransformState};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a tool's session, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
