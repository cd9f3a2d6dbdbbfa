//! Scoped `QATRACK_DATA_DIR` overrides for path tests.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::platform::DATA_DIR_ENV;

/// Only one override may be live at a time; the process environment is shared
/// by every test thread.
static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Holds the data-dir override for the lifetime of a test.
///
/// The lock is taken before the variable is written and released only after
/// the previous value has been put back.
pub struct DataDirOverride {
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl DataDirOverride {
    /// Point `QATRACK_DATA_DIR` at `value` until the guard is dropped.
    #[allow(unsafe_code)]
    pub fn set(value: &str) -> Self {
        // A test that panicked while holding the lock already restored the
        // variable in its own drop.
        let lock = DATA_DIR_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = env::var(DATA_DIR_ENV).ok();
        // SAFETY: DATA_DIR_LOCK is held, so no other test thread touches the environment.
        unsafe { env::set_var(DATA_DIR_ENV, value) };
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for DataDirOverride {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        let previous = self.previous.take();
        // SAFETY: the lock field is still held while drop runs.
        unsafe {
            match previous {
                Some(value) => env::set_var(DATA_DIR_ENV, value),
                None => env::remove_var(DATA_DIR_ENV),
            }
        }
    }
}
