//! Environment isolation for path tests.

use std::env;
use std::sync::Mutex;

/// Serializes tests that read or write `CLOSET_DATA_DIR`.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores an environment variable to its previous value on drop.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: still under ENV_LOCK; the guard drops before the lock.
        unsafe {
            match &self.previous {
                Some(value) => env::set_var(&self.key, value),
                None => env::remove_var(&self.key),
            }
        }
    }
}
