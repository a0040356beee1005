// tests/helpers/env.rs
// Scoped override of one environment variable. Restores the previous value on drop.
// Tests using it must be #[serial]: the environment is process-global.

use std::env;
use std::ffi::OsString;

#[derive(Debug)]
pub struct ScopedEnv {
    key: String,
    prev: Option<OsString>,
}

impl ScopedEnv {
    pub fn set(key: &str, value: impl Into<OsString>) -> Self {
        let prev = env::var_os(key);
        env::set_var(key, value.into());
        ScopedEnv { key: key.to_string(), prev }
    }

    pub fn unset(key: &str) -> Self {
        let prev = env::var_os(key);
        env::remove_var(key);
        ScopedEnv { key: key.to_string(), prev }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => env::set_var(&self.key, v),
            None => env::remove_var(&self.key),
        }
    }
}
