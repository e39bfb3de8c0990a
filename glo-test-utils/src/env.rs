//! Environment variable management for testing
//!
//! Tests that read configuration from the environment override variables
//! through [`EnvTestGuard`], which restores the previous values on drop.

use std::env;

/// Overrides a set of environment variables for the lifetime of the guard
#[derive(Default)]
pub struct EnvTestGuard {
  /// Original values, restored on drop
  saved: Vec<(String, Option<String>)>,
}

impl EnvTestGuard {
  /// Create a guard that has not touched the environment yet
  pub fn new() -> Self {
    Self::default()
  }

  /// Set `key` to `value`, remembering its previous value
  pub fn set(mut self, key: &str, value: &str) -> Self {
    self.remember(key);
    unsafe {
      env::set_var(key, value);
    }
    self
  }

  /// Remove `key`, remembering its previous value
  pub fn remove(mut self, key: &str) -> Self {
    self.remember(key);
    unsafe {
      env::remove_var(key);
    }
    self
  }

  fn remember(&mut self, key: &str) {
    if self.saved.iter().any(|(k, _)| k == key) {
      return;
    }
    self.saved.push((key.to_string(), env::var(key).ok()));
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    // Restore in reverse order of first modification
    for (key, original) in self.saved.iter().rev() {
      match original {
        Some(val) => unsafe {
          env::set_var(key, val);
        },
        None => unsafe {
          env::remove_var(key);
        },
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_restores_values() {
    let key = "GLO_TEST_UTILS_GUARD_RESTORE";
    unsafe {
      env::set_var(key, "original");
    }

    {
      let _guard = EnvTestGuard::new().set(key, "override");
      assert_eq!(env::var(key).as_deref(), Ok("override"));
    }

    assert_eq!(env::var(key).as_deref(), Ok("original"));
    unsafe {
      env::remove_var(key);
    }
  }

  #[test]
  fn test_guard_removes_new_values() {
    let key = "GLO_TEST_UTILS_GUARD_REMOVE";

    {
      let _guard = EnvTestGuard::new().set(key, "temporary").set(key, "again");
      assert_eq!(env::var(key).as_deref(), Ok("again"));
    }

    assert!(env::var(key).is_err());
  }
}
