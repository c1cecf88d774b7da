use crate::errors::CoreError;

/// Durable string key-value store for UI preferences.
///
/// Stands in for the browser's local storage: the theme preference and the
/// onboarding completion flag are the only keys written. Implementations
/// are used from a single UI thread, so no `Sync` bound is required.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}
