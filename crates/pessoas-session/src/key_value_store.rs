use crate::SessionResult;

/// Persistent string key/value storage on the client.
///
/// Multi-key writes and removals are all-or-nothing: readers never observe
/// half of a `set_all`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set_all(&self, entries: &[(&str, &str)]) -> SessionResult<()>;

    /// Removing a key that is not present is not an error.
    fn remove_all(&self, keys: &[&str]) -> SessionResult<()>;
}
