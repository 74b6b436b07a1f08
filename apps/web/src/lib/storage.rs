//! `localStorage` backend for the persisted session record.

use admin_session::{Error, SessionStorage};
use web_sys::Storage;

/// Browser storage scoped to the current origin.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage, Error> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|_| Error::Storage("localStorage access denied".to_string()))?
            .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| Error::Storage(format!("failed to read {key}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| Error::Storage(format!("failed to write {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| Error::Storage(format!("failed to remove {key}")))
    }
}
