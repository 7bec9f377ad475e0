use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

use api::theme::{DARK_MODE_KEY, PreferenceStore, storage_key};

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal first-visit case and is not logged
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// the theme flag, stored as a json boolean so the raw value reads "true"/"false"
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn load_dark_mode(&self) -> Option<bool> {
        get_local_storage(DARK_MODE_KEY).ok().flatten()
    }

    fn store_dark_mode(&mut self, dark: bool) {
        set_local_storage(DARK_MODE_KEY, dark)
    }
}
