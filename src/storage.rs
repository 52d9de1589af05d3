//! Browser Storage Adapter
//!
//! `KeyValueStorage` over `window.localStorage`.

use project_store::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;

/// Handle to the page's local storage.
///
/// The `Storage` object is looked up on every call, so the handle itself
/// holds no JS value and can live inside reactive state.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// `Some` when the runtime exposes local storage
    pub fn probe() -> Option<Self> {
        match local_storage() {
            Ok(_) => Some(Self),
            Err(e) => {
                log::debug!("[STORAGE] localStorage not available: {}", e);
                None
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or(StorageError::Unavailable)
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
