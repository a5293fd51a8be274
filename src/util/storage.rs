//! Browser localStorage helpers for JSON values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads through these helpers. Outside the
//! browser every read misses and every write is a no-op. Failures are
//! logged and otherwise ignored; a lost write only costs a re-login.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        log::warn!("localStorage unavailable");
    }
    storage
}

/// Read and decode the JSON stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw)
            .inspect_err(|e| log::warn!("discarding stored {key}: {e}"))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encode `value` and store it under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else { return };
        match serde_json::to_string(value) {
            Ok(raw) => {
                if storage.set_item(key, &raw).is_err() {
                    log::warn!("failed to store {key}");
                }
            }
            Err(e) => log::warn!("failed to encode {key}: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage()
            && storage.remove_item(key).is_err()
        {
            log::warn!("failed to remove {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
