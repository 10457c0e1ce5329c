//! localStorage をバックエンドにしたキーバリューストア

use gloo::storage::{LocalStorage, Storage};
use trade_tracker_common::{Error, KeyValueStore, Result};
use wasm_bindgen::JsValue;

/// ブラウザの localStorage（状態を持たない）
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn storage_error(op: &str, key: &str, e: JsValue) -> Error {
    Error::Storage(format!("localStorage {op} '{key}': {e:?}"))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| storage_error("get", key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| storage_error("set", key, e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| storage_error("remove", key, e))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip() {
        let mut store = LocalStorageStore;
        store.set("trade-tracker-test", "{\"a\":1}").unwrap();
        assert_eq!(
            store.get("trade-tracker-test").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        store.remove("trade-tracker-test").unwrap();
        assert_eq!(store.get("trade-tracker-test").unwrap(), None);
    }
}
