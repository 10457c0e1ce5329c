//! 永続キーバリューストア
//!
//! アノテーションと追加エントリは、固定キーごとに1つのJSON文書として保存する。
//! - MemoryStore: テスト・一時セッション用
//! - FileStore: CLI用（キーごとに `<key>.json`）
//! - ブラウザの localStorage 実装は web-wasm 側

use crate::error::Result;
use std::collections::HashMap;

/// 文字列キー → JSON文字列 のストア
pub trait KeyValueStore {
    /// 値を取得（未保存なら None）
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 文書全体を上書き保存
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// キーを削除（存在しなくてもエラーにしない）
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::KeyValueStore;
    use crate::error::{Error, Result};
    use std::path::PathBuf;

    /// ディレクトリ配下にキーごとのJSONファイルを置くストア（非WASM環境のみ）
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        /// ディレクトリを作成して開く
        pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
            let dir = dir.into();
            std::fs::create_dir_all(&dir)?;
            Ok(Self { dir })
        }

        /// キーに対応するファイルパス
        pub fn path_for(&self, key: &str) -> Result<PathBuf> {
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
                && !key.starts_with('.');
            if !valid {
                return Err(Error::Storage(format!("invalid key: {key:?}")));
            }
            Ok(self.dir.join(format!("{key}.json")))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            let path = self.path_for(key)?;
            match std::fs::read_to_string(&path) {
                Ok(content) => Ok(Some(content)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            let path = self.path_for(key)?;
            // 一時ファイルに書いてから rename（途中で落ちても壊れた文書を残さない）
            let tmp = path.with_extension("json.tmp");
            std::fs::write(&tmp, value)?;
            std::fs::rename(&tmp, &path)?;
            log::debug!("persisted {} ({} bytes)", path.display(), value.len());
            Ok(())
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            let path = self.path_for(key)?;
            match std::fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}
