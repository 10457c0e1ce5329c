//! 表示言語の設定
//!
//! 文言テーブルは各フロントエンド側。ここでは選択値の永続化のみ。

use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};

pub const LANGUAGE_KEY: &str = "side-event-lang-pref";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// 保存値を読む（未保存・不明な値は既定の Zh）
    pub fn load<B: KeyValueStore + ?Sized>(backend: &B) -> Self {
        match backend.get(LANGUAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_default(),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("failed to read language preference: {}", e);
                Self::default()
            }
        }
    }

    pub fn save<B: KeyValueStore + ?Sized>(self, backend: &mut B) {
        if let Err(e) = backend.set(LANGUAGE_KEY, self.as_str()) {
            log::warn!("failed to save language preference: {}", e);
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            _ => Err(format!("Unknown language: {}. Use en or zh", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_is_zh() {
        let store = MemoryStore::new();
        assert_eq!(Language::load(&store), Language::Zh);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        Language::En.save(&mut store);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
        assert_eq!(Language::load(&store), Language::En);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "fr").unwrap();
        assert_eq!(Language::load(&store), Language::Zh);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::En.toggle(), Language::Zh);
        assert_eq!(Language::Zh.toggle().toggle(), Language::Zh);
    }
}
