//! 静的データセット
//!
//! 起動時に一度だけ読み込み、以後は変更しない。
//! バンドル版は `assets/` のJSONを `include_str!` で埋め込む。

use crate::attendee::Attendee;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::exhibitor::Exhibitor;
use std::collections::HashSet;

const BUNDLED_EXHIBITORS: &str = include_str!("../assets/exhibitors.json");
const BUNDLED_ATTENDEES: &str = include_str!("../assets/attendees.json");

#[derive(Debug, Clone)]
pub struct Dataset<E> {
    entities: Vec<E>,
    ids: HashSet<String>,
}

impl<E: Entity> Dataset<E> {
    /// IDの一意性と予約接頭辞をチェックして構築
    pub fn from_entities(entities: Vec<E>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(entities.len());
        for entity in &entities {
            let id = entity.id();
            if id.is_empty() {
                return Err(Error::Dataset(format!("entry '{}' has no id", entity.name())));
            }
            if id.starts_with(E::CREATED_PREFIX) {
                return Err(Error::Dataset(format!(
                    "id '{}' uses the reserved prefix '{}'",
                    id,
                    E::CREATED_PREFIX
                )));
            }
            if !ids.insert(id.to_string()) {
                return Err(Error::Dataset(format!("duplicate id '{}'", id)));
            }
        }
        Ok(Self { entities, ids })
    }

    /// 空のデータセット（読み込み失敗時の代替）
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let entities: Vec<E> = serde_json::from_str(json)?;
        Self::from_entities(entities)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// バンドル済みデータセットを持つ系統
pub trait Bundled: Entity {
    fn bundled() -> Result<Dataset<Self>>;
}

impl Bundled for Exhibitor {
    fn bundled() -> Result<Dataset<Self>> {
        Dataset::from_json(BUNDLED_EXHIBITORS)
    }
}

impl Bundled for Attendee {
    fn bundled() -> Result<Dataset<Self>> {
        Dataset::from_json(BUNDLED_ATTENDEES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_datasets_parse() {
        let exhibitors = Exhibitor::bundled().expect("出展者データ読み込み失敗");
        assert!(!exhibitors.is_empty());
        assert!(exhibitors.contains("ex-1"));

        let attendees = Attendee::bundled().expect("参加者データ読み込み失敗");
        assert!(!attendees.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[{"iid": "ex-1", "名称": "A"}, {"iid": "ex-1", "名称": "B"}]"#;
        let err = Dataset::<Exhibitor>::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn test_reserved_prefix_rejected() {
        let json = r#"[{"iid": "xf-1", "名称": "A"}]"#;
        assert!(Dataset::<Exhibitor>::from_json(json).is_err());
    }

    #[test]
    fn test_preserves_order() {
        let json = r#"[{"iid": "b", "名称": "B"}, {"iid": "a", "名称": "A"}]"#;
        let ds = Dataset::<Exhibitor>::from_json(json).unwrap();
        let ids: Vec<&str> = ds.entities().iter().map(|e| e.iid.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(ds.get("a").map(|e| e.name.as_str()), Some("A"));
    }
}
