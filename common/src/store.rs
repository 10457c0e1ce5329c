//! アノテーションストア
//!
//! id → Annotation のマップ、ユーザー追加エントリの配列、上書き項目のマップを保持し、
//! 変更のたびに該当する文書全体を KeyValueStore へ書き戻す。
//! メモリ上の状態が常に正で、永続化の失敗は警告ログのみ（呼び出し側には返さない）。

use crate::dataset::Dataset;
use crate::entity::{Annotation, Entity};
use crate::error::{Result, TrackerError};
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

pub type AnnotationMap<S> = BTreeMap<String, Annotation<S>>;

pub type EditMap<T> = BTreeMap<String, T>;

/// 読み込み時の警告（致命的ではない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub key: String,
    pub reason: String,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to load '{}': {}", self.key, self.reason)
    }
}

pub struct AnnotationStore<E: Entity, B: KeyValueStore> {
    backend: B,
    annotations: AnnotationMap<E::Status>,
    created: Vec<E>,
    edits: EditMap<E::Edits>,
    warnings: Vec<LoadWarning>,
}

impl<E: Entity, B: KeyValueStore> AnnotationStore<E, B> {
    /// バックエンドから読み込む
    ///
    /// 文書が壊れている場合は空のコレクションにフォールバックし、警告を記録する。
    pub fn load(backend: B) -> Self {
        let keys = E::STORAGE_KEYS;
        let mut warnings = Vec::new();
        let annotations: AnnotationMap<E::Status> =
            read_document(&backend, keys.annotations, &mut warnings);
        let created: Vec<E> = read_document(&backend, keys.created, &mut warnings);
        let edits: EditMap<E::Edits> = read_document(&backend, keys.edits, &mut warnings);

        log::debug!(
            "loaded {} annotations, {} created entries, {} edits",
            annotations.len(),
            created.len(),
            edits.len()
        );

        Self {
            backend,
            annotations,
            created,
            edits,
            warnings,
        }
    }

    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// アノテーションを取得（未登録ならゼロ値）
    pub fn annotation(&self, id: &str) -> Annotation<E::Status> {
        self.annotations.get(id).cloned().unwrap_or_default()
    }

    pub fn annotations(&self) -> &AnnotationMap<E::Status> {
        &self.annotations
    }

    /// ユーザー追加エントリ（新しい順）
    pub fn created(&self) -> &[E] {
        &self.created
    }

    pub fn edits(&self) -> &EditMap<E::Edits> {
        &self.edits
    }

    pub fn is_created(&self, id: &str) -> bool {
        self.created.iter().any(|e| e.id() == id)
    }

    pub fn set_starred(&mut self, id: &str, value: bool) {
        self.entry(id).is_starred = value;
        self.persist_annotations();
    }

    /// スターを反転し、新しい値を返す
    pub fn toggle_starred(&mut self, id: &str) -> bool {
        let entry = self.entry(id);
        entry.is_starred = !entry.is_starred;
        let value = entry.is_starred;
        self.persist_annotations();
        value
    }

    pub fn set_status(&mut self, id: &str, status: E::Status) {
        self.entry(id).status = status;
        self.persist_annotations();
    }

    pub fn set_notes(&mut self, id: &str, notes: impl Into<String>) {
        self.entry(id).notes = notes.into();
        self.persist_annotations();
    }

    /// 上書き項目を変更する（既定値に戻ったらエントリごと消す）
    pub fn update_edits(&mut self, id: &str, update: impl FnOnce(&mut E::Edits)) {
        let cleared = {
            let entry = self.edits.entry(id.to_string()).or_default();
            update(entry);
            *entry == E::Edits::default()
        };
        if cleared {
            self.edits.remove(id);
        }
        self.persist_edits();
    }

    /// 新しいIDを割り当てて先頭に追加し、そのIDを返す
    pub fn add_created_entity(&mut self, draft: E::Draft, dataset: &Dataset<E>) -> String {
        let id = self.fresh_id(dataset);
        let entity = E::from_draft(id.clone(), draft);
        self.created.insert(0, entity);
        self.persist_created();
        id
    }

    /// ユーザー追加エントリとそのアノテーション・上書きを削除する
    ///
    /// データセット由来のエントリは削除できない。
    pub fn remove_created_entity(&mut self, id: &str) -> std::result::Result<E, TrackerError> {
        let Some(index) = self.created.iter().position(|e| e.id() == id) else {
            return Err(TrackerError::NotRemovable(id.to_string()));
        };

        let removed = self.created.remove(index);
        self.persist_created();
        if self.annotations.remove(id).is_some() {
            self.persist_annotations();
        }
        if self.edits.remove(id).is_some() {
            self.persist_edits();
        }
        Ok(removed)
    }

    /// 全てのアノテーション・追加エントリ・上書きを消去する
    pub fn reset(&mut self) {
        self.annotations.clear();
        self.created.clear();
        self.edits.clear();
        let keys = E::STORAGE_KEYS;
        for key in [keys.annotations, keys.created, keys.edits] {
            if let Err(e) = self.backend.remove(key) {
                log::warn!("failed to remove '{}': {}", key, e);
            }
        }
    }

    /// 永続化される文書（キー, JSON）。別のバックエンドに書けば同じ状態を読み込める
    pub fn to_documents(&self) -> Result<Vec<(&'static str, String)>> {
        let keys = E::STORAGE_KEYS;
        Ok(vec![
            (keys.annotations, serde_json::to_string(&self.annotations)?),
            (keys.created, serde_json::to_string(&self.created)?),
            (keys.edits, serde_json::to_string(&self.edits)?),
        ])
    }

    fn entry(&mut self, id: &str) -> &mut Annotation<E::Status> {
        self.annotations.entry(id.to_string()).or_default()
    }

    fn fresh_id(&self, dataset: &Dataset<E>) -> String {
        loop {
            let candidate = format!("{}{}", E::CREATED_PREFIX, Uuid::new_v4().simple());
            if !dataset.contains(&candidate) && !self.is_created(&candidate) {
                return candidate;
            }
        }
    }

    fn persist_annotations(&mut self) {
        write_document(&mut self.backend, E::STORAGE_KEYS.annotations, &self.annotations);
    }

    fn persist_created(&mut self) {
        write_document(&mut self.backend, E::STORAGE_KEYS.created, &self.created);
    }

    fn persist_edits(&mut self) {
        write_document(&mut self.backend, E::STORAGE_KEYS.edits, &self.edits);
    }
}

fn write_document<T, B>(backend: &mut B, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    B: KeyValueStore,
{
    let result = serde_json::to_string(value)
        .map_err(Into::into)
        .and_then(|json| backend.set(key, &json));
    if let Err(e) = result {
        log::warn!("failed to persist '{}': {}", key, e);
    }
}

fn read_document<T, B>(backend: &B, key: &str, warnings: &mut Vec<LoadWarning>) -> T
where
    T: DeserializeOwned + Default,
    B: KeyValueStore,
{
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            log::warn!("failed to read '{}': {}", key, e);
            warnings.push(LoadWarning {
                key: key.to_string(),
                reason: e.to_string(),
            });
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("failed to parse '{}', starting empty: {}", key, e);
            warnings.push(LoadWarning {
                key: key.to_string(),
                reason: e.to_string(),
            });
            T::default()
        }
    }
}
