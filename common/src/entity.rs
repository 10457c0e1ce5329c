//! エンティティとアノテーションの型定義
//!
//! 出展者（exhibitor）と参加者（attendee）の2系統で共有する:
//! - Entity: データセットの1レコード（不変）
//! - Annotation: ユーザーが付ける状態（スター・ステータス・メモ）
//! - StorageKeys: 永続化キー

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// ステータス列挙型の共通インターフェース
///
/// 遷移の制約はない（どの値からどの値へも変更できる）。
pub trait StatusValue:
    Copy + Eq + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// 全ての値（表示順）
    const ALL: &'static [Self];

    /// 永続化・CSVで使う表記
    fn as_str(&self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// 永続化キーの組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    /// id → Annotation のマップ
    pub annotations: &'static str,
    /// ユーザー追加エントリの配列
    pub created: &'static str,
    /// id → 上書き項目のマップ
    pub edits: &'static str,
}

/// 1系統（出展者 / 参加者）のエンティティ
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + 'static {
    type Status: StatusValue;

    /// 追加フォームの入力
    type Draft;

    /// データセットの値をユーザーが上書きできる項目（なければ `()`）
    type Edits: Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned;

    /// ユーザー追加エントリのID接頭辞（データセットのIDとは衝突しない）
    const CREATED_PREFIX: &'static str;

    const STORAGE_KEYS: StorageKeys;

    /// CSVファイル名の接頭辞
    const EXPORT_PREFIX: &'static str;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// カテゴリ（統計・絞り込み用）
    fn category(&self) -> Option<&str>;

    fn from_draft(id: String, draft: Self::Draft) -> Self;

    fn csv_header() -> &'static [&'static str];

    /// 1行分のフィールド（ヘッダと同じ順序）
    fn csv_fields(&self, annotation: &Annotation<Self::Status>) -> Vec<String>;

    /// 上書き項目を反映する
    fn apply_edits(&mut self, _edits: &Self::Edits) {}

    fn is_created(&self) -> bool {
        self.id().starts_with(Self::CREATED_PREFIX)
    }
}

/// エンティティごとのユーザー状態
///
/// 未登録のIDはゼロ値（スターなし・既定ステータス・空メモ）と同じ意味を持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Annotation<S> {
    pub is_starred: bool,
    pub status: S,
    pub notes: String,
}

/// "Yes" / "No"
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// 空文字を None として読む（データセットの空欄対策）
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    use serde::de::IntoDeserializer;

    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::deserialize(s.to_string().into_deserializer()).map(Some),
    }
}

/// 文字列または数値を文字列として読む（電話番号など）
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}
