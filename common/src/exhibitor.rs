//! 出展者（CES）系統
//!
//! データセットのキーはバンドルされたJSONの表記に合わせる（`名称`, `关于`, `国家` など）。

use crate::entity::{yes_no, Annotation, Entity, StatusValue, StorageKeys};
use serde::{Deserialize, Serialize};

/// 会場とブース番号の区切り
const VENUE_DELIMITER: char = '\u{2014}';

/// 訪問ステータス
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitStatus {
    #[default]
    None,
    #[serde(rename = "To Visit")]
    ToVisit,
    Visited,
    Contacted,
    #[serde(rename = "Follow Up")]
    FollowUp,
}

impl StatusValue for VisitStatus {
    const ALL: &'static [Self] = &[
        VisitStatus::None,
        VisitStatus::ToVisit,
        VisitStatus::Visited,
        VisitStatus::Contacted,
        VisitStatus::FollowUp,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::None => "None",
            VisitStatus::ToVisit => "To Visit",
            VisitStatus::Visited => "Visited",
            VisitStatus::Contacted => "Contacted",
            VisitStatus::FollowUp => "Follow Up",
        }
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 出展者レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exhibitor {
    pub iid: String,

    #[serde(rename = "名称", default)]
    pub name: String,

    #[serde(rename = "Logo", default)]
    pub logo: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    /// 会場とブース（例: "LVCC, North Hall — 9145"）
    #[serde(default)]
    pub booths: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(rename = "关于", default)]
    pub about: Option<String>,

    #[serde(default)]
    pub event: Option<String>,

    #[serde(default)]
    pub contact: Option<String>,

    #[serde(rename = "Company Info", default)]
    pub company_info: Option<String>,

    #[serde(rename = "国家", default)]
    pub country: Option<String>,
}

impl Exhibitor {
    /// 会場名（区切り文字の前）
    pub fn venue(&self) -> Option<&str> {
        split_booths(self.booths.as_deref()?).0
    }

    /// ブース番号（区切り文字の後）
    pub fn booth_number(&self) -> Option<&str> {
        split_booths(self.booths.as_deref()?).1
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn split_booths(booths: &str) -> (Option<&str>, Option<&str>) {
    match booths.split_once(VENUE_DELIMITER) {
        Some((venue, number)) => (non_empty(venue), non_empty(number)),
        None => (non_empty(booths), None),
    }
}

/// 追加フォームの入力
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExhibitor {
    pub name: String,
    pub booth: String,
    pub country: String,
    pub category: String,
    pub website: String,
    pub about: String,
    pub contact: String,
}

impl Default for NewExhibitor {
    fn default() -> Self {
        Self {
            name: String::new(),
            booth: String::new(),
            country: String::new(),
            category: "X-Factor".to_string(),
            website: String::new(),
            about: String::new(),
            contact: String::new(),
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Entity for Exhibitor {
    type Status = VisitStatus;
    type Draft = NewExhibitor;
    type Edits = ();

    const CREATED_PREFIX: &'static str = "xf-";

    const STORAGE_KEYS: StorageKeys = StorageKeys {
        annotations: "ces_tracker_user_states",
        created: "ces_tracker_x_factors",
        edits: "ces_tracker_edits",
    };

    const EXPORT_PREFIX: &'static str = "ces_tracker";

    fn id(&self) -> &str {
        &self.iid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn from_draft(id: String, draft: NewExhibitor) -> Self {
        Self {
            iid: id,
            name: draft.name,
            logo: None,
            website: non_blank(draft.website),
            booths: non_blank(draft.booth),
            category: non_blank(draft.category),
            about: non_blank(draft.about),
            event: None,
            contact: non_blank(draft.contact),
            company_info: None,
            country: non_blank(draft.country),
        }
    }

    fn csv_header() -> &'static [&'static str] {
        &[
            "ID", "Name", "Booth", "Category", "Country", "Starred", "Status", "Notes", "Website",
        ]
    }

    fn csv_fields(&self, annotation: &Annotation<VisitStatus>) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            self.iid.clone(),
            self.name.clone(),
            opt(&self.booths),
            opt(&self.category),
            opt(&self.country),
            yes_no(annotation.is_starred).to_string(),
            annotation.status.as_str().to_string(),
            annotation.notes.clone(),
            opt(&self.website),
        ]
    }
}
