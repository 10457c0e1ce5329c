//! 参加者（サイドイベント）系統
//!
//! 登録フォームの書き出しをそのまま使うため、キーは質問文のまま。

use crate::entity::{blank_as_none, string_or_number, yes_no, Annotation, Entity, StatusValue, StorageKeys};
use serde::{Deserialize, Serialize};

/// 洽談（商談）ステータス
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NegotiationStatus {
    #[default]
    #[serde(rename = "未開始")]
    NotStarted,
    #[serde(rename = "洽談中")]
    InProgress,
    #[serde(rename = "已確認")]
    Confirmed,
    #[serde(rename = "不感興趣")]
    NotInterested,
}

impl StatusValue for NegotiationStatus {
    const ALL: &'static [Self] = &[
        NegotiationStatus::NotStarted,
        NegotiationStatus::InProgress,
        NegotiationStatus::Confirmed,
        NegotiationStatus::NotInterested,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            NegotiationStatus::NotStarted => "未開始",
            NegotiationStatus::InProgress => "洽談中",
            NegotiationStatus::Confirmed => "已確認",
            NegotiationStatus::NotInterested => "不感興趣",
        }
    }
}

impl std::fmt::Display for NegotiationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 目標優先級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
}

impl Priority {
    pub const ALL: &'static [Priority] = &[Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "高" | "high" | "h" => Some(Priority::High),
            "中" | "medium" | "m" => Some(Priority::Medium),
            "低" | "low" | "l" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// 報名核准（登録承認）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approval {
    Approved,
    #[default]
    PendingApproval,
}

impl Approval {
    pub const ALL: &'static [Approval] = &[Approval::Approved, Approval::PendingApproval];

    pub fn as_str(&self) -> &'static str {
        match self {
            Approval::Approved => "approved",
            Approval::PendingApproval => "pending_approval",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Some(Approval::Approved),
            "pending_approval" | "pending" => Some(Approval::PendingApproval),
            _ => None,
        }
    }
}

/// 参加者レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,

    #[serde(rename = "分類", default)]
    pub category: String,

    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub phone_number: String,

    #[serde(rename = "What company do you work for?", default)]
    pub company: String,

    #[serde(rename = "What is your job title?", default)]
    pub job_title: String,

    #[serde(rename = "What is your LinkedIn profile?", default)]
    pub linkedin: String,

    #[serde(default)]
    pub approval_status: Approval,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub ticket_name: String,

    #[serde(rename = "Country / Region", default)]
    pub country: String,

    #[serde(rename = "目標優先級", default, deserialize_with = "blank_as_none")]
    pub priority: Option<Priority>,
}

/// 参加者ごとの上書き（一覧・カードで変更した目標優先級）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendeeEdits {
    #[serde(rename = "目標優先級", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// 手動追加の入力
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewAttendee {
    pub name: String,
    pub category: String,
    pub email: String,
    pub phone_number: String,
    pub company: String,
    pub job_title: String,
    pub linkedin: String,
    pub country: String,
    pub priority: Option<Priority>,
}

impl Entity for Attendee {
    type Status = NegotiationStatus;
    type Draft = NewAttendee;
    type Edits = AttendeeEdits;

    const CREATED_PREFIX: &'static str = "ua-";

    const STORAGE_KEYS: StorageKeys = StorageKeys {
        annotations: "side-event-attendee-states",
        created: "side-event-attendee-added",
        edits: "side-event-attendee-edits",
    };

    const EXPORT_PREFIX: &'static str = "attendees";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        (!self.category.is_empty()).then_some(self.category.as_str())
    }

    fn from_draft(id: String, draft: NewAttendee) -> Self {
        Self {
            id,
            category: draft.category,
            name: draft.name,
            email: draft.email,
            phone_number: draft.phone_number,
            company: draft.company,
            job_title: draft.job_title,
            linkedin: draft.linkedin,
            approval_status: Approval::PendingApproval,
            created_at: String::new(),
            ticket_name: String::new(),
            country: draft.country,
            priority: draft.priority,
        }
    }

    fn apply_edits(&mut self, edits: &AttendeeEdits) {
        if let Some(priority) = edits.priority {
            self.priority = Some(priority);
        }
    }

    fn csv_header() -> &'static [&'static str] {
        &[
            "分類", "Name", "Company", "Title", "Email", "Phone", "LinkedIn", "Starred", "Status",
            "Priority", "Approval", "Notes",
        ]
    }

    fn csv_fields(&self, annotation: &Annotation<NegotiationStatus>) -> Vec<String> {
        vec![
            self.category.clone(),
            self.name.clone(),
            self.company.clone(),
            self.job_title.clone(),
            self.email.clone(),
            self.phone_number.clone(),
            self.linkedin.clone(),
            yes_no(annotation.is_starred).to_string(),
            annotation.status.as_str().to_string(),
            self.priority.map(|p| p.as_str()).unwrap_or_default().to_string(),
            self.approval_status.as_str().to_string(),
            annotation.notes.clone(),
        ]
    }
}
