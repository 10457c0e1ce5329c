//! 出展者/参加者ごとの表示差分

use crate::i18n::{t, Text};
use crate::store::LocalStorageStore;
use chrono::NaiveDate;
use trade_tracker_common::{
    export_file_name, Approval, Attendee, AttendeeFilter, Bundled, Dataset, Entity, Exhibitor,
    ExhibitorFilter, Filter, Language, NegotiationStatus, Outcome, Priority, Tracker, VisitStatus,
};

pub trait WebVertical: Bundled + Send + Sync {
    type Query: Filter<Self> + Clone + Default + Send + Sync + 'static;

    /// カード見出しの下に並べる情報
    fn card_meta(entity: &Self, lang: Language) -> Vec<String>;

    fn status_label(status: Self::Status, lang: Language) -> &'static str;

    fn file_name(date: NaiveDate) -> String {
        export_file_name(Self::EXPORT_PREFIX, date)
    }

    /// カードで変更できる目標優先級（対応しない系統は None）
    fn editable_priority(_entity: &Self) -> Option<Option<Priority>> {
        None
    }

    fn set_priority(
        _tracker: &mut Tracker<Self, LocalStorageStore>,
        _id: &str,
        _priority: Option<Priority>,
    ) -> Option<Outcome> {
        None
    }
}

/// バンドル済みデータセットと localStorage でトラッカーを作る
pub fn open<E: WebVertical>() -> Tracker<E, LocalStorageStore> {
    let dataset = E::bundled().unwrap_or_else(|e| {
        gloo::console::error!(format!("dataset error: {e}"));
        Dataset::empty()
    });
    let tracker = Tracker::new(dataset, LocalStorageStore);
    for warning in tracker.load_warnings() {
        gloo::console::warn!(format!("{warning} (starting empty)"));
    }
    tracker
}

fn labeled(lang: Language, label: Text, value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| format!("{}: {}", t(lang, label), v))
}

impl WebVertical for Exhibitor {
    type Query = ExhibitorFilter;

    fn card_meta(e: &Self, lang: Language) -> Vec<String> {
        [
            labeled(lang, Text::Booth, e.booths.as_deref()),
            labeled(lang, Text::Category, e.category.as_deref()),
            labeled(lang, Text::Country, e.country.as_deref()),
            labeled(lang, Text::Website, e.website.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn status_label(status: VisitStatus, lang: Language) -> &'static str {
        match (lang, status) {
            (Language::En, VisitStatus::None) => "None",
            (Language::Zh, VisitStatus::None) => "無",
            (Language::En, VisitStatus::ToVisit) => "To Visit",
            (Language::Zh, VisitStatus::ToVisit) => "待參觀",
            (Language::En, VisitStatus::Visited) => "Visited",
            (Language::Zh, VisitStatus::Visited) => "已參觀",
            (Language::En, VisitStatus::Contacted) => "Contacted",
            (Language::Zh, VisitStatus::Contacted) => "已聯繫",
            (Language::En, VisitStatus::FollowUp) => "Follow Up",
            (Language::Zh, VisitStatus::FollowUp) => "待跟進",
        }
    }
}

impl WebVertical for Attendee {
    type Query = AttendeeFilter;

    fn card_meta(a: &Self, lang: Language) -> Vec<String> {
        let approval = match a.approval_status {
            Approval::Approved => t(lang, Text::Approved),
            Approval::PendingApproval => t(lang, Text::Pending),
        };
        [
            labeled(lang, Text::Company, Some(&a.company)),
            labeled(lang, Text::JobTitle, Some(&a.job_title)),
            labeled(lang, Text::Category, a.category()),
            labeled(lang, Text::Priority, a.priority.map(|p| p.as_str())),
            labeled(lang, Text::Email, Some(&a.email)),
            labeled(lang, Text::Country, Some(&a.country)),
            Some(approval.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn status_label(status: NegotiationStatus, lang: Language) -> &'static str {
        match (lang, status) {
            (Language::En, NegotiationStatus::NotStarted) => "Not Started",
            (Language::En, NegotiationStatus::InProgress) => "In Progress",
            (Language::En, NegotiationStatus::Confirmed) => "Confirmed",
            (Language::En, NegotiationStatus::NotInterested) => "Not Interested",
            (Language::Zh, status) => trade_tracker_common::StatusValue::as_str(&status),
        }
    }

    fn editable_priority(a: &Self) -> Option<Option<Priority>> {
        Some(a.priority)
    }

    fn set_priority(
        tracker: &mut Tracker<Self, LocalStorageStore>,
        id: &str,
        priority: Option<Priority>,
    ) -> Option<Outcome> {
        Some(tracker.set_priority(id, priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
        assert_eq!(Exhibitor::file_name(date), "ces_tracker_export_2026-01-06.csv");
        assert_eq!(Attendee::file_name(date), "attendees_export_2026-01-06.csv");
    }

    #[test]
    fn test_only_attendees_edit_priority() {
        let a = Attendee {
            id: "at-1".to_string(),
            priority: Some(Priority::Medium),
            ..Default::default()
        };
        assert_eq!(Attendee::editable_priority(&a), Some(Some(Priority::Medium)));
        assert_eq!(Exhibitor::editable_priority(&Exhibitor::default()), None);
    }

    #[test]
    fn test_exhibitor_meta_skips_blank_fields() {
        let e = Exhibitor {
            iid: "ex-9".to_string(),
            name: "Solo".to_string(),
            country: Some("  ".to_string()),
            booths: Some("LVCC — 1".to_string()),
            ..Default::default()
        };
        assert_eq!(Exhibitor::card_meta(&e, Language::En), vec!["Booth: LVCC — 1"]);
    }
}
