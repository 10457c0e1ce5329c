//! ファイルストアを使った永続化の統合テスト
//!
//! プロセス再起動（Tracker の作り直し）をまたいで状態が復元されることを確認する。

use trade_tracker_common::{
    Attendee, AttendeeFilter, Bundled, Exhibitor, ExhibitorFilter, FileStore, KeyValueStore,
    Language, NegotiationStatus, NewAttendee, NewExhibitor, Priority, Selection, Tracker,
    VisitStatus,
};
use tempfile::tempdir;

fn open_exhibitors(dir: &std::path::Path) -> Tracker<Exhibitor, FileStore> {
    let store = FileStore::open(dir).expect("ストアを開けない");
    Tracker::new(Exhibitor::bundled().expect("バンドルデータ読込失敗"), store)
}

#[test]
fn test_annotations_survive_restart() {
    let dir = tempdir().expect("Failed to create temp dir");

    {
        let mut tracker = open_exhibitors(dir.path());
        tracker.toggle_star("ex-1").unwrap();
        tracker.set_status("ex-2", VisitStatus::Visited).unwrap();
        tracker.set_notes("ex-3", "Ask about fleet pricing").unwrap();
    }

    let tracker = open_exhibitors(dir.path());
    assert!(tracker.load_warnings().is_empty());

    let ex1 = tracker.annotation("ex-1");
    assert!(ex1.is_starred);
    assert_eq!(ex1.status, VisitStatus::None);

    assert_eq!(tracker.annotation("ex-2").status, VisitStatus::Visited);
    assert!(!tracker.annotation("ex-2").is_starred);
    assert_eq!(tracker.annotation("ex-3").notes, "Ask about fleet pricing");
}

#[test]
fn test_persisted_document_shape() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut tracker = open_exhibitors(dir.path());
    tracker.set_status("ex-2", VisitStatus::Visited).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("ces_tracker_user_states.json"))
        .expect("保存ファイルがない");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"ex-2": {"isStarred": false, "status": "Visited", "notes": ""}})
    );
}

#[test]
fn test_starred_filter_after_restart() {
    let dir = tempdir().expect("Failed to create temp dir");
    {
        let mut tracker = open_exhibitors(dir.path());
        tracker.toggle_star("ex-4").unwrap();
        tracker.toggle_star("ex-7").unwrap();
    }

    let tracker = open_exhibitors(dir.path());
    let filter = ExhibitorFilter {
        only_starred: true,
        ..Default::default()
    };
    let ids: Vec<String> = tracker
        .filtered(&filter)
        .iter()
        .map(|m| m.id().to_string())
        .collect();
    assert_eq!(ids, vec!["ex-4", "ex-7"]);
}

#[test]
fn test_created_entity_survives_restart() {
    let dir = tempdir().expect("Failed to create temp dir");
    let id = {
        let mut tracker = open_exhibitors(dir.path());
        tracker
            .add_entity(NewExhibitor {
                name: "Booth Walk-in".to_string(),
                booth: "LVCC, South Hall — 30001".to_string(),
                ..Default::default()
            })
            .unwrap();
        tracker.store().created()[0].iid.clone()
    };
    assert!(id.starts_with("xf-"));

    let mut tracker = open_exhibitors(dir.path());
    let merged = tracker.merged();
    assert_eq!(merged.len(), 9);
    // データセットの後ろに並ぶ
    let added = &merged[8];
    assert_eq!(added.id(), id);
    assert!(added.created);
    assert!(!merged[0].created);
    assert_eq!(added.entity.venue(), Some("LVCC, South Hall"));
    assert_eq!(added.entity.booth_number(), Some("30001"));
    assert_eq!(added.entity.category.as_deref(), Some("X-Factor"));

    tracker.remove_entity(&id).unwrap();
    let tracker = open_exhibitors(dir.path());
    assert_eq!(tracker.merged().len(), 8);
}

#[test]
fn test_attendee_state_is_separate_from_exhibitors() {
    let dir = tempdir().expect("Failed to create temp dir");
    {
        let mut exhibitors = open_exhibitors(dir.path());
        exhibitors.toggle_star("ex-1").unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let mut attendees = Tracker::new(Attendee::bundled().unwrap(), store);
    assert!(attendees.merged().iter().all(|m| !m.annotation.is_starred));

    attendees
        .set_status("at-2", NegotiationStatus::Confirmed)
        .unwrap();
    attendees
        .add_entity(NewAttendee {
            name: "Lee Park".to_string(),
            priority: Some(Priority::High),
            ..Default::default()
        })
        .unwrap();

    assert!(dir.path().join("side-event-attendee-states.json").exists());
    assert!(dir.path().join("side-event-attendee-added.json").exists());

    let exhibitors = open_exhibitors(dir.path());
    assert!(exhibitors.annotation("ex-1").is_starred);
    assert_eq!(exhibitors.merged().len(), 8);
}

#[test]
fn test_reset_removes_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut tracker = open_exhibitors(dir.path());
    tracker.toggle_star("ex-1").unwrap();
    tracker
        .add_entity(NewExhibitor {
            name: "Temp".to_string(),
            ..Default::default()
        })
        .unwrap();

    tracker.reset().unwrap();
    assert!(!dir.path().join("ces_tracker_user_states.json").exists());
    assert!(!dir.path().join("ces_tracker_x_factors.json").exists());

    let tracker = open_exhibitors(dir.path());
    assert_eq!(tracker.merged().len(), 8);
    assert!(!tracker.annotation("ex-1").is_starred);
}

#[test]
fn test_language_preference_persists() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FileStore::open(dir.path()).unwrap();
    assert_eq!(Language::load(&store), Language::Zh);

    Language::En.save(&mut store);
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(Language::load(&store), Language::En);
    assert_eq!(
        store.get("side-event-lang-pref").unwrap().as_deref(),
        Some("en")
    );
}

#[test]
fn test_priority_override_survives_restart() {
    let dir = tempdir().expect("Failed to create temp dir");
    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut attendees = Tracker::new(Attendee::bundled().unwrap(), store);
        attendees.set_priority("at-1", Some(Priority::Low)).unwrap();
    }
    assert!(dir.path().join("side-event-attendee-edits.json").exists());

    let store = FileStore::open(dir.path()).unwrap();
    let attendees = Tracker::new(Attendee::bundled().unwrap(), store);
    assert!(attendees.load_warnings().is_empty());
    assert_eq!(attendees.get("at-1").unwrap().entity.priority, Some(Priority::Low));

    let low = AttendeeFilter {
        priority: Selection::Only(Priority::Low),
        ..Default::default()
    };
    assert!(attendees.filtered(&low).iter().any(|m| m.id() == "at-1"));

    let csv = attendees.export_csv(&low).unwrap();
    let row = csv
        .lines()
        .find(|line| line.contains("\"Sora Tanaka\""))
        .expect("at-1 の行がない");
    assert!(row.contains("\"低\""), "{row}");
}
