//! エラーケーステスト
//!
//! 壊れた保存データ・不正な操作でのエラーハンドリングを検証

use trade_tracker::commands;
use trade_tracker::cli::Commands;
use trade_tracker::config::Config;
use trade_tracker::error::CliError;
use trade_tracker_common::{
    Bundled, Dataset, Error, Exhibitor, FileStore, Tracker, TrackerError, VisitStatus,
};
use tempfile::tempdir;

/// 壊れたJSONは空の状態として読み込み、警告を残す
#[test]
fn test_corrupt_annotation_file_falls_back_to_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("ces_tracker_user_states.json"), "{not json").unwrap();
    std::fs::write(dir.path().join("ces_tracker_x_factors.json"), "[]").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let mut tracker = Tracker::new(Exhibitor::bundled().unwrap(), store);

    assert_eq!(tracker.load_warnings().len(), 1);
    assert_eq!(tracker.load_warnings()[0].key, "ces_tracker_user_states");
    assert_eq!(tracker.merged().len(), 8);
    assert!(tracker.merged().iter().all(|m| !m.annotation.is_starred));

    // 次の変更で正しい文書に上書きされる
    tracker.set_status("ex-5", VisitStatus::Contacted).unwrap();
    let raw = std::fs::read_to_string(dir.path().join("ces_tracker_user_states.json")).unwrap();
    assert!(raw.contains("Contacted"));
}

/// 公式エントリは削除できない
#[test]
fn test_remove_official_entry_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path()).unwrap();
    let mut tracker = Tracker::new(Exhibitor::bundled().unwrap(), store);

    let err = tracker.remove_entity("ex-1").unwrap_err();
    assert_eq!(err, TrackerError::NotRemovable("ex-1".to_string()));
    assert_eq!(tracker.merged().len(), 8);
}

/// 不明なステータスはCLIエラー
#[test]
fn test_unknown_status_via_command() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path()).unwrap();
    let mut tracker = Tracker::new(Exhibitor::bundled().unwrap(), store);

    let result = commands::run(
        &mut tracker,
        Commands::Status {
            id: "ex-1".to_string(),
            status: "Lunch".to_string(),
        },
        &Config::default(),
    );
    assert!(matches!(result, Err(CliError::UnknownStatus(_))));
    assert!(!dir.path().join("ces_tracker_user_states.json").exists());
}

/// 予約済みプレフィックスのIDを含むデータセットは拒否
#[test]
fn test_dataset_with_reserved_prefix_rejected() {
    let json = r#"[{"iid": "xf-1", "名称": "Imposter"}]"#;
    let result = Dataset::<Exhibitor>::from_json(json);
    assert!(matches!(result, Err(Error::Dataset(_))));
}

/// 存在しないデータセットファイル
#[test]
fn test_dataset_file_not_found() {
    let result = Dataset::<Exhibitor>::from_file(std::path::Path::new("/nonexistent/ces.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}
