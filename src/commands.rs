//! サブコマンドの実行（出展者/参加者で共通）

use crate::cli::Commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::session::{self, CliVertical};
use chrono::NaiveDate;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};
use trade_tracker_common::filter::{category_counts, paginate};
use trade_tracker_common::{
    export_file_name, Entity, KeyValueStore, MergedEntity, Notice, StatusValue, Tracker,
    TrackerError,
};

pub fn run<E, B>(tracker: &mut Tracker<E, B>, command: Commands, config: &Config) -> Result<()>
where
    E: CliVertical,
    B: KeyValueStore,
{
    match command {
        Commands::List { filter, page, per_page } => {
            let query = E::build_filter(&filter)?;
            let items = tracker.filtered(&query);
            let page = paginate(&items, page, per_page.unwrap_or(config.per_page));

            for item in page.items {
                println!("{}", E::summary(item));
            }
            println!(
                "\n{}件中 {}件表示（{}/{}ページ）",
                page.total_items,
                page.items.len(),
                page.page,
                page.total_pages
            );
        }

        Commands::Show { id } => {
            let item = tracker
                .get(&id)
                .ok_or_else(|| TrackerError::UnknownEntity(id.clone()))?;

            for (label, value) in E::details(&item.entity) {
                println!("{:<10} {}", label, value);
            }
            println!("{:<10} {}", "Starred", if item.annotation.is_starred { "★" } else { "☆" });
            println!("{:<10} {}", "Status", item.annotation.status.as_str());
            println!("{:<10} {}", "Notes", item.annotation.notes);
            if item.created {
                println!("\n（手動追加したエントリ）");
            }
        }

        Commands::Star { id } => {
            let notice = tracker.toggle_star(&id)?;
            println!("✔ {}", describe(&notice));
        }

        Commands::Status { id, status } => {
            let status = session::parse_status::<E>(&status)?;
            let notice = tracker.set_status(&id, status)?;
            println!("✔ {} → {}", describe(&notice), status.as_str());
        }

        Commands::Notes { id, text } => {
            let notice = tracker.set_notes(&id, text)?;
            println!("✔ {}", describe(&notice));
        }

        Commands::Priority { id, priority } => {
            let notice = E::set_priority(tracker, &id, &priority)?;
            println!("✔ {}", describe(&notice));
        }

        Commands::Add(args) => {
            let draft = E::draft(args)?;
            let notice = tracker.add_entity(draft)?;
            println!("✔ {}", describe(&notice));
        }

        Commands::Remove { id } => {
            let notice = tracker.remove_entity(&id)?;
            println!("✔ {}", describe(&notice));
        }

        Commands::Export { filter, output } => {
            let query = E::build_filter(&filter)?;
            let csv = tracker.export_csv(&query)?;
            let today = chrono::Utc::now().date_naive();
            let path = export_path::<E>(output.as_deref(), today);

            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, csv)?;

            let rows = tracker.filtered(&query).len();
            println!("✔ {}件をCSVに出力: {}", rows, path.display());
        }

        Commands::Stats { filter } => {
            let query = E::build_filter(&filter)?;
            let items = tracker.filtered(&query);
            print_stats(&items);
        }

        Commands::Facets => {
            let facets = E::facets(&tracker.merged());
            print_list("カテゴリ", &facets.categories);
            if !facets.venues.is_empty() {
                print_list("会場", &facets.venues);
            }
            print_list("国/地域", &facets.countries);
        }

        Commands::Reset { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!(
                        "{} の全てのスター・ステータス・メモ・追加エントリを消去しますか？",
                        E::VERTICAL
                    ))
                    .default(false)
                    .interact()?;

            if !confirmed {
                println!("キャンセルしました");
                return Ok(());
            }
            let notice = tracker.reset()?;
            println!("✔ {}", describe(&notice));
        }

        Commands::Lang { .. } | Commands::Config { .. } => {
            return Err(CliError::Config("対象に依存しないコマンドです".into()));
        }
    }

    Ok(())
}

/// 出力先を決める（ディレクトリ指定時はその中に既定のファイル名）
pub fn export_path<E: Entity>(output: Option<&Path>, date: NaiveDate) -> PathBuf {
    let file_name = export_file_name(E::EXPORT_PREFIX, date);
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

pub fn describe(notice: &Notice) -> String {
    match notice {
        Notice::Starred { id, starred: true } => format!("{} にスターを付けました", id),
        Notice::Starred { id, starred: false } => format!("{} のスターを外しました", id),
        Notice::StatusUpdated { id } => format!("{} のステータスを更新しました", id),
        Notice::NotesSaved { id } => format!("{} のメモを保存しました", id),
        Notice::PriorityUpdated { id, priority } => format!(
            "{} の優先級を {} にしました",
            id,
            priority.map(|p| p.as_str()).unwrap_or("-")
        ),
        Notice::Added { id } => format!("追加しました: {}", id),
        Notice::Removed { id } => format!("削除しました: {}", id),
        Notice::Reset => "全てのデータを消去しました".to_string(),
    }
}

fn print_stats<E: Entity>(items: &[MergedEntity<E>]) {
    let starred = items.iter().filter(|m| m.annotation.is_starred).count();
    println!("合計: {}件（スター {}件）\n", items.len(), starred);

    println!("カテゴリ別:");
    for (category, count) in category_counts(items) {
        println!("  {:<20} {}", category, count);
    }

    println!("\nステータス別:");
    for status in E::Status::ALL {
        let count = items
            .iter()
            .filter(|m| m.annotation.status == *status)
            .count();
        println!("  {:<20} {}", status.as_str(), count);
    }
}

fn print_list(label: &str, values: &[String]) {
    println!("{} ({}):", label, values.len());
    for value in values {
        println!("  {}", value);
    }
}
