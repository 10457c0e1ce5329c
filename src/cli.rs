use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trade-tracker")]
#[command(about = "展示会の出展者・参加者トラッカー（スター・ステータス・メモ・CSV出力）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 対象 (exhibitors/attendees)。省略時は設定の default_vertical
    #[arg(long, global = true)]
    pub vertical: Option<Vertical>,

    /// アノテーションの保存先ディレクトリ
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 一覧を表示（絞り込み・ページ指定）
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// ページ番号（1始まり）
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 1ページの件数（省略時は設定値）
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// 1件の詳細を表示
    Show {
        #[arg(required = true)]
        id: String,
    },

    /// スターを切り替え
    Star {
        #[arg(required = true)]
        id: String,
    },

    /// ステータスを設定
    Status {
        #[arg(required = true)]
        id: String,

        /// 例: "To Visit", visited, 洽談中, in-progress
        #[arg(required = true)]
        status: String,
    },

    /// メモを設定（空文字で消去）
    Notes {
        #[arg(required = true)]
        id: String,

        #[arg(required = true)]
        text: String,
    },

    /// 目標優先級を設定（参加者のみ）
    Priority {
        #[arg(required = true)]
        id: String,

        /// 高/中/低（high/medium/low）。"-" でデータセットの値に戻す
        #[arg(required = true, allow_hyphen_values = true)]
        priority: String,
    },

    /// エントリを手動追加
    Add(AddArgs),

    /// 手動追加したエントリを削除
    Remove {
        #[arg(required = true)]
        id: String,
    },

    /// 絞り込み結果をCSVに出力
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// 出力ファイル/ディレクトリ（省略時はカレントに <prefix>_export_<日付>.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カテゴリ別件数と進捗
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// 絞り込みの選択肢（会場・国・カテゴリ）を表示
    Facets,

    /// 全てのステータス・メモ・追加エントリを消去
    Reset {
        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// 表示言語の設定 (en/zh)
    Lang {
        /// 設定する言語（省略時は現在値を表示）
        language: Option<trade_tracker_common::Language>,

        /// en/zh を切り替え
        #[arg(long, conflicts_with = "language")]
        toggle: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 保存先ディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// --vertical のデータセットファイルを設定
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// --vertical のデータセットをバンドル版に戻す
        #[arg(long, conflicts_with = "set_dataset")]
        clear_dataset: bool,

        /// 既定の対象を設定
        #[arg(long)]
        set_default_vertical: Option<Vertical>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 絞り込み条件（対象にない項目は無視）
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// 名前（参加者は会社・役職も）の部分一致
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// 会場（出展者のみ）
    #[arg(long)]
    pub venue: Option<String>,

    /// 国（出展者のみ）
    #[arg(long)]
    pub country: Option<String>,

    /// 優先級 高/中/低 (参加者のみ)
    #[arg(long)]
    pub priority: Option<String>,

    /// 登録承認 approved/pending (参加者のみ)
    #[arg(long)]
    pub approval: Option<String>,

    /// スター付きのみ
    #[arg(long)]
    pub starred: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    #[arg(long, required = true)]
    pub name: String,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// 会場とブース（出展者）
    #[arg(long, default_value = "")]
    pub booth: String,

    #[arg(long, default_value = "")]
    pub website: String,

    #[arg(long, default_value = "")]
    pub about: String,

    #[arg(long, default_value = "")]
    pub contact: String,

    /// 会社（参加者）
    #[arg(long, default_value = "")]
    pub company: String,

    /// 役職（参加者）
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub linkedin: String,

    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    #[default]
    Exhibitors,
    Attendees,
}

impl std::str::FromStr for Vertical {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exhibitors" | "exhibitor" | "ex" => Ok(Vertical::Exhibitors),
            "attendees" | "attendee" | "at" => Ok(Vertical::Attendees),
            _ => Err(format!("Unknown vertical: {}. Use exhibitors or attendees", s)),
        }
    }
}

impl std::fmt::Display for Vertical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vertical::Exhibitors => write!(f, "exhibitors"),
            Vertical::Attendees => write!(f, "attendees"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vertical() {
        assert_eq!("Attendees".parse::<Vertical>(), Ok(Vertical::Attendees));
        assert_eq!("ex".parse::<Vertical>(), Ok(Vertical::Exhibitors));
        assert!("booths".parse::<Vertical>().is_err());
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "trade-tracker",
            "--vertical",
            "attendees",
            "list",
            "--search",
            "harbor",
            "--priority",
            "高",
            "--starred",
        ])
        .expect("parse failed");

        assert_eq!(cli.vertical, Some(Vertical::Attendees));
        match cli.command {
            Commands::List { filter, page, per_page } => {
                assert_eq!(filter.search, "harbor");
                assert_eq!(filter.priority.as_deref(), Some("高"));
                assert!(filter.starred);
                assert_eq!(page, 1);
                assert_eq!(per_page, None);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_parse_lang_toggle_conflict() {
        assert!(Cli::try_parse_from(["trade-tracker", "lang", "en", "--toggle"]).is_err());
        assert!(Cli::try_parse_from(["trade-tracker", "lang", "--toggle"]).is_ok());
    }

    #[test]
    fn test_parse_priority_reset_value() {
        let cli = Cli::try_parse_from(["trade-tracker", "priority", "at-1", "-"]).expect("parse failed");
        match cli.command {
            Commands::Priority { id, priority } => {
                assert_eq!(id, "at-1");
                assert_eq!(priority, "-");
            }
            _ => panic!("expected priority"),
        }
    }
}
