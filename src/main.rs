use anyhow::Context;
use clap::Parser;
use trade_tracker::{cli, commands, config, session};
use cli::{Cli, Commands, Vertical};
use config::Config;
use trade_tracker_common::{Attendee, Exhibitor, FileStore, Language};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = Config::load().context("設定ファイルの読み込みに失敗しました")?;
    let vertical = cli.vertical.unwrap_or(config.default_vertical);
    let data_dir = config.resolve_data_dir(cli.data_dir.clone())?;
    log::debug!("vertical={} data_dir={}", vertical, data_dir.display());

    match cli.command {
        Commands::Lang { language, toggle } => {
            let mut store = FileStore::open(&data_dir)?;
            let current = Language::load(&store);

            let next = match (language, toggle) {
                (Some(language), _) => Some(language),
                (None, true) => Some(current.toggle()),
                (None, false) => None,
            };

            match next {
                Some(language) => {
                    language.save(&mut store);
                    println!("✔ 表示言語: {}", language);
                }
                None => println!("表示言語: {}", current),
            }
        }

        Commands::Config { set_data_dir, set_dataset, clear_dataset, set_default_vertical, show } => {
            let mut changed = false;

            if let Some(dir) = set_data_dir {
                config.data_dir = Some(dir);
                changed = true;
            }

            if let Some(path) = set_dataset {
                if !path.exists() {
                    anyhow::bail!("データセットが見つかりません: {}", path.display());
                }
                config.set_dataset(vertical, Some(path));
                changed = true;
            } else if clear_dataset {
                config.set_dataset(vertical, None);
                changed = true;
            }

            if let Some(v) = set_default_vertical {
                config.default_vertical = v;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let bundled = "（バンドル版）".to_string();
                println!("設定:");
                println!("  保存先: {}", data_dir.display());
                println!("  既定の対象: {}", config.default_vertical);
                println!(
                    "  出展者データ: {}",
                    config
                        .exhibitor_dataset
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| bundled.clone())
                );
                println!(
                    "  参加者データ: {}",
                    config
                        .attendee_dataset
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or(bundled)
                );
                println!("  1ページの件数: {}", config.per_page);
            }
        }

        command => match vertical {
            Vertical::Exhibitors => {
                let mut tracker = session::open::<Exhibitor>(&config, &data_dir)
                    .with_context(|| format!("データを開けません（保存先: {}）", data_dir.display()))?;
                commands::run(&mut tracker, command, &config)?;
            }
            Vertical::Attendees => {
                let mut tracker = session::open::<Attendee>(&config, &data_dir)
                    .with_context(|| format!("データを開けません（保存先: {}）", data_dir.display()))?;
                commands::run(&mut tracker, command, &config)?;
            }
        },
    }

    Ok(())
}
