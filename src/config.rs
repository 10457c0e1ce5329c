use crate::cli::Vertical;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// アノテーションの保存先（省略時はOS標準のデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    pub default_vertical: Vertical,
    /// バンドル版の代わりに使う出展者データセット
    pub exhibitor_dataset: Option<PathBuf>,
    /// バンドル版の代わりに使う参加者データセット
    pub attendee_dataset: Option<PathBuf>,
    pub per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_vertical: Vertical::Exhibitors,
            exhibitor_dataset: None,
            attendee_dataset: None,
            per_page: 20,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("trade-tracker").join("config.json"))
    }

    /// 保存先ディレクトリ（引数 > 設定 > 既定）
    pub fn resolve_data_dir(&self, override_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = override_dir.or_else(|| self.data_dir.clone()) {
            return Ok(dir);
        }
        let base = dirs::data_dir()
            .ok_or_else(|| CliError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("trade-tracker"))
    }

    pub fn dataset_for(&self, vertical: Vertical) -> Option<&PathBuf> {
        match vertical {
            Vertical::Exhibitors => self.exhibitor_dataset.as_ref(),
            Vertical::Attendees => self.attendee_dataset.as_ref(),
        }
    }

    pub fn set_dataset(&mut self, vertical: Vertical, path: Option<PathBuf>) {
        match vertical {
            Vertical::Exhibitors => self.exhibitor_dataset = path,
            Vertical::Attendees => self.attendee_dataset = path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.per_page, 20);
        assert_eq!(config.default_vertical, Vertical::Exhibitors);
        assert!(config.dataset_for(Vertical::Attendees).is_none());
    }

    #[test]
    fn test_partial_config_file() {
        let config: Config =
            serde_json::from_str(r#"{"default_vertical": "attendees"}"#).expect("デシリアライズ失敗");
        assert_eq!(config.default_vertical, Vertical::Attendees);
        assert_eq!(config.per_page, 20);
    }

    #[test]
    fn test_data_dir_override_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = config.resolve_data_dir(Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
        let dir = config.resolve_data_dir(None).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn test_set_dataset() {
        let mut config = Config::default();
        config.set_dataset(Vertical::Exhibitors, Some(PathBuf::from("ces.json")));
        assert_eq!(
            config.dataset_for(Vertical::Exhibitors),
            Some(&PathBuf::from("ces.json"))
        );
    }
}
