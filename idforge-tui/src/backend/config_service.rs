//! 配置服务
//!
//! 配置以 JSON 文件保存在 `<config dir>/idforge/config.json`。
//! 文件不存在时使用默认值；文件损坏时记录警告并使用默认值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 应用目录名
const APP_DIR: &str = "idforge";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    pub language: Language,
    /// 用户选择了"不再提示"
    pub free_notice_dismissed: bool,
    /// IP 查询接口
    pub ip_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::EnUs,
            free_notice_dismissed: false,
            ip_endpoint: idforge_toolbox::DEFAULT_IP_ENDPOINT.to_string(),
        }
    }
}

/// 获取应用数据目录
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;

    /// 配置文件位置（用于设置页显示）
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用默认路径
    pub fn new() -> Self {
        Self::with_path(app_dir().join(CONFIG_FILE))
    }

    /// 使用指定路径（测试用）
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Corrupt config at {}, using defaults: {e}",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        tracing::debug!("Saved config to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::with_path(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::with_path(dir.path().join("nested/config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            language: Language::ZhCn,
            free_notice_dismissed: true,
            ip_endpoint: "http://localhost:3000/api/ip-info".to_string(),
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let service = JsonConfigService::with_path(&path);
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "freeNoticeDismissed": true, "language": "zh-CN" }"#).unwrap();
        let config = JsonConfigService::with_path(&path).load().unwrap();
        assert!(config.free_notice_dismissed);
        assert_eq!(config.language, Language::ZhCn);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.ip_endpoint, idforge_toolbox::DEFAULT_IP_ENDPOINT);
    }
}
