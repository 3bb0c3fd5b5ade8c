//! 测试用的内存服务

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::{
    AppConfig, Backend, BackendError, ClipboardService, ConfigService, IdentityService, LinkOpener,
};

/// 内存配置，记录最后一次保存
#[derive(Clone, Default)]
pub struct MemoryConfig {
    pub stored: Arc<Mutex<AppConfig>>,
    pub saves: Arc<Mutex<usize>>,
}

impl ConfigService for MemoryConfig {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        *self.stored.lock().unwrap() = config.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

/// 记录复制内容的剪贴板
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl ClipboardService for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<(), BackendError> {
        if self.fail {
            return Err(BackendError::Clipboard(std::io::Error::other("closed")));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// 记录打开链接的 opener
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<(), BackendError> {
        super::link_opener::ensure_http(url)?;
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// 测试用 Backend 及其观察句柄
pub struct TestBackend {
    pub config: MemoryConfig,
    pub clipboard: RecordingClipboard,
    pub opener: RecordingOpener,
}

impl TestBackend {
    pub fn new(config: AppConfig) -> Self {
        let memory = MemoryConfig::default();
        *memory.stored.lock().unwrap() = config;
        Self {
            config: memory,
            clipboard: RecordingClipboard::default(),
            opener: RecordingOpener::default(),
        }
    }

    /// 组装成 App 使用的 Backend，自身保留观察句柄
    pub fn backend(&self, seed: u64) -> Backend {
        Backend {
            config: Box::new(self.config.clone()),
            clipboard: Box::new(self.clipboard.clone()),
            links: Box::new(self.opener.clone()),
            identity: IdentityService::seeded(seed),
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.clipboard.copied.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opener.opened.lock().unwrap().clone()
    }

    pub fn saved(&self) -> AppConfig {
        self.config.stored.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.config.saves.lock().unwrap()
    }
}
