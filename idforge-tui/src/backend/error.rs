//! Backend 错误类型

use thiserror::Error;

/// 剪贴板与链接打开等本地操作的错误
#[derive(Error, Debug)]
pub enum BackendError {
    /// 写入终端失败（OSC 52）
    #[error("Clipboard write failed: {0}")]
    Clipboard(#[from] std::io::Error),

    /// 链接不是 http(s) 地址
    #[error("Refusing to open non-http link: {0}")]
    InvalidLink(String),

    /// 系统浏览器启动失败
    #[error("Failed to open {url}: {reason}")]
    OpenLink { url: String, reason: String },
}
