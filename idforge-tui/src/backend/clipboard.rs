//! 剪贴板服务
//!
//! 通过 OSC 52 转义序列写入终端剪贴板，支持 SSH 会话与大多数现代终端。

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::BackendError;

/// 剪贴板服务 trait
pub trait ClipboardService {
    /// 复制文本
    fn copy(&mut self, text: &str) -> Result<(), BackendError>;
}

/// OSC 52 剪贴板
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

/// 构造 OSC 52 序列：`ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl ClipboardService for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), BackendError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
