//! 外部链接打开服务

use std::process::{Command, Stdio};

use super::BackendError;

/// 链接打开服务 trait
pub trait LinkOpener {
    /// 在系统浏览器中打开链接
    fn open(&mut self, url: &str) -> Result<(), BackendError>;
}

/// 调用系统命令打开链接
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

/// 只允许 http(s) 链接
pub fn ensure_http(url: &str) -> Result<(), BackendError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(BackendError::InvalidLink(url.to_string()))
    }
}

fn platform_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) -> Result<(), BackendError> {
        ensure_http(url)?;

        // 子进程输出会破坏 TUI 画面，全部丢弃
        platform_command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BackendError::OpenLink {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!("Opened {url}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_http() {
        assert!(ensure_http("https://yopmail.net/?login=a").is_ok());
        assert!(ensure_http("http://localhost").is_ok());
        assert!(matches!(
            ensure_http("file:///etc/passwd"),
            Err(BackendError::InvalidLink(_))
        ));
        assert!(matches!(
            ensure_http("javascript:alert(1)"),
            Err(BackendError::InvalidLink(_))
        ));
    }
}
