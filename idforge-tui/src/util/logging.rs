//! 日志初始化
//!
//! TUI 占用了整个终端，日志只能写入文件：
//! `<config dir>/idforge/logs/idforge.<date>.log`，按天滚动。
//! 级别由 `RUST_LOG` 控制，默认 info。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::app_dir;

const LOG_FILE_PREFIX: &str = "idforge";
const LOG_FILE_SUFFIX: &str = "log";
/// 最多保留的日志文件数
const MAX_LOG_FILES: usize = 7;

/// 日志目录
pub fn log_dir() -> PathBuf {
    app_dir().join("logs")
}

/// 构建按天滚动的文件 appender
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .context("Failed to create log file appender")
}

/// 初始化全局 subscriber
///
/// 返回的 guard 必须持有到程序结束，否则缓冲中的日志会丢失。
/// 日志目录不可用时只在 stderr 提示一次，程序照常运行（没有文件日志）。
pub fn init_logging() -> Option<WorkerGuard> {
    start_logging(&log_dir())
}

fn start_logging(dir: &Path) -> Option<WorkerGuard> {
    match try_init_logging(dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            // 此时还没进入备用屏幕，stderr 可见
            eprintln!("idforge: file logging disabled: {e:#}");
            None
        }
    }
}

fn try_init_logging(dir: &Path) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(dir)?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
