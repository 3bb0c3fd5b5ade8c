//!
//! src/util/mod.rs
//! Util 层：与终端和进程环境打交道的工具
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logging;        // 文件日志
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!         pub use logging::init_logging;
//!
//!
//!     终端：
//!         init_terminal()     启用原始模式并进入备用屏幕
//!         restore_terminal()  禁用原始模式并离开备用屏幕
//!
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         TUI 运行时 stdout 被界面占用，写到 stderr 也会破坏画面，
//!         因此日志全部写入文件（见 logging.rs），在 main 中最先初始化：
//!
//!             let _guard = init_logging();   // 目录不可用时返回 None，程序照常运行
//!
//!         _guard 被丢弃时会把剩余日志刷入文件，所以要一直持有到 main 结束。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
