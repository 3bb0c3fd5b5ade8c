//! idforge TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! idforge 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志，必须最先初始化；失败不影响启动
//!     tokio Runtime           // 只给后台 IP 查询使用，主循环仍是同步的
//!     model::App::new()       // 加载配置并创建 APP 实例
//!     spawn_ip_lookup()       // 发起 IP 查询，结果经 channel 回到主循环
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc::unbounded_channel;

use backend::{spawn_ip_lookup, Backend};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（guard 持有到 main 结束；失败时不写文件日志，继续运行）
    let _guard = init_logging();
    tracing::info!("idforge v{} starting", env!("CARGO_PKG_VERSION"));

    // 2. 后台运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    // 3. 创建应用实例
    let mut app = model::App::new(Backend::new());

    // 4. IP 查询
    let (ip_tx, mut ip_rx) = unbounded_channel();
    spawn_ip_lookup(runtime.handle(), app.config.ip_endpoint.clone(), ip_tx);

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut ip_rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("idforge exited with error: {e:#}");
    } else {
        tracing::info!("idforge exited");
    }

    // 8. 返回结果
    result
}
