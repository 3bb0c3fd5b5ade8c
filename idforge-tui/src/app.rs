//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Content,                     // 启动即可操作生成器
//!     navigation: NavigationState{
//!         items: [Generator , TempMail , Settings],
//!         selected = 0
//!     },
//!     current_page = Page::Generator,
//!     generator.ip = IpStatus::Detecting,             // 等待 IP 查询结果，之后才生成第一份身份
//!     modal = FreeNotice (除非用户选过 "不再提示"),
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Ok(outcome) = rx.try_recv() {         // 取出后台 IP 查询的结果（不阻塞）
//!         update(&mut app , IpLookupFinished(outcome))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//!     update(&mut app , Tick(now))                    // 过期 "已复制" 标记
//! }

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::IpLookupOutcome;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    ip_rx: &mut UnboundedReceiver<IpLookupOutcome>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后台任务的结果
        while let Ok(outcome) = ip_rx.try_recv() {
            update::update(app, AppMessage::IpLookupFinished(outcome));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 时钟
        update::update(app, AppMessage::Tick(Instant::now()));
    }

    Ok(())
}
