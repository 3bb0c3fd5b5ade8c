//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   ┌─────────┐   翻译   ┌───────────┐   消费   ┌──────────┐   修改           │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │ ───────▶ Model   │
//！│   └─────────┘          │ AppMessage│          └──────────┘                  │
//！│                        │ ModalMsg  │                                        │
//！│   ┌─────────┐  mpsc    │ ContentMsg│                                        │
//！│   │ IP 查询 │ ───────▶ │ NavMsg    │                                        │
//！│   └─────────┘          └───────────┘                                        │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ──▶ Update 之间的桥梁。
//! 键盘事件、定时器以及后台任务的结果都被翻译成 Message，
//! Update 层只认 Message，不直接接触 crossterm 或 tokio。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     AppMessage 中除了按键产生的消息外，还有两类来自主循环本身：
//!         Tick(Instant)                   // 每轮循环一次，用于过期 "已复制" 标记
//!         IpLookupFinished(outcome)       // 后台 IP 查询的结果，从 channel 中取出
//!
//!     Noop 用于代替 Option::None，表示该事件无需处理。
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
