//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   ┌─────────┐   翻译   ┌───────────┐   消费   ┌──────────┐                  │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │                  │
//！│   └─────────┘          └───────────┘          └──────────┘                  │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 app.rs 调用，最长阻塞 timeout
//!         · handle_event    事件分发
//!
//!     handle_event 的判断顺序：
//!         1. 非 Press 事件一律忽略
//!         2. 有弹窗打开时，交给 handle_modal_keys
//!         3. 全局快捷键（Ctrl+C / Alt+q 退出，Alt+h 或 ? 帮助，Esc 返回，Tab 切换焦点）
//!         4. 焦点在导航面板 → handle_navigation_keys
//!         5. 焦点在内容面板 → 按当前页面分发
//!
//!     临时邮箱页面有搜索框，焦点在内容面板时普通字符全部作为输入，
//!     此时 ? 不再打开帮助（Alt+h 仍然可用）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Esc / Ctrl+C        → ModalMessage::Close
//!     欢迎弹窗：
//!         ← → ↑ ↓ Tab     → PrevButton / NextButton
//!         Enter           → Confirm
//!     国家 / 域名选择器：
//!         ↑ ↓ j k         → SelectPrevious / SelectNext
//!         Enter           → Confirm
//!         光标位于 "自定义" 行时，字符输入 → Input(c)，Backspace → Backspace
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
