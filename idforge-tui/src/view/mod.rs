//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//! 每一轮主循环都会完整重绘一次。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 导航 + 内容 + 状态栏
//!         mod components;     // 导航栏、状态栏、弹窗
//!         mod pages;          // 生成器、临时邮箱、设置
//!         pub mod theme;      // 颜色方案（深色 / 浅色）
//!
//!
//!     布局：
//!         ┌──────────────── 标题栏 ─────────────────┐
//!         │ 导航 (20%) │        页面内容 (80%)       │
//!         │            │                            │
//!         ├──────────────── 状态栏 ─────────────────┤
//!
//!     弹窗在最后绘制，覆盖在页面之上。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
