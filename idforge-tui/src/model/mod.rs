//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   ┌─────────┐      ┌───────────┐      ┌──────────┐      ┌──────────┐        │
//！│   │  Event  │ ───▶ │  Message  │ ───▶ │  Update  │ ───▶ │  Model   │        │
//！│   └─────────┘      └───────────┘      └──────────┘      └────┬─────┘        │
//！│        ▲                                                     │ 读取         │
//！│        │                                                     ▼              │
//！│   ┌─────────┐                                          ┌──────────┐         │
//！│   │  终端   │ ◀─────────────────────────────────────── │   View   │         │
//！│   └─────────┘                                          └──────────┘         │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这里的结构体只提供对自身数据的简单操作（移动光标、追加字符等），
//! 涉及服务调用的逻辑（生成身份、复制、保存配置）都在 Update 层。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             pub generator: GeneratorState,      // 生成器页面
//!             pub mail: MailState,                // 临时邮箱页面
//!             pub settings: SettingsState,        // 设置页面
//!
//!             pub modal: ModalState,              // 弹窗状态
//!             pub config: AppConfig,              // 当前配置
//!             pub backend: Backend,               // 服务层
//!         }
//!
//!     App::new(backend) 会先加载配置，再据此设置主题、语言以及是否弹出欢迎提示。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、生成器状态（GeneratorState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         GeneratorState {
//!             country_code,       // 当前国家
//!             domain,             // Random 或 Fixed(域名)
//!             identity,           // None = 首次生成前（显示加载中）
//!             ip,                 // Detecting / Detected / Failed
//!             selected,           // 选中的字段行
//!             copied,             // 最近复制的字段 + 时间，2 秒后由 Tick 清除
//!         }
//!
//!     数据流：
//!         启动 → IP 查询（后台） → IpLookupFinished
//!             ↓
//!         update 根据结果预选国家，然后生成第一个身份
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - FreeNotice { focus }                      // 欢迎提示
//!             - CountryPicker { selected }                // 国家选择
//!             - DomainPicker { selected, custom, error }  // 域名选择（含自定义输入）
//!             - Help, Error { title, message }
//!
//!     弹窗打开时，所有按键都先交给弹窗处理。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    domain_options, DomainOption, Field, GeneratorState, IpStatus, MailState, Modal, ModalState,
    NoticeButton, SettingItem, SettingsState,
};
