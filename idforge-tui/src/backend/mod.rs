//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   ┌─────────┐      ┌───────────┐      ┌──────────┐      ┌──────────┐        │
//！│   │  Event  │ ───▶ │  Message  │ ───▶ │  Update  │ ───▶ │  Model   │        │
//！│   └─────────┘      └───────────┘      └────┬─────┘      └──────────┘        │
//！│                                            │ 同步调用                        │
//！│                                            ▼                                │
//！│                                      ┌──────────┐    tokio    ┌──────────┐  │
//！│                                      │ Backend  │ ──────────▶ │ IP 查询  │  │
//！│                                      │    层    │  ◀── mpsc ── │ (异步)   │  │
//！│                                      └────┬─────┘             └──────────┘  │
//！│                                           ▼                                 │
//！│                          ┌──────────────────────────────┐                   │
//！│                          │ idforge-core / idforge-toolbox│                  │
//！│                          └──────────────────────────────┘                   │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：与 UI 解耦的服务
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置（JSON 文件）
//!         mod clipboard;          // 剪贴板（OSC 52）
//!         mod link_opener;        // 打开外部链接
//!         mod identity_service;   // 身份生成（idforge-core）
//!         mod ip_lookup;          // 启动时的 IP 查询（idforge-toolbox）
//!
//!
//!     Backend 结构体把这些服务打包在一起，由 App 持有。
//!     除 ip_lookup 外，所有服务都是同步的，直接在 Update 层中调用：
//!
//!         update::update(app, msg)
//!             ↓
//!         app.backend.identity.generate(code, &domain)
//!             ↓
//!         app.generator.set_identity(...)
//!
//!     每个服务都以 trait 的形式出现（identity 除外，它本身就是可注入种子的），
//!     测试时可替换为内存实现，见 testing 模块。
//!

mod clipboard;
mod config_service;
mod error;
mod identity_service;
mod ip_lookup;
mod link_opener;

#[cfg(test)]
pub mod testing;

pub use clipboard::{ClipboardService, Osc52Clipboard};
pub use config_service::{app_dir, AppConfig, ConfigService, JsonConfigService};
pub use error::BackendError;
pub use identity_service::{GeneratedIdentity, IdentityService};
pub use ip_lookup::{spawn_ip_lookup, IpLookupOutcome};
pub use link_opener::{LinkOpener, SystemLinkOpener};

/// Update 层可用的全部服务
pub struct Backend {
    pub config: Box<dyn ConfigService>,
    pub clipboard: Box<dyn ClipboardService>,
    pub links: Box<dyn LinkOpener>,
    pub identity: IdentityService,
}

impl Backend {
    /// 生产环境使用的服务组合
    pub fn new() -> Self {
        Self {
            config: Box::new(JsonConfigService::new()),
            clipboard: Box::new(Osc52Clipboard),
            links: Box::new(SystemLinkOpener),
            identity: IdentityService::new(),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
