//! Network helpers for idforge
//!
//! 目前只提供访客 IP / 国家查询，用于在生成器页面预选国家。
//! 所有功能无状态，与身份生成逻辑相互独立。

mod error;
mod services;
mod types;

pub use error::{ToolboxError, ToolboxResult};
pub use services::{ToolboxService, DEFAULT_IP_ENDPOINT};
pub use types::IpInfo;
