//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod generator;
mod mail;
mod modal;
mod settings;

pub use generator::{CopiedIndicator, Field, GeneratorState, IpStatus, COPY_INDICATOR_TTL};
pub use mail::MailState;
pub use modal::{domain_options, DomainOption, Modal, ModalState, NoticeButton};
pub use settings::{SettingItem, SettingsState};
