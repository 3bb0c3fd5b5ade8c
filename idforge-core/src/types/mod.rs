//! 类型定义模块

pub(crate) mod country;
mod directory;
pub(crate) mod identity;

pub use country::{CountryConfig, PhoneRule};
pub use directory::TempEmailEntry;
pub use identity::{DomainChoice, PersonName, UserInfo};
