//! 业务服务：身份生成与临时邮箱目录

mod directory;
mod generator;

pub use directory::{filter_temp_emails, inbox_url, temp_email_services};
pub use generator::IdentityGenerator;
