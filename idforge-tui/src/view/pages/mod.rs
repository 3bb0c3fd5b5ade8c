//! 页面视图

pub mod generator;
pub mod mail;
pub mod settings;
