//! 生成器页面状态

use std::time::{Duration, Instant};

use idforge_core::{default_country, get_country_config, CountryConfig, DomainChoice, UserInfo};
use idforge_toolbox::IpInfo;

use crate::backend::GeneratedIdentity;
use crate::i18n::FieldLabels;

/// "已复制" 标记的显示时长
pub const COPY_INDICATOR_TTL: Duration = Duration::from_secs(2);

/// 可复制的字段，按显示顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LastName,
    FirstName,
    Birthday,
    Phone,
    Password,
    Email,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::LastName,
        Field::FirstName,
        Field::Birthday,
        Field::Phone,
        Field::Password,
        Field::Email,
    ];

    /// 从身份中取出该字段的值
    pub fn value(self, info: &UserInfo) -> &str {
        match self {
            Field::LastName => &info.last_name,
            Field::FirstName => &info.first_name,
            Field::Birthday => &info.birthday,
            Field::Phone => &info.phone,
            Field::Password => &info.password,
            Field::Email => &info.email,
        }
    }

    pub fn label(self, labels: &FieldLabels) -> &'static str {
        match self {
            Field::LastName => labels.last_name,
            Field::FirstName => labels.first_name,
            Field::Birthday => labels.birthday,
            Field::Phone => labels.phone,
            Field::Password => labels.password,
            Field::Email => labels.email,
        }
    }
}

/// IP 检测状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpStatus {
    /// 启动时的查询尚未返回
    Detecting,
    Detected(IpInfo),
    Failed,
}

/// 刚被复制的字段
#[derive(Debug, Clone, Copy)]
pub struct CopiedIndicator {
    pub field: Field,
    pub at: Instant,
}

/// 生成器页面状态
#[derive(Debug)]
pub struct GeneratorState {
    /// 当前选中的国家代码
    pub country_code: &'static str,
    /// 邮箱域名选择
    pub domain: DomainChoice,
    /// 当前显示的身份；首次生成前为 None
    pub identity: Option<GeneratedIdentity>,
    pub ip: IpStatus,
    /// 选中的字段行
    pub selected: usize,
    pub copied: Option<CopiedIndicator>,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            country_code: default_country().code,
            domain: DomainChoice::Random,
            identity: None,
            ip: IpStatus::Detecting,
            selected: 0,
            copied: None,
        }
    }
}

impl GeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前国家配置
    pub fn country(&self) -> &'static CountryConfig {
        get_country_config(self.country_code).unwrap_or_else(default_country)
    }

    /// 当前显示的身份信息
    pub fn user(&self) -> Option<&UserInfo> {
        self.identity.as_ref().map(|identity| &identity.info)
    }

    /// 首次生成之前显示加载占位
    pub fn is_loading(&self) -> bool {
        self.identity.is_none()
    }

    /// 替换当前身份，同时清除复制标记
    pub fn set_identity(&mut self, identity: GeneratedIdentity) {
        self.identity = Some(identity);
        self.copied = None;
    }

    pub fn selected_field(&self) -> Field {
        Field::ALL[self.selected.min(Field::ALL.len() - 1)]
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < Field::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = Field::ALL.len() - 1;
    }

    /// 标记字段已复制
    pub fn mark_copied(&mut self, field: Field, now: Instant) {
        self.copied = Some(CopiedIndicator { field, at: now });
    }

    /// 某字段是否正显示 "已复制"
    pub fn is_copied(&self, field: Field) -> bool {
        self.copied.is_some_and(|c| c.field == field)
    }

    /// 清除过期的复制标记，返回是否有变化
    pub fn expire_copied(&mut self, now: Instant) -> bool {
        match self.copied {
            Some(c) if now.saturating_duration_since(c.at) >= COPY_INDICATOR_TTL => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_matches_display() {
        let info = UserInfo {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            birthday: "1990-01-01".into(),
            phone: "+1 (212) 555-0100".into(),
            password: "Pa55word!xyz".into(),
            email: "jane.doe@gmail.com".into(),
        };
        let values: Vec<_> = Field::ALL.iter().map(|f| f.value(&info)).collect();
        assert_eq!(values[0], "Doe");
        assert_eq!(values[1], "Jane");
        assert_eq!(values[5], "jane.doe@gmail.com");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = GeneratorState::new();
        state.select_previous();
        assert_eq!(state.selected_field(), Field::LastName);
        state.select_last();
        state.select_next();
        assert_eq!(state.selected_field(), Field::Email);
    }

    #[test]
    fn test_copied_indicator_expires() {
        let mut state = GeneratorState::new();
        let start = Instant::now();
        state.mark_copied(Field::Phone, start);
        assert!(state.is_copied(Field::Phone));
        assert!(!state.expire_copied(start + Duration::from_millis(1999)));
        assert!(state.is_copied(Field::Phone));
        assert!(state.expire_copied(start + COPY_INDICATOR_TTL));
        assert!(!state.is_copied(Field::Phone));
    }

    #[test]
    fn test_initial_state() {
        let state = GeneratorState::new();
        assert!(state.is_loading());
        assert_eq!(state.country().code, "US");
        assert_eq!(state.ip, IpStatus::Detecting);
    }
}
