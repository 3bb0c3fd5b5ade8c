//! 弹窗/对话框状态

use idforge_core::{all_domains, countries, DomainChoice};

/// 欢迎弹窗中的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeButton {
    #[default]
    Start,
    JoinCommunity,
    DontShowAgain,
}

impl NoticeButton {
    pub fn all() -> &'static [NoticeButton] {
        &[
            NoticeButton::Start,
            NoticeButton::JoinCommunity,
            NoticeButton::DontShowAgain,
        ]
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            NoticeButton::Start => NoticeButton::JoinCommunity,
            NoticeButton::JoinCommunity => NoticeButton::DontShowAgain,
            NoticeButton::DontShowAgain => NoticeButton::Start,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            NoticeButton::Start => NoticeButton::DontShowAgain,
            NoticeButton::JoinCommunity => NoticeButton::Start,
            NoticeButton::DontShowAgain => NoticeButton::JoinCommunity,
        }
    }
}

/// 域名选择器中的一行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainOption {
    /// 每次随机
    Random,
    /// 预置域名
    Known(&'static str),
    /// 自定义输入
    Custom,
}

/// 域名选择器的全部选项：随机 + 预置域名 + 自定义
pub fn domain_options() -> Vec<DomainOption> {
    std::iter::once(DomainOption::Random)
        .chain(all_domains().iter().map(|d| DomainOption::Known(d)))
        .chain(std::iter::once(DomainOption::Custom))
        .collect()
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 欢迎提示（免费声明）
    FreeNotice { focus: NoticeButton },
    /// 国家选择
    CountryPicker {
        /// 在 countries() 中的索引
        selected: usize,
    },
    /// 邮箱域名选择
    DomainPicker {
        /// 在 domain_options() 中的索引
        selected: usize,
        /// 自定义域名输入
        custom: String,
        /// 自定义域名校验失败的信息
        error: Option<String>,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

impl Modal {
    /// 域名选择器是否停在 "自定义" 行上（此时普通字符进入输入框）
    pub fn is_custom_selected(&self) -> bool {
        match self {
            Modal::DomainPicker { selected, .. } => {
                domain_options().get(*selected) == Some(&DomainOption::Custom)
            }
            _ => false,
        }
    }
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示欢迎提示
    pub fn show_free_notice(&mut self) {
        self.active = Some(Modal::FreeNotice {
            focus: NoticeButton::default(),
        });
    }

    /// 显示国家选择器，光标停在当前国家上
    pub fn show_country_picker(&mut self, current_code: &str) {
        let selected = countries()
            .iter()
            .position(|c| c.code == current_code)
            .unwrap_or(0);
        self.active = Some(Modal::CountryPicker { selected });
    }

    /// 显示域名选择器，光标停在当前选择上
    pub fn show_domain_picker(&mut self, current: &DomainChoice) {
        let options = domain_options();
        let (selected, custom) = match current.fixed() {
            None => (0, String::new()),
            Some(domain) => {
                match options
                    .iter()
                    .position(|o| matches!(o, DomainOption::Known(d) if *d == domain))
                {
                    Some(index) => (index, String::new()),
                    None => (options.len() - 1, domain.to_string()),
                }
            }
        };
        self.active = Some(Modal::DomainPicker {
            selected,
            custom,
            error: None,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_options_layout() {
        let options = domain_options();
        assert_eq!(options.first(), Some(&DomainOption::Random));
        assert_eq!(options.last(), Some(&DomainOption::Custom));
        assert_eq!(options.len(), all_domains().len() + 2);
    }

    #[test]
    fn test_domain_picker_starts_on_current_choice() {
        let mut modal = ModalState::new();

        modal.show_domain_picker(&DomainChoice::Fixed("outlook.com".into()));
        let Some(Modal::DomainPicker { selected, .. }) = &modal.active else {
            panic!("domain picker not shown");
        };
        assert_eq!(
            domain_options()[*selected],
            DomainOption::Known("outlook.com")
        );

        modal.show_domain_picker(&DomainChoice::Fixed("example.org".into()));
        let active = modal.active.clone();
        assert!(active.as_ref().is_some_and(Modal::is_custom_selected));
        let Some(Modal::DomainPicker { custom, .. }) = active else {
            panic!("domain picker not shown");
        };
        assert_eq!(custom, "example.org");
    }

    #[test]
    fn test_country_picker_starts_on_current_country() {
        let mut modal = ModalState::new();
        modal.show_country_picker("JP");
        let Some(Modal::CountryPicker { selected }) = modal.active else {
            panic!("country picker not shown");
        };
        assert_eq!(countries()[selected].code, "JP");
    }

    #[test]
    fn test_notice_buttons_cycle() {
        let mut button = NoticeButton::Start;
        for _ in NoticeButton::all() {
            button = button.next();
        }
        assert_eq!(button, NoticeButton::Start);
        assert_eq!(NoticeButton::Start.prev(), NoticeButton::DontShowAgain);
    }
}
