//! 应用主状态结构

use crate::backend::{AppConfig, Backend};
use crate::i18n::set_language;
use crate::view::theme::set_theme;

use super::{
    FocusPanel, GeneratorState, MailState, ModalState, NavigationState, Page, SettingsState,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 生成器页面状态
    pub generator: GeneratorState,
    /// 临时邮箱页面状态
    pub mail: MailState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前生效的配置（最近一次加载或保存的值）
    pub config: AppConfig,

    /// 服务层
    pub backend: Backend,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 加载配置并应用主题与语言；用户没有选择 "不再提示" 时弹出欢迎提示。
    pub fn new(backend: Backend) -> Self {
        let config = backend.config.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e:#}");
            AppConfig::default()
        });

        set_language(config.language);
        set_theme(config.theme);

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Content,
            navigation: NavigationState::new(),
            current_page: Page::Generator,
            status_message: None,
            generator: GeneratorState::new(),
            mail: MailState::new(),
            settings: SettingsState::new(config.theme, config.language),
            modal: ModalState::new(),
            config,
            backend,
        };

        if !app.config.free_notice_dismissed {
            app.modal.show_free_notice();
        }

        app
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::TestBackend;
    use crate::model::Modal;

    #[test]
    fn test_notice_shown_on_first_launch() {
        let test = TestBackend::new(AppConfig::default());
        let app = App::new(test.backend(1));
        assert!(matches!(app.modal.active, Some(Modal::FreeNotice { .. })));
        assert_eq!(app.current_page, Page::Generator);
        assert!(app.generator.is_loading());
    }

    #[test]
    fn test_notice_hidden_when_dismissed() {
        let test = TestBackend::new(AppConfig {
            free_notice_dismissed: true,
            ..AppConfig::default()
        });
        let app = App::new(test.backend(1));
        assert!(!app.modal.is_open());
    }
}
