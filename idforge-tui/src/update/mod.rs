//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   ┌───────────┐   消费   ┌──────────┐   修改   ┌──────────┐                 │
//！│   │  Message  │ ───────▶ │  Update  │ ───────▶ │  Model   │                 │
//！│   └───────────┘          └────┬─────┘          └──────────┘                 │
//！│                               │ 同步调用                                    │
//！│                               ▼                                             │
//！│                         ┌──────────┐                                        │
//！│                         │ Backend  │  identity / clipboard / links / config │
//！│                         └──────────┘                                        │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（按页面分发）
//!         mod modal;              // 弹窗子消息处理
//!         mod generator;          // 生成器相关操作（生成 / 复制 / 打开链接 / IP 结果）
//!         mod settings;           // 设置生效与持久化
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 失败处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     生成失败          保留原有身份；预期内的错误写入状态栏，其余弹出错误框
//!     复制 / 打开链接    写入状态栏，记录 warn 日志
//!     保存配置失败       弹出错误框，内存中的配置不变
//!     IP 查询失败        保持默认国家，IP 标记为 Failed，照常生成第一个身份
//!
//!     任何失败都不会让程序退出。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod generator;
mod modal;
mod navigation;
mod settings;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 先关闭弹窗，其次清空搜索框，最后清除状态消息
            if app.modal.is_open() {
                app.modal.close();
            } else if !(app.current_page.accepts_text() && app.mail.clear_query()) {
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Tick(now) => {
            app.generator.expire_copied(now);
        }

        AppMessage::IpLookupFinished(outcome) => {
            generator::apply_ip_outcome(app, outcome);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::time::{Duration, Instant};

    use idforge_core::{is_known_domain, DomainChoice};
    use idforge_toolbox::IpInfo;

    use super::*;
    use crate::backend::testing::TestBackend;
    use crate::backend::AppConfig;
    use crate::message::{ContentMessage, ModalMessage, NavigationMessage};
    use crate::model::{domain_options, DomainOption, Field, IpStatus, Modal, Page};

    fn dismissed() -> AppConfig {
        AppConfig {
            free_notice_dismissed: true,
            ..AppConfig::default()
        }
    }

    fn ip(country: Option<&str>, accurate: bool) -> IpInfo {
        IpInfo {
            ip: Some("203.0.113.7".to_string()),
            country: country.map(str::to_string),
            accurate,
        }
    }

    /// 已完成 IP 查询（失败）并生成了第一个身份的 App
    fn ready(test: &TestBackend) -> App {
        let mut app = App::new(test.backend(42));
        update(&mut app, AppMessage::IpLookupFinished(Err("offline".into())));
        app
    }

    fn send_content(app: &mut App, msg: ContentMessage) {
        update(app, AppMessage::Content(msg));
    }

    fn send_modal(app: &mut App, msg: ModalMessage) {
        update(app, AppMessage::Modal(msg));
    }

    fn email(app: &App) -> String {
        app.generator.user().unwrap().email.clone()
    }

    #[test]
    fn test_accurate_ip_preselects_country() {
        let test = TestBackend::new(dismissed());
        let mut app = App::new(test.backend(1));
        update(&mut app, AppMessage::IpLookupFinished(Ok(ip(Some("JP"), true))));

        assert_eq!(app.generator.country_code, "JP");
        assert!(matches!(app.generator.ip, IpStatus::Detected(_)));
        let phone = &app.generator.user().unwrap().phone;
        assert!(app.generator.country().phone.matches(phone), "{phone}");
    }

    #[test]
    fn test_missing_ip_address_still_preselects_country() {
        let test = TestBackend::new(dismissed());
        let mut app = App::new(test.backend(1));
        let info = IpInfo {
            ip: None,
            ..ip(Some("DE"), true)
        };
        update(&mut app, AppMessage::IpLookupFinished(Ok(info)));

        assert_eq!(app.generator.country_code, "DE");
        assert!(matches!(&app.generator.ip, IpStatus::Detected(info) if info.ip.is_none()));
        assert!(!app.generator.is_loading());
    }

    #[test]
    fn test_inaccurate_or_unsupported_ip_keeps_default() {
        for info in [ip(Some("JP"), false), ip(Some("ZZ"), true), ip(None, true)] {
            let test = TestBackend::new(dismissed());
            let mut app = App::new(test.backend(1));
            update(&mut app, AppMessage::IpLookupFinished(Ok(info)));
            assert_eq!(app.generator.country_code, "US");
            assert!(!app.generator.is_loading());
        }
    }

    #[test]
    fn test_failed_ip_lookup_still_generates() {
        let test = TestBackend::new(dismissed());
        let app = ready(&test);
        assert_eq!(app.generator.ip, IpStatus::Failed);
        assert_eq!(app.generator.country_code, "US");
        assert!(!app.generator.is_loading());
    }

    #[test]
    fn test_copy_marks_field_until_tick_expires_it() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        send_content(&mut app, ContentMessage::SelectLast);
        send_content(&mut app, ContentMessage::Copy);

        assert_eq!(test.copied(), vec![email(&app)]);
        assert!(app.generator.is_copied(Field::Email));

        update(&mut app, AppMessage::Tick(Instant::now()));
        assert!(app.generator.is_copied(Field::Email));

        update(
            &mut app,
            AppMessage::Tick(Instant::now() + Duration::from_secs(3)),
        );
        assert!(!app.generator.is_copied(Field::Email));
    }

    #[test]
    fn test_copy_failure_keeps_running() {
        let mut test = TestBackend::new(dismissed());
        test.clipboard.fail = true;
        let mut app = ready(&test);
        send_content(&mut app, ContentMessage::Copy);
        assert!(test.copied().is_empty());
        assert!(app.generator.copied.is_none());
        assert!(app.status_message.is_some());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_regenerate_replaces_identity() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        let before = app.generator.user().cloned().unwrap();
        send_content(&mut app, ContentMessage::Regenerate);
        let after = app.generator.user().cloned().unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_open_inbox_uses_local_part() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        send_content(&mut app, ContentMessage::OpenInbox);

        let local = app.generator.user().unwrap().email_local_part().to_string();
        assert_eq!(
            test.opened(),
            vec![format!("https://yopmail.net/?login={local}")]
        );
    }

    #[test]
    fn test_open_inbox_before_generation_does_nothing() {
        let test = TestBackend::new(dismissed());
        let mut app = App::new(test.backend(1));
        send_content(&mut app, ContentMessage::OpenInbox);
        assert!(test.opened().is_empty());
    }

    #[test]
    fn test_country_picker_regenerates_for_new_country() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        send_content(&mut app, ContentMessage::PickCountry);
        assert!(matches!(app.modal.active, Some(Modal::CountryPicker { .. })));

        send_modal(&mut app, ModalMessage::SelectNext);
        send_modal(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert_ne!(app.generator.country_code, "US");
        let phone = &app.generator.user().unwrap().phone;
        assert!(app.generator.country().phone.matches(phone), "{phone}");
    }

    #[test]
    fn test_known_domain_is_applied() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        send_content(&mut app, ContentMessage::PickDomain);
        send_modal(&mut app, ModalMessage::SelectNext);
        send_modal(&mut app, ModalMessage::Confirm);

        let DomainOption::Known(expected) = domain_options()[1] else {
            panic!("second option should be a known domain");
        };
        assert_eq!(app.generator.domain, DomainChoice::Fixed(expected.to_string()));
        assert!(email(&app).ends_with(&format!("@{expected}")));
    }

    #[test]
    fn test_custom_domain_is_validated() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        let before = email(&app);

        send_content(&mut app, ContentMessage::PickDomain);
        send_modal(&mut app, ModalMessage::SelectPrevious); // Random → Custom（循环）
        assert!(app.modal.active.as_ref().is_some_and(Modal::is_custom_selected));

        for c in "bad domain".chars() {
            send_modal(&mut app, ModalMessage::Input(c));
        }
        send_modal(&mut app, ModalMessage::Confirm);
        let Some(Modal::DomainPicker { error, .. }) = &app.modal.active else {
            panic!("picker should stay open");
        };
        assert!(error.is_some());
        assert_eq!(app.generator.domain, DomainChoice::Random);
        assert_eq!(email(&app), before);

        for _ in 0.."bad domain".len() {
            send_modal(&mut app, ModalMessage::Backspace);
        }
        for c in "Example.ORG".chars() {
            send_modal(&mut app, ModalMessage::Input(c));
        }
        send_modal(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert_eq!(app.generator.domain, DomainChoice::Fixed("example.org".into()));
        assert!(email(&app).ends_with("@example.org"));
    }

    #[test]
    fn test_random_domain_stays_in_known_set() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        for _ in 0..10 {
            send_content(&mut app, ContentMessage::Regenerate);
            let email = email(&app);
            let domain = email.split('@').nth(1).unwrap();
            assert!(is_known_domain(domain), "{email}");
        }
    }

    #[test]
    fn test_mail_search_and_open() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::TempMail);

        for c in "yop".chars() {
            send_content(&mut app, ContentMessage::Input(c));
        }
        assert_eq!(app.mail.results().len(), 1);
        send_content(&mut app, ContentMessage::Confirm);
        assert_eq!(test.opened(), vec!["https://yopmail.com".to_string()]);

        // Esc 先清空搜索框
        update(&mut app, AppMessage::GoBack);
        assert!(app.mail.query.is_empty());
    }

    #[test]
    fn test_settings_are_persisted() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        app.current_page = Page::Settings;
        send_content(&mut app, ContentMessage::ToggleNext);

        assert_eq!(test.save_count(), 1);
        assert_eq!(test.saved().theme, app.settings.theme);
        assert_eq!(app.config.theme, app.settings.theme);
        assert!(test.saved().free_notice_dismissed);
    }

    #[test]
    fn test_dont_show_again_is_persisted() {
        let test = TestBackend::new(AppConfig::default());
        let mut app = App::new(test.backend(1));
        assert!(matches!(app.modal.active, Some(Modal::FreeNotice { .. })));

        send_modal(&mut app, ModalMessage::PrevButton); // Start → DontShowAgain
        send_modal(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert!(test.saved().free_notice_dismissed);
        assert!(app.config.free_notice_dismissed);
    }

    #[test]
    fn test_join_community_opens_link() {
        let test = TestBackend::new(AppConfig::default());
        let mut app = App::new(test.backend(1));
        send_modal(&mut app, ModalMessage::NextButton);
        send_modal(&mut app, ModalMessage::Confirm);
        assert_eq!(test.opened(), vec![modal::COMMUNITY_URL.to_string()]);
        assert_eq!(test.save_count(), 0);
    }

    #[test]
    fn test_go_back_closes_modal_first() {
        let test = TestBackend::new(dismissed());
        let mut app = ready(&test);
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());
        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_navigation());
    }
}
