//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // Resize 等事件由下一次绘制自动处理
    }
}

/// 普通字符输入（允许 Shift 以输入大写字母和符号）
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(ch)
        }
        _ => None,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    let typing = app.focus.is_content() && app.current_page.accepts_text();

    if DefaultKeymap::HELP.matches(&key) || (!typing && DefaultKeymap::HELP_QUESTION.matches(&key))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Generator => handle_generator_keys(key),
        Page::TempMail => handle_mail_keys(key),
        Page::Settings => handle_settings_keys(key),
    }
}

/// 处理生成器页面的按键
fn handle_generator_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::COPY.matches(&key) {
        ContentMessage::Copy
    } else if DefaultKeymap::REGENERATE.matches(&key)
        || DefaultKeymap::REGENERATE_SPACE.matches(&key)
    {
        ContentMessage::Regenerate
    } else if DefaultKeymap::PICK_COUNTRY.matches(&key) {
        ContentMessage::PickCountry
    } else if DefaultKeymap::PICK_DOMAIN.matches(&key) {
        ContentMessage::PickDomain
    } else if DefaultKeymap::OPEN_INBOX.matches(&key) {
        ContentMessage::OpenInbox
    } else if DefaultKeymap::SHOW_NOTICE.matches(&key) {
        ContentMessage::ShowNotice
    } else {
        return handle_list_keys(key);
    };
    AppMessage::Content(msg)
}

/// 处理临时邮箱页面的按键：普通字符全部进入搜索框
fn handle_mail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearInput);
    }
    if let Some(ch) = typed_char(&key) {
        return AppMessage::Content(ContentMessage::Input(ch));
    }
    match key.code {
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ← 或 h: 切换到上一个值
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        // → 或 l 或 Enter: 切换到下一个值
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::FreeNotice { .. } => handle_notice_keys(key),
        Modal::CountryPicker { .. } => handle_picker_keys(key, false),
        Modal::DomainPicker { .. } => handle_picker_keys(key, modal.is_custom_selected()),
        Modal::Help | Modal::Error { .. } => {
            // 帮助和错误弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理欢迎弹窗的按键（三个按钮）
fn handle_notice_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h' | 'k') => {
            AppMessage::Modal(ModalMessage::PrevButton)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l' | 'j') => {
            AppMessage::Modal(ModalMessage::NextButton)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理列表选择弹窗的按键
///
/// `editing` 为 true 时光标停在自定义输入行，普通字符（包括 j/k）作为输入。
fn handle_picker_keys(key: KeyEvent, editing: bool) -> AppMessage {
    if editing {
        if let Some(ch) = typed_char(&key) {
            return AppMessage::Modal(ModalMessage::Input(ch));
        }
        if key.code == KeyCode::Backspace {
            return AppMessage::Modal(ModalMessage::Backspace);
        }
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::SelectNext),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::TestBackend;
    use crate::backend::AppConfig;
    use crate::model::FocusPanel;

    fn app() -> App {
        let test = TestBackend::new(AppConfig {
            free_notice_dismissed: true,
            ..AppConfig::default()
        });
        App::new(test.backend(7))
    }

    fn key(app: &App, code: KeyCode) -> AppMessage {
        key_with(app, code, KeyModifiers::NONE)
    }

    fn key_with(app: &App, code: KeyCode, modifiers: KeyModifiers) -> AppMessage {
        handle_event(Event::Key(KeyEvent::new(code, modifiers)), app)
    }

    #[test]
    fn test_release_events_are_ignored() {
        let app = app();
        let mut event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(event), &app), AppMessage::Noop);
    }

    #[test]
    fn test_global_keys() {
        let app = app();
        assert_eq!(
            key_with(&app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            AppMessage::Quit
        );
        assert_eq!(
            key_with(&app, KeyCode::Char('q'), KeyModifiers::ALT),
            AppMessage::Quit
        );
        assert_eq!(key(&app, KeyCode::Tab), AppMessage::ToggleFocus);
        assert_eq!(key(&app, KeyCode::Char('?')), AppMessage::ShowHelp);
        assert_eq!(key(&app, KeyCode::Esc), AppMessage::GoBack);
    }

    #[test]
    fn test_generator_keys() {
        let app = app();
        let cases = [
            (KeyCode::Char('y'), ContentMessage::Copy),
            (KeyCode::Enter, ContentMessage::Confirm),
            (KeyCode::Char('r'), ContentMessage::Regenerate),
            (KeyCode::Char(' '), ContentMessage::Regenerate),
            (KeyCode::Char('c'), ContentMessage::PickCountry),
            (KeyCode::Char('d'), ContentMessage::PickDomain),
            (KeyCode::Char('i'), ContentMessage::OpenInbox),
            (KeyCode::Char('n'), ContentMessage::ShowNotice),
            (KeyCode::Char('j'), ContentMessage::SelectNext),
        ];
        for (code, expected) in cases {
            assert_eq!(key(&app, code), AppMessage::Content(expected), "{code:?}");
        }
        assert_eq!(key(&app, KeyCode::Char('z')), AppMessage::Noop);
    }

    #[test]
    fn test_mail_page_types_instead_of_shortcuts() {
        let mut app = app();
        app.current_page = Page::TempMail;
        assert_eq!(
            key(&app, KeyCode::Char('r')),
            AppMessage::Content(ContentMessage::Input('r'))
        );
        assert_eq!(
            key(&app, KeyCode::Char('?')),
            AppMessage::Content(ContentMessage::Input('?'))
        );
        assert_eq!(
            key_with(&app, KeyCode::Char('M'), KeyModifiers::SHIFT),
            AppMessage::Content(ContentMessage::Input('M'))
        );
        assert_eq!(
            key_with(&app, KeyCode::Char('u'), KeyModifiers::CONTROL),
            AppMessage::Content(ContentMessage::ClearInput)
        );

        // 焦点在导航栏时 '?' 仍是帮助
        app.focus = FocusPanel::Navigation;
        assert_eq!(key(&app, KeyCode::Char('?')), AppMessage::ShowHelp);
    }

    #[test]
    fn test_modal_keys_take_priority() {
        let mut app = app();
        app.modal.show_free_notice();
        assert_eq!(key(&app, KeyCode::Char('r')), AppMessage::Noop);
        assert_eq!(
            key(&app, KeyCode::Right),
            AppMessage::Modal(ModalMessage::NextButton)
        );
        assert_eq!(key(&app, KeyCode::Esc), AppMessage::Modal(ModalMessage::Close));
    }

    #[test]
    fn test_domain_picker_custom_row_accepts_text() {
        let mut app = app();
        app.modal
            .show_domain_picker(&idforge_core::DomainChoice::Random);
        assert_eq!(
            key(&app, KeyCode::Char('j')),
            AppMessage::Modal(ModalMessage::SelectNext)
        );

        app.modal
            .show_domain_picker(&idforge_core::DomainChoice::Fixed("example.org".into()));
        assert_eq!(
            key(&app, KeyCode::Char('j')),
            AppMessage::Modal(ModalMessage::Input('j'))
        );
        assert_eq!(
            key(&app, KeyCode::Up),
            AppMessage::Modal(ModalMessage::SelectPrevious)
        );
    }
}
