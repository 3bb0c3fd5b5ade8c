//! 快捷键配置
//!
//! 定义默认的快捷键映射

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_QUESTION: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 生成器
    pub const COPY: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const REGENERATE: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const REGENERATE_SPACE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const PICK_COUNTRY: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const PICK_DOMAIN: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const OPEN_INBOX: KeyBinding = KeyBinding::key(KeyCode::Char('i'));
    pub const SHOW_NOTICE: KeyBinding = KeyBinding::key(KeyCode::Char('n'));

    // 搜索框
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
