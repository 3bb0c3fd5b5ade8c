//! 设置页面状态

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }
}

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl SettingsState {
    /// 使用已加载的配置值创建
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            selected_index: 0,
            theme,
            language,
        }
    }

    /// 获取设置项数量
    pub fn item_count(&self) -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.item_count() - 1;
        }
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        if self.selected_index < self.item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::all().get(self.selected_index).copied()
    }

    /// 切换当前设置项到下一个值
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::Language) => self.language = self.language.next(),
            None => {}
        }
    }

    /// 切换当前设置项到上一个值
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.prev(),
            Some(SettingItem::Language) => self.language = self.language.prev(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut state = SettingsState::default();
        state.select_previous();
        assert_eq!(state.current_item(), Some(SettingItem::Language));
        state.select_next();
        assert_eq!(state.current_item(), Some(SettingItem::Theme));
    }

    #[test]
    fn test_toggle() {
        let mut state = SettingsState::new(Theme::Dark, Language::EnUs);
        state.toggle_next();
        assert_eq!(state.theme, Theme::Light);
        state.select_next();
        state.toggle_prev();
        assert_eq!(state.language, Language::ZhCn);
    }
}
