//! 临时邮箱页面状态

use idforge_core::{filter_temp_emails, temp_email_services, TempEmailEntry};

/// 临时邮箱页面状态
#[derive(Debug, Default)]
pub struct MailState {
    /// 搜索关键字
    pub query: String,
    /// 在过滤结果中的选中索引
    pub selected: usize,
}

impl MailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前过滤结果
    pub fn results(&self) -> Vec<&'static TempEmailEntry> {
        filter_temp_emails(&self.query)
    }

    /// 收录总数（不受搜索影响）
    pub fn total(&self) -> usize {
        temp_email_services().len()
    }

    pub fn selected_entry(&self) -> Option<&'static TempEmailEntry> {
        self.results().get(self.selected).copied()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// 清空搜索，返回之前是否有内容
    pub fn clear_query(&mut self) -> bool {
        let had_query = !self.query.is_empty();
        self.query.clear();
        self.selected = 0;
        had_query
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.results().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.results().len().saturating_sub(1);
    }
}
