//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 信息生成器
    #[default]
    Generator,
    /// 临时邮箱大全
    TempMail,
    /// 设置
    Settings,
}

impl Page {
    /// 页面是否接受文本输入（输入时普通字符不作为快捷键）
    pub fn accepts_text(self) -> bool {
        matches!(self, Page::TempMail)
    }
}
