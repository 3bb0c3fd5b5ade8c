//! 内容面板消息
//!
//! 处理内容面板中的操作：字段选择、复制、重新生成、搜索等

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认（生成器：复制；邮箱：打开；设置：切换）
    Confirm,

    // ========== 生成器专用 ==========
    /// 复制选中字段
    Copy,
    /// 重新生成
    Regenerate,
    /// 打开国家选择器
    PickCountry,
    /// 打开域名选择器
    PickDomain,
    /// 在浏览器中打开收件箱
    OpenInbox,
    /// 再次显示欢迎提示
    ShowNotice,

    // ========== 临时邮箱专用 ==========
    /// 搜索框输入字符
    Input(char),
    /// 删除搜索框最后一个字符
    Backspace,
    /// 清空搜索框
    ClearInput,

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
