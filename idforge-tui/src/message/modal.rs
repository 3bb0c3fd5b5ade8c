//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 列表中上移
    SelectPrevious,

    /// 列表中下移
    SelectNext,

    /// 上一个按钮
    PrevButton,

    /// 下一个按钮
    NextButton,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
