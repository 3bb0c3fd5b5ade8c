//! 应用主消息枚举

use std::time::Instant;

use crate::backend::IpLookupOutcome;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回 / 取消
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 定时器（每轮主循环一次，用于过期 "已复制" 标记）
    Tick(Instant),

    /// 后台 IP 查询完成
    IpLookupFinished(IpLookupOutcome),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
