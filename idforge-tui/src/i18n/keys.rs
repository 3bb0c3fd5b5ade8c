//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `generator.*`, `mail.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 6. **状态栏消息归 `status.*`**：操作完成后的短提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 生成器页面文本
    pub generator: GeneratorTexts,
    /// 临时邮箱页面文本
    pub mail: MailTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub copy: &'static str,
    pub regenerate: &'static str,
    pub country: &'static str,
    pub domain: &'static str,
    pub inbox: &'static str,
    pub search: &'static str,
    pub clear: &'static str,
    pub modify: &'static str,
    pub switch_option: &'static str,
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub generator: &'static str,
    pub mail: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 生成器页面
// ============================================================================

/// 生成器页面文本
pub struct GeneratorTexts {
    /// 字段名
    pub fields: FieldLabels,
    pub ip_label: &'static str,
    pub ip_detecting: &'static str,
    /// IP 检测失败时的占位符
    pub ip_failed: &'static str,
    pub ip_unknown: &'static str,
    pub country_label: &'static str,
    pub domain_label: &'static str,
    pub random_domain: &'static str,
    pub copied: &'static str,
    pub generating: &'static str,
    pub view_inbox: &'static str,
    pub regenerate: &'static str,
    /// 页脚："{n} countries · {m} domains"
    pub countries_suffix: &'static str,
    pub domains_suffix: &'static str,
    pub generated_at: &'static str,
}

/// 身份字段名
pub struct FieldLabels {
    pub last_name: &'static str,
    pub first_name: &'static str,
    pub birthday: &'static str,
    pub phone: &'static str,
    pub password: &'static str,
    pub email: &'static str,
}

// ============================================================================
// 临时邮箱页面
// ============================================================================

/// 临时邮箱页面文本
pub struct MailTexts {
    pub search_label: &'static str,
    pub search_placeholder: &'static str,
    pub tip_title: &'static str,
    pub tip: &'static str,
    pub visit: &'static str,
    pub no_match: &'static str,
    /// 页脚："Listing {n} temp-mail services"
    pub total_prefix: &'static str,
    pub total_suffix: &'static str,
}

// ============================================================================
// 设置页面
// ============================================================================

/// 设置页面文本
pub struct SettingsTexts {
    pub theme: ThemeSettingTexts,
    pub language: LanguageSettingTexts,
    pub config_path: &'static str,
}

pub struct ThemeSettingTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageSettingTexts {
    pub label: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub notice: NoticeTexts,
    pub country_picker: PickerTexts,
    pub domain_picker: DomainPickerTexts,
    pub error_titles: ErrorTitles,
}

/// 欢迎弹窗
pub struct NoticeTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub no_ads_title: &'static str,
    pub no_ads_desc: &'static str,
    pub no_limits_title: &'static str,
    pub no_limits_desc: &'static str,
    pub start: &'static str,
    pub join_community: &'static str,
    pub dont_show_again: &'static str,
}

pub struct PickerTexts {
    pub title: &'static str,
}

pub struct DomainPickerTexts {
    pub title: &'static str,
    pub random: &'static str,
    pub custom: &'static str,
    pub custom_placeholder: &'static str,
}

pub struct ErrorTitles {
    pub generate: &'static str,
    pub clipboard: &'static str,
    pub open_link: &'static str,
    pub config: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub copied: &'static str,
    pub regenerated: &'static str,
    pub opened: &'static str,
    pub no_inbox: &'static str,
    pub settings_saved: &'static str,
    pub notice_dismissed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub generator: &'static str,
    pub mail: &'static str,
    pub lines_global: &'static [(&'static str, &'static str)],
    pub lines_generator: &'static [(&'static str, &'static str)],
    pub lines_mail: &'static [(&'static str, &'static str)],
}
