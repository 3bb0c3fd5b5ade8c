//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "idforge",
        loading: "加载中...",
        error: "错误",
        close: "关闭",
        quit: "退出",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "导航",
            select: "选择",
            open: "访问",
            copy: "复制",
            regenerate: "重新生成",
            country: "地区",
            domain: "域名",
            inbox: "收件箱",
            search: "输入以搜索",
            clear: "清空",
            modify: "修改",
            switch_option: "切换选项",
            switch_panel: "切换面板",
            move_up_down: "上下移动",
            help: "帮助",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "导航菜单",
        generator: "信息生成器",
        mail: "临时邮箱大全",
        settings: "设置",
    },

    // ========================================================================
    // 生成器页面
    // ========================================================================
    generator: GeneratorTexts {
        fields: FieldLabels {
            last_name: "姓氏",
            first_name: "名字",
            birthday: "生日",
            phone: "手机号",
            password: "密码",
            email: "邮箱",
        },
        ip_label: "IP",
        ip_detecting: "检测中...",
        ip_failed: "检测失败",
        ip_unknown: "未知",
        country_label: "选择地区",
        domain_label: "邮箱域名",
        random_domain: "随机",
        copied: "✓ 已复制",
        generating: "正在生成身份...",
        view_inbox: "查看收件箱",
        regenerate: "生成新身份",
        countries_suffix: "个国家",
        domains_suffix: "个域名",
        generated_at: "生成于",
    },

    // ========================================================================
    // 临时邮箱页面
    // ========================================================================
    mail: MailTexts {
        search_label: "搜索",
        search_placeholder: "搜索临时邮箱...",
        tip_title: "使用提示",
        tip: "临时邮箱用于注册网站或接收验证码,请勿用于重要账户。邮件可能被他人查看,注意隐私安全。",
        visit: "访问",
        no_match: "未找到匹配的邮箱服务",
        total_prefix: "共收录",
        total_suffix: "个临时邮箱服务",
    },

    // ========================================================================
    // 设置页面
    // ========================================================================
    settings: SettingsTexts {
        theme: ThemeSettingTexts {
            label: "主题",
            dark: "深色",
            light: "浅色",
        },
        language: LanguageSettingTexts { label: "语言" },
        config_path: "配置文件",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        notice: NoticeTexts {
            title: "欢迎使用",
            subtitle: "无广告 · 无限制",
            no_ads_title: "无广告干扰",
            no_ads_desc: "纯净体验,专注使用",
            no_limits_title: "无使用限制",
            no_limits_desc: "随心使用,畅享所有功能",
            start: "开始使用",
            join_community: "加入交流群 @fang180",
            dont_show_again: "不再提示",
        },
        country_picker: PickerTexts { title: "选择地区" },
        domain_picker: DomainPickerTexts {
            title: "选择域名",
            random: "随机域名",
            custom: "自定义",
            custom_placeholder: "输入域名，例如 example.org",
        },
        error_titles: ErrorTitles {
            generate: "生成失败",
            clipboard: "复制失败",
            open_link: "无法打开链接",
            config: "无法保存设置",
        },
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        copied: "已复制",
        regenerated: "已生成新身份",
        opened: "已打开",
        no_inbox: "没有可查看的邮箱",
        settings_saved: "设置已保存",
        notice_dismissed: "欢迎提示将不再显示",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global: "全局",
        generator: "信息生成器",
        mail: "临时邮箱",
        lines_global: &[
            ("Tab", "切换面板"),
            ("↑↓ / j k", "上下移动"),
            ("Enter", "确认"),
            ("Esc", "返回 / 关闭"),
            ("? / Alt+h", "帮助"),
            ("Alt+q / Ctrl+c", "退出"),
        ],
        lines_generator: &[
            ("Enter / y", "复制选中字段"),
            ("r / Space", "生成新身份"),
            ("c", "选择地区"),
            ("d", "选择邮箱域名"),
            ("i", "查看收件箱"),
            ("n", "显示欢迎提示"),
        ],
        lines_mail: &[
            ("输入", "筛选服务"),
            ("Backspace", "删除字符"),
            ("Esc", "清空搜索"),
            ("Enter", "访问选中服务"),
        ],
    },
};
