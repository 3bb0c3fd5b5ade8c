//! English translation (en-US)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // Common
    // ========================================================================
    common: CommonTexts {
        app_name: "idforge",
        loading: "Loading...",
        error: "Error",
        close: "Close",
        quit: "Quit",
    },

    // ========================================================================
    // Hints
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
            navigate: "Navigate",
            select: "Select",
            open: "Open",
            copy: "Copy",
            regenerate: "Regenerate",
            country: "Country",
            domain: "Domain",
            inbox: "Inbox",
            search: "Type to search",
            clear: "Clear",
            modify: "Modify",
            switch_option: "Switch",
            switch_panel: "Switch panel",
            move_up_down: "Move",
            help: "Help",
        },
    },

    // ========================================================================
    // Navigation
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        generator: "Generator",
        mail: "Temp Mail",
        settings: "Settings",
    },

    // ========================================================================
    // Generator
    // ========================================================================
    generator: GeneratorTexts {
        fields: FieldLabels {
            last_name: "Last name",
            first_name: "First name",
            birthday: "Birthday",
            phone: "Phone",
            password: "Password",
            email: "Email",
        },
        ip_label: "IP",
        ip_detecting: "Detecting...",
        ip_failed: "Detection failed",
        ip_unknown: "Unknown",
        country_label: "Region",
        domain_label: "Email domain",
        random_domain: "Random",
        copied: "✓ Copied",
        generating: "Generating identity...",
        view_inbox: "View inbox",
        regenerate: "Generate new identity",
        countries_suffix: "countries",
        domains_suffix: "domains",
        generated_at: "Generated at",
    },

    // ========================================================================
    // Temp mail
    // ========================================================================
    mail: MailTexts {
        search_label: "Search",
        search_placeholder: "Search temp-mail services...",
        tip_title: "Tip",
        tip: "Temp mail is for sign-ups and verification codes, never for important accounts. Messages may be visible to others, mind your privacy.",
        visit: "Visit",
        no_match: "No matching service found",
        total_prefix: "Listing",
        total_suffix: "temp-mail services",
    },

    // ========================================================================
    // Settings
    // ========================================================================
    settings: SettingsTexts {
        theme: ThemeSettingTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageSettingTexts { label: "Language" },
        config_path: "Config file",
    },

    // ========================================================================
    // Modals
    // ========================================================================
    modal: ModalTexts {
        notice: NoticeTexts {
            title: "Welcome",
            subtitle: "No ads · No limits",
            no_ads_title: "No ads",
            no_ads_desc: "A clean experience, just the tool",
            no_limits_title: "No usage limits",
            no_limits_desc: "Use every feature as much as you like",
            start: "Get started",
            join_community: "Join the group @fang180",
            dont_show_again: "Don't show again",
        },
        country_picker: PickerTexts {
            title: "Select region",
        },
        domain_picker: DomainPickerTexts {
            title: "Select domain",
            random: "Random domain",
            custom: "Custom",
            custom_placeholder: "type a domain, e.g. example.org",
        },
        error_titles: ErrorTitles {
            generate: "Generation failed",
            clipboard: "Copy failed",
            open_link: "Cannot open link",
            config: "Cannot save settings",
        },
    },

    // ========================================================================
    // Status bar
    // ========================================================================
    status: StatusTexts {
        copied: "Copied",
        regenerated: "New identity generated",
        opened: "Opened",
        no_inbox: "No email to open",
        settings_saved: "Settings saved",
        notice_dismissed: "The welcome notice will not be shown again",
    },

    // ========================================================================
    // Help
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global: "Global",
        generator: "Generator",
        mail: "Temp Mail",
        lines_global: &[
            ("Tab", "Switch panel"),
            ("↑↓ / j k", "Move"),
            ("Enter", "Confirm"),
            ("Esc", "Back / close"),
            ("? / Alt+h", "Help"),
            ("Alt+q / Ctrl+c", "Quit"),
        ],
        lines_generator: &[
            ("Enter / y", "Copy selected field"),
            ("r / Space", "Generate new identity"),
            ("c", "Select region"),
            ("d", "Select email domain"),
            ("i", "View inbox"),
            ("n", "Show welcome notice"),
        ],
        lines_mail: &[
            ("type", "Filter services"),
            ("Backspace", "Delete character"),
            ("Esc", "Clear search"),
            ("Enter", "Open selected service"),
        ],
    },
};
