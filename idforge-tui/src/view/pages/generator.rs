//! 生成器页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use idforge_core::{all_domains, countries, CountryConfig};

use crate::i18n::{current_language, t, Language};
use crate::model::{App, Field, IpStatus};
use crate::view::theme::{colors, Styles};

/// 字段名的显示宽度（用于对齐）
const LABEL_WIDTH: usize = 14;

/// 按当前语言取国家名
pub fn country_name(country: &CountryConfig) -> &'static str {
    match current_language() {
        Language::ZhCn => country.name_zh,
        Language::EnUs => country.name,
    }
}

/// 渲染生成器页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().generator;
    let c = colors();
    let state = &app.generator;

    let mut lines = vec![ip_line(&state.ip)];

    // 国家与域名
    let country = state.country();
    let domain = state
        .domain
        .fixed()
        .map_or_else(|| texts.random_domain.to_string(), |domain| format!("@{domain}"));
    lines.push(Line::from(vec![
        Span::styled(format!("  {}: ", texts.country_label), Style::default().fg(c.muted)),
        Span::styled(
            format!("{} ({})", country_name(country), country.code),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [c]", Styles::hint_key()),
        Span::styled(format!("    {}: ", texts.domain_label), Style::default().fg(c.muted)),
        Span::styled(domain, Style::default().fg(c.accent).add_modifier(Modifier::BOLD)),
        Span::styled("  [d]", Styles::hint_key()),
    ]));
    lines.push(Line::from(""));

    match state.user() {
        None => {
            lines.push(Line::styled(
                format!("  {}", texts.generating),
                Style::default().fg(c.muted),
            ));
        }
        Some(user) => {
            for (index, field) in Field::ALL.iter().enumerate() {
                let is_selected = app.focus.is_content() && index == state.selected;
                lines.push(field_row(
                    field.label(&texts.fields),
                    field.value(user),
                    is_selected,
                    state.is_copied(*field),
                ));
            }
        }
    }

    lines.push(Line::from(""));

    // 操作
    lines.push(Line::from(vec![
        Span::styled("  [y] ", Styles::hint_key()),
        Span::styled(t().hints.actions.copy, Style::default().fg(c.fg)),
        Span::styled("   [r] ", Styles::hint_key()),
        Span::styled(texts.regenerate, Style::default().fg(c.fg)),
        Span::styled("   [i] ", Styles::hint_key()),
        Span::styled(texts.view_inbox, Style::default().fg(c.fg)),
    ]));
    lines.push(Line::from(""));

    // 页脚
    let mut footer = format!(
        "  {} {} · {} {}",
        countries().len(),
        texts.countries_suffix,
        all_domains().len(),
        texts.domains_suffix
    );
    if let Some(identity) = &state.identity {
        footer.push_str(&format!(
            " · {} {}",
            texts.generated_at,
            identity.generated_at.format("%H:%M:%S")
        ));
    }
    lines.push(Line::styled(footer, Style::default().fg(c.muted)));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// IP 徽标
fn ip_line(ip: &IpStatus) -> Line<'static> {
    let texts = &t().generator;
    let c = colors();

    let (value, style) = match ip {
        IpStatus::Detecting => (texts.ip_detecting.to_string(), Style::default().fg(c.muted)),
        IpStatus::Failed => (texts.ip_failed.to_string(), Style::default().fg(c.warning)),
        IpStatus::Detected(info) => {
            let ip = info.ip.as_deref().unwrap_or(texts.ip_unknown);
            let country = info.country.as_deref().unwrap_or(texts.ip_unknown);
            (
                format!("{ip} · {country}"),
                Style::default().fg(c.success),
            )
        }
    };

    Line::from(vec![
        Span::styled(format!("  {}: ", texts.ip_label), Style::default().fg(c.muted)),
        Span::styled(value, style),
    ])
}

/// 渲染一行字段
fn field_row(label: &str, value: &str, is_selected: bool, copied: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };
    let padding = LABEL_WIDTH.saturating_sub(label.width());

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    let mut spans = vec![
        Span::styled(format!("{prefix}{label}{:padding$}", ""), label_style),
        Span::styled(format!(" {value} "), value_style),
    ];
    if copied {
        spans.push(Span::styled(
            format!("  {}", t().generator.copied),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
