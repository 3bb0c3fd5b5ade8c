//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use idforge_core::countries;

use crate::i18n::t;
use crate::model::{domain_options, App, DomainOption, Modal, NoticeButton};
use crate::view::pages::generator::country_name;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::FreeNotice { focus } => render_free_notice(frame, *focus),
        Modal::CountryPicker { selected } => render_country_picker(frame, *selected),
        Modal::DomainPicker {
            selected,
            custom,
            error,
        } => render_domain_picker(frame, *selected, custom, error.as_deref()),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框并返回内容区域
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染欢迎提示
fn render_free_notice(frame: &mut Frame, focus: NoticeButton) {
    let texts = &t().modal.notice;
    let c = colors();

    let area = centered_rect(60, 14, frame.area());
    let inner = modal_frame(frame, area, texts.title, c.accent);

    let mut buttons = Vec::new();
    for button in NoticeButton::all() {
        let label = match button {
            NoticeButton::Start => texts.start,
            NoticeButton::JoinCommunity => texts.join_community,
            NoticeButton::DontShowAgain => texts.dont_show_again,
        };
        let style = if *button == focus {
            Styles::selected()
        } else {
            Style::default().fg(c.muted)
        };
        buttons.push(Span::styled(format!(" [ {label} ] "), style));
        buttons.push(Span::raw(" "));
    }

    let lines = vec![
        Line::styled(texts.subtitle, Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(c.success)),
            Span::styled(texts.no_ads_title, Styles::title()),
        ]),
        Line::styled(format!("  {}", texts.no_ads_desc), Style::default().fg(c.muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(c.success)),
            Span::styled(texts.no_limits_title, Styles::title()),
        ]),
        Line::styled(format!("  {}", texts.no_limits_desc), Style::default().fg(c.muted)),
        Line::from(""),
        Line::from(buttons),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// 渲染国家选择器
fn render_country_picker(frame: &mut Frame, selected: usize) {
    let c = colors();
    let all = countries();

    let height = u16::try_from(all.len()).unwrap_or(u16::MAX).saturating_add(2).min(20);
    let area = centered_rect(56, height, frame.area());
    let inner = modal_frame(frame, area, t().modal.country_picker.title, c.border_focused);

    let items: Vec<ListItem> = all
        .iter()
        .enumerate()
        .map(|(i, country)| {
            let is_selected = i == selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix}{}  {}", country.code, country_name(country)), style),
                Span::styled(format!("  {}", country.phone.example()), Style::default().fg(c.muted)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(List::new(items), inner, &mut state);
}

/// 渲染域名选择器
fn render_domain_picker(frame: &mut Frame, selected: usize, custom: &str, error: Option<&str>) {
    let texts = &t().modal.domain_picker;
    let c = colors();
    let options = domain_options();

    let height = u16::try_from(options.len()).unwrap_or(u16::MAX).saturating_add(4).min(22);
    let area = centered_rect(48, height, frame.area());
    let inner = modal_frame(frame, area, texts.title, c.border_focused);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = i == selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            let line = match option {
                DomainOption::Random => Line::styled(format!("{prefix}{}", texts.random), style),
                DomainOption::Known(domain) => Line::styled(format!("{prefix}@{domain}"), style),
                DomainOption::Custom => {
                    let input = if custom.is_empty() && !is_selected {
                        Span::styled(texts.custom_placeholder, Style::default().fg(c.muted))
                    } else if is_selected {
                        Span::styled(format!("{custom}▎"), Style::default().fg(c.accent))
                    } else {
                        Span::styled(custom.to_string(), Style::default().fg(c.fg))
                    };
                    Line::from(vec![
                        Span::styled(format!("{prefix}{}: ", texts.custom), style),
                        input,
                    ])
                }
            };
            ListItem::new(line)
        })
        .collect();

    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(List::new(items), list_area, &mut state);

    if let Some(message) = error {
        let error_area = Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(1),
            inner.width,
            1,
        );
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(c.error)),
            error_area,
        );
    }
}

/// 帮助中的一节
fn help_section(
    lines: &mut Vec<Line<'static>>,
    title: &'static str,
    entries: &'static [(&'static str, &'static str)],
) {
    let c = colors();
    lines.push(Line::styled(
        title,
        Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
    ));
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ]));
    }
    lines.push(Line::from(""));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let c = colors();

    let rows = help.lines_global.len() + help.lines_generator.len() + help.lines_mail.len() + 8;
    let height = u16::try_from(rows).unwrap_or(u16::MAX);
    let area = centered_rect(56, height, frame.area());
    let inner = modal_frame(frame, area, help.title, c.border_focused);

    let mut lines = Vec::new();
    help_section(&mut lines, help.global, help.lines_global);
    help_section(&mut lines, help.generator, help.lines_generator);
    help_section(&mut lines, help.mail, help.lines_mail);
    lines.push(Line::styled(
        format!("{}: {}", t().hints.keys.esc, t().common.close),
        Style::default().fg(c.muted),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let keys = &t().hints.keys;

    let area = centered_rect(50, 8, frame.area());
    let inner = modal_frame(frame, area, title, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("{} / {}: {}", keys.esc, keys.enter, t().common.close),
            Style::default().fg(c.muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(50, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 30, 10));

        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }
}
