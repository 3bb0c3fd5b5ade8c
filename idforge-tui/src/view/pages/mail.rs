//! 临时邮箱页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use idforge_core::TempEmailEntry;

use crate::i18n::{current_language, t, Language};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染临时邮箱页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 搜索框
            Constraint::Length(3), // 提示
            Constraint::Min(1),    // 列表
            Constraint::Length(1), // 总数
        ])
        .split(area);

    render_search(app, frame, chunks[0]);
    render_tip(frame, chunks[1]);
    render_list(app, frame, chunks[2]);

    let texts = &t().mail;
    let footer = Paragraph::new(format!(
        " {} {} {}",
        texts.total_prefix,
        app.mail.total(),
        texts.total_suffix
    ))
    .style(Style::default().fg(colors().muted));
    frame.render_widget(footer, chunks[3]);
}

fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().mail;
    let c = colors();

    let content = if app.mail.query.is_empty() {
        Line::styled(texts.search_placeholder, Style::default().fg(c.muted))
    } else {
        Line::from(vec![
            Span::styled(app.mail.query.clone(), Style::default().fg(c.fg)),
            Span::styled("▏", Style::default().fg(c.accent)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", texts.search_label))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_tip(frame: &mut Frame, area: Rect) {
    let texts = &t().mail;
    let c = colors();

    let tip = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {}: ", texts.tip_title),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        ),
        Span::styled(texts.tip, Style::default().fg(c.muted)),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(tip, area);
}

fn description(entry: &TempEmailEntry) -> &'static str {
    match current_language() {
        Language::ZhCn => entry.description_zh,
        Language::EnUs => entry.description,
    }
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let results = app.mail.results();

    if results.is_empty() {
        let empty = Paragraph::new(format!("  {}", t().mail.no_match))
            .style(Style::default().fg(c.muted));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = i == app.mail.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{prefix}{}", entry.name), name_style),
                    Span::styled(format!("  {}", entry.url), Style::default().fg(c.accent)),
                ]),
                Line::styled(
                    format!("    {}", description(entry)),
                    Style::default().fg(c.muted),
                ),
            ])
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.mail.selected));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}
