//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.accent).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let border_style = if app.focus.is_content() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let page_title = match app.current_page {
        Page::Generator => texts.nav.generator,
        Page::TempMail => texts.nav.mail,
        Page::Settings => texts.nav.settings,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Generator => pages::generator::render(app, frame, inner_area),
        Page::TempMail => pages::mail::render(app, frame, inner_area),
        Page::Settings => pages::settings::render(app, frame, inner_area),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::backend::TestBackend as TestTerminal;
    use ratatui::Terminal;

    use super::*;
    use crate::backend::testing::TestBackend;
    use crate::backend::AppConfig;
    use crate::message::AppMessage;
    use crate::update::update;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestTerminal::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_every_page_and_modal_renders() {
        let test = TestBackend::new(AppConfig::default());
        let mut app = App::new(test.backend(3));

        // 欢迎弹窗 + 加载占位
        draw(&app);

        update(&mut app, AppMessage::IpLookupFinished(Err("offline".into())));
        app.modal.close();
        let screen = draw(&app);
        let phone = app.generator.user().unwrap().phone.clone();
        assert!(screen.contains(&phone), "phone not on screen");

        let first = &idforge_core::countries()[0];
        app.modal.show_country_picker(first.code);
        let screen = draw(&app);
        assert!(screen.contains(&first.phone.example()), "phone example not in picker");
        app.modal
            .show_domain_picker(&idforge_core::DomainChoice::Fixed("example.org".into()));
        draw(&app);
        app.modal.show_help();
        draw(&app);
        app.modal.show_error("title", "message");
        draw(&app);
        app.modal.close();

        for page in [Page::TempMail, Page::Settings] {
            app.current_page = page;
            draw(&app);
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let test = TestBackend::new(AppConfig::default());
        let app = App::new(test.backend(3));
        let mut terminal = Terminal::new(TestTerminal::new(10, 4)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
