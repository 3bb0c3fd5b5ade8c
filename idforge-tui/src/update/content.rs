//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息，按当前页面分发

use std::time::Instant;

use crate::message::ContentMessage;
use crate::model::{App, Page};

use super::{generator, settings};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Generator => update_generator(app, msg),
        Page::TempMail => update_mail(app, msg),
        Page::Settings => update_settings(app, msg),
    }
}

fn update_generator(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 字段选择 ==========
        ContentMessage::SelectPrevious => app.generator.select_previous(),
        ContentMessage::SelectNext => app.generator.select_next(),
        ContentMessage::SelectFirst => app.generator.select_first(),
        ContentMessage::SelectLast => app.generator.select_last(),

        // ========== 操作 ==========
        ContentMessage::Confirm | ContentMessage::Copy => {
            generator::copy_selected(app, Instant::now());
        }
        ContentMessage::Regenerate => generator::regenerate_with_status(app),
        ContentMessage::PickCountry => {
            let code = app.generator.country_code;
            app.modal.show_country_picker(code);
        }
        ContentMessage::PickDomain => {
            app.modal.show_domain_picker(&app.generator.domain);
        }
        ContentMessage::OpenInbox => generator::open_inbox(app),
        ContentMessage::ShowNotice => app.modal.show_free_notice(),

        _ => {}
    }
}

fn update_mail(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.mail.select_previous(),
        ContentMessage::SelectNext => app.mail.select_next(),
        ContentMessage::SelectFirst => app.mail.select_first(),
        ContentMessage::SelectLast => app.mail.select_last(),

        ContentMessage::Input(c) => app.mail.push_char(c),
        ContentMessage::Backspace => app.mail.pop_char(),
        ContentMessage::ClearInput => {
            app.mail.clear_query();
        }

        // Enter: 在浏览器中打开选中的服务
        ContentMessage::Confirm => {
            if let Some(entry) = app.mail.selected_entry() {
                generator::open_link(app, entry.url);
            }
        }

        _ => {}
    }
}

fn update_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::TogglePrev => {
            app.settings.toggle_prev();
            settings::apply(app);
        }
        ContentMessage::ToggleNext | ContentMessage::Confirm => {
            app.settings.toggle_next();
            settings::apply(app);
        }
        _ => {}
    }
}
