//! 弹窗更新逻辑

use idforge_core::{countries, DomainChoice};

use crate::backend::AppConfig;
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{domain_options, App, DomainOption, Modal, NoticeButton};

use super::{generator, settings};

/// 欢迎弹窗中 "加入交流群" 打开的链接
pub const COMMUNITY_URL: &str = "https://t.me/fang180";

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::FreeNotice { .. } => handle_free_notice(app, msg),
        Modal::CountryPicker { .. } => handle_country_picker(app, msg),
        Modal::DomainPicker { .. } => handle_domain_picker(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理欢迎弹窗
fn handle_free_notice(app: &mut App, msg: ModalMessage) {
    let Some(Modal::FreeNotice { ref mut focus }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::PrevButton | ModalMessage::SelectPrevious => *focus = focus.prev(),
        ModalMessage::NextButton | ModalMessage::SelectNext => *focus = focus.next(),
        ModalMessage::Confirm => {
            let button = *focus;
            app.modal.close();
            match button {
                NoticeButton::Start => {}
                NoticeButton::JoinCommunity => generator::open_link(app, COMMUNITY_URL),
                NoticeButton::DontShowAgain => {
                    let config = AppConfig {
                        free_notice_dismissed: true,
                        ..app.config.clone()
                    };
                    if settings::save_config(app, config) {
                        app.set_status(t().status.notice_dismissed);
                    }
                }
            }
        }
        _ => {}
    }
}

/// 处理国家选择器
fn handle_country_picker(app: &mut App, msg: ModalMessage) {
    let Some(Modal::CountryPicker { ref mut selected }) = app.modal.active else {
        return;
    };
    let len = countries().len();

    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::SelectPrevious => *selected = (*selected + len - 1) % len,
        ModalMessage::SelectNext => *selected = (*selected + 1) % len,
        ModalMessage::Confirm => {
            let code = countries().get(*selected).map(|c| c.code);
            app.modal.close();
            if let Some(code) = code {
                generator::select_country(app, code);
            }
        }
        _ => {}
    }
}

/// 处理域名选择器
fn handle_domain_picker(app: &mut App, msg: ModalMessage) {
    let Some(Modal::DomainPicker {
        ref mut selected,
        ref mut custom,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };
    let options = domain_options();
    let len = options.len();

    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::SelectPrevious => {
            *selected = (*selected + len - 1) % len;
            *error = None;
        }
        ModalMessage::SelectNext => {
            *selected = (*selected + 1) % len;
            *error = None;
        }
        ModalMessage::Input(c) => {
            custom.push(c);
            *error = None;
        }
        ModalMessage::Backspace => {
            custom.pop();
            *error = None;
        }
        ModalMessage::Confirm => {
            let choice = match options.get(*selected) {
                Some(DomainOption::Known(domain)) => DomainChoice::Fixed((*domain).to_string()),
                Some(DomainOption::Custom) => match DomainChoice::custom(custom) {
                    Ok(choice) => choice,
                    Err(e) => {
                        // 输入无效时保持弹窗打开，错误显示在输入框下方
                        tracing::warn!("Rejected custom domain: {e}");
                        *error = Some(e.to_string());
                        return;
                    }
                },
                Some(DomainOption::Random) | None => DomainChoice::Random,
            };
            app.modal.close();
            generator::apply_domain(app, choice);
        }
        _ => {}
    }
}

/// 处理简单弹窗（错误提示、帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
