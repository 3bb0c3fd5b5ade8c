//! 生成器页面的业务逻辑
//!
//! 生成、复制、打开收件箱等需要调用 Backend 的操作都在这里，
//! content.rs 与 modal.rs 只负责把消息转发过来。

use std::time::Instant;

use idforge_core::{get_country_config, inbox_url, CoreError, DomainChoice};

use crate::backend::IpLookupOutcome;
use crate::i18n::t;
use crate::model::{App, IpStatus};

/// 用当前国家与域名生成一个新身份
///
/// 失败时保留原有身份。返回是否成功。
pub fn regenerate(app: &mut App) -> bool {
    let code = app.generator.country_code;
    match app.backend.identity.generate(code, &app.generator.domain) {
        Ok(identity) => {
            tracing::debug!(country = code, "Generated identity");
            app.generator.set_identity(identity);
            true
        }
        Err(e) => {
            report_generate_error(app, &e);
            false
        }
    }
}

/// 用户主动重新生成
pub fn regenerate_with_status(app: &mut App) {
    if regenerate(app) {
        app.set_status(t().status.regenerated);
    }
}

fn report_generate_error(app: &mut App, e: &CoreError) {
    if e.is_expected() {
        tracing::warn!("Identity generation failed: {e}");
        app.set_status(e.to_string());
    } else {
        tracing::error!("Identity generation failed: {e}");
        app.modal
            .show_error(t().modal.error_titles.generate, &e.to_string());
    }
}

/// 切换国家；已经显示身份时立即重新生成
pub fn select_country(app: &mut App, code: &str) {
    let Some(country) = get_country_config(code) else {
        report_generate_error(app, &CoreError::UnknownCountry(code.to_string()));
        return;
    };
    app.generator.country_code = country.code;
    tracing::info!(country = country.code, "Country selected");
    if !app.generator.is_loading() {
        regenerate(app);
    }
}

/// 应用域名选择；已经显示身份时立即重新生成
pub fn apply_domain(app: &mut App, choice: DomainChoice) {
    tracing::info!(
        random = choice.is_random(),
        domain = choice.fixed(),
        "Email domain selected"
    );
    app.generator.domain = choice;
    if !app.generator.is_loading() {
        regenerate(app);
    }
}

/// 复制选中字段
pub fn copy_selected(app: &mut App, now: Instant) {
    let field = app.generator.selected_field();
    let Some(value) = app.generator.user().map(|user| field.value(user).to_string()) else {
        return;
    };

    match app.backend.clipboard.copy(&value) {
        Ok(()) => {
            app.generator.mark_copied(field, now);
            app.set_status(format!(
                "{}: {}",
                t().status.copied,
                field.label(&t().generator.fields)
            ));
        }
        Err(e) => {
            tracing::warn!("Copy failed: {e}");
            app.set_status(format!("{}: {e}", t().modal.error_titles.clipboard));
        }
    }
}

/// 打开当前邮箱对应的收件箱
pub fn open_inbox(app: &mut App) {
    let Some(url) = app.generator.user().and_then(|user| inbox_url(&user.email)) else {
        app.set_status(t().status.no_inbox);
        return;
    };
    open_link(app, &url);
}

/// 打开外部链接，失败时显示在状态栏
pub fn open_link(app: &mut App, url: &str) {
    match app.backend.links.open(url) {
        Ok(()) => app.set_status(format!("{}: {url}", t().status.opened)),
        Err(e) => {
            tracing::warn!("Failed to open link: {e}");
            app.set_status(format!("{}: {e}", t().modal.error_titles.open_link));
        }
    }
}

/// 处理启动时 IP 查询的结果，然后生成第一个身份
///
/// 只有结果可信且国家在支持列表中时才会预选国家，否则保持默认国家。
pub fn apply_ip_outcome(app: &mut App, outcome: IpLookupOutcome) {
    match outcome {
        Ok(info) => {
            if let Some(country) = info.preselect_country().and_then(get_country_config) {
                tracing::info!(country = country.code, "Preselecting country from IP");
                app.generator.country_code = country.code;
            }
            app.generator.ip = IpStatus::Detected(info);
        }
        Err(e) => {
            tracing::warn!("IP detection failed, keeping default country: {e}");
            app.generator.ip = IpStatus::Failed;
        }
    }

    if app.generator.is_loading() {
        regenerate(app);
    }
}
