//! 设置生效与持久化

use crate::backend::AppConfig;
use crate::i18n::{set_language, t};
use crate::model::App;
use crate::view::theme::set_theme;

/// 把设置页的值同步到全局主题/语言，并写入配置文件
pub fn apply(app: &mut App) {
    set_theme(app.settings.theme);
    set_language(app.settings.language);

    let config = AppConfig {
        theme: app.settings.theme,
        language: app.settings.language,
        ..app.config.clone()
    };
    if save_config(app, config) {
        app.set_status(t().status.settings_saved);
    }
}

/// 保存配置；失败时弹出错误框，返回是否成功
pub fn save_config(app: &mut App, config: AppConfig) -> bool {
    match app.backend.config.save(&config) {
        Ok(()) => {
            tracing::info!(
                theme = ?config.theme,
                language = config.language.code(),
                "Config saved"
            );
            app.config = config;
            true
        }
        Err(e) => {
            tracing::error!("Failed to save config: {e:#}");
            app.modal
                .show_error(t().modal.error_titles.config, &format!("{e:#}"));
            false
        }
    }
}
