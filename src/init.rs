use gpui::App;
use gpui_easy_button_theme::{ThemeContext, ThemeContextExt};

/// Installs the built-in button themes unless the app already provided some.
pub fn init(cx: &mut App) {
    if cx.has_global::<ThemeContext>() {
        tracing::debug!("button theme context already installed");
        return;
    }

    cx.set_button_themes(ThemeContext::builtin());
}
