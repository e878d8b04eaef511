use std::sync::Arc;

use gpui::{App, Global};

use crate::{HoverLayering, StyleAttributes, StyleRequest, ThemeTable, resolve_style};

/// The theme table and hover policy a button resolves its style against.
///
/// Cheap to clone. One context can be installed app-wide with
/// [`ThemeContextExt::set_button_themes`]; a context handed directly to a
/// button takes precedence over it.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    themes: Arc<ThemeTable>,
    hover_layering: HoverLayering,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            themes: ThemeTable::builtin_arc(),
            hover_layering: HoverLayering::default(),
        }
    }
}

impl ThemeContext {
    pub fn new(themes: impl Into<Arc<ThemeTable>>) -> Self {
        Self {
            themes: themes.into(),
            hover_layering: HoverLayering::default(),
        }
    }

    /// A context over the built-in table.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Returns a context whose table is this one's extended by `overrides`.
    /// Entries in `overrides` replace entries with the same key.
    pub fn with_overrides(&self, overrides: &ThemeTable) -> Self {
        Self {
            themes: Arc::new(self.themes.merged(overrides)),
            hover_layering: self.hover_layering,
        }
    }

    pub fn with_hover_layering(mut self, hover_layering: HoverLayering) -> Self {
        self.hover_layering = hover_layering;
        self
    }

    pub fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    pub fn hover_layering(&self) -> HoverLayering {
        self.hover_layering
    }

    pub fn resolve(&self, request: &StyleRequest) -> StyleAttributes {
        resolve_style(request, &self.themes, self.hover_layering)
    }
}

impl Global for ThemeContext {}

/// Extension trait for installing and reading the app-wide button themes.
pub trait ThemeContextExt {
    /// Installs `themes` as the context used by buttons without their own.
    fn set_button_themes(&mut self, themes: ThemeContext);

    /// The installed context, or the built-in one if none was installed.
    fn button_themes(&self) -> ThemeContext;
}

impl ThemeContextExt for App {
    fn set_button_themes(&mut self, themes: ThemeContext) {
        tracing::debug!(
            themes = themes.themes().len(),
            hover_layering = ?themes.hover_layering(),
            "installing button theme context"
        );
        self.set_global(themes)
    }

    fn button_themes(&self) -> ThemeContext {
        self.try_global::<ThemeContext>().cloned().unwrap_or_default()
    }
}
