use crate::{ButtonTheme, StyleAttributes, ThemeEntry, ThemeTable};

/// How the hovered style of a themed button is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverLayering {
    /// The hover layer replaces the normal layer:
    /// `hover ⊕ hover_style`.
    #[default]
    Replace,
    /// The hover layer is stacked on the normal one:
    /// `normal ⊕ style ⊕ hover ⊕ hover_style`.
    Layered,
}

/// Everything the resolver needs to know about one button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRequest {
    pub theme: ButtonTheme,
    pub style: Option<StyleAttributes>,
    pub hover_style: Option<StyleAttributes>,
    pub reset_defaults: bool,
    pub is_hovered: bool,
    pub is_disabled: bool,
}

impl StyleRequest {
    pub fn new(theme: impl Into<ButtonTheme>) -> Self {
        Self {
            theme: theme.into(),
            ..Default::default()
        }
    }

    pub fn style(mut self, style: StyleAttributes) -> Self {
        self.style = Some(style);
        self
    }

    pub fn hover_style(mut self, hover_style: StyleAttributes) -> Self {
        self.hover_style = Some(hover_style);
        self
    }

    pub fn reset_defaults(mut self, reset_defaults: bool) -> Self {
        self.reset_defaults = reset_defaults;
        self
    }

    pub fn hovered(mut self, is_hovered: bool) -> Self {
        self.is_hovered = is_hovered;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }
}

/// Computes the style to apply to a button.
///
/// A disabled button is never considered hovered. Unknown theme keys resolve
/// as an empty theme, so only the explicit styles apply.
pub fn resolve_style(
    request: &StyleRequest,
    table: &ThemeTable,
    layering: HoverLayering,
) -> StyleAttributes {
    let is_hovered = request.is_hovered && !request.is_disabled;

    let Some(key) = request.theme.key() else {
        let explicit = if is_hovered {
            request.hover_style
        } else {
            request.style
        };
        return explicit.unwrap_or_default();
    };

    let fallback;
    let entry = match table.get(key) {
        Some(entry) => entry,
        None => {
            tracing::warn!(theme = key, "unknown button theme, rendering without theme styles");
            fallback = ThemeEntry::default();
            &fallback
        }
    };

    let mut resolved = StyleAttributes::default();

    if !is_hovered {
        if !request.reset_defaults {
            resolved = entry.normal;

            if request.is_disabled
                && let Some(disabled) = &entry.disabled
            {
                resolved.refine(disabled);
            }
        }

        if let Some(style) = &request.style {
            resolved.refine(style);
        }

        return resolved;
    }

    if !request.reset_defaults {
        resolved = match layering {
            HoverLayering::Replace => entry.hover,
            HoverLayering::Layered => {
                let mut layered = entry.normal;
                if let Some(style) = &request.style {
                    layered.refine(style);
                }
                layered.refined(&entry.hover)
            }
        };
    }

    if let Some(hover_style) = &request.hover_style {
        resolved.refine(hover_style);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuiltinTheme;
    use gpui::{px, rgb};

    fn resolve(request: StyleRequest) -> StyleAttributes {
        resolve_style(&request, ThemeTable::builtin(), HoverLayering::Replace)
    }

    #[test]
    fn test_builtin_themes_resolve_to_their_layers() {
        let table = ThemeTable::builtin();

        for theme in BuiltinTheme::ALL {
            let entry = table.get(theme.key()).unwrap();

            assert_eq!(resolve(StyleRequest::new(theme)), entry.normal);
            assert_eq!(resolve(StyleRequest::new(theme).hovered(true)), entry.hover);
        }
    }

    #[test]
    fn test_custom_returns_explicit_styles_verbatim() {
        let style = StyleAttributes::default().color(rgb(0x111111));
        let hover_style = StyleAttributes::default().opacity(0.5);

        let request = StyleRequest::new(ButtonTheme::Custom)
            .style(style)
            .hover_style(hover_style);

        assert_eq!(resolve(request.clone()), style);
        assert_eq!(resolve(request.hovered(true)), hover_style);
    }

    #[test]
    fn test_custom_ignores_reset_and_table() {
        let style = StyleAttributes::default().padding(px(4.));
        let request = StyleRequest::new("custom").style(style).reset_defaults(true);

        assert_eq!(resolve(request.clone()), style);
        assert_eq!(resolve(request.hovered(true)), StyleAttributes::default());
    }

    #[test]
    fn test_reset_defaults_drops_theme_layers() {
        let request = StyleRequest::new(BuiltinTheme::EasyInfo).reset_defaults(true);

        assert!(resolve(request.clone()).is_empty());
        assert!(resolve(request.clone().hovered(true)).is_empty());
        assert!(resolve(request.disabled(true)).is_empty());
    }

    #[test]
    fn test_reset_defaults_keeps_explicit_styles() {
        let style = StyleAttributes::default().color(rgb(0x222222));
        let request = StyleRequest::new(BuiltinTheme::EasyInfo)
            .reset_defaults(true)
            .style(style);

        assert_eq!(resolve(request), style);
    }

    #[test]
    fn test_explicit_style_wins_when_not_hovered() {
        let style = StyleAttributes::default().color(rgb(0xabcdef)).padding(px(2.));
        let resolved = resolve(StyleRequest::new(BuiltinTheme::EasyWarn).style(style));

        assert_eq!(resolved.color, Some(rgb(0xabcdef)));
        assert_eq!(resolved.padding_top, Some(px(2.)));
        assert_eq!(resolved.background_color, Some(rgb(0xFFFBD9)));
        assert_eq!(resolved.font_size, Some(px(16.)));
    }

    #[test]
    fn test_explicit_hover_style_wins_when_hovered() {
        let hover_style = StyleAttributes::default().opacity(0.2);
        let resolved = resolve(
            StyleRequest::new(BuiltinTheme::EasyWarn)
                .hover_style(hover_style)
                .hovered(true),
        );

        assert_eq!(resolved.opacity, Some(0.2));
        assert_eq!(resolved.color, Some(rgb(0xA48000)));
    }

    #[test]
    fn test_hover_style_is_ignored_when_not_hovered() {
        let hover_style = StyleAttributes::default().opacity(0.2);
        let resolved = resolve(StyleRequest::new(BuiltinTheme::Easy).hover_style(hover_style));

        assert_eq!(resolved.opacity, Some(1.));
    }

    #[test]
    fn test_layered_hover_stacks_on_normal() {
        let style = StyleAttributes::default().padding(px(3.));
        let hover_style = StyleAttributes::default().color(rgb(0x010101));
        let request = StyleRequest::new(BuiltinTheme::EasyDark)
            .style(style)
            .hover_style(hover_style)
            .hovered(true);

        let resolved = resolve_style(&request, ThemeTable::builtin(), HoverLayering::Layered);

        assert_eq!(resolved.padding_top, Some(px(3.)));
        assert_eq!(resolved.font_size, Some(px(16.)));
        assert_eq!(resolved.background_color, Some(rgb(0xDAFFD9)));
        assert_eq!(resolved.opacity, Some(0.7));
        assert_eq!(resolved.color, Some(rgb(0x010101)));
    }

    #[test]
    fn test_unknown_theme_degrades_to_explicit_styles() {
        let style = StyleAttributes::default().color(rgb(0x333333));
        let request = StyleRequest::new("primary_success");

        assert!(resolve(request.clone()).is_empty());
        assert!(resolve(request.clone().hovered(true)).is_empty());
        assert_eq!(resolve(request.style(style)), style);
    }

    #[test]
    fn test_disabled_is_never_hovered() {
        let entry = ThemeTable::builtin().get("easy").unwrap();
        let resolved = resolve(StyleRequest::new(BuiltinTheme::Easy).hovered(true).disabled(true));

        assert_eq!(resolved, entry.normal);
    }

    #[test]
    fn test_disabled_layer_applies_under_explicit_style() {
        let table = ThemeTable::from_json(
            r##"{ "themes": { "brand": {
                "normal": { "color": "#000", "opacity": 1 },
                "disabled": { "color": "#888", "opacity": 0.4 }
            } } }"##,
        )
        .unwrap();
        let style = StyleAttributes::default().color(rgb(0xff0000));
        let request = StyleRequest::new("brand").style(style).disabled(true);

        let resolved = resolve_style(&request, &table, HoverLayering::Replace);

        assert_eq!(resolved.opacity, Some(0.4));
        assert_eq!(resolved.color, Some(rgb(0xff0000)));
    }
}
