use gpui::{BoxShadow, ElementId, FontWeight, Hsla, SharedString, Styled, point};
use gpui_easy_button_theme::StyleAttributes;

pub trait ElementIdExt {
    /// Derives a child id, used to key per-element state.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}

pub trait StyledExt: Styled + Sized {
    /// Applies every property set in `attributes`. Unset properties keep
    /// whatever the element already had.
    fn style_attributes(mut self, attributes: &StyleAttributes) -> Self {
        if let Some(padding) = attributes.padding_top {
            self = self.pt(padding);
        }
        if let Some(padding) = attributes.padding_bottom {
            self = self.pb(padding);
        }
        if let Some(padding) = attributes.padding_left {
            self = self.pl(padding);
        }
        if let Some(padding) = attributes.padding_right {
            self = self.pr(padding);
        }
        if let Some(size) = attributes.font_size {
            self = self.text_size(size);
        }
        if let Some(weight) = attributes.font_weight {
            self = self.font_weight(FontWeight(weight));
        }
        if let Some(color) = attributes.color {
            self = self.text_color(color);
        }
        if let Some(color) = attributes.background_color {
            self = self.bg(Hsla::from(color));
        }
        if let Some(width) = attributes.border_width {
            let borders = &mut self.style().border_widths;
            borders.top = Some(width.into());
            borders.right = Some(width.into());
            borders.bottom = Some(width.into());
            borders.left = Some(width.into());
        }
        if let Some(color) = attributes.border_color {
            self = self.border_color(color);
        }
        if let Some(radius) = attributes.border_radius {
            self = self.rounded(radius);
        }
        if let Some(shadow) = attributes.box_shadow {
            self = self.shadow(vec![BoxShadow {
                color: shadow.color.into(),
                offset: point(shadow.offset_x, shadow.offset_y),
                blur_radius: shadow.blur,
                spread_radius: shadow.spread,
            }]);
        }
        if let Some(opacity) = attributes.opacity {
            self = self.opacity(opacity);
        }

        self
    }
}

impl<E: Styled> StyledExt for E {}
