use gpui::{Pixels, Rgba, px};
use serde::Deserialize;

use crate::deserializers::{
    de_color, de_opt_color, de_opt_font_weight, de_opt_opacity, de_opt_pixels, de_pixels,
};

/// A drop shadow cast by the button.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadowAttributes {
    #[serde(deserialize_with = "de_pixels")]
    pub offset_x: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub offset_y: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub blur: Pixels,
    #[serde(default = "zero_pixels", deserialize_with = "de_pixels")]
    pub spread: Pixels,
    #[serde(deserialize_with = "de_color")]
    pub color: Rgba,
}

fn zero_pixels() -> Pixels {
    px(0.)
}

macro_rules! style_attributes {
    ( $( $(#[$meta:meta])* $field:ident : $ty:ty ),+ $(,)? ) => {
        /// A sparse set of presentation properties.
        ///
        /// Every property is optional so that sets can be layered on top of
        /// each other with [`StyleAttributes::refine`].
        #[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct StyleAttributes {
            $(
                $(#[$meta])*
                #[serde(default)]
                pub $field: Option<$ty>,
            )+
        }

        impl StyleAttributes {
            /// Layers `other` on top of `self`. Properties set in `other` win.
            pub fn refine(&mut self, other: &Self) {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )+
            }

            /// Returns true if no property is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }
    };
}

style_attributes! {
    #[serde(deserialize_with = "de_opt_pixels")]
    padding_top: Pixels,
    #[serde(deserialize_with = "de_opt_pixels")]
    padding_bottom: Pixels,
    #[serde(deserialize_with = "de_opt_pixels")]
    padding_left: Pixels,
    #[serde(deserialize_with = "de_opt_pixels")]
    padding_right: Pixels,
    #[serde(deserialize_with = "de_opt_pixels")]
    font_size: Pixels,
    #[serde(deserialize_with = "de_opt_font_weight")]
    font_weight: f32,
    #[serde(deserialize_with = "de_opt_color")]
    color: Rgba,
    #[serde(deserialize_with = "de_opt_color")]
    background_color: Rgba,
    #[serde(deserialize_with = "de_opt_pixels")]
    border_width: Pixels,
    #[serde(deserialize_with = "de_opt_color")]
    border_color: Rgba,
    #[serde(deserialize_with = "de_opt_pixels")]
    border_radius: Pixels,
    box_shadow: ShadowAttributes,
    #[serde(deserialize_with = "de_opt_opacity")]
    opacity: f32,
}

impl StyleAttributes {
    /// Returns a copy of `self` with `other` layered on top.
    pub fn refined(mut self, other: &Self) -> Self {
        self.refine(other);
        self
    }

    /// Sets the same padding on every edge.
    pub fn padding(mut self, padding: Pixels) -> Self {
        self.padding_top = Some(padding);
        self.padding_bottom = Some(padding);
        self.padding_left = Some(padding);
        self.padding_right = Some(padding);
        self
    }

    pub fn font_size(mut self, size: Pixels) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: f32) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<Rgba>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn border(mut self, width: Pixels, color: impl Into<Rgba>) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color.into());
        self
    }

    pub fn border_radius(mut self, radius: Pixels) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn box_shadow(mut self, shadow: ShadowAttributes) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0., 1.));
        self
    }
}
