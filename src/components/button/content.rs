use std::time::Duration;

use gpui::{
    Animation, AnimationExt, ElementId, Hsla, IntoElement, Pixels, RenderOnce, Styled,
    Transformation, percentage, prelude::FluentBuilder, px, svg,
};

use crate::LOADER_ICON_PATH;

/// What a button shows inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Loader,
    Children,
    Label,
    Empty,
}

impl ContentKind {
    /// Loading wins over children, children win over the label.
    pub fn select(is_loading: bool, has_children: bool, has_label: bool) -> Self {
        if is_loading {
            Self::Loader
        } else if has_children {
            Self::Children
        } else if has_label {
            Self::Label
        } else {
            Self::Empty
        }
    }
}

/// The spinner shown by a loading button when no loader was supplied.
#[derive(IntoElement)]
pub struct Spinner {
    id: ElementId,
    size: Pixels,
    color: Option<Hsla>,
}

impl Spinner {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            size: px(16.),
            color: None,
        }
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Spinner {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        svg()
            .path(LOADER_ICON_PATH)
            .size(self.size)
            .flex_none()
            .when_some(self.color, |this, color| this.text_color(color))
            .with_animation(
                self.id,
                Animation::new(Duration::from_millis(800)).repeat(),
                |this, delta| this.with_transformation(Transformation::rotate(percentage(delta))),
            )
    }
}
