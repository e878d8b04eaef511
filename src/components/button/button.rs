use std::{rc::Rc, time::Duration};

use gpui::{
    AnyElement, App, AppContext, ClickEvent, Context, CursorStyle, ElementId, FocusHandle, Hsla,
    InteractiveElement, IntoElement, ParentElement, Render, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px, rgb,
};
use gpui_easy_button_theme::{ButtonTheme, StyleAttributes, StyleRequest, ThemeContext, ThemeContextExt};
use smallvec::SmallVec;

use crate::{
    components::button::{ButtonHandlers, ButtonState, ContentKind, OnClickFn, OnNotifyFn, Spinner},
    utils::{ElementIdExt, StyledExt},
};

/// A clickable button styled by a named theme and explicit overrides.
///
/// Content is, in order of precedence: the loader while loading, the
/// children, the label.
#[derive(IntoElement)]
pub struct EasyButton {
    id: ElementId,
    label: Option<SharedString>,
    title: Option<SharedString>,
    theme: ButtonTheme,
    themes: Option<ThemeContext>,
    disabled: bool,
    style: Option<StyleAttributes>,
    hover_style: Option<StyleAttributes>,
    reset_default_styles: bool,
    debounce_timeout: Duration,
    is_loading: bool,
    loader: Option<AnyElement>,
    focus_handle: Option<FocusHandle>,
    on_click: Option<OnClickFn>,
    on_focus: Option<OnNotifyFn>,
    on_hover: Option<OnNotifyFn>,
    children: SmallVec<[AnyElement; 2]>,
}

impl EasyButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            title: None,
            theme: ButtonTheme::Custom,
            themes: None,
            disabled: false,
            style: None,
            hover_style: None,
            reset_default_styles: false,
            debounce_timeout: Duration::ZERO,
            is_loading: false,
            loader: None,
            focus_handle: None,
            on_click: None,
            on_focus: None,
            on_hover: None,
            children: SmallVec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Text shown in a tooltip while the pointer rests on the button.
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn theme(mut self, theme: impl Into<ButtonTheme>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Resolves this button against `themes` instead of the app-wide context.
    pub fn themes(mut self, themes: ThemeContext) -> Self {
        self.themes = Some(themes);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(mut self, style: StyleAttributes) -> Self {
        self.style = Some(style);
        self
    }

    pub fn hover_style(mut self, hover_style: StyleAttributes) -> Self {
        self.hover_style = Some(hover_style);
        self
    }

    /// Drops the theme's own layers so only the explicit styles apply.
    pub fn reset_default_styles(mut self, reset: bool) -> Self {
        self.reset_default_styles = reset;
        self
    }

    /// Collapses clicks and focus events arriving within `timeout` of each
    /// other into one call carrying the last event.
    pub fn debounce_timeout(mut self, timeout: Duration) -> Self {
        self.debounce_timeout = timeout;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Replaces the default spinner shown while loading.
    pub fn loader(mut self, loader: impl IntoElement) -> Self {
        self.loader = Some(loader.into_any_element());
        self
    }

    /// Makes the button track `focus_handle`, so the caller can focus it.
    pub fn track_focus(mut self, focus_handle: &FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle.clone());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn on_focus(mut self, on_focus: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_focus = Some(Rc::new(on_focus));
        self
    }

    /// Called once each time the pointer enters the button.
    pub fn on_hover(mut self, on_hover: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Rc::new(on_hover));
        self
    }
}

impl EasyButton {
    /// The style this button renders with, using its own theme context when
    /// one was given and the app-wide one otherwise.
    fn resolve_style(&self, is_hovered: bool, cx: &App) -> StyleAttributes {
        let request = StyleRequest {
            theme: self.theme.clone(),
            style: self.style,
            hover_style: self.hover_style,
            reset_defaults: self.reset_default_styles,
            is_hovered,
            is_disabled: self.disabled,
        };

        match &self.themes {
            Some(themes) => themes.resolve(&request),
            None => cx.button_themes().resolve(&request),
        }
    }
}

impl ParentElement for EasyButton {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for EasyButton {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let is_disabled = self.disabled;

        let state = window.use_keyed_state(self.id.with_suffix("state"), cx, {
            let focus_handle = self.focus_handle.clone();
            move |window, cx| ButtonState::new(focus_handle, window, cx)
        });
        state.update(cx, |state, cx| {
            state.sync(
                ButtonHandlers {
                    on_click: self.on_click.clone(),
                    on_focus: self.on_focus.clone(),
                    on_hover: self.on_hover.clone(),
                    disabled: is_disabled,
                    debounce_timeout: self.debounce_timeout,
                },
                self.focus_handle.clone(),
                window,
                cx,
            )
        });

        let (is_hover, focus_handle) = {
            let state = state.read(cx);
            (state.is_hovered(), state.focus_handle().clone())
        };

        if is_disabled && focus_handle.is_focused(window) {
            window.blur();
        }

        let attributes = self.resolve_style(is_hover, cx);

        let content_kind =
            ContentKind::select(self.is_loading, !self.children.is_empty(), self.label.is_some());

        div()
            .id(self.id.clone())
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .gap(px(8.))
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .style_attributes(&attributes)
            .map(|this| match content_kind {
                ContentKind::Loader => match self.loader {
                    Some(loader) => this.child(loader),
                    None => this.child(
                        Spinner::new(self.id.with_suffix("loader"))
                            .size(attributes.font_size.unwrap_or(px(16.)))
                            .when_some(attributes.color, |this, color| this.color(color)),
                    ),
                },
                ContentKind::Children => this.children(self.children),
                ContentKind::Label => this.when_some(self.label, |this, label| this.child(label)),
                ContentKind::Empty => this,
            })
            .when_some(self.title, |this, title| {
                this.tooltip(move |_window, cx| {
                    let title = title.clone();
                    cx.new(|_cx| TitleTooltip { title }).into()
                })
            })
            .when(!is_disabled, |this| {
                let state_on_hover = state.clone();

                this.on_hover(move |hovered, window, cx| {
                    state_on_hover.update(cx, |state, cx| state.handle_hover(*hovered, window, cx));
                })
                .on_click(move |event, window, cx| {
                    state.update(cx, |state, cx| state.handle_click(event, window, cx));
                })
                .track_focus(&focus_handle)
            })
    }
}

struct TitleTooltip {
    title: SharedString,
}

impl Render for TitleTooltip {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px(px(8.))
            .py(px(4.))
            .rounded(px(4.))
            .bg(Hsla::from(rgb(0x242424)))
            .text_color(rgb(0xffffff))
            .text_size(px(12.))
            .child(self.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use gpui::{Modifiers, TestAppContext, VisualTestContext, point};
    use gpui_easy_button_theme::{BuiltinTheme, ThemeTable};

    use super::*;

    #[gpui::test]
    fn test_button_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = EasyButton::new("test-button");
            assert!(button.theme.is_custom(), "Button should default to the custom theme");
            assert!(!button.disabled, "Button should start enabled");
            assert!(!button.is_loading, "Button should not start loading");
            assert_eq!(button.debounce_timeout, Duration::ZERO);
            assert!(button.label.is_none());
        });
    }

    #[gpui::test]
    fn test_button_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let style = StyleAttributes::default().opacity(0.5);
            let button = EasyButton::new("test-button")
                .label("Save")
                .title("Saves the document")
                .theme("easy_info")
                .disabled(true)
                .style(style)
                .reset_default_styles(true)
                .debounce_timeout(Duration::from_millis(50))
                .loading(true);

            assert_eq!(button.label, Some("Save".into()));
            assert_eq!(button.title, Some("Saves the document".into()));
            assert_eq!(button.theme, ButtonTheme::Builtin(BuiltinTheme::EasyInfo));
            assert!(button.disabled);
            assert_eq!(button.style, Some(style));
            assert!(button.reset_default_styles);
            assert_eq!(button.debounce_timeout, Duration::from_millis(50));
            assert!(button.is_loading);
        });
    }

    #[gpui::test]
    fn test_button_children(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = EasyButton::new("test-button").child("one").child("two");
            assert_eq!(button.children.len(), 2);
        });
    }

    #[gpui::test]
    fn test_button_themes_win_over_app_themes(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let success = |color: &str| {
                ThemeTable::from_json(format!(
                    r#"{{ "themes": {{ "easy_success": {{ "normal": {{ "background_color": "{color}" }} }} }} }}"#
                ))
                .unwrap()
            };
            cx.set_button_themes(ThemeContext::builtin().with_overrides(&success("#111111")));

            let app_button = EasyButton::new("app").theme(BuiltinTheme::EasySuccess);
            assert_eq!(
                app_button.resolve_style(false, cx).background_color,
                Some(rgb(0x111111))
            );

            let own_button = EasyButton::new("own")
                .theme(BuiltinTheme::EasySuccess)
                .themes(ThemeContext::builtin().with_overrides(&success("#222222")));
            assert_eq!(
                own_button.resolve_style(false, cx).background_color,
                Some(rgb(0x222222))
            );
        });
    }

    struct Host {
        clicks: Rc<Cell<usize>>,
        hovers: Rc<Cell<usize>>,
        disabled: bool,
    }

    impl Host {
        fn new(disabled: bool) -> Self {
            Self {
                clicks: Rc::new(Cell::new(0)),
                hovers: Rc::new(Cell::new(0)),
                disabled,
            }
        }
    }

    impl Render for Host {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let clicks = self.clicks.clone();
            let hovers = self.hovers.clone();

            div().size_full().child(
                EasyButton::new("host-button")
                    .theme(BuiltinTheme::EasySuccess)
                    .label("Click me")
                    .style(StyleAttributes::default().padding(px(20.)))
                    .disabled(self.disabled)
                    .on_click(move |_event, _window, _cx| clicks.set(clicks.get() + 1))
                    .on_hover(move |_window, _cx| hovers.set(hovers.get() + 1)),
            )
        }
    }

    #[gpui::test]
    fn test_click_reaches_callback(cx: &mut TestAppContext) {
        let (host, cx) = cx.add_window_view(|_window, _cx| Host::new(false));
        cx.run_until_parked();

        cx.simulate_click(point(px(5.), px(5.)), Modifiers::none());
        cx.run_until_parked();

        assert_eq!(host.read_with(cx, |host, _cx| host.clicks.get()), 1);
    }

    #[gpui::test]
    fn test_disabled_button_ignores_clicks(cx: &mut TestAppContext) {
        let (host, cx) = cx.add_window_view(|_window, _cx| Host::new(true));
        cx.run_until_parked();

        cx.simulate_click(point(px(5.), px(5.)), Modifiers::none());
        cx.run_until_parked();

        assert_eq!(host.read_with(cx, |host, _cx| host.clicks.get()), 0);
    }

    fn move_mouse(cx: &mut VisualTestContext, x: f32, y: f32) {
        cx.simulate_mouse_move(point(px(x), px(y)), None, Modifiers::none());
        cx.run_until_parked();
    }

    #[gpui::test]
    fn test_on_hover_fires_once_per_enter(cx: &mut TestAppContext) {
        let (host, cx) = cx.add_window_view(|_window, _cx| Host::new(false));
        cx.run_until_parked();
        let hovers = host.read_with(cx, |host, _cx| host.hovers.clone());

        move_mouse(cx, 5., 5.);
        assert_eq!(hovers.get(), 1);

        move_mouse(cx, 8., 8.);
        assert_eq!(hovers.get(), 1);

        move_mouse(cx, 600., 400.);
        assert_eq!(hovers.get(), 1);

        move_mouse(cx, 5., 5.);
        assert_eq!(hovers.get(), 2);
    }

    #[gpui::test]
    fn test_disabled_button_ignores_hover(cx: &mut TestAppContext) {
        let (host, cx) = cx.add_window_view(|_window, _cx| Host::new(true));
        cx.run_until_parked();

        move_mouse(cx, 5., 5.);
        move_mouse(cx, 600., 400.);
        move_mouse(cx, 5., 5.);

        assert_eq!(host.read_with(cx, |host, _cx| host.hovers.get()), 0);
    }

    /// Records whether it was rendered.
    #[derive(IntoElement)]
    struct Marker {
        rendered: Rc<Cell<bool>>,
    }

    impl RenderOnce for Marker {
        fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
            self.rendered.set(true);
            div().size(px(10.))
        }
    }

    struct LoadingHost {
        loading: bool,
        loader_rendered: Rc<Cell<bool>>,
        child_rendered: Rc<Cell<bool>>,
    }

    impl Render for LoadingHost {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child(
                EasyButton::new("loading-button")
                    .label("Save")
                    .loading(self.loading)
                    .loader(Marker {
                        rendered: self.loader_rendered.clone(),
                    })
                    .child(Marker {
                        rendered: self.child_rendered.clone(),
                    }),
            )
        }
    }

    #[gpui::test]
    fn test_loader_replaces_children_and_label(cx: &mut TestAppContext) {
        let loader_rendered = Rc::new(Cell::new(false));
        let child_rendered = Rc::new(Cell::new(false));
        let (host, cx) = cx.add_window_view(|_window, _cx| LoadingHost {
            loading: true,
            loader_rendered: loader_rendered.clone(),
            child_rendered: child_rendered.clone(),
        });
        cx.run_until_parked();

        assert!(loader_rendered.get());
        assert!(!child_rendered.get());

        loader_rendered.set(false);
        host.update(cx, |host, cx| {
            host.loading = false;
            cx.notify();
        });
        cx.run_until_parked();

        assert!(!loader_rendered.get());
        assert!(child_rendered.get());
    }
}
