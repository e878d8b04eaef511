use std::time::Duration;

use gpui::{
    App, AppContext, Application, Bounds, Context, Window, WindowBounds, WindowOptions, div,
    prelude::*, px, rgb, size,
};
use tracing_subscriber::EnvFilter;

use gpui_easy_button::{
    EasyButtonAssets, assets,
    components::EasyButton,
    theme::{BuiltinTheme, StyleAttributes, ThemeContext, ThemeContextExt, ThemeTable},
};

struct Root {
    clicks: usize,
    hovers: usize,
    saving: bool,
}

impl Render for Root {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let root = cx.entity();

        div()
            .size_full()
            .bg(rgb(0xf4f4f4))
            .flex()
            .flex_col()
            .justify_center()
            .items_center()
            .gap(px(16.))
            .child(format!("clicks: {}, hovers: {}", self.clicks, self.hovers))
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap(px(12.))
                    .children(BuiltinTheme::ALL.into_iter().map(|theme| {
                        EasyButton::new(theme.key())
                            .theme(theme)
                            .label(theme.key())
                            .title(format!("The {} theme", theme.key()))
                            .debounce_timeout(Duration::from_millis(250))
                            .on_click(cx.listener(|root, _event, _window, cx| {
                                root.clicks += 1;
                                cx.notify();
                            }))
                            .on_hover({
                                let root = root.clone();
                                move |_window, cx| {
                                    root.update(cx, |root, cx| {
                                        root.hovers += 1;
                                        cx.notify();
                                    })
                                }
                            })
                    })),
            )
            .child(
                EasyButton::new("save")
                    .theme("brand")
                    .label("Save")
                    .loading(self.saving)
                    .on_click(cx.listener(|root, _event, _window, cx| {
                        root.saving = true;
                        cx.notify();

                        cx.spawn(async move |root, cx| {
                            cx.background_executor().timer(Duration::from_secs(2)).await;
                            root.update(cx, |root, cx| {
                                root.saving = false;
                                cx.notify();
                            })
                            .ok();
                        })
                        .detach();
                    })),
            )
            .child(
                EasyButton::new("custom")
                    .label("Custom")
                    .style(
                        StyleAttributes::default()
                            .padding(px(12.))
                            .background_color(rgb(0x242424))
                            .color(rgb(0xffffff))
                            .border_radius(px(12.)),
                    )
                    .hover_style(
                        StyleAttributes::default()
                            .padding(px(12.))
                            .background_color(rgb(0x404040))
                            .color(rgb(0xffffff))
                            .border_radius(px(12.)),
                    ),
            )
            .child(
                EasyButton::new("disabled")
                    .theme(BuiltinTheme::EasyError)
                    .label("Disabled")
                    .disabled(true),
            )
    }
}

fn brand_overrides() -> ThemeTable {
    ThemeTable::from_json(
        r##"{
            "base": { "padding_top": 10, "padding_bottom": 10, "padding_left": 24, "padding_right": 24, "border_radius": 8 },
            "themes": {
                "brand": {
                    "normal": { "color": "#ffffff", "background_color": "#5B3DF5" },
                    "hover": { "color": "#ffffff", "background_color": "#4327D6", "padding_top": 10, "padding_bottom": 10, "padding_left": 24, "padding_right": 24, "border_radius": 8 }
                }
            }
        }"##,
    )
    .unwrap_or_default()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new()
        .with_assets(assets![EasyButtonAssets])
        .run(|cx: &mut App| {
            cx.set_button_themes(ThemeContext::builtin().with_overrides(&brand_overrides()));
            gpui_easy_button::init(cx);

            let bounds = Bounds::centered(None, size(px(720.), px(480.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|_cx| Root {
                        clicks: 0,
                        hovers: 0,
                        saving: false,
                    })
                },
            )
            .unwrap();

            cx.activate(true);
        });
}
