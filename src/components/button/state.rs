use std::{rc::Rc, time::Duration};

use gpui::{App, AppContext, ClickEvent, Context, Entity, FocusHandle, Subscription, Window};

use crate::primitives::{Debouncer, HoverTracker};

pub type OnClickFn = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;
pub type OnNotifyFn = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Callbacks and flags taken from the latest render of a button.
#[derive(Clone, Default)]
pub struct ButtonHandlers {
    pub on_click: Option<OnClickFn>,
    pub on_focus: Option<OnNotifyFn>,
    pub on_hover: Option<OnNotifyFn>,
    pub disabled: bool,
    pub debounce_timeout: Duration,
}

/// State owned by one rendered button.
///
/// Lives as keyed state of the element, so it is dropped together with any
/// pending debounced call once the button is no longer rendered.
pub struct ButtonState {
    hover: HoverTracker,
    debouncer: Entity<Debouncer>,
    handlers: ButtonHandlers,
    focus_handle: FocusHandle,
    _focus_subscription: Subscription,
}

impl ButtonState {
    pub fn new(
        focus_handle: Option<FocusHandle>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = focus_handle.unwrap_or_else(|| cx.focus_handle().tab_stop(true));
        let focus_subscription = Self::subscribe_focus(&focus_handle, window, cx);

        Self {
            hover: HoverTracker::default(),
            debouncer: cx.new(|_cx| Debouncer::new(Duration::ZERO)),
            handlers: ButtonHandlers::default(),
            focus_handle,
            _focus_subscription: focus_subscription,
        }
    }

    fn subscribe_focus(
        focus_handle: &FocusHandle,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Subscription {
        cx.on_focus(focus_handle, window, |this, window, cx| {
            this.handle_focus(window, cx)
        })
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus_handle
    }

    pub fn debounce_timeout(&self, cx: &App) -> Duration {
        self.debouncer.read(cx).delay()
    }

    /// Takes over the callbacks and flags of the current render.
    pub fn sync(
        &mut self,
        handlers: ButtonHandlers,
        focus_handle: Option<FocusHandle>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(focus_handle) = focus_handle
            && focus_handle != self.focus_handle
        {
            self._focus_subscription = Self::subscribe_focus(&focus_handle, window, cx);
            self.focus_handle = focus_handle;
        }

        let debounce_timeout = handlers.debounce_timeout;
        self.debouncer.update(cx, |debouncer, _cx| {
            if debouncer.delay() != debounce_timeout {
                debouncer.set_delay(debounce_timeout);
            }
        });

        if handlers.disabled && !self.handlers.disabled {
            self.hover.reset();
            self.debouncer.update(cx, |debouncer, _cx| debouncer.cancel());
        }

        self.handlers = handlers;
    }

    /// Records a hover change and fires `on_hover` when the pointer enters.
    /// Callbacks run after this update, like zero-delay clicks.
    pub fn handle_hover(&mut self, hovered: bool, window: &mut Window, cx: &mut Context<Self>) {
        if self.handlers.disabled {
            return;
        }

        let entered = self.hover.set(hovered);
        cx.notify();

        if entered && let Some(on_hover) = self.handlers.on_hover.clone() {
            cx.defer_in(window, move |_this, window, cx| on_hover(window, cx));
        }
    }

    pub fn handle_click(&mut self, event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.handlers.disabled {
            return;
        }

        let Some(on_click) = self.handlers.on_click.clone() else {
            return;
        };

        let event = event.clone();
        self.debouncer.update(cx, |debouncer, cx| {
            debouncer.call(window, cx, move |window, cx| on_click(&event, window, cx));
        });
    }

    pub fn handle_focus(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.handlers.disabled {
            return;
        }

        let Some(on_focus) = self.handlers.on_focus.clone() else {
            return;
        };

        self.debouncer.update(cx, |debouncer, cx| {
            debouncer.call(window, cx, move |window, cx| on_focus(window, cx));
        });
    }
}
