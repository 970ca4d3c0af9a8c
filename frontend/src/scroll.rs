use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// A window scroll listener that stays attached for as long as this value lives.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollSubscription {
    /// Attaches `on_scroll`, which receives the vertical scroll offset.
    /// Returns `None` outside a browser window.
    pub fn new(on_scroll: impl Fn(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let reader = window.clone();
        let callback = Closure::<dyn Fn()>::new(move || {
            if let Ok(offset) = reader.scroll_y() {
                on_scroll(offset);
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }

    pub fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
