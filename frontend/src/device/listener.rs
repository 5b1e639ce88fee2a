use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::warn_on_failure;

const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];

/// Window listeners for `resize` and `orientationchange`, held for as long as
/// this guard lives. Dropping it removes both.
pub struct ViewportListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ViewportListener {
    /// Returns `None` when there is no window to listen on.
    pub fn attach<F>(on_change: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn()>::new(on_change);

        for event in VIEWPORT_EVENTS {
            warn_on_failure(
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
                &format!("listen for {}", event),
            );
        }
        debug!("Viewport listeners attached");

        Some(Self { window, callback })
    }
}

impl Drop for ViewportListener {
    fn drop(&mut self) {
        for event in VIEWPORT_EVENTS {
            warn_on_failure(
                self.window
                    .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref()),
                &format!("stop listening for {}", event),
            );
        }
        debug!("Viewport listeners removed");
    }
}
