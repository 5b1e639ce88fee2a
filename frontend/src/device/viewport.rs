use std::rc::Rc;

use log::debug;

use crate::broadcast::{Broadcast, Subscription};
use crate::device::classify::{classify, DeviceSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSample {
    pub width: u32,
    pub height: u32,
    pub has_touch: bool,
}

/// Where viewport measurements come from. `None` means there is nothing to
/// measure right now and the previous snapshot should stand.
pub trait ViewportSource {
    fn sample(&self) -> Option<ViewportSample>;
}

/// The real browser window.
pub struct BrowserViewport;

impl ViewportSource for BrowserViewport {
    fn sample(&self) -> Option<ViewportSample> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        let has_touch = window.navigator().max_touch_points() > 0;
        Some(ViewportSample {
            width: width.max(0.0) as u32,
            height: height.max(0.0) as u32,
            has_touch,
        })
    }
}

/// Server-side or headless execution: there is never a viewport.
pub struct NoViewport;

impl ViewportSource for NoViewport {
    fn sample(&self) -> Option<ViewportSample> {
        None
    }
}

pub fn detect_viewport() -> Rc<dyn ViewportSource> {
    if web_sys::window().is_some() {
        Rc::new(BrowserViewport)
    } else {
        debug!("No window available, staying on the default device snapshot");
        Rc::new(NoViewport)
    }
}

/// Turns viewport samples into published [`DeviceSnapshot`]s.
pub struct DeviceBroadcaster {
    source: Rc<dyn ViewportSource>,
    state: Broadcast<DeviceSnapshot>,
}

impl DeviceBroadcaster {
    pub fn new(source: Rc<dyn ViewportSource>) -> Self {
        Self {
            source,
            state: Broadcast::new(DeviceSnapshot::default()),
        }
    }

    pub fn current(&self) -> DeviceSnapshot {
        self.state.get()
    }

    /// Samples once and publishes the result. Every call recomputes, there is
    /// no throttling.
    pub fn refresh(&self) -> DeviceSnapshot {
        match self.source.sample() {
            Some(sample) => {
                let snapshot = classify(sample.width, sample.height, sample.has_touch);
                self.state.publish(snapshot);
                snapshot
            }
            None => self.state.get(),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription<DeviceSnapshot>
    where
        F: Fn(&DeviceSnapshot) + 'static,
    {
        self.state.subscribe(listener)
    }
}
