use leptos::prelude::*;

/// Viewport width under which the sidebar becomes an overlay.
pub const NARROW_BREAKPOINT_PX: f64 = 870.0;

pub fn is_narrow_width(width: f64) -> bool {
    width < NARROW_BREAKPOINT_PX
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_open: RwSignal<bool>,
    pub narrow: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let narrow = current_viewport_width().map(is_narrow_width).unwrap_or(false);
        Self {
            // an overlay sidebar starts closed
            sidebar_open: RwSignal::new(!narrow),
            narrow: RwSignal::new(narrow),
        }
    }

    /// Keeps `narrow` in sync with the window size.
    pub fn init_viewport_tracking(&self) {
        let this = *self;
        let _ = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = current_viewport_width() {
                this.set_narrow(is_narrow_width(width));
            }
        });
    }

    pub fn set_narrow(&self, narrow: bool) {
        if self.narrow.get_untracked() == narrow {
            return;
        }
        log::debug!("narrow layout: {}", narrow);
        self.narrow.set(narrow);
        self.sidebar_open.set(!narrow);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }

    /// Closes the sidebar after navigation when it overlays the content.
    pub fn close_sidebar_if_overlay(&self) {
        if self.narrow.get_untracked() {
            self.sidebar_open.set(false);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn current_viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}
