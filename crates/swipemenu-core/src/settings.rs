use crate::gesture_constants::{SWIPE_THRESHOLD, SWIPE_TOGGLE_DISTANCE, SWIPE_TOGGLE_DURATION_MS};
use web_time::Duration;

/// Selector that marks elements to be bound as side menus.
pub const PANEL_SELECTOR: &str = r#"[data-component="swiping-side-menu"]"#;

/// Per-panel configuration.
///
/// Settings are fixed once a controller is built. Selectors that match nothing
/// are fine: the corresponding trigger list is simply empty.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerSettings {
    /// Elements that toggle the panel on click.
    pub toggle_selector: String,
    /// Elements that close the panel on click.
    pub close_selector: String,
    /// Elements that open the panel on click.
    pub open_selector: String,
    /// HTML fragment for the backdrop inserted after the panel.
    pub backdrop_template: String,
    /// Element that mirrors the open state with a page-level class.
    pub container_selector: String,
    /// Axis classification threshold in pixels.
    pub swipe_threshold: f32,
    /// Flick window; longer gestures settle to the nearest end.
    pub swipe_toggle_duration: Duration,
    /// Minimum flick distance in pixels.
    pub swipe_toggle_distance: f32,
    /// Installs an empty `touchstart` listener on the document. Some mobile
    /// engines deliver backdrop touches inconsistently without one.
    pub document_touch_listener: bool,
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            toggle_selector: r#"[data-component="swiping-side-menu-toggle"]"#.into(),
            close_selector: r#"[data-component="swiping-side-menu-close"]"#.into(),
            open_selector: r#"[data-component="swiping-side-menu-open"]"#.into(),
            backdrop_template: r#"<div class="swiping-side-menu-backdrop" data-component="swiping-side-menu-close"></div>"#.into(),
            container_selector: "body".into(),
            swipe_threshold: SWIPE_THRESHOLD,
            swipe_toggle_duration: Duration::from_millis(SWIPE_TOGGLE_DURATION_MS),
            swipe_toggle_distance: SWIPE_TOGGLE_DISTANCE,
            document_touch_listener: false,
        }
    }
}

impl DrawerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toggle_selector(mut self, selector: impl Into<String>) -> Self {
        self.toggle_selector = selector.into();
        self
    }

    pub fn with_close_selector(mut self, selector: impl Into<String>) -> Self {
        self.close_selector = selector.into();
        self
    }

    pub fn with_open_selector(mut self, selector: impl Into<String>) -> Self {
        self.open_selector = selector.into();
        self
    }

    pub fn with_backdrop_template(mut self, template: impl Into<String>) -> Self {
        self.backdrop_template = template.into();
        self
    }

    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    pub fn with_swipe_threshold(mut self, pixels: f32) -> Self {
        self.swipe_threshold = pixels;
        self
    }

    pub fn with_swipe_toggle_duration(mut self, duration: Duration) -> Self {
        self.swipe_toggle_duration = duration;
        self
    }

    pub fn with_swipe_toggle_distance(mut self, pixels: f32) -> Self {
        self.swipe_toggle_distance = pixels;
        self
    }

    pub fn with_document_touch_listener(mut self, enabled: bool) -> Self {
        self.document_touch_listener = enabled;
        self
    }
}
