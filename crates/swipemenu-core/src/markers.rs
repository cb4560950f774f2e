//! Class names and event names shared with stylesheets and page scripts.

/// Present on the panel while it is open.
pub const OPENED: &str = "opened";

/// Present on the container (usually `<body>`) while the panel is open.
pub const CONTAINER_OPENED: &str = "swiping-side-menu-opened";

/// Present on toggle and open triggers while the panel is open.
pub const ACTIVE: &str = "active";

/// Present on the panel while a gesture is in progress. Stylesheets use it to
/// switch off the slide transition so the panel follows the finger.
pub const DRAGGING: &str = "dragging";

/// Present on the panel after a gesture that locked onto an axis, until the
/// next trigger click.
pub const DRAGGED: &str = "dragged";

/// Added to the panel on iOS Safari.
pub const IS_SAFARI: &str = "is-safari";

/// Namespace appended to every event name: `opened.swipingSideMenu`.
pub const EVENT_NAMESPACE: &str = "swipingSideMenu";

/// Joins an event name with [`EVENT_NAMESPACE`].
pub fn namespaced(event: &str) -> String {
    format!("{event}.{EVENT_NAMESPACE}")
}
