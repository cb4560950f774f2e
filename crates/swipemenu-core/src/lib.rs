//! Touch-swipeable side menu: gesture tracking and open/close state.
//!
//! The crate is platform-free. A [`DrawerController`] owns one panel and talks
//! to the page through a [`DomBinding`]; platforms translate native touch and
//! click events into the controller's `on_*` entry points.

pub mod controller;
pub mod dom;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod gesture_constants;
pub mod handle;
pub mod markers;
pub mod observer;
pub mod registry;
pub mod settings;

pub use controller::{DrawerController, PanelState, TriggerKind};
pub use dom::{DomBinding, DrawerElements, StyleProperty};
pub use events::{DrawerEvent, Intent};
pub use geometry::Point;
pub use gesture::{AxisLock, DragFrame, GestureSession, MoveOutcome};
pub use handle::DrawerHandle;
pub use observer::{DrawerObservers, ListenerId};
pub use registry::DrawerRegistry;
pub use settings::{DrawerSettings, PANEL_SELECTOR};

// Re-export so platforms and tests share one clock type.
pub use web_time::{Duration, Instant};
