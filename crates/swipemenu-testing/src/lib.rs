//! Testing utilities for swipemenu

pub mod fake_dom;
pub mod robot;

pub use fake_dom::{parse_translate_x, FakeDom, FakeElement};
pub use robot::{DrawerRobot, MarkerSnapshot};

pub mod prelude {
    pub use crate::fake_dom::*;
    pub use crate::robot::*;
    pub use swipemenu_core::*;
}
