//! Robot-style driver for side menu tests.
//!
//! The robot wires a [`DrawerController`] to a [`FakeDom`] with one element
//! of every kind and drives it with scripted touches on a virtual clock, so
//! duration thresholds are tested without sleeping.
//!
//! # Example
//!
//! ```
//! use swipemenu_testing::DrawerRobot;
//! use swipemenu_core::Duration;
//!
//! let mut robot = DrawerRobot::new(300.0);
//! robot.swipe((10.0, 100.0), (120.0, 100.0), Duration::from_millis(100));
//! assert!(robot.is_opened());
//! ```

use crate::fake_dom::{FakeDom, FakeElement};
use std::cell::RefCell;
use std::rc::Rc;
use swipemenu_core::{
    DomBinding, DrawerController, DrawerElements, DrawerEvent, DrawerSettings, Duration, Instant,
    Intent, Point, TriggerKind,
};

/// Number of intermediate moves in a scripted swipe.
const SWIPE_STEPS: u32 = 10;

pub struct DrawerRobot {
    dom: FakeDom,
    pub panel: FakeElement,
    pub backdrop: FakeElement,
    pub container: FakeElement,
    pub toggle: FakeElement,
    pub close: FakeElement,
    pub open: FakeElement,
    controller: DrawerController<FakeDom>,
    now: Instant,
    observed: Rc<RefCell<Vec<DrawerEvent>>>,
}

impl DrawerRobot {
    /// A closed panel of `width` pixels with default settings.
    pub fn new(width: f32) -> Self {
        Self::with_settings(width, DrawerSettings::default())
    }

    pub fn with_settings(width: f32, settings: DrawerSettings) -> Self {
        let dom = FakeDom::new();
        let panel = dom.create_panel("panel", width);
        let backdrop = dom.create_element("backdrop");
        let container = dom.create_element("body");
        let toggle = dom.create_element("toggle");
        let close = dom.create_element("close");
        let open = dom.create_element("open");

        let elements = DrawerElements::new(panel)
            .with_backdrop(backdrop)
            .with_container(container)
            .with_toggles([toggle])
            .with_closes([close, backdrop])
            .with_opens([open]);
        let mut controller = DrawerController::new(dom.clone(), elements, settings);

        let observed = Rc::new(RefCell::new(Vec::new()));
        {
            let observed = Rc::clone(&observed);
            controller.subscribe(move |event| observed.borrow_mut().push(event));
        }

        Self {
            dom,
            panel,
            backdrop,
            container,
            toggle,
            close,
            open,
            controller,
            now: Instant::now(),
            observed,
        }
    }

    /// Opens the panel and forgets the notifications that produced.
    pub fn opened(mut self) -> Self {
        self.controller.open();
        self.reset_observations();
        self
    }

    pub fn dom(&self) -> &FakeDom {
        &self.dom
    }

    pub fn controller(&self) -> &DrawerController<FakeDom> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawerController<FakeDom> {
        &mut self.controller
    }

    pub fn is_opened(&self) -> bool {
        self.controller.is_opened()
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }

    // ------------------------------------------------------------------
    // Touches
    // ------------------------------------------------------------------

    pub fn touch_down(&mut self, x: f32, y: f32) {
        self.controller.on_gesture_start(Point::new(x, y), self.now, false);
    }

    pub fn touch_down_on_backdrop(&mut self, x: f32, y: f32) {
        self.controller.on_gesture_start(Point::new(x, y), self.now, true);
    }

    /// Returns whether the move asked to suppress native scrolling.
    pub fn touch_move(&mut self, x: f32, y: f32) -> bool {
        self.controller.on_gesture_move(Point::new(x, y))
    }

    pub fn touch_up(&mut self) -> Option<Intent> {
        self.controller.on_gesture_end(self.now)
    }

    pub fn touch_cancel(&mut self) -> Option<Intent> {
        self.controller.on_gesture_cancel(self.now)
    }

    /// Down, evenly spaced moves, up; `duration` is spread across the moves.
    pub fn swipe(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        duration: Duration,
    ) -> Option<Intent> {
        self.touch_down(from.0, from.1);
        self.drag_to(from, to, duration);
        self.touch_up()
    }

    /// Same as [`swipe`](Self::swipe) but starting on the backdrop.
    pub fn swipe_from_backdrop(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        duration: Duration,
    ) -> Option<Intent> {
        self.touch_down_on_backdrop(from.0, from.1);
        self.drag_to(from, to, duration);
        self.touch_up()
    }

    /// Moves from `from` to `to` in steps. Returns one entry per move: whether
    /// it suppressed native scrolling.
    pub fn drag_to(&mut self, from: (f32, f32), to: (f32, f32), duration: Duration) -> Vec<bool> {
        let step_time = duration / SWIPE_STEPS;
        (1..=SWIPE_STEPS)
            .map(|step| {
                let t = step as f32 / SWIPE_STEPS as f32;
                self.advance(step_time);
                self.touch_move(
                    from.0 + (to.0 - from.0) * t,
                    from.1 + (to.1 - from.1) * t,
                )
            })
            .collect()
    }

    pub fn click(&mut self, kind: TriggerKind) {
        self.controller.on_trigger_click(kind);
    }

    // ------------------------------------------------------------------
    // Observations
    // ------------------------------------------------------------------

    /// Observer notifications since the last reset.
    pub fn observed(&self) -> Vec<DrawerEvent> {
        self.observed.borrow().clone()
    }

    /// DOM events dispatched on the panel since the last reset.
    pub fn panel_events(&self) -> Vec<String> {
        self.dom.events(&self.panel)
    }

    pub fn reset_observations(&mut self) {
        self.observed.borrow_mut().clear();
        self.dom.clear_events();
    }

    /// Every class on every element the controller marks.
    pub fn markers(&self) -> MarkerSnapshot {
        MarkerSnapshot {
            panel: self.dom.classes(&self.panel),
            container: self.dom.classes(&self.container),
            toggle: self.dom.classes(&self.toggle),
            open: self.dom.classes(&self.open),
            close: self.dom.classes(&self.close),
        }
    }

    pub fn has_class(&self, element: FakeElement, class: &str) -> bool {
        self.dom.has_class(&element, class)
    }
}

/// Class lists captured by [`DrawerRobot::markers`].
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSnapshot {
    pub panel: Vec<String>,
    pub container: Vec<String>,
    pub toggle: Vec<String>,
    pub open: Vec<String>,
    pub close: Vec<String>,
}
