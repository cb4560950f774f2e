//! The side menu controller: one per panel element.

use crate::dom::{DomBinding, DrawerElements, StyleProperty};
use crate::events::{DrawerEvent, Intent};
use crate::geometry::Point;
use crate::gesture::{GestureSession, MoveOutcome};
use crate::markers;
use crate::observer::{DrawerObservers, ListenerId};
use crate::settings::DrawerSettings;
use web_time::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}

/// Which kind of trigger element was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerKind {
    Toggle,
    Close,
    Open,
}

impl TriggerKind {
    pub fn intent(self) -> Intent {
        match self {
            TriggerKind::Toggle => Intent::Toggle,
            TriggerKind::Close => Intent::Close,
            TriggerKind::Open => Intent::Open,
        }
    }
}

/// Owns the open/closed state and the gesture session for one panel.
///
/// All entry points are synchronous and expected to run on the UI thread in
/// response to a single DOM callback.
pub struct DrawerController<D: DomBinding> {
    dom: D,
    elements: DrawerElements<D::Element>,
    settings: DrawerSettings,
    state: PanelState,
    session: Option<GestureSession>,
    observers: DrawerObservers,
}

impl<D: DomBinding> DrawerController<D> {
    /// Builds a controller for `elements.panel`.
    ///
    /// The initial state is Closed unless the page already rendered the panel
    /// with the `opened` class. Markers are not touched here.
    pub fn new(dom: D, elements: DrawerElements<D::Element>, settings: DrawerSettings) -> Self {
        let state = if dom.has_class(&elements.panel, markers::OPENED) {
            PanelState::Open
        } else {
            PanelState::Closed
        };

        Self {
            dom,
            elements,
            settings,
            state,
            session: None,
            observers: DrawerObservers::new(),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn elements(&self) -> &DrawerElements<D::Element> {
        &self.elements
    }

    pub fn settings(&self) -> &DrawerSettings {
        &self.settings
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Live gesture session, if a finger is down.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Reads the panel's `opened` marker.
    pub fn is_opened(&self) -> bool {
        self.dom.has_class(&self.elements.panel, markers::OPENED)
    }

    /// Whether the last gesture was a drag and no trigger was clicked since.
    pub fn was_dragged(&self) -> bool {
        self.dom.has_class(&self.elements.panel, markers::DRAGGED)
    }

    pub fn subscribe(&mut self, listener: impl Fn(DrawerEvent) + 'static) -> ListenerId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // State transitions
    // ------------------------------------------------------------------

    pub fn open(&mut self) {
        self.apply_markers(PanelState::Open);
        self.emit(DrawerEvent::Opened);
    }

    pub fn close(&mut self) {
        self.apply_markers(PanelState::Closed);
        self.emit(DrawerEvent::Closed);
    }

    pub fn toggle(&mut self) {
        let target = if self.is_opened() {
            PanelState::Closed
        } else {
            PanelState::Open
        };
        self.apply_markers(target);
        self.emit(DrawerEvent::Toggled);
    }

    pub fn apply_intent(&mut self, intent: Intent) {
        log::debug!("side menu intent: {}", intent.name());
        match intent {
            Intent::Open => self.open(),
            Intent::Close => self.close(),
            Intent::Toggle => self.toggle(),
        }
    }

    /// Click on a trigger element. Clears the drag marker first so the click
    /// is not mistaken for the tail of a drag.
    pub fn on_trigger_click(&mut self, kind: TriggerKind) {
        self.dom.remove_class(&self.elements.panel, markers::DRAGGED);
        self.apply_intent(kind.intent());
    }

    fn apply_markers(&mut self, target: PanelState) {
        let dom = &self.dom;
        let elements = &self.elements;
        let set = |element: &D::Element, class: &str| {
            if target.is_open() {
                dom.add_class(element, class);
            } else {
                dom.remove_class(element, class);
            }
        };

        if let Some(container) = &elements.container {
            set(container, markers::CONTAINER_OPENED);
        }
        set(&elements.panel, markers::OPENED);
        for trigger in elements.active_triggers() {
            set(trigger, markers::ACTIVE);
        }

        if self.state != target {
            log::debug!("side menu {:?} -> {:?}", self.state, target);
        }
        self.state = target;
    }

    fn emit(&self, event: DrawerEvent) {
        self.dom
            .dispatch_event(&self.elements.panel, &markers::namespaced(event.name()));
        self.observers.notify(event);
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Finger down on the panel or the backdrop. Replaces any live session.
    pub fn on_gesture_start(&mut self, point: Point, timestamp: Instant, target_is_backdrop: bool) {
        let panel = &self.elements.panel;
        let session = GestureSession::begin(
            point,
            timestamp,
            self.dom.offset_left(panel),
            self.dom.outer_width(panel),
            target_is_backdrop,
        );
        log::trace!(
            "side menu gesture start at ({}, {}), backdrop: {}",
            point.x,
            point.y,
            target_is_backdrop
        );

        self.dom.add_class(panel, markers::DRAGGING);
        self.session = Some(session);
    }

    /// Finger moved. Returns true when the platform should suppress native
    /// scrolling for this event.
    pub fn on_gesture_move(&mut self, point: Point) -> bool {
        let panel_open = self.is_opened();
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let outcome = session.track(point, panel_open, self.settings.swipe_threshold);
        match outcome {
            MoveOutcome::Drag(frame) => {
                log::trace!(
                    "side menu drag: translate {} opacity {}",
                    frame.translate_x,
                    frame.backdrop_opacity
                );
                self.dom.set_style(
                    &self.elements.panel,
                    StyleProperty::Transform,
                    &frame.transform(),
                );
                if let Some(backdrop) = &self.elements.backdrop {
                    self.dom
                        .set_style(backdrop, StyleProperty::Opacity, &frame.opacity());
                }
            }
            MoveOutcome::ScrollLocked => log::trace!("side menu gesture is a page scroll"),
            MoveOutcome::Idle | MoveOutcome::OutOfBounds => {}
        }

        outcome.suppresses_scroll()
    }

    /// Finger lifted. Resolves the session and hands control back to the
    /// stylesheet. Returns the intent that was applied, if any.
    pub fn on_gesture_end(&mut self, timestamp: Instant) -> Option<Intent> {
        let session = self.session.take()?;
        let panel = self.elements.panel.clone();

        if session.was_dragged() {
            self.dom.add_class(&panel, markers::DRAGGED);
        }

        let panel_left = self.dom.offset_left(&panel);
        let intent = session.resolve(timestamp, panel_left, &self.settings);
        if let Some(intent) = intent {
            self.apply_intent(intent);
        }

        self.dom.remove_class(&panel, markers::DRAGGING);
        self.dom.clear_style(&panel, StyleProperty::Transform);
        if let Some(backdrop) = &self.elements.backdrop {
            self.dom.clear_style(backdrop, StyleProperty::Opacity);
        }

        intent
    }

    /// The platform cancelled the touch. Treated as a release so the panel
    /// never stays stuck mid-drag.
    pub fn on_gesture_cancel(&mut self, timestamp: Instant) -> Option<Intent> {
        self.on_gesture_end(timestamp)
    }
}

impl<D: DomBinding> std::fmt::Debug for DrawerController<D>
where
    D::Element: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerController")
            .field("panel", &self.elements.panel)
            .field("state", &self.state)
            .field("session", &self.session)
            .finish()
    }
}
