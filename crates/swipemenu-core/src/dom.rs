//! The DOM capabilities a controller needs.
//!
//! The controller never talks to a document directly. Platforms implement
//! [`DomBinding`] over their element handle type; tests use an in-memory
//! implementation.

use smallvec::SmallVec;

/// Inline style properties the controller writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Transform,
    Opacity,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Transform => "transform",
            StyleProperty::Opacity => "opacity",
        }
    }
}

/// Element-level operations on a document.
///
/// Implementations must treat failures as no-ops: a missing style declaration
/// or a detached element is not an error the controller can act on.
pub trait DomBinding {
    /// Cheap, clonable handle to an element.
    type Element: Clone + PartialEq;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn set_style(&self, element: &Self::Element, property: StyleProperty, value: &str);

    /// Removes an inline override so the stylesheet takes over again.
    fn clear_style(&self, element: &Self::Element, property: StyleProperty);

    /// Document-relative left edge, including transforms.
    fn offset_left(&self, element: &Self::Element) -> f32;

    /// Width including borders and padding.
    fn outer_width(&self, element: &Self::Element) -> f32;

    /// Dispatches a bubbling custom event named `event` on `element`.
    fn dispatch_event(&self, element: &Self::Element, event: &str);
}

/// The elements a controller drives.
///
/// Trigger lists may be empty. The backdrop and container are optional for
/// the same reason: a selector that matched nothing leaves the controller
/// working on whatever remains.
#[derive(Clone, Debug)]
pub struct DrawerElements<E> {
    pub panel: E,
    pub backdrop: Option<E>,
    pub container: Option<E>,
    pub toggles: SmallVec<[E; 2]>,
    pub closes: SmallVec<[E; 2]>,
    pub opens: SmallVec<[E; 2]>,
}

impl<E: Clone + PartialEq> DrawerElements<E> {
    pub fn new(panel: E) -> Self {
        Self {
            panel,
            backdrop: None,
            container: None,
            toggles: SmallVec::new(),
            closes: SmallVec::new(),
            opens: SmallVec::new(),
        }
    }

    pub fn with_backdrop(mut self, backdrop: E) -> Self {
        self.backdrop = Some(backdrop);
        self
    }

    pub fn with_container(mut self, container: E) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_toggles(mut self, toggles: impl IntoIterator<Item = E>) -> Self {
        self.toggles.extend(toggles);
        self
    }

    pub fn with_closes(mut self, closes: impl IntoIterator<Item = E>) -> Self {
        self.closes.extend(closes);
        self
    }

    pub fn with_opens(mut self, opens: impl IntoIterator<Item = E>) -> Self {
        self.opens.extend(opens);
        self
    }

    /// Whether `element` is the backdrop.
    pub fn is_backdrop(&self, element: &E) -> bool {
        self.backdrop.as_ref() == Some(element)
    }

    /// Triggers whose "active" marker mirrors the open state.
    pub fn active_triggers(&self) -> impl Iterator<Item = &E> {
        self.toggles.iter().chain(self.opens.iter())
    }
}
