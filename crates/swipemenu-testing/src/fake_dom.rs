//! In-memory document implementing [`DomBinding`].
//!
//! Panels created with [`FakeDom::create_panel`] follow the stylesheet
//! contract of the real widget: the panel rests one width to the left of the
//! viewport, the `opened` class translates it by its width, and an inline
//! `transform` overrides both.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use swipemenu_core::{DomBinding, StyleProperty};

/// Handle to an element of a [`FakeDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FakeElement(usize);

#[derive(Debug, Default)]
struct FakeNode {
    name: String,
    classes: Vec<String>,
    styles: HashMap<StyleProperty, String>,
    base_left: f32,
    width: f32,
    slides: bool,
    events: Vec<String>,
}

impl FakeNode {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    fn translate_x(&self) -> f32 {
        if let Some(transform) = self.styles.get(&StyleProperty::Transform) {
            return parse_translate_x(transform).unwrap_or(0.0);
        }
        if self.slides && self.has_class(swipemenu_core::markers::OPENED) {
            self.width
        } else {
            0.0
        }
    }
}

/// Shared in-memory document. Clones refer to the same elements, so a test
/// can keep one while the controller owns another.
#[derive(Clone, Debug, Default)]
pub struct FakeDom {
    nodes: Rc<RefCell<Vec<FakeNode>>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plain element at the document origin.
    pub fn create_element(&self, name: &str) -> FakeElement {
        self.insert(FakeNode {
            name: name.to_string(),
            ..FakeNode::default()
        })
    }

    /// Creates a sliding panel of the given width, resting off-screen.
    pub fn create_panel(&self, name: &str, width: f32) -> FakeElement {
        self.insert(FakeNode {
            name: name.to_string(),
            base_left: -width,
            width,
            slides: true,
            ..FakeNode::default()
        })
    }

    fn insert(&self, node: FakeNode) -> FakeElement {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        FakeElement(nodes.len() - 1)
    }

    fn with_node<R>(&self, element: &FakeElement, f: impl FnOnce(&FakeNode) -> R) -> R {
        f(&self.nodes.borrow()[element.0])
    }

    fn with_node_mut<R>(&self, element: &FakeElement, f: impl FnOnce(&mut FakeNode) -> R) -> R {
        f(&mut self.nodes.borrow_mut()[element.0])
    }

    pub fn name(&self, element: &FakeElement) -> String {
        self.with_node(element, |node| node.name.clone())
    }

    /// Classes in insertion order.
    pub fn classes(&self, element: &FakeElement) -> Vec<String> {
        self.with_node(element, |node| node.classes.clone())
    }

    pub fn style(&self, element: &FakeElement, property: StyleProperty) -> Option<String> {
        self.with_node(element, |node| node.styles.get(&property).cloned())
    }

    /// Events dispatched on `element`, oldest first.
    pub fn events(&self, element: &FakeElement) -> Vec<String> {
        self.with_node(element, |node| node.events.clone())
    }

    pub fn clear_events(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.events.clear();
        }
    }

    /// Current horizontal translation, from inline style or the `opened` class.
    pub fn translate_x(&self, element: &FakeElement) -> f32 {
        self.with_node(element, FakeNode::translate_x)
    }
}

impl DomBinding for FakeDom {
    type Element = FakeElement;

    fn add_class(&self, element: &FakeElement, class: &str) {
        self.with_node_mut(element, |node| {
            if !node.has_class(class) {
                node.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, element: &FakeElement, class: &str) {
        self.with_node_mut(element, |node| node.classes.retain(|existing| existing != class));
    }

    fn has_class(&self, element: &FakeElement, class: &str) -> bool {
        self.with_node(element, |node| node.has_class(class))
    }

    fn set_style(&self, element: &FakeElement, property: StyleProperty, value: &str) {
        self.with_node_mut(element, |node| {
            node.styles.insert(property, value.to_string());
        });
    }

    fn clear_style(&self, element: &FakeElement, property: StyleProperty) {
        self.with_node_mut(element, |node| {
            node.styles.remove(&property);
        });
    }

    fn offset_left(&self, element: &FakeElement) -> f32 {
        self.with_node(element, |node| node.base_left + node.translate_x())
    }

    fn outer_width(&self, element: &FakeElement) -> f32 {
        self.with_node(element, |node| node.width)
    }

    fn dispatch_event(&self, element: &FakeElement, event: &str) {
        log::trace!("fake dom: {event} on {}", self.name(element));
        self.with_node_mut(element, |node| node.events.push(event.to_string()));
    }
}

/// Reads the x component of a `translate3d(Xpx, ...)` transform.
pub fn parse_translate_x(transform: &str) -> Option<f32> {
    let args = transform.strip_prefix("translate3d(")?;
    let x = args.split(',').next()?.trim();
    x.strip_suffix("px")?.parse().ok()
}
