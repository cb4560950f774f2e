//! [`DomBinding`] over `web-sys` elements.

use swipemenu_core::{DomBinding, StyleProperty};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Element, HtmlElement, Window};

#[derive(Clone)]
pub struct WebDom {
    window: Window,
}

impl WebDom {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

fn warn_on_err(operation: &str, result: Result<(), JsValue>) {
    if let Err(error) = result {
        log::warn!("side menu: {operation} failed: {error:?}");
    }
}

impl DomBinding for WebDom {
    type Element = Element;

    fn add_class(&self, element: &Element, class: &str) {
        warn_on_err("add class", element.class_list().add_1(class));
    }

    fn remove_class(&self, element: &Element, class: &str) {
        warn_on_err("remove class", element.class_list().remove_1(class));
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_style(&self, element: &Element, property: StyleProperty, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            warn_on_err(
                "set style",
                html.style().set_property(property.css_name(), value),
            );
        }
    }

    fn clear_style(&self, element: &Element, property: StyleProperty) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            warn_on_err(
                "clear style",
                html.style().remove_property(property.css_name()).map(|_| ()),
            );
        }
    }

    fn offset_left(&self, element: &Element) -> f32 {
        let scroll_x = self.window.scroll_x().unwrap_or(0.0);
        (element.get_bounding_client_rect().left() + scroll_x) as f32
    }

    fn outer_width(&self, element: &Element) -> f32 {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.offset_width() as f32,
            None => element.get_bounding_client_rect().width() as f32,
        }
    }

    fn dispatch_event(&self, element: &Element, event: &str) {
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        let result = CustomEvent::new_with_event_init_dict(event, &init)
            .and_then(|custom| element.dispatch_event(&custom).map(|_| ()));
        warn_on_err("dispatch event", result);
    }
}
