//! Binding controllers to page elements and wiring DOM listeners.

use crate::dom::WebDom;
use crate::error::WebBindError;
use crate::user_agent::is_ios_safari;
use swipemenu_core::markers::{namespaced, IS_SAFARI};
use swipemenu_core::{
    DomBinding, DrawerController, DrawerElements, DrawerHandle, DrawerRegistry, DrawerSettings,
    Instant, Intent, Point, TriggerKind,
};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, MouseEvent, TouchEvent};

/// Handle to a side menu bound to page elements.
pub type WebHandle = DrawerHandle<WebDom>;

/// Panels bound on a page, keyed by their element.
pub type WebRegistry = DrawerRegistry<Element, WebHandle>;

fn window_and_document() -> Result<(web_sys::Window, Document), WebBindError> {
    let window = web_sys::window().ok_or(WebBindError::NoWindow)?;
    let document = window.document().ok_or(WebBindError::NoDocument)?;
    Ok((window, document))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebBindError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Registers `handler` for `event` on `target` for the page's lifetime.
fn listen<E>(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Result<(), WebBindError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Page coordinates of the first touch still on the surface.
fn touch_point(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().get(0)?;
    Some(Point::new(touch.page_x() as f32, touch.page_y() as f32))
}

fn create_backdrop(
    document: &Document,
    panel: &Element,
    template: &str,
) -> Result<Option<Element>, WebBindError> {
    let holder = document.create_element("div")?;
    holder.set_inner_html(template);
    let Some(backdrop) = holder.first_element_child() else {
        log::warn!("side menu: backdrop template produced no element");
        return Ok(None);
    };
    panel.after_with_node_1(&backdrop)?;
    Ok(Some(backdrop))
}

/// Binds a side menu to `panel`.
///
/// Inserts the backdrop after the panel, looks up triggers and the container
/// with the selectors in `settings`, and installs touch, click and intent
/// listeners. Listeners live as long as the page.
pub fn mount(panel: Element, settings: DrawerSettings) -> Result<WebHandle, WebBindError> {
    let (window, document) = window_and_document()?;

    let backdrop = create_backdrop(&document, &panel, &settings.backdrop_template)?;
    let container = document.query_selector(&settings.container_selector)?;
    // Triggers are looked up after the backdrop exists so its close marker
    // makes it a close trigger.
    let toggles = query_all(&document, &settings.toggle_selector)?;
    let closes = query_all(&document, &settings.close_selector)?;
    let opens = query_all(&document, &settings.open_selector)?;

    let mut elements = DrawerElements::new(panel.clone())
        .with_toggles(toggles)
        .with_closes(closes)
        .with_opens(opens);
    elements.backdrop = backdrop.clone();
    elements.container = container;

    let dom = WebDom::new(window.clone());
    if let Ok(user_agent) = window.navigator().user_agent() {
        if is_ios_safari(&user_agent) {
            dom.add_class(&panel, IS_SAFARI);
        }
    }

    let document_touch_listener = settings.document_touch_listener;
    let handle = DrawerHandle::new(DrawerController::new(dom, elements.clone(), settings));

    install_intent_listeners(&handle, &panel)?;
    install_trigger_listeners(&handle, &elements)?;
    install_gesture_listeners(&handle, &panel, backdrop.as_ref())?;
    if document_touch_listener {
        listen(&document, "touchstart", true, |_: TouchEvent| {})?;
    }

    log::debug!(
        "side menu mounted: {} toggle, {} close, {} open triggers",
        elements.toggles.len(),
        elements.closes.len(),
        elements.opens.len()
    );
    Ok(handle)
}

/// Binds the first element matching `selector`.
pub fn mount_selector(
    selector: &str,
    settings: DrawerSettings,
) -> Result<WebHandle, WebBindError> {
    let (_, document) = window_and_document()?;
    let panel = document
        .query_selector(selector)?
        .ok_or_else(|| WebBindError::PanelNotFound {
            selector: selector.to_string(),
        })?;
    mount(panel, settings)
}

/// Binds every element matching `selector` that `registry` does not know yet.
/// Returns how many panels the registry holds afterwards.
pub fn bind_all(
    registry: &mut WebRegistry,
    selector: &str,
    settings: &DrawerSettings,
) -> Result<usize, WebBindError> {
    let (_, document) = window_and_document()?;
    for panel in query_all(&document, selector)? {
        registry.try_get_or_bind(panel, |panel| mount(panel.clone(), settings.clone()))?;
    }
    Ok(registry.len())
}

fn install_intent_listeners(handle: &WebHandle, panel: &Element) -> Result<(), WebBindError> {
    for intent in Intent::ALL {
        let handle = handle.clone();
        listen(panel, &namespaced(intent.name()), true, move |_: web_sys::Event| {
            handle.raise(intent);
        })?;
    }
    Ok(())
}

fn install_trigger_listeners(
    handle: &WebHandle,
    elements: &DrawerElements<Element>,
) -> Result<(), WebBindError> {
    let groups = [
        (TriggerKind::Toggle, &elements.toggles),
        (TriggerKind::Close, &elements.closes),
        (TriggerKind::Open, &elements.opens),
    ];
    for (kind, triggers) in groups {
        for trigger in triggers.iter() {
            let handle = handle.clone();
            listen(trigger, "click", false, move |event: MouseEvent| {
                event.prevent_default();
                handle.click(kind);
            })?;
        }
    }
    Ok(())
}

fn install_gesture_listeners(
    handle: &WebHandle,
    panel: &Element,
    backdrop: Option<&Element>,
) -> Result<(), WebBindError> {
    let surfaces = std::iter::once(panel).chain(backdrop);
    for surface in surfaces {
        {
            let handle = handle.clone();
            let backdrop = backdrop.cloned();
            listen(surface, "touchstart", true, move |event: TouchEvent| {
                let Some(point) = touch_point(&event) else {
                    return;
                };
                let target = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok());
                let from_backdrop = backdrop.is_some() && target == backdrop;
                handle.with(|controller| {
                    controller.on_gesture_start(point, Instant::now(), from_backdrop)
                });
            })?;
        }
        {
            let handle = handle.clone();
            // Not passive: horizontal drags cancel native scrolling.
            listen(surface, "touchmove", false, move |event: TouchEvent| {
                let Some(point) = touch_point(&event) else {
                    return;
                };
                if handle.with(|controller| controller.on_gesture_move(point)) == Some(true) {
                    event.prevent_default();
                }
            })?;
        }
        {
            let handle = handle.clone();
            listen(surface, "touchend", true, move |_: TouchEvent| {
                handle.with(|controller| controller.on_gesture_end(Instant::now()));
            })?;
        }
        {
            let handle = handle.clone();
            listen(surface, "touchcancel", true, move |_: TouchEvent| {
                handle.with(|controller| controller.on_gesture_cancel(Instant::now()));
            })?;
        }
    }
    Ok(())
}
