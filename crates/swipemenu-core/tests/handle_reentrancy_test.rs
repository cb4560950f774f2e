//! Intents and clicks that arrive while the controller is busy.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipemenu_core::markers::DRAGGED;
use swipemenu_core::{
    DomBinding, DrawerController, DrawerElements, DrawerEvent, DrawerHandle, DrawerSettings,
    Duration, Instant, Point, TriggerKind,
};
use swipemenu_testing::{FakeDom, FakeElement};

struct BoundMenu {
    dom: FakeDom,
    panel: FakeElement,
    handle: DrawerHandle<FakeDom>,
    observed: Rc<RefCell<Vec<DrawerEvent>>>,
}

fn bound_menu() -> BoundMenu {
    let dom = FakeDom::new();
    let panel = dom.create_panel("panel", 300.0);
    let close = dom.create_element("close");
    let elements = DrawerElements::new(panel).with_closes([close]);
    let handle = DrawerHandle::new(DrawerController::new(
        dom.clone(),
        elements,
        DrawerSettings::default(),
    ));

    let observed = Rc::new(RefCell::new(Vec::new()));
    {
        let observed = Rc::clone(&observed);
        handle
            .subscribe(move |event| observed.borrow_mut().push(event))
            .expect("handle is idle");
    }

    BoundMenu {
        dom,
        panel,
        handle,
        observed,
    }
}

#[test]
fn intents_raised_by_a_listener_run_after_it_in_order() {
    let menu = bound_menu();
    let fired = Rc::new(Cell::new(false));
    let opened_seen_inside = Rc::new(Cell::new(false));
    {
        let inner = menu.handle.clone();
        let fired = Rc::clone(&fired);
        let opened_seen_inside = Rc::clone(&opened_seen_inside);
        menu.handle.subscribe(move |event| {
            if event == DrawerEvent::Opened && !fired.replace(true) {
                opened_seen_inside.set(inner.is_opened());
                inner.close();
                inner.toggle();
            }
        });
    }

    assert_eq!(menu.handle.with(|controller| controller.open()), Some(()));

    assert!(opened_seen_inside.get());
    assert!(menu.handle.is_opened());
    assert_eq!(
        *menu.observed.borrow(),
        vec![DrawerEvent::Opened, DrawerEvent::Closed, DrawerEvent::Toggled]
    );
    assert_eq!(
        menu.dom.events(&menu.panel),
        vec![
            "opened.swipingSideMenu".to_string(),
            "closed.swipingSideMenu".to_string(),
            "toggled.swipingSideMenu".to_string()
        ]
    );
}

#[test]
fn close_click_during_swipe_open_is_applied_after_release() {
    let menu = bound_menu();
    {
        let inner = menu.handle.clone();
        menu.handle.subscribe(move |event| {
            if event == DrawerEvent::Opened {
                inner.click(TriggerKind::Close);
            }
        });
    }

    let start = Instant::now();
    menu.handle.with(|controller| {
        controller.on_gesture_start(Point::new(10.0, 100.0), start, false);
        controller.on_gesture_move(Point::new(120.0, 100.0));
        controller.on_gesture_end(start + Duration::from_millis(100))
    });

    assert!(!menu.handle.is_opened());
    assert!(!menu.dom.has_class(&menu.panel, DRAGGED));
    assert_eq!(
        *menu.observed.borrow(),
        vec![DrawerEvent::Opened, DrawerEvent::Closed]
    );
}

#[test]
fn re_entrant_with_is_refused() {
    let menu = bound_menu();
    let inner_result = Rc::new(Cell::new(None));
    {
        let inner = menu.handle.clone();
        let inner_result = Rc::clone(&inner_result);
        menu.handle.subscribe(move |_| {
            inner_result.set(Some(inner.with(|controller| controller.state()).is_none()));
        });
    }

    menu.handle.open();

    assert_eq!(inner_result.get(), Some(true));
    assert!(menu.handle.is_opened());
}

#[test]
fn idle_click_clears_drag_marker_and_applies_intent() {
    let menu = bound_menu();
    menu.dom.add_class(&menu.panel, DRAGGED);

    menu.handle.click(TriggerKind::Open);

    assert!(menu.handle.is_opened());
    assert!(!menu.dom.has_class(&menu.panel, DRAGGED));
    assert_eq!(*menu.observed.borrow(), vec![DrawerEvent::Opened]);
}

#[test]
fn unsubscribe_through_handle() {
    let menu = bound_menu();
    let calls = Rc::new(Cell::new(0));
    let id = {
        let calls = Rc::clone(&calls);
        menu.handle
            .subscribe(move |_| calls.set(calls.get() + 1))
            .expect("handle is idle")
    };

    menu.handle.open();
    assert!(menu.handle.unsubscribe(id));
    menu.handle.close();

    assert_eq!(calls.get(), 1);
    assert!(!menu.handle.unsubscribe(id));
}
