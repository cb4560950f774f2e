//! Browser entry point: binds every side menu on the page.
//!
//! Build with `wasm-pack build apps/web-demo --target web` and serve `www/`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use swipemenu_core::{DrawerSettings, PANEL_SELECTOR};
use swipemenu_platform_web::{bind_all, WebHandle, WebRegistry};
use wasm_bindgen::prelude::*;

thread_local! {
    static REGISTRY: RefCell<WebRegistry> = RefCell::new(WebRegistry::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let count = bind_all(&mut registry, PANEL_SELECTOR, &DrawerSettings::default())?;
        for (_, handle) in registry.iter() {
            handle.subscribe(|event| log::info!("side menu {}", event.name()));
        }
        log::info!("bound {count} side menu(s)");
        Ok(())
    })
}

fn each_menu(f: impl Fn(&WebHandle)) {
    REGISTRY.with(|registry| {
        for (_, handle) in registry.borrow().iter() {
            f(handle);
        }
    });
}

#[wasm_bindgen(js_name = openSideMenus)]
pub fn open_side_menus() {
    each_menu(WebHandle::open);
}

#[wasm_bindgen(js_name = closeSideMenus)]
pub fn close_side_menus() {
    each_menu(WebHandle::close);
}

#[wasm_bindgen(js_name = toggleSideMenus)]
pub fn toggle_side_menus() {
    each_menu(WebHandle::toggle);
}
