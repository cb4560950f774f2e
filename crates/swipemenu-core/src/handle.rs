//! Shared access to a bound controller from event callbacks.

use crate::controller::{DrawerController, TriggerKind};
use crate::dom::DomBinding;
use crate::events::{DrawerEvent, Intent};
use crate::markers;
use crate::observer::ListenerId;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Clonable handle to one bound side menu.
///
/// Every callback goes through [`with`](Self::with), [`raise`](Self::raise) or
/// [`click`](Self::click). Intents and clicks arriving while the controller is
/// busy (a page script reacting to `opened` by clicking a close button) are
/// queued and applied once the running operation returns.
pub struct DrawerHandle<D: DomBinding> {
    dom: D,
    panel: D::Element,
    controller: Rc<RefCell<DrawerController<D>>>,
    pending: Rc<RefCell<VecDeque<Intent>>>,
}

impl<D: DomBinding + Clone> DrawerHandle<D> {
    pub fn new(controller: DrawerController<D>) -> Self {
        Self {
            dom: controller.dom().clone(),
            panel: controller.elements().panel.clone(),
            controller: Rc::new(RefCell::new(controller)),
            pending: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

impl<D: DomBinding> DrawerHandle<D> {
    /// Runs `f` on the controller, then drains queued intents. Returns `None`
    /// when called re-entrantly.
    pub fn with<R>(&self, f: impl FnOnce(&mut DrawerController<D>) -> R) -> Option<R> {
        let result = {
            let Ok(mut controller) = self.controller.try_borrow_mut() else {
                log::debug!("side menu busy, dropping re-entrant call");
                return None;
            };
            f(&mut controller)
        };
        self.drain_pending();
        Some(result)
    }

    /// Applies `intent` now, or after the running operation if busy.
    pub fn raise(&self, intent: Intent) {
        self.pending.borrow_mut().push_back(intent);
        self.drain_pending();
    }

    /// A trigger click: clears the dragged marker right away and raises the
    /// trigger's intent through the queue.
    pub fn click(&self, kind: TriggerKind) {
        self.dom.remove_class(&self.panel, markers::DRAGGED);
        self.raise(kind.intent());
    }

    fn drain_pending(&self) {
        loop {
            let Ok(mut controller) = self.controller.try_borrow_mut() else {
                // The outer call drains once it releases the controller.
                return;
            };
            let Some(intent) = self.pending.borrow_mut().pop_front() else {
                return;
            };
            controller.apply_intent(intent);
        }
    }

    pub fn open(&self) {
        self.raise(Intent::Open);
    }

    pub fn close(&self) {
        self.raise(Intent::Close);
    }

    pub fn toggle(&self) {
        self.raise(Intent::Toggle);
    }

    pub fn panel(&self) -> &D::Element {
        &self.panel
    }

    /// Reads the panel marker directly, so it also answers from inside a
    /// listener while the controller is busy.
    pub fn is_opened(&self) -> bool {
        self.dom.has_class(&self.panel, markers::OPENED)
    }

    pub fn subscribe(&self, listener: impl Fn(DrawerEvent) + 'static) -> Option<ListenerId> {
        self.with(|controller| controller.subscribe(listener))
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.with(|controller| controller.unsubscribe(id)).unwrap_or(false)
    }
}

impl<D: DomBinding + Clone> Clone for DrawerHandle<D> {
    fn clone(&self) -> Self {
        Self {
            dom: self.dom.clone(),
            panel: self.panel.clone(),
            controller: Rc::clone(&self.controller),
            pending: Rc::clone(&self.pending),
        }
    }
}
