//! Listener list for drawer notifications.

use crate::events::DrawerEvent;
use std::rc::Rc;

/// Handle returned by [`DrawerObservers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(DrawerEvent)>;

/// Ordered list of callbacks notified after every transition.
///
/// Listeners run synchronously in subscription order. They must not call back
/// into the controller that owns this list; raise an intent on the platform
/// side instead, which queues it until the current transition returns.
#[derive(Default)]
pub struct DrawerObservers {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl DrawerObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(DrawerEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&self, event: DrawerEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for DrawerObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerObservers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = DrawerObservers::new();

        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            observers.subscribe(move |event| log.borrow_mut().push((tag, event)));
        }
        observers.notify(DrawerEvent::Opened);

        assert_eq!(
            *log.borrow(),
            vec![("first", DrawerEvent::Opened), ("second", DrawerEvent::Opened)]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = DrawerObservers::new();
        let id = {
            let count = Rc::clone(&count);
            observers.subscribe(move |_| *count.borrow_mut() += 1)
        };

        observers.notify(DrawerEvent::Closed);
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(DrawerEvent::Closed);

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }
}
