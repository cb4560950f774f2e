//! Element-to-controller map owned by whoever binds panels.

/// Maps panel handles to the value bound to them, usually a shared controller.
///
/// Element handles are only required to compare equal, so lookups are linear.
/// Pages carry one or two side menus, not hundreds.
#[derive(Debug)]
pub struct DrawerRegistry<E, H> {
    entries: Vec<(E, H)>,
}

impl<E: PartialEq, H> Default for DrawerRegistry<E, H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: PartialEq, H> DrawerRegistry<E, H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, element: &E) -> Option<&H> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == element)
            .map(|(_, handle)| handle)
    }

    pub fn contains(&self, element: &E) -> bool {
        self.get(element).is_some()
    }

    /// Returns the handle bound to `element`, binding it with `bind` first if
    /// there is none. An element is never bound twice.
    pub fn get_or_bind(&mut self, element: E, bind: impl FnOnce(&E) -> H) -> &H {
        let index = match self.entries.iter().position(|(existing, _)| *existing == element) {
            Some(index) => index,
            None => {
                let handle = bind(&element);
                self.entries.push((element, handle));
                self.entries.len() - 1
            }
        };
        &self.entries[index].1
    }

    /// Like [`get_or_bind`](Self::get_or_bind) for fallible binding. Nothing
    /// is stored when `bind` fails.
    pub fn try_get_or_bind<Err>(
        &mut self,
        element: E,
        bind: impl FnOnce(&E) -> Result<H, Err>,
    ) -> Result<&H, Err> {
        let index = match self.entries.iter().position(|(existing, _)| *existing == element) {
            Some(index) => index,
            None => {
                let handle = bind(&element)?;
                self.entries.push((element, handle));
                self.entries.len() - 1
            }
        };
        Ok(&self.entries[index].1)
    }

    pub fn remove(&mut self, element: &E) -> Option<H> {
        let index = self.entries.iter().position(|(existing, _)| existing == element)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E, &H)> {
        self.entries.iter().map(|(element, handle)| (element, handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_each_element_once() {
        let mut registry = DrawerRegistry::new();
        let mut binds = 0;

        for element in ["left", "right", "left"] {
            registry.get_or_bind(element, |name| {
                binds += 1;
                format!("controller for {name}")
            });
        }

        assert_eq!(binds, 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(&"left").map(String::as_str),
            Some("controller for left")
        );
    }

    #[test]
    fn failed_bind_stores_nothing() {
        let mut registry: DrawerRegistry<&str, u32> = DrawerRegistry::new();

        let result = registry.try_get_or_bind("panel", |_| Err("no width"));

        assert_eq!(result, Err("no width"));
        assert!(registry.is_empty());
        assert_eq!(registry.try_get_or_bind("panel", |_| Ok::<_, &str>(7)), Ok(&7));
    }

    #[test]
    fn remove_returns_handle() {
        let mut registry = DrawerRegistry::new();
        registry.get_or_bind(1, |_| "a");

        assert_eq!(registry.remove(&1), Some("a"));
        assert_eq!(registry.remove(&1), None);
        assert!(!registry.contains(&1));
    }
}
