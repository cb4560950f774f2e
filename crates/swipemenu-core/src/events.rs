//! Intents that drive the panel and the notifications it emits.

/// A request to change the panel state.
///
/// Gestures, trigger clicks and external callers all end up here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Open,
    Close,
    Toggle,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::Open, Intent::Close, Intent::Toggle];

    pub fn name(self) -> &'static str {
        match self {
            Intent::Open => "open",
            Intent::Close => "close",
            Intent::Toggle => "toggle",
        }
    }
}

/// Emitted after a transition has updated every marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerEvent {
    Opened,
    Closed,
    Toggled,
}

impl DrawerEvent {
    pub fn name(self) -> &'static str {
        match self {
            DrawerEvent::Opened => "opened",
            DrawerEvent::Closed => "closed",
            DrawerEvent::Toggled => "toggled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::namespaced;

    #[test]
    fn intent_names_namespace_into_dom_events() {
        let names: Vec<String> = Intent::ALL
            .into_iter()
            .map(|intent| namespaced(intent.name()))
            .collect();
        assert_eq!(
            names,
            ["open.swipingSideMenu", "close.swipingSideMenu", "toggle.swipingSideMenu"]
        );
        assert_eq!(namespaced(DrawerEvent::Toggled.name()), "toggled.swipingSideMenu");
    }
}
