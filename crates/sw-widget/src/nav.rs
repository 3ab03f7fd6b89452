//! Mobile navigation menu toggle.

/// Effects the navigation markup must reflect.
pub trait NavHost {
    /// Mirror the open state into the toggle's `aria-expanded`.
    fn set_expanded(&self, expanded: bool);
    /// Add or remove the menu's open class.
    fn set_open(&self, open: bool);
    fn focus_toggle(&self);
}

/// Keys the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Other,
}

impl From<&str> for NavKey {
    fn from(key: &str) -> Self {
        match key {
            "Escape" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// Open/closed state of the menu. Inert when the page has no menu.
pub struct NavMenu<H> {
    host: Option<H>,
    open: bool,
}

impl<H: NavHost> NavMenu<H> {
    /// `host` is `None` when either the toggle or the menu is missing.
    pub fn attach(host: Option<H>) -> Self {
        if host.is_none() {
            tracing::debug!("navigation toggle or menu not found");
        }
        Self { host, open: false }
    }

    pub fn is_active(&self) -> bool {
        self.host.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_clicked(&mut self) {
        let open = !self.open;
        self.set(open);
    }

    /// Following a menu link closes the menu.
    pub fn link_clicked(&mut self) {
        self.set(false);
    }

    /// Escape closes an open menu and hands focus back to the toggle.
    pub fn key_pressed(&mut self, key: NavKey) {
        if key != NavKey::Escape || !self.open {
            return;
        }
        self.set(false);
        if let Some(host) = &self.host {
            host.focus_toggle();
        }
    }

    fn set(&mut self, open: bool) {
        let Some(host) = &self.host else {
            return;
        };
        self.open = open;
        host.set_expanded(open);
        host.set_open(open);
    }
}
