use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        matches!(self, MobileMenu::Open)
    }

    /// Menu button. Closing this way never navigates.
    pub fn toggle(&mut self) {
        *self = match self {
            MobileMenu::Closed => MobileMenu::Open,
            MobileMenu::Open => MobileMenu::Closed,
        };
        debug!("mobile menu {:?}", self);
    }

    /// A link inside the menu was chosen.
    pub fn choose_link(&mut self) {
        if self.is_open() {
            debug!("mobile menu closed by link");
        }
        *self = MobileMenu::Closed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Translucent,
    Opaque,
}

impl NavStyle {
    pub fn from_threshold(past_threshold: bool) -> Self {
        if past_threshold {
            NavStyle::Opaque
        } else {
            NavStyle::Translucent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavStyle::Translucent => "bg-black/40 backdrop-blur-sm border-b border-white/5",
            NavStyle::Opaque => "bg-black/95 backdrop-blur-md border-b border-white/10",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavStyle::Translucent => "none",
            NavStyle::Opaque => "0 1px 3px rgba(0,0,0,0.1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_toggle_and_links() {
        let mut menu = MobileMenu::default();

        menu.toggle();
        assert!(menu.is_open());

        menu.choose_link();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert_eq!(menu, MobileMenu::Closed);

        menu.choose_link();
        assert_eq!(menu, MobileMenu::Closed);
    }

    #[test]
    fn nav_style() {
        assert_eq!(NavStyle::from_threshold(false), NavStyle::Translucent);
        assert_eq!(NavStyle::from_threshold(true), NavStyle::Opaque);
        assert_eq!(NavStyle::Translucent.box_shadow(), "none");
        assert!(NavStyle::Opaque.class().contains("bg-black/95"));
    }
}
