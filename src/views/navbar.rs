use super::preferences::{PreferenceStore, Theme, THEME_KEY};
use super::sections::Link;
use serde::Serialize;

/// Scroll offset in pixels past which the bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub const NAV_ITEMS: [Link; 8] = [
    Link { label: "Home", href: "#home" },
    Link { label: "About", href: "#about" },
    Link { label: "Objectives", href: "#objectives" },
    Link { label: "Governance", href: "#governance" },
    Link { label: "Programs", href: "#programs" },
    Link { label: "Finance", href: "#finance" },
    Link { label: "Get Involved", href: "#involved" },
    Link { label: "Contact", href: "#contact" },
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavbarState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub theme: Theme,
}

impl NavbarState {
    pub fn load(store: &dyn PreferenceStore, prefers_dark: bool) -> Self {
        NavbarState {
            scrolled: false,
            mobile_menu_open: false,
            theme: Theme::resolve(store.get(THEME_KEY).as_deref(), prefers_dark),
        }
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, self.theme.as_str());
        self.theme
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Jump to a section; the mobile menu closes behind it.
    pub fn navigate<'a>(&mut self, href: &'a str) -> &'a str {
        self.mobile_menu_open = false;
        href
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::MemoryPreferences;

    #[test]
    fn scrolled_only_past_threshold() {
        let mut nav = NavbarState::load(&MemoryPreferences::new(), false);
        nav.on_scroll(20.0);
        assert!(!nav.scrolled);
        nav.on_scroll(21.0);
        assert!(nav.scrolled);
        nav.on_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn toggle_persists_theme() {
        let mut store = MemoryPreferences::new();
        let mut nav = NavbarState::load(&store, false);
        assert_eq!(nav.theme, Theme::Light);
        assert_eq!(nav.toggle_theme(&mut store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(NavbarState::load(&store, false).theme, Theme::Dark);
        nav.toggle_theme(&mut store);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn navigation_closes_mobile_menu() {
        let mut nav = NavbarState::load(&MemoryPreferences::new(), true);
        assert_eq!(nav.theme, Theme::Dark);
        nav.toggle_mobile_menu();
        assert!(nav.mobile_menu_open);
        assert_eq!(nav.navigate("#programs"), "#programs");
        assert!(!nav.mobile_menu_open);
    }
}
