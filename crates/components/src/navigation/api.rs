use leptos::prelude::*;
use portal_navigation::events::SetBadgeValueDetail;
use portal_navigation::BadgeStore;

/// Host-facing handle into a [`PortalNavigation`](super::PortalNavigation)
/// instance, currently carrying the badge overlay.
///
/// The host creates the handle, passes it to the component and pushes badge
/// updates through it; the component reads the values reactively. This is
/// the explicit subscription surface that replaces ambient document-level
/// event listeners: the handle lives exactly as long as the host keeps it.
#[derive(Clone, Copy)]
pub struct NavigationApi {
    badges: RwSignal<BadgeStore>,
}

impl NavigationApi {
    pub fn new() -> Self {
        Self {
            badges: RwSignal::new(BadgeStore::new()),
        }
    }

    /// Stores a badge value under the detail's id (or url when no id is
    /// given), replacing any previous value.
    pub fn set_badge_value(&self, detail: SetBadgeValueDetail) {
        let Some(key) = detail.key().map(str::to_string) else {
            return;
        };
        self.badges.update(|store| store.set(key, detail.value));
    }

    /// The language-resolved badge value for an item: its id is checked
    /// first, its url only on a miss.
    pub fn badge(&self, id: &str, url: Option<&str>, language: &str) -> Option<String> {
        self.badges.with(|store| store.resolve(id, url, language))
    }
}

impl Default for NavigationApi {
    fn default() -> Self {
        Self::new()
    }
}
