use std::collections::HashMap;

use crate::config::Label;
use crate::label::resolve_label;

/// Ephemeral overlay of badge values keyed by menu/item id or url.
///
/// Badge values decorate rendered links but are not part of the
/// configuration; the store is keyed independently of the configuration's id
/// space and is never persisted. Lookup order is fixed: the id is checked
/// first, the url only when the id produced no hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BadgeStore {
    values: HashMap<String, Label>,
}

impl BadgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the badge value for a key (menu id, item id or url), replacing
    /// any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Label) {
        self.values.insert(key.into(), value);
    }

    /// The raw badge value for the given id, or for the url when the id has
    /// none.
    pub fn get(&self, id: &str, url: Option<&str>) -> Option<&Label> {
        self.values
            .get(id)
            .or_else(|| url.and_then(|url| self.values.get(url)))
    }

    /// The language-resolved badge value, or `None` when no badge exists.
    pub fn resolve(&self, id: &str, url: Option<&str>, language: &str) -> Option<String> {
        self.get(id, url).map(|label| resolve_label(label, language))
    }
}
