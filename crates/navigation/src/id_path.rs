use serde::{Deserialize, Serialize};

/// A sequence of ids describing a path through the menu/item structure,
/// starting from a menu id and leading through one or more item ids.
///
/// Ids of menus and items must all be unique, so a path of ids is enough to
/// identify the active selection. The structure itself is depth-agnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdPath {
    ids: Vec<String>,
}

impl IdPath {
    /// Creates a path from the given ids, dropping any `None` entries.
    /// Holes are compressed out, not kept as gaps.
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            ids: ids.into_iter().flatten().collect(),
        }
    }

    /// The id at the given level, or `None` when out of range.
    pub fn get(&self, level: usize) -> Option<&str> {
        self.ids.get(level).map(String::as_str)
    }

    /// The root level id of the path, which is the menu id.
    pub fn menu_id(&self) -> Option<&str> {
        self.get(0)
    }

    /// The first-level item id of the path.
    pub fn first_level_item_id(&self) -> Option<&str> {
        self.get(1)
    }

    /// True if the given id appears anywhere in the path.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|current| current == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// A new path consisting of this path's ids with the given ids appended
    /// at the end. `None` entries are dropped; `self` is left untouched.
    pub fn concat<I>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut extended = self.ids.clone();
        extended.extend(ids.into_iter().flatten());
        Self { ids: extended }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> IdPath {
        IdPath::new(ids.iter().map(|id| Some((*id).to_string())))
    }

    #[test]
    fn empty_path_answers_none_for_all_queries() {
        let id_path = IdPath::default();

        assert!(id_path.is_empty());
        assert_eq!(id_path.len(), 0);
        assert_eq!(id_path.menu_id(), None);
        assert_eq!(id_path.first_level_item_id(), None);
        assert_eq!(id_path.get(2), None);
    }

    #[test]
    fn missing_ids_are_filtered_during_construction() {
        let id_path = IdPath::new([Some("menu".to_string()), Some("parent".to_string()), None]);

        assert_eq!(id_path.len(), 2);
        assert_eq!(id_path.menu_id(), Some("menu"));
        assert_eq!(id_path.first_level_item_id(), Some("parent"));
        assert_eq!(id_path.get(2), None);
    }

    #[test]
    fn holes_are_compressed_not_kept() {
        let id_path = IdPath::new([Some("a".to_string()), None, Some("b".to_string())]);

        assert!(!id_path.is_empty());
        assert_eq!(id_path.get(1), Some("b"));
    }

    #[test]
    fn get_returns_id_of_proper_level() {
        let id_path = path(&["menu", "parent", "item"]);

        assert_eq!(id_path.menu_id(), Some("menu"));
        assert_eq!(id_path.first_level_item_id(), Some("parent"));
        assert_eq!(id_path.get(2), Some("item"));
        assert_eq!(id_path.get(3), None);
    }

    #[test]
    fn contains_finds_every_stored_id() {
        let id_path = path(&["menu", "parent", "item"]);

        assert!(id_path.contains("menu"));
        assert!(id_path.contains("parent"));
        assert!(id_path.contains("item"));
        assert!(!id_path.contains("other"));
    }

    #[test]
    fn concat_returns_new_path_and_filters_none() {
        let id_path = path(&["menu"]);
        let extended = id_path.concat([Some("parent".to_string()), None]);

        assert_eq!(id_path.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.first_level_item_id(), Some("parent"));
    }
}
