use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id_path::IdPath;
use crate::object_path::ObjectPath;

/// A label is either a plain display string or a map from language code to
/// display string, e.g. `{ "en": "Back", "de": "Zurück" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Localized(BTreeMap<String, String>),
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Link target of an item. Anything other than `"extern"` is treated as an
/// in-app destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    Intern,
    Extern,
}

impl<'de> Deserialize<'de> for Destination {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(if value == "extern" {
            Self::Extern
        } else {
            Self::Intern
        })
    }
}

/// A node in the navigation tree. Menus and items share the same shape; a
/// "menu" is simply a node at depth 0 and an "item" any node below it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    /// Unique across the whole tree. Nodes arriving without an id get one
    /// assigned during [`Configuration`] construction.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Marks the item as externally destined regardless of routing flags.
    pub destination: Destination,
    /// The application namespace this node belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    /// Allow-list of applications for which internal routing applies when
    /// `application` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_routing_applications: Option<Vec<String>>,
    /// Per-item override of the global internal-routing flag. `None` means
    /// the global default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_routing: Option<bool>,
    /// Id of the child to route to when this node itself is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_item: Option<String>,
    /// Ordered child items. Insertion order is significant: the first
    /// element is the fallback default.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItem>,
    /// Marks a top-level menu as dropdown-activated rather than always
    /// visible.
    pub dropdown: bool,
}

impl MenuItem {
    /// The single child-existence predicate shared by the routing engine and
    /// default-item resolution.
    pub fn has_children(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Raw configuration document as fetched from a remote source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationData {
    #[serde(default)]
    pub menus: Vec<MenuItem>,
}

/// Result of a key-path lookup: either a list of nodes (a `menus`/`items`
/// property) or a single node selected by id.
#[derive(Debug, Clone, Copy)]
pub enum ConfigValue<'a> {
    Nodes(&'a [MenuItem]),
    Node(&'a MenuItem),
}

impl<'a> ConfigValue<'a> {
    pub fn node(self) -> Option<&'a MenuItem> {
        match self {
            Self::Node(node) => Some(node),
            Self::Nodes(_) => None,
        }
    }

    pub fn nodes(self) -> Option<&'a [MenuItem]> {
        match self {
            Self::Nodes(nodes) => Some(nodes),
            Self::Node(_) => None,
        }
    }
}

/// Wraps the hierarchical menu/item configuration of a portal navigation.
///
/// Construction sanitizes the received data by generating missing ids; after
/// that the tree is never mutated again. All lookups are total over partial
/// data: malformed keys, missing properties and unmatched ids yield `None`
/// or empty results, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    menus: Vec<MenuItem>,
}

impl Configuration {
    /// Builds a configuration from raw data, assigning an id of the form
    /// `"(<n>)"` to every node that lacks one. Ids are assigned in pre-order
    /// from a single shared counter, so nodes with explicit ids keep them,
    /// generated ids never collide, and identical input yields identical ids.
    pub fn new(data: Option<ConfigurationData>) -> Self {
        let mut menus = data.map(|data| data.menus).unwrap_or_default();
        let mut counter = 0usize;
        for menu in &mut menus {
            Self::generate_unique_ids(menu, &mut counter);
        }
        Self { menus }
    }

    /// Parses a configuration document from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: ConfigurationData = serde_json::from_str(json)?;
        Ok(Self::new(Some(data)))
    }

    fn generate_unique_ids(node: &mut MenuItem, counter: &mut usize) {
        if node.id.is_empty() {
            node.id = format!("({counter})");
            *counter += 1;
        }
        for item in &mut node.items {
            Self::generate_unique_ids(item, counter);
        }
    }

    /// All top-level menus.
    pub fn menus(&self) -> &[MenuItem] {
        &self.menus
    }

    /// The top-level menu with the given id.
    pub fn menu(&self, menu_id: &str) -> Option<&MenuItem> {
        self.menus.iter().find(|menu| menu.id == menu_id)
    }

    /// Resolves a key path against the configuration tree. Each key is
    /// either a property name (`"menus"` at the root, `"items"` below)
    /// selecting a node list, or `"<property>::<id>"` selecting the element
    /// of that list with a matching id, e.g.
    /// `["menus::menu2", "items::item2.1"]`.
    pub fn get_data(&self, key_path: &[&str]) -> Option<ConfigValue<'_>> {
        let (first, rest) = key_path.split_first()?;
        let mut value = Self::select(&self.menus, "menus", first)?;
        for key in rest {
            let nodes = &value.node()?.items;
            value = Self::select(nodes, "items", key)?;
        }
        Some(value)
    }

    fn select<'a>(nodes: &'a [MenuItem], property: &str, key: &str) -> Option<ConfigValue<'a>> {
        match key.split_once("::") {
            None => (key == property).then_some(ConfigValue::Nodes(nodes)),
            Some((prefix, id)) if prefix == property && !id.contains("::") => {
                nodes.iter().find(|node| node.id == id).map(ConfigValue::Node)
            }
            Some(_) => None,
        }
    }

    /// The id path to the first node (in pre-order) whose url matches the
    /// given url. On a miss the url is reduced segment by segment at its
    /// trailing `/` until a match is found, so deep sub-paths resolve to
    /// their nearest configured ancestor.
    pub fn id_path_for_url(&self, url: &str) -> Option<IdPath> {
        if url.is_empty() {
            return None;
        }

        let path = self.object_path_for_selection(|node| node.url.as_deref() == Some(url));
        if !path.is_empty() {
            return Some(path.to_id_path());
        }

        match url.rfind('/') {
            Some(index) if index > 0 => self.id_path_for_url(&url[..index]),
            _ => None,
        }
    }

    /// The path from a menu root down to the first node (depth-first,
    /// pre-order) matched by the selector. Empty when nothing matches.
    pub fn object_path_for_selection<F>(&self, selector: F) -> ObjectPath<'_>
    where
        F: Fn(&MenuItem) -> bool,
    {
        let mut trail = Vec::new();
        for menu in &self.menus {
            if Self::search(menu, &selector, &mut trail) {
                return ObjectPath::from_nodes(trail);
            }
        }
        ObjectPath::default()
    }

    fn search<'a, F>(node: &'a MenuItem, selector: &F, trail: &mut Vec<&'a MenuItem>) -> bool
    where
        F: Fn(&MenuItem) -> bool,
    {
        trail.push(node);
        if selector(node) {
            return true;
        }
        for item in &node.items {
            if Self::search(item, selector, trail) {
                return true;
            }
        }
        trail.pop();
        false
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Configuration;

    /// Mirrors the navigation test data of the original component suite:
    /// `menu1` with a plain item and a parent with an explicit default,
    /// `menu2` with application-scoped children, `menu3` as a dropdown whose
    /// default child is external.
    pub(crate) const TEST_DATA: &str = r#"{
      "menus": [
        {
          "id": "menu1",
          "label": { "en": "Menu1_en", "de": "Menu1_de" },
          "items": [
            {
              "id": "parent1",
              "label": { "en": "Parent1_en", "de": "Parent1_de" },
              "url": "/some/path/parent1",
              "application": "app1",
              "internalRouting": true
            },
            {
              "id": "parent2",
              "label": { "en": "Parent2_en", "de": "Parent2_de" },
              "url": "/some/path/parent2",
              "defaultItem": "item2.2",
              "items": [
                {
                  "id": "item2.1",
                  "label": { "en": "Item 2.1_en", "de": "Item 2.1_de" },
                  "url": "/some/path/item2.1",
                  "application": "app1",
                  "internalRouting": true
                },
                {
                  "id": "item2.2",
                  "label": { "en": "Item 2.2_en", "de": "Item 2.2_de" },
                  "url": "/some/path/item2.2",
                  "application": "app1",
                  "internalRouting": true
                }
              ]
            }
          ]
        },
        {
          "id": "menu2",
          "label": { "en": "Menu2_en", "de": "Menu2_de" },
          "items": [
            {
              "id": "parent3",
              "label": { "en": "Parent3_en", "de": "Parent3_de" },
              "url": "/some/path/parent3",
              "items": [
                {
                  "id": "item3.1",
                  "label": { "en": "Item 3.1_en", "de": "Item 3.1_de" },
                  "url": "/some/path/item3.1",
                  "application": "app2",
                  "internalRouting": true
                },
                {
                  "id": "item3.2",
                  "label": { "en": "Item 3.2_en", "de": "Item 3.2_de" },
                  "url": "/some/path/item3.2",
                  "internalRouting": false
                }
              ]
            }
          ]
        },
        {
          "id": "menu3",
          "label": "Menu3",
          "dropdown": true,
          "items": [
            {
              "id": "parent5",
              "label": "Parent5",
              "items": [
                {
                  "id": "item5.1",
                  "label": "Item 5.1",
                  "url": "https://example.org/external",
                  "destination": "extern"
                },
                {
                  "id": "item5.2",
                  "label": "Item 5.2",
                  "url": "/some/path/item5.2"
                }
              ]
            }
          ]
        }
      ]
    }"#;

    pub(crate) fn configuration() -> Configuration {
        Configuration::from_json(TEST_DATA).expect("test data parses")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{configuration, TEST_DATA};
    use super::*;

    #[test]
    fn menu_returns_top_level_menu() {
        let configuration = configuration();

        let menu = configuration.menu("menu1").expect("menu1 exists");
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].id, "parent1");
        assert_eq!(menu.items[1].id, "parent2");
        assert!(configuration.menu("unknown").is_none());
    }

    #[test]
    fn missing_ids_are_generated_in_pre_order() {
        let configuration = Configuration::from_json(
            r#"{"menus": [
                {"items": [{"id": "explicit"}, {}]},
                {"id": "menu2", "items": [{}]}
            ]}"#,
        )
        .unwrap();

        let menus = configuration.menus();
        assert_eq!(menus[0].id, "(0)");
        assert_eq!(menus[0].items[0].id, "explicit");
        assert_eq!(menus[0].items[1].id, "(1)");
        assert_eq!(menus[1].id, "menu2");
        assert_eq!(menus[1].items[0].id, "(2)");
    }

    #[test]
    fn generated_ids_are_unique_and_stable() {
        let first = Configuration::from_json(TEST_DATA).unwrap();
        let second = Configuration::from_json(TEST_DATA).unwrap();

        let mut ids = Vec::new();
        fn collect(node: &MenuItem, ids: &mut Vec<String>) {
            ids.push(node.id.clone());
            for item in &node.items {
                collect(item, ids);
            }
        }
        for menu in first.menus() {
            collect(menu, &mut ids);
        }

        assert!(ids.iter().all(|id| !id.is_empty()));
        let mut deduplicated = ids.clone();
        deduplicated.sort();
        deduplicated.dedup();
        assert_eq!(deduplicated.len(), ids.len());

        // Re-running on identical input yields identical ids.
        assert_eq!(first, second);
    }

    #[test]
    fn empty_data_yields_empty_configuration() {
        let configuration = Configuration::new(None);

        assert!(configuration.menus().is_empty());
        assert!(configuration.menu("menu1").is_none());
        assert!(configuration.get_data(&["menus::menu1"]).is_none());
    }

    #[test]
    fn get_data_resolves_nested_nodes_by_key_path() {
        let configuration = configuration();

        let item = configuration
            .get_data(&["menus::menu2", "items::parent3", "items::item3.2"])
            .and_then(ConfigValue::node)
            .expect("item3.2 exists");
        assert_eq!(item.url.as_deref(), Some("/some/path/item3.2"));

        let items = configuration
            .get_data(&["menus::menu1", "items"])
            .and_then(ConfigValue::nodes)
            .expect("items of menu1");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn get_data_tolerates_malformed_paths() {
        let configuration = configuration();

        assert!(configuration.get_data(&[]).is_none());
        assert!(configuration.get_data(&["unknown"]).is_none());
        assert!(configuration.get_data(&["menus::nope"]).is_none());
        assert!(configuration.get_data(&["menus::menu1", "wrong::parent2"]).is_none());
        assert!(configuration.get_data(&["menus::menu1", "items::a::b"]).is_none());
        // A node list cannot be descended into without an id selection.
        assert!(configuration.get_data(&["menus", "items::parent2"]).is_none());
    }

    #[test]
    fn id_path_for_url_matches_exact_url() {
        let configuration = configuration();

        let path = configuration.id_path_for_url("/some/path/item2.2").expect("match");
        assert_eq!(path.menu_id(), Some("menu1"));
        assert_eq!(path.first_level_item_id(), Some("parent2"));
        assert_eq!(path.get(2), Some("item2.2"));
    }

    #[test]
    fn id_path_for_url_truncates_trailing_slash() {
        let configuration = configuration();

        let path = configuration.id_path_for_url("/some/path/item2.2/").expect("match");
        assert_eq!(path.get(2), Some("item2.2"));
    }

    #[test]
    fn id_path_for_url_resolves_sub_paths_to_nearest_ancestor() {
        let configuration = configuration();

        let direct = configuration.id_path_for_url("/some/path/item2.2").unwrap();
        let nested = configuration
            .id_path_for_url("/some/path/item2.2/unknown-subitem")
            .unwrap();
        assert_eq!(direct, nested);
    }

    #[test]
    fn id_path_for_url_misses_cleanly() {
        let configuration = configuration();

        assert!(configuration.id_path_for_url("/completely/unknown").is_none());
        assert!(configuration.id_path_for_url("").is_none());
    }

    #[test]
    fn object_path_for_selection_returns_first_pre_order_match() {
        let configuration = configuration();

        let path = configuration.object_path_for_selection(|node| node.id == "item2.2");
        assert_eq!(path.len(), 3);
        assert_eq!(path.object(0).map(|n| n.id.as_str()), Some("menu1"));
        assert_eq!(path.object(1).map(|n| n.id.as_str()), Some("parent2"));
        assert_eq!(path.last_item().map(|n| n.id.as_str()), Some("item2.2"));
    }

    #[test]
    fn object_path_for_selection_of_menu_has_no_last_item() {
        let configuration = configuration();

        let path = configuration.object_path_for_selection(|node| node.id == "menu1");
        assert_eq!(path.len(), 1);
        assert!(path.last_item().is_none());
    }

    #[test]
    fn object_path_for_selection_without_match_is_empty() {
        let configuration = configuration();

        let path = configuration.object_path_for_selection(|node| node.id == "nope");
        assert!(path.is_empty());
        assert!(path.to_id_path().is_empty());
    }

    #[test]
    fn destination_defaults_to_intern_and_parses_extern() {
        let configuration = configuration();

        let external = configuration
            .get_data(&["menus::menu3", "items::parent5", "items::item5.1"])
            .and_then(ConfigValue::node)
            .unwrap();
        assert_eq!(external.destination, Destination::Extern);

        let internal = configuration
            .get_data(&["menus::menu3", "items::parent5", "items::item5.2"])
            .and_then(ConfigValue::node)
            .unwrap();
        assert_eq!(internal.destination, Destination::Intern);
    }
}
