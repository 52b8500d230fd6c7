use serde::{Deserialize, Serialize};

use crate::config::{Configuration, Destination, Label, MenuItem};
use crate::id_path::IdPath;

/// Global routing flags consulted for every click.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterOptions {
    /// True if items, by default, should route internally. Items may
    /// override this in their own configuration.
    pub internal_routing: bool,
    /// The current application. Items change their routing behavior based
    /// on whether their application property matches this one.
    pub current_application: Option<String>,
}

/// Routing intent emitted for an internal navigation, carrying the target
/// url and the raw (not language-resolved) label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl RouteIntent {
    fn for_item(item: &MenuItem) -> Self {
        Self {
            url: item.url.clone(),
            label: item.label.clone(),
        }
    }
}

/// Outcome of a click on a menu or item link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkOutcome {
    /// True when native anchor navigation must be suppressed.
    pub prevent_default: bool,
    /// Present exactly once per internal navigation decision, never for
    /// external ones.
    pub intent: Option<RouteIntent>,
}

/// Decides, per click, whether a link routes internally (suppress native
/// navigation and emit a routing intent) or externally (let the browser
/// navigate), and tracks the active selection path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Router {
    options: RouterOptions,
    active_path: IdPath,
}

impl Router {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            options,
            active_path: IdPath::default(),
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn active_path(&self) -> &IdPath {
        &self.active_path
    }

    pub fn set_active_path(&mut self, path: IdPath) {
        self.active_path = path;
    }

    /// The default child of a node: the child whose id matches the node's
    /// `defaultItem`, or the first child when none matches. `None` only for
    /// nodes without children; menus without an explicit default still
    /// resolve deterministically.
    pub fn default_item_of<'a>(node: &'a MenuItem) -> Option<&'a MenuItem> {
        if !node.has_children() {
            return None;
        }
        node.items
            .iter()
            .find(|child| Some(child.id.as_str()) == node.default_item.as_deref())
            .or_else(|| node.items.first())
    }

    /// Whether a click on the given node is routed internally.
    ///
    /// Nodes with children are judged by their resolved default item, since
    /// that is the effective destination of the click. The per-item
    /// `internalRouting` flag overrides the global default; application
    /// scoping applies only when a current application is configured.
    pub fn is_internal_routing(&self, item: &MenuItem) -> bool {
        let Some(target) = Self::effective_target(item) else {
            return false;
        };

        if !target.internal_routing.unwrap_or(self.options.internal_routing) {
            return false;
        }

        let Some(current) = self.options.current_application.as_deref() else {
            // No current application configured, application scoping is moot.
            return true;
        };

        if let Some(application) = target.application.as_deref() {
            return application == current;
        }
        if let Some(applications) = &target.internal_routing_applications {
            return applications.iter().any(|application| application == current);
        }
        false
    }

    fn effective_target(item: &MenuItem) -> Option<&MenuItem> {
        if item.has_children() {
            Self::default_item_of(item)
        } else {
            Some(item)
        }
    }

    /// Handles a click on the link of the given node.
    ///
    /// Leaf items route internally (suppress native navigation, update the
    /// active path, produce an intent) or fall through to the browser
    /// untouched. Parent nodes always update the active path; native
    /// navigation is suppressed when the click is internal or when the
    /// default child is external, since the parent's own href is synthesized
    /// from the default child and must not be followed in that case.
    pub fn on_link(&mut self, configuration: &Configuration, item: &MenuItem) -> LinkOutcome {
        let internal = self.is_internal_routing(item);

        if !item.has_children() {
            if !internal {
                // Native anchor behavior takes over.
                return LinkOutcome::default();
            }
            let intent = self.select(configuration, &item.id, true);
            return LinkOutcome {
                prevent_default: true,
                intent,
            };
        }

        let default_is_extern = Self::default_item_of(item)
            .is_some_and(|child| child.destination == Destination::Extern);
        let intent = self.select(configuration, &item.id, internal);
        LinkOutcome {
            prevent_default: internal || default_is_extern,
            intent,
        }
    }

    /// Re-resolves the active path whenever the externally tracked url
    /// changes. On a miss the previous path is kept: a transient miss must
    /// not clear a valid selection.
    pub fn set_active_url(&mut self, configuration: &Configuration, url: &str) {
        if let Some(path) = configuration.id_path_for_url(url) {
            self.active_path = path;
        }
    }

    /// Updates the active path for a selection and produces the routing
    /// intent when the navigation is handled internally. Parents resolve to
    /// their default child; an external default keeps the path at the parent
    /// and never dispatches.
    fn select(
        &mut self,
        configuration: &Configuration,
        item_id: &str,
        internal: bool,
    ) -> Option<RouteIntent> {
        let object_path = configuration.object_path_for_selection(|node| node.id == item_id);

        let Some(item) = object_path.last_item() else {
            // A bare menu (or no match at all) has nothing to dispatch.
            self.active_path = object_path.to_id_path();
            return None;
        };

        if !item.has_children() {
            self.active_path = object_path.to_id_path();
            return internal.then(|| RouteIntent::for_item(item));
        }

        let default = Self::default_item_of(item);
        let follow = default.is_some_and(|child| child.destination != Destination::Extern);
        let appended = follow.then(|| default.map(|child| child.id.clone())).flatten();
        self.active_path = object_path.to_id_path().concat([appended]);

        if follow && internal {
            default.map(RouteIntent::for_item)
        } else {
            None
        }
    }
}
