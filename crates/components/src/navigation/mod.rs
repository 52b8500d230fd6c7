//! The portal navigation widget.
//!
//! Renders an opinionated (but configurable) navigation pattern from a
//! remotely fetched configuration document: a meta row, the main menu row,
//! a current-items row for the active first-level item and a hamburger-
//! driven tree in the mobile breakpoint. All routing decisions are
//! delegated to the core [`Router`]; this module only maps them onto DOM
//! events and callbacks.

pub mod api;
pub mod breakpoint;
pub mod loader;

pub use api::NavigationApi;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::hamburger::HamburgerMenu;
use portal_navigation::{
    resolve_label, ConfigValue, Configuration, Destination, MenuItem, RouteIntent, Router,
    RouterOptions,
};

/// Menu ids handled specifically by the navigation, in the order they
/// appear in the hamburger tree.
pub const MENU_IDS_ORDERED: [&str; 5] = ["main", "settings", "meta", "profile", "logout"];

/// Shared handles the template helpers render from.
#[derive(Clone, Copy)]
struct NavState {
    configuration: RwSignal<Configuration>,
    router: RwSignal<Router>,
    active_dropdown: RwSignal<Option<String>>,
    language: Signal<String>,
    api: NavigationApi,
    on_route_to: Option<Callback<RouteIntent>>,
}

/// Navigation bar component.
///
/// The configuration is fetched from `src`; items route internally or
/// externally per the global flags and their own configuration. Internal
/// navigations are reported through `on_route_to` and never reach the
/// browser's native anchor handling.
#[component]
pub fn PortalNavigation(
    /// Location from where to fetch the configuration data file.
    #[prop(optional, into)]
    src: MaybeProp<String>,
    /// The current language, e.g. "en" or "de".
    #[prop(optional, into)]
    language: MaybeProp<String>,
    /// Sets the active path via the url of an item.
    #[prop(optional, into)]
    active_url: MaybeProp<String>,
    /// The current application. Items change their routing behavior based
    /// on whether their application property matches this one.
    #[prop(optional)]
    current_application: Option<String>,
    /// True if items, by default, should route internally. Items may
    /// override this default in their own configuration.
    #[prop(optional)]
    internal_routing: bool,
    /// Viewport width at which the navigation switches to the mobile tree.
    #[prop(default = 800)]
    mobile_breakpoint: u32,
    /// Badge handle shared with the host. A private one is created when the
    /// host does not need to push badge values.
    #[prop(optional)]
    api: Option<NavigationApi>,
    /// Fired once per internal navigation decision.
    #[prop(optional, into)]
    on_route_to: Option<Callback<RouteIntent>>,
    /// Fired once per successful (re)load of configuration data.
    #[prop(optional, into)]
    on_configured: Option<Callback<Configuration>>,
    /// Fired once with the initial mobile breakpoint media query state and
    /// again on every transition.
    #[prop(optional, into)]
    on_breakpoint_changed: Option<Callback<bool>>,
    /// Content of the logo slot.
    #[prop(optional, into)]
    logo: ViewFn,
) -> impl IntoView {
    let configuration = RwSignal::new(Configuration::default());
    let router = RwSignal::new(Router::new(RouterOptions {
        internal_routing,
        current_application,
    }));
    let active_dropdown = RwSignal::new(None::<String>);
    let hamburger_expanded = RwSignal::new(false);
    let api = api.unwrap_or_default();
    let language = Signal::derive(move || language.get().unwrap_or_else(|| "en".to_string()));

    let state = NavState {
        configuration,
        router,
        active_dropdown,
        language,
        api,
        on_route_to,
    };

    // Fetch (and re-fetch) the configuration whenever `src` changes. Stale
    // completions are dropped via the request guard.
    let guard = StoredValue::new(loader::RequestGuard::default());
    Effect::new(move |_| {
        let Some(src) = src.get() else {
            return;
        };
        let token = guard.try_update_value(|guard| guard.issue()).unwrap_or_default();
        leptos::task::spawn_local(async move {
            match loader::fetch_configuration(&src).await {
                Ok(data) => {
                    if !guard.with_value(|guard| guard.is_current(token)) {
                        // A newer request has been issued in the meantime.
                        return;
                    }
                    let loaded = Configuration::new(Some(data));
                    configuration.set(loaded.clone());
                    if let Some(callback) = on_configured {
                        callback.run(loaded);
                    }
                }
                Err(error) => {
                    log::warn!("failed to fetch navigation configuration from {src}: {error}");
                }
            }
        });
    });

    // The active path follows the `active_url` property, seeded from the
    // current location. A url that matches nothing keeps the previous path.
    let initial_url = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .filter(|pathname| pathname != "/");
    Effect::new(move |_| {
        let Some(url) = active_url.get().or_else(|| initial_url.clone()) else {
            return;
        };
        configuration.with(|config| {
            router.update(|router| router.set_active_url(config, &url));
        });
    });

    let is_mobile = breakpoint::observe(mobile_breakpoint, on_breakpoint_changed);

    // Dismiss any open dropdown when a click lands outside of it. The
    // dropdown toggle stops propagation, so its own clicks never get here.
    let dismiss = window_event_listener(leptos::ev::click, move |_| {
        if active_dropdown.with_untracked(Option::is_some) {
            active_dropdown.set(None);
        }
    });
    on_cleanup(move || dismiss.remove());

    view! {
        <div class=move || {
            format!(
                "portal-navigation{}",
                if is_mobile.get() { " -mobile" } else { "" },
            )
        }>
            <header class="navigation-header">
                <div class="inner">
                    <div class="slot-logo">{logo.run()}</div>
                    <div class="menu menu-meta">{move || menu_view(state, "meta")}</div>
                    <div class="menu menu-profile">{move || menu_view(state, "profile")}</div>
                    <div class="menu menu-logout">{move || menu_view(state, "logout")}</div>
                    <HamburgerMenu
                        toggled=hamburger_expanded
                        on_toggle=Callback::new(move |expanded| hamburger_expanded.set(expanded))
                    />
                </div>
            </header>
            <main class="menu-main">
                <div class="inner">
                    <div class="menu menu-main-items">
                        {move || menu_view(state, "main")}
                        {move || menu_view(state, "settings")}
                    </div>
                    {move || current_items_view(state)}
                    <Show when=move || hamburger_expanded.get()>
                        <div class="tree-container">{move || tree_view(state)}</div>
                    </Show>
                </div>
            </main>
        </div>
    }
}

/// Routes a link click through the core router and maps the outcome onto
/// the DOM event and the `on_route_to` callback.
fn handle_link(state: NavState, ev: &MouseEvent, item: &MenuItem) {
    let outcome = state
        .configuration
        .with_untracked(|config| {
            state
                .router
                .try_update(|router| router.on_link(config, item))
        })
        .unwrap_or_default();

    state.active_dropdown.set(None);

    if outcome.prevent_default {
        ev.prevent_default();
    }
    if let (Some(callback), Some(intent)) = (state.on_route_to, outcome.intent) {
        callback.run(intent);
    }
}

/// The container for one of the specifically handled menus: its items as
/// first-level citizens, or a dropdown link when the menu is configured as
/// a dropdown.
fn menu_view(state: NavState, menu_id: &str) -> AnyView {
    let Some(menu) = state.configuration.with(|config| config.menu(menu_id).cloned()) else {
        return ().into_any();
    };
    if !menu.has_children() {
        return ().into_any();
    }

    if !menu.dropdown {
        return menu
            .items
            .into_iter()
            .map(|item| first_level_item_view(state, item, false))
            .collect_view()
            .into_any();
    }

    let language = state.language.get();
    let selected = state
        .router
        .with(|router| router.active_path().contains(&menu.id));
    let open = state
        .active_dropdown
        .with(|active| active.as_deref() == Some(menu.id.as_str()));
    let badge = state.api.badge(&menu.id, None, &language);
    let label = resolve_label(&menu, &language);
    let toggled_id = menu.id.clone();

    view! {
        <span
            class=format!(
                "link dropdown-link{}",
                if selected { " selected" } else { "" },
            )
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                state
                    .active_dropdown
                    .update(|active| {
                        *active = match active {
                            Some(_) => None,
                            None => Some(toggled_id.clone()),
                        };
                    });
            }
        >
            {link_view(&label, menu.icon.as_deref(), badge.as_deref())}
        </span>
        <div class=format!(
            "dropdown{}",
            if open { " -show" } else { "" },
        )>
            {menu
                .items
                .into_iter()
                .map(|item| first_level_item_view(state, item, false))
                .collect_view()}
        </div>
    }
    .into_any()
}

/// A first-level item, with or without children. Parents link to their
/// default child, since that is where a parent click effectively routes.
fn first_level_item_view(state: NavState, item: MenuItem, tree_mode: bool) -> AnyView {
    let language = state.language.get();
    let has_children = item.has_children();
    let active = state
        .router
        .with(|router| router.active_path().contains(&item.id));
    let badge = state.api.badge(&item.id, item.url.as_deref(), &language);
    let label = resolve_label(&item, &language);

    let target_item = Router::default_item_of(&item).unwrap_or(&item);
    let href = target_item.url.clone().unwrap_or_default();
    let external = target_item.destination == Destination::Extern && !has_children;

    let children_view = (tree_mode && active && has_children).then(|| {
        let items = item.items.clone();
        view! {
            <div class="tree-items">
                {items
                    .into_iter()
                    .map(|child| second_level_item_view(state, child))
                    .collect_view()}
            </div>
        }
    });

    let click_item = item.clone();
    view! {
        <a
            href=href
            class=format!(
                "link{}{}",
                if tree_mode { " tree-parent" } else { "" },
                if active { " selected" } else { "" },
            )
            target=if external { "_blank" } else { "_self" }
            on:click=move |ev: MouseEvent| handle_link(state, &ev, &click_item)
        >
            {link_view(&label, item.icon.as_deref(), badge.as_deref())}
        </a>
        {children_view}
    }
    .into_any()
}

/// The third row: the children of the active first-level item, shown only
/// when that item has any.
fn current_items_view(state: NavState) -> AnyView {
    let active_parent = state.router.with(|router| {
        let path = router.active_path();
        Some((path.menu_id()?.to_string(), path.first_level_item_id()?.to_string()))
    });
    let Some((menu_id, parent_id)) = active_parent else {
        return ().into_any();
    };

    let menu_key = format!("menus::{menu_id}");
    let item_key = format!("items::{parent_id}");
    let items = state.configuration.with(|config| {
        config
            .get_data(&[menu_key.as_str(), item_key.as_str()])
            .and_then(ConfigValue::node)
            .filter(|parent| parent.has_children())
            .map(|parent| parent.items.clone())
    });
    let Some(items) = items else {
        return ().into_any();
    };

    view! {
        <div class="navigation-current">
            <div class="navigation-content">
                {items
                    .into_iter()
                    .map(|item| second_level_item_view(state, item))
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

/// A second-level item, either in the current-items row or nested in the
/// mobile tree.
fn second_level_item_view(state: NavState, item: MenuItem) -> AnyView {
    let language = state.language.get();
    let active = state
        .router
        .with(|router| router.active_path().contains(&item.id));
    let badge = state.api.badge(&item.id, item.url.as_deref(), &language);
    let label = resolve_label(&item, &language);
    let href = item.url.clone().unwrap_or_default();
    let external = item.destination == Destination::Extern;

    let click_item = item.clone();
    view! {
        <a
            href=href
            class=format!("link{}", if active { " selected" } else { "" })
            target=if external { "_blank" } else { "_self" }
            on:click=move |ev: MouseEvent| handle_link(state, &ev, &click_item)
        >
            {link_view(&label, item.icon.as_deref(), badge.as_deref())}
        </a>
    }
    .into_any()
}

/// The hamburger tree: every specifically handled menu's items as tree
/// parents, in the fixed menu order.
fn tree_view(state: NavState) -> AnyView {
    MENU_IDS_ORDERED
        .iter()
        .filter_map(|menu_id| {
            let menu = state
                .configuration
                .with(|config| config.menu(menu_id).cloned())?;
            menu.has_children().then(|| {
                menu.items
                    .into_iter()
                    .map(|item| first_level_item_view(state, item, true))
                    .collect_view()
                    .into_any()
            })
        })
        .collect_view()
        .into_any()
}

/// Label, icon and badge of a link. When there is an icon the badge
/// attaches to it, otherwise to the label.
fn link_view(label: &str, icon: Option<&str>, badge: Option<&str>) -> AnyView {
    let mut parts: Vec<AnyView> = Vec::new();
    if let Some(icon) = icon {
        parts.push(
            view! { <img src=icon.to_string() alt="" class="navigation-icon" /> }.into_any(),
        );
        if let Some(badge) = badge {
            parts.push(view! { <span class="badge">{badge.to_string()}</span> }.into_any());
        }
    }
    if !label.is_empty() {
        parts.push(view! { <span class="label">{label.to_string()}</span> }.into_any());
        if icon.is_none() {
            if let Some(badge) = badge {
                parts.push(view! { <span class="badge">{badge.to_string()}</span> }.into_any());
            }
        }
    }
    parts.into_any()
}
