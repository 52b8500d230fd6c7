use leptos::prelude::*;
use portal_navigation::events::SetBadgeValueDetail;
use portal_navigation::{Label, RouteIntent};

use crate::card::PortalCard;
use crate::language_switcher::LanguageSwitcher;
use crate::navigation::{NavigationApi, PortalNavigation};

/// Demo shell wiring the widgets together the way a host portal would.
#[component]
pub fn App() -> impl IntoView {
    let language = RwSignal::new("en".to_string());
    let last_route = RwSignal::new(None::<String>);

    let api = NavigationApi::new();
    api.set_badge_value(SetBadgeValueDetail {
        id: Some("parent2".to_string()),
        url: None,
        value: Label::from("9"),
    });

    let on_route_to = Callback::new(move |intent: RouteIntent| {
        if let Some(url) = intent.url {
            log::info!("routing to {url}");
            last_route.set(Some(url));
        }
    });

    view! {
        <PortalNavigation
            src="/data/configuration.json"
            language=language
            current_application="app1".to_string()
            internal_routing=true
            api=api
            on_route_to=on_route_to
            logo=|| view! { <span class="demo-logo">"Portal"</span> }.into_any()
        />
        <main class="demo-content">
            <LanguageSwitcher
                selected=language
                on_language_changed=Callback::new(move |code| language.set(code))
            />
            <p class="demo-route">
                {move || {
                    last_route
                        .get()
                        .map(|url| format!("last internal route: {url}"))
                        .unwrap_or_else(|| "no internal route yet".to_string())
                }}
            </p>
            <PortalCard back=|| view! { <p>"Back side"</p> }.into_any()>
                <p>"Front side"</p>
            </PortalCard>
        </main>
    }
}
