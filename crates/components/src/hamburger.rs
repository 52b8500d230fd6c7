use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Hamburger toggle button, three bars morphing into a cross when toggled.
///
/// The component keeps its own toggle state unless the `toggled` prop is
/// provided, in which case the prop wins and the host is expected to update
/// it from `on_toggle`.
#[component]
pub fn HamburgerMenu(
    #[prop(optional, into)] toggled: MaybeProp<bool>,
    #[prop(optional, into)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let internal = RwSignal::new(false);
    let state = Signal::derive(move || toggled.get().unwrap_or_else(|| internal.get()));

    let toggle = move |ev: MouseEvent| {
        ev.prevent_default();
        let next = !state.get_untracked();
        internal.set(next);
        if let Some(handler) = on_toggle {
            handler.run(next);
        }
    };

    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "hamburger-menu{}",
                    if state.get() { " -toggled" } else { "" },
                )
            }
            aria-expanded=move || state.get().to_string()
            on:click=toggle
        >
            <span class="bar"></span>
            <span class="bar"></span>
            <span class="bar"></span>
        </button>
    }
}
