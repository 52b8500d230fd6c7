use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Two-sided card that flips between its front (the children) and its back
/// face. Flipping happens on click unless disabled via `flip_on_click`, in
/// which case the host drives the `flipped` prop itself.
#[component]
pub fn PortalCard(
    /// Content of the back face.
    #[prop(optional, into)]
    back: ViewFn,
    /// Externally controlled flip state.
    #[prop(optional, into)]
    flipped: MaybeProp<bool>,
    /// Whether a click anywhere on the card flips it.
    #[prop(default = true)]
    flip_on_click: bool,
    #[prop(optional, into)] on_flip: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    let internal = RwSignal::new(false);
    let state = Signal::derive(move || flipped.get().unwrap_or_else(|| internal.get()));

    let flip = move |_: MouseEvent| {
        if !flip_on_click {
            return;
        }
        let next = !state.get_untracked();
        internal.set(next);
        if let Some(handler) = on_flip {
            handler.run(next);
        }
    };

    view! {
        <div
            class=move || {
                format!(
                    "portal-card{}",
                    if state.get() { " -flipped" } else { "" },
                )
            }
            on:click=flip
        >
            <div class="card-inner">
                <div class="card-front">{children()}</div>
                <div class="card-back">{back.run()}</div>
            </div>
        </div>
    }
}
