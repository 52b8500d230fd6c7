use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Reactive mobile-breakpoint flag backed by a `matchMedia` query.
///
/// The signal carries the current match state; `on_change` fires once with
/// the initial state and again on every transition. The change listener is
/// removed when the owning scope is disposed.
pub fn observe(breakpoint_px: u32, on_change: Option<Callback<bool>>) -> RwSignal<bool> {
    let matches = RwSignal::new(false);

    let Some(window) = web_sys::window() else {
        return matches;
    };
    let query = format!("screen and (max-width: {breakpoint_px}px)");
    let Ok(Some(media_query)) = window.match_media(&query) else {
        return matches;
    };

    matches.set(media_query.matches());
    if let Some(callback) = on_change {
        callback.run(media_query.matches());
    }

    let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            matches.set(event.matches());
            if let Some(callback) = on_change {
                callback.run(event.matches());
            }
        },
    );
    let _ = media_query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());

    // The browser handles are !Send; cleanup registration wants Send + Sync,
    // so they cross into the closure wrapped. Single-threaded wasm never
    // observes the wrapper from another thread.
    let handles = SendWrapper::new((media_query, listener));
    on_cleanup(move || {
        let (media_query, listener) = handles.take();
        let _ = media_query
            .remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
        drop(listener);
    });

    matches
}
