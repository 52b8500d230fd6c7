use leptos::prelude::*;

fn default_languages() -> Vec<String> {
    vec!["en".to_string(), "de".to_string()]
}

/// Row of language codes; clicking one selects it and notifies the host.
#[component]
pub fn LanguageSwitcher(
    /// Offered language codes, e.g. ["en", "de", "fr"].
    #[prop(default = default_languages())]
    languages: Vec<String>,
    /// The currently selected language.
    #[prop(optional, into)]
    selected: MaybeProp<String>,
    #[prop(optional, into)] on_language_changed: Option<Callback<String>>,
) -> impl IntoView {
    let internal = RwSignal::new(None::<String>);
    let fallback = languages.first().cloned().unwrap_or_default();
    let current = Signal::derive(move || {
        selected
            .get()
            .or_else(|| internal.get())
            .unwrap_or_else(|| fallback.clone())
    });

    view! {
        <div class="language-switcher">
            <For
                each=move || languages.clone()
                key=|language| language.clone()
                children=move |language: String| {
                    let code = language.clone();
                    let is_current = move || current.get() == code;
                    let choose = {
                        let language = language.clone();
                        move |_| {
                            internal.set(Some(language.clone()));
                            if let Some(handler) = on_language_changed {
                                handler.run(language.clone());
                            }
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=move || {
                                format!(
                                    "language{}",
                                    if is_current() { " -selected" } else { "" },
                                )
                            }
                            on:click=choose
                        >
                            {language.to_uppercase()}
                        </button>
                    }
                }
            />
        </div>
    }
}
