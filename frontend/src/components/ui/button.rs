use leptos::ev::MouseEvent;
use leptos::*;

use super::merge_classes;

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium \
    transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
    disabled:pointer-events-none disabled:opacity-50 bg-primary text-primary-foreground shadow \
    hover:bg-primary/90 h-9 px-4 py-2";

#[component]
pub fn Button(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_classes(BUTTON_BASE, &class)
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = &on_click {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
