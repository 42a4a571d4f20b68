use leptos::*;

use super::merge_classes;

const INPUT_BASE: &str = "flex w-full rounded-md border border-input bg-transparent px-3 py-1 \
    text-sm shadow-sm transition-colors placeholder:text-muted-foreground \
    focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
    disabled:cursor-not-allowed disabled:opacity-50";

/// Controlled text input: shows `value` and reports every edit.
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class=merge_classes(INPUT_BASE, &class)
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}
