use leptos::*;

use super::merge_classes;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=merge_classes("rounded-xl border bg-card text-card-foreground shadow", &class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=merge_classes("flex flex-col space-y-1.5 p-6", &class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <h3 class=merge_classes("font-semibold leading-none tracking-tight", &class)>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=merge_classes("p-6 pt-0", &class)>
            {children()}
        </div>
    }
}
