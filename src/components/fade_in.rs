use leptos::prelude::*;

/// Fades its children in on mount (0.3 s opacity transition in CSS).
#[component]
pub fn FadeIn(children: Children) -> impl IntoView {
    view! { <div class="fade-in">{children()}</div> }
}
