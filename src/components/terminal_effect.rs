use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::config::SiteConfig;
use crate::dom::Interval;
use crate::models::TypingState;

/// Reveal `text` one character per `period_ms`, restarting when it changes.
fn use_typing(text: Signal<String>, period_ms: u32) -> RwSignal<TypingState> {
    let state = RwSignal::new(TypingState::new(&text.get_untracked()));

    Effect::new(move |previous: Option<()>| {
        let text = text.get();
        if previous.is_some() {
            state.update(|s| s.restart(&text));
        }
    });

    // A finished reveal leaves the signal untouched, so subscribers go quiet.
    match Interval::new(period_ms, move || state.maybe_update(TypingState::advance)) {
        Ok(ticker) => {
            let ticker = SendWrapper::new(ticker);
            on_cleanup(move || drop(ticker));
        }
        Err(err) => {
            log::warn!("Typing effect disabled: {err}");
            state.update(|s| while s.advance() {});
        }
    }

    state
}

/// Terminal line with a blinking underscore cursor.
#[component]
pub fn TerminalEffect(
    #[prop(into)] text: Signal<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let state = use_typing(text, config.typing_speed_ms);
    let cursor_on = RwSignal::new(true);

    match Interval::new(config.cursor_blink_ms, move || cursor_on.update(|on| *on = !*on)) {
        Ok(blink) => {
            let blink = SendWrapper::new(blink);
            on_cleanup(move || drop(blink));
        }
        Err(err) => log::warn!("Cursor blink disabled: {err}"),
    }

    view! {
        <span class=format!("terminal-effect {class}")>
            {move || state.with(TypingState::visible)}
            <span class="terminal-cursor" style:opacity=move || if cursor_on.get() { "1" } else { "0" }>
                "_"
            </span>
        </span>
    }
}

/// Typed text with a block cursor blinking through CSS.
#[component]
pub fn TypedText(
    #[prop(into)] text: Signal<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let state = use_typing(text, config.typing_speed_ms);

    view! {
        <span class=class>
            {move || state.with(TypingState::visible)}
            <span class="typed-cursor"></span>
        </span>
    }
}
