use leptos::prelude::*;

use crate::models::{PastEvent, Sponsor};

/// Past events shown before the first "Load More".
pub const INITIAL_VISIBLE: usize = 2;
/// Past events added by each "Load More".
pub const LOAD_STEP: usize = 2;

/// Visible count after one "Load More", capped at `total`.
pub fn load_more(visible: usize, total: usize) -> usize {
    (visible + LOAD_STEP).min(total)
}

#[component]
fn PastEventCard(event: PastEvent) -> impl IntoView {
    let stats = event
        .stats
        .entries()
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="stat">
                    <span class="stat-value">{value}</span>
                    <span class="stat-label">{label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <article class="past-event-card">
            <img class="event-image" src=event.image alt=event.title.clone() loading="lazy" />
            <div class="event-body">
                <span class="event-date">{event.date}</span>
                <h3 class="event-title">{event.title}</h3>
                <p class="event-description">{event.description}</p>
                <div class="event-stats">{stats}</div>
            </div>
        </article>
    }
}

/// Past events, revealed two at a time.
#[component]
pub fn PastEvents(events: Vec<PastEvent>) -> impl IntoView {
    let total = events.len();
    let events = StoredValue::new(events);
    let visible = RwSignal::new(INITIAL_VISIBLE.min(total));

    view! {
        <section class="section past-events-section">
            <h2 class="section-heading">"02_PAST_EVENTS"</h2>
            <div class="card-grid">
                {move || {
                    events
                        .with_value(|events| events.iter().take(visible.get()).cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|event| view! { <PastEventCard event=event /> })
                        .collect_view()
                }}
            </div>
            <Show when=move || { visible.get() < total }>
                <div class="section-footer">
                    <button
                        class="button button-outline"
                        on:click=move |_| visible.update(|v| *v = load_more(*v, total))
                    >
                        "Load More Events"
                    </button>
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn Sponsors(sponsors: Vec<Sponsor>) -> impl IntoView {
    let cards = sponsors
        .into_iter()
        .map(|sponsor| {
            view! {
                <div class="sponsor-card">
                    <div class="sponsor-logo">
                        <img src=sponsor.logo alt=sponsor.name.clone() />
                    </div>
                    <h3 class="sponsor-name">{sponsor.name}</h3>
                    <span class=format!("sponsor-tier {}", sponsor.tier.css_class())>
                        {format!("{} Sponsor", sponsor.tier.label())}
                    </span>
                    <p class="sponsor-description">{sponsor.description}</p>
                    <a href=sponsor.website target="_blank" rel="noopener noreferrer">
                        "Visit Website"
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="section sponsors-section">
            <h2 class="section-heading">"Our Sponsors"</h2>
            <div class="sponsor-grid">{cards}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_more_steps_by_two_and_caps() {
        assert_eq!(load_more(2, 4), 4);
        assert_eq!(load_more(2, 3), 3);
        assert_eq!(load_more(4, 4), 4);
    }
}
