use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Event;
use crate::routes::AppRoute;

#[component]
fn EventCard(event: Event) -> impl IntoView {
    let tags = event
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{format!("#{tag}")}</span> })
        .collect_view();

    view! {
        <article class="event-card">
            <img class="event-image" src=event.image alt=event.title.clone() loading="lazy" />
            <div class="event-body">
                <h3 class="event-title">{event.title}</h3>
                <ul class="event-meta">
                    <li>"📅 " {event.date}</li>
                    <li>"⏰ " {event.time}</li>
                    <li>"📍 " {event.location}</li>
                </ul>
                <p class="event-description">{event.description}</p>
                <div class="event-tags">{tags}</div>
            </div>
        </article>
    }
}

/// Grid of upcoming events, optionally with a link to the full events page.
#[component]
pub fn UpcomingEvents(
    events: Vec<Event>,
    #[prop(optional)] show_all_link: bool,
) -> impl IntoView {
    view! {
        <section class="section events-section">
            <h2 class="section-heading">"02_EVENTS"</h2>
            <div class="card-grid">
                {events.into_iter().map(|event| view! { <EventCard event=event /> }).collect_view()}
            </div>
            {show_all_link.then(|| view! {
                <div class="section-footer">
                    <A href=AppRoute::Events.path()>
                        <span class="button button-outline">"View All Events"</span>
                    </A>
                </div>
            })}
        </section>
    }
}
