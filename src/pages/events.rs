use leptos::prelude::*;

use crate::components::sections::{PastEvents, Sponsors, UpcomingEvents};
use crate::data::events;

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <div class="page events-page">
            <UpcomingEvents events=events::upcoming_events() />
            <PastEvents events=events::past_events() />
            <Sponsors sponsors=events::sponsors() />
        </div>
    }
}
