use leptos::prelude::*;

use crate::components::sections::{
    AchievementsSection, GalleryMarquee, Hero, TeamPreview, UpcomingEvents, WebTeam,
};
use crate::data;
use crate::hooks::{use_scroll_top, ScrollOptions};

#[component]
pub fn Home() -> impl IntoView {
    let top = use_scroll_top(ScrollOptions::default());

    view! {
        <div node_ref=top class="page home-page">
            <section id="home">
                <Hero />
            </section>
            <section id="events">
                <UpcomingEvents events=data::events::upcoming_events() show_all_link=true />
            </section>
            <section id="achievements">
                <AchievementsSection
                    achievements=data::achievements::home_achievements()
                    highlights=data::achievements::home_highlights()
                />
            </section>
            <section id="team">
                <TeamPreview members=data::team::executives() />
            </section>
            <section id="gallery">
                <GalleryMarquee highlights=data::gallery::highlights() />
            </section>
            <section id="web-team">
                <WebTeam members=data::team::web_team() />
            </section>
        </div>
    }
}
