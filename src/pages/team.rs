use leptos::prelude::*;

use crate::components::sections::MemberCard;
use crate::data::team;
use crate::models::TeamMember;

fn member_cards(members: Vec<TeamMember>) -> impl IntoView {
    members
        .into_iter()
        .map(|member| view! { <MemberCard member=member /> })
        .collect_view()
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let associates = team::associates();
    // Doubled so the marquee loops without a gap.
    let marquee = member_cards([associates.clone(), associates].concat());

    view! {
        <div class="page team-page">
            <header class="page-header">
                <h1 class="section-heading">"OUR TEAM"</h1>
                <p class="page-lead">
                    "Meet the innovators and collaborators behind our success. \
                     Our team is driven by passion and excellence."
                </p>
            </header>

            <section class="section">
                <span class="section-label">"EXECUTIVE MEMBERS"</span>
                <div class="card-grid">{member_cards(team::executives())}</div>
            </section>

            <section class="section">
                <span class="section-label">"ASSOCIATE MEMBERS"</span>
                <div class="marquee">
                    <div class="marquee-track">{marquee}</div>
                </div>
            </section>

            <section class="section">
                <span class="section-label">"PAST MEMBERS"</span>
                <div class="card-grid">{member_cards(team::past_members())}</div>
            </section>
        </div>
    }
}
