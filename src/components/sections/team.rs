use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::TeamMember;
use crate::routes::AppRoute;

/// Members shown on the home page preview.
const PREVIEW_SIZE: usize = 4;

fn social_link(url: String, label: &'static str) -> impl IntoView {
    (!url.is_empty()).then(|| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" aria-label=label>{label}</a>
        }
    })
}

/// Portrait card; falls back to initials when there is no photo.
#[component]
pub fn MemberCard(member: TeamMember) -> impl IntoView {
    let portrait = if member.image.is_empty() {
        view! { <div class="member-initials">{member.initials()}</div> }.into_any()
    } else {
        view! { <img class="member-photo" src=member.image.clone() alt=member.name.clone() loading="lazy" /> }
            .into_any()
    };

    view! {
        <article class="member-card">
            {portrait}
            <h3 class="member-name">{member.name}</h3>
            <p class="member-role">{member.role}</p>
            {member.years.map(|years| view! { <p class="member-years">{years}</p> })}
            {(!member.bio.is_empty()).then(|| view! { <p class="member-bio">{member.bio}</p> })}
            <div class="member-social">
                {social_link(member.social.github, "GitHub")}
                {social_link(member.social.linkedin, "LinkedIn")}
                {social_link(member.social.twitter, "Twitter")}
            </div>
        </article>
    }
}

/// First few executives with a link to the full team page.
#[component]
pub fn TeamPreview(members: Vec<TeamMember>) -> impl IntoView {
    view! {
        <section class="section team-section">
            <div class="circuit-grid" aria-hidden="true"></div>
            <h2 class="section-heading">"04_TEAM_MEMBERS"</h2>
            <div class="card-grid">
                {members
                    .into_iter()
                    .take(PREVIEW_SIZE)
                    .map(|member| view! { <MemberCard member=member /> })
                    .collect_view()}
            </div>
            <div class="section-footer">
                <A href=AppRoute::Team.path()>
                    <span class="button button-outline">"Meet Our Full Team →"</span>
                </A>
            </div>
        </section>
    }
}
