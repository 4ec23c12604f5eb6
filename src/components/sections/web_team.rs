use leptos::prelude::*;

use crate::models::WebTeamMember;

/// The people who built this site.
#[component]
pub fn WebTeam(members: Vec<WebTeamMember>) -> impl IntoView {
    view! {
        <section class="section web-team-section">
            <h2 class="section-heading">"DEVELOPMENT TEAM"</h2>
            <div class="card-grid">
                {members
                    .into_iter()
                    .map(|member| {
                        view! {
                            <article class="member-card">
                                <img class="member-photo" src=member.photo alt=member.name.clone() loading="lazy" />
                                <h3 class="member-name">{member.name}</h3>
                                <p class="member-role">{member.role}</p>
                                <p class="member-bio">{member.description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
