use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

const EMAIL: &str = "tekstra@iitram.ac.in";
const ADDRESS: &str = "IITRAM Campus, Maninagar East, Ahmedabad, Gujarat 380026";
const SOCIALS: [(&str, &str); 2] = [
    ("Instagram", "https://instagram.com"),
    ("LinkedIn", "https://linkedin.com"),
];

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>"TEKSTRA"</h3>
                    <p>
                        "Welcome to IITRAM's elite coding club, pushing the limits of \
                         innovation, AI, and cybernetics."
                    </p>
                </div>
                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {AppRoute::FOOTER
                            .into_iter()
                            .map(|route| view! { <li><A href=route.path()>{route.label()}</A></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    <p><a href=format!("mailto:{EMAIL}")>{EMAIL}</a></p>
                    <p>{ADDRESS}</p>
                </div>
                <div class="footer-social">
                    <h4>"Follow Us"</h4>
                    <ul>
                        {SOCIALS
                            .into_iter()
                            .map(|(name, url)| {
                                view! {
                                    <li>
                                        <a href=url target="_blank" rel="noopener noreferrer">{name}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">
                {format!("© {} Tekstra. All rights reserved.", current_year())}
            </p>
        </footer>
    }
}
