use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::canvas::{MatrixCanvas, MatrixStyle};
use crate::components::TerminalEffect;
use crate::dom::WindowListener;

const MISSION: [(&str, &str, &str); 3] = [
    (
        "Innovate & Disrupt",
        "[PRIORITY_HIGH]",
        "Foster a culture where innovation thrives and conventional limits are challenged.",
    ),
    (
        "Build & Deploy",
        "[ACTIVE]",
        "Transform ideas into functioning solutions through collaborative development.",
    ),
    (
        "Connect & Grow",
        "[ONGOING]",
        "Establish a network of tech enthusiasts and industry professionals for knowledge exchange.",
    ),
];

const FOCUS: [(&str, &str); 6] = [
    ("Hackathons", "48-hour coding marathons where teams compete to build innovative solutions to real-world problems."),
    ("Workshops", "Hands-on sessions on cutting-edge technologies taught by industry professionals and expert members."),
    ("Projects", "Collaborative development of real-world applications, open-source contributions, and research initiatives."),
    ("Network", "Building connections with alumni, industry partners, and other tech communities around the world."),
    ("Research", "Exploring emerging fields like AI, machine learning, blockchain, and quantum computing."),
    ("Mentorship", "Guiding new members through personalized learning paths and career development opportunities."),
];

/// Radial highlight that follows the pointer.
fn spotlight_style((x, y): (i32, i32)) -> String {
    format!("background: radial-gradient(circle 200px at {x}px {y}px, rgba(20, 184, 166, 0.15), transparent)")
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let pointer = RwSignal::new((0, 0));

    match WindowListener::new("mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
            pointer.set((ev.client_x(), ev.client_y()));
        }
    }) {
        Ok(listener) => {
            let listener = SendWrapper::new(listener);
            on_cleanup(move || drop(listener));
        }
        Err(err) => log::warn!("Spotlight disabled: {err}"),
    }

    view! {
        <div class="page about-page">
            <div class="spotlight" style=move || spotlight_style(pointer.get())></div>

            <section class="about-hero">
                <MatrixCanvas style=MatrixStyle::Katakana class="about-matrix" />
                <div class="about-terminal">
                    <span class="prompt">"$"</span>
                    <TerminalEffect text=" cybersystem: profile.load --target=tekstra".to_string() />
                </div>
                <h1 class="about-tagline">
                    <TerminalEffect text="// Where Code Meets Innovation //".to_string() />
                </h1>
            </section>

            <section class="section about-story">
                <h2 class="section-heading">"Our Story"</h2>
                <p>
                    <span class="highlight-name">"Tekstra"</span>
                    " is more than just a coding club - it's a collective of cyber warriors, \
                     digital architects, and tech pioneers united by our passion for technology and innovation."
                </p>
                <p>
                    "Founded with a vision to push the boundaries of what's possible in the digital realm, \
                     we've evolved into a hub where cutting-edge ideas are born, tested, and deployed."
                </p>
                <div class="status-line">
                    <span class="status-arrow">"▶"</span>
                    <TerminalEffect text="System Status: [OPERATIONAL]".to_string() />
                </div>
            </section>

            <section class="section about-mission">
                <h2 class="section-heading">"Our Mission"</h2>
                <div class="card-grid">
                    {MISSION
                        .into_iter()
                        .map(|(title, status, body)| {
                            view! {
                                <article class="mission-card">
                                    <h3>{title}</h3>
                                    <span class="mission-status">{status}</span>
                                    <p>{body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section about-focus">
                <h2 class="section-heading">"WHAT WE DO"</h2>
                <p class="page-lead">
                    "Explore our core activities and how we're shaping the future of technology"
                </p>
                <div class="card-grid">
                    {FOCUS
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <article class="focus-card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section about-contact">
                <h2 class="section-heading">"Get In Touch"</h2>
                <ul class="contact-details">
                    <li>"✉ tekstra@iitram.ac.in"</li>
                    <li>"📍 IITRAM Campus, Maninagar East, Ahmedabad, Gujarat 380026"</li>
                </ul>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spotlight_follows_pointer() {
        let style = spotlight_style((120, 45));
        assert!(style.contains("at 120px 45px"));
    }
}
