use leptos::prelude::*;
use leptos_router::components::A;
use send_wrapper::SendWrapper;

use crate::canvas::{MatrixCanvas, MatrixStyle, ParticleCanvas, ParticleStyle};
use crate::components::TypedText;
use crate::config::SiteConfig;
use crate::dom::{self, Interval};
use crate::routes::AppRoute;

const SNIPPETS: [&str; 6] = [
    "function solve(algorithm) { return optimal_solution; }",
    "const tekstra = new CodingClub({ passion: true });",
    "import { success } from 'your-future';",
    "while(true) { improve(skills); }",
    "git commit -m 'Join Tekstra today!'",
    "class Developer extends Student { constructor() { super(motivation); } }",
];

/// Number of rotating subtitles.
const SUBTITLES: usize = 3;

/// Index of the subtitle after `current`.
pub const fn next_subtitle(current: usize) -> usize {
    (current + 1) % SUBTITLES
}

fn subtitle(index: usize) -> AnyView {
    match index {
        0 => view! {
            <span class="code-keyword">"function "</span>
            <span class="code-name">"Tekstra"</span>
            <span class="code-punct">"() {"</span>
            <span class="code-line">
                <span class="code-return">"return "</span>
                <span class="code-string">"'Code. Collaborate. Create.'"</span>
            </span>
            <span class="code-punct">"}"</span>
        }
        .into_any(),
        1 => view! {
            <span class="code-keyword">"if "</span>
            <span class="code-punct">"(curiosity && perseverance) {"</span>
            <span class="code-line">
                <span class="code-return">"growWith"</span>
                <span class="code-string">"('Tekstra')"</span>
            </span>
            <span class="code-punct">"}"</span>
        }
        .into_any(),
        _ => view! {
            <TypedText
                text="// Sharing knowledge, solving problems, growing together.".to_string()
                class="code-comment"
            />
        }
        .into_any(),
    }
}

#[component]
fn FloatingSnippets() -> impl IntoView {
    let placed = SNIPPETS
        .iter()
        .enumerate()
        .map(|(i, snippet)| {
            let style = format!(
                "left:{:.0}%;top:{:.0}%;animation-delay:{}s",
                dom::random() * 80.0,
                dom::random() * 90.0,
                i * 2
            );
            view! { <div class="floating-snippet" style=style>{*snippet}</div> }
        })
        .collect_view();

    view! { <div class="floating-snippets" aria-hidden="true">{placed}</div> }
}

/// Landing banner: backgrounds, title, rotating code subtitle and calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let active = RwSignal::new(0_usize);

    match Interval::new(config.hero_rotation_ms, move || active.update(|i| *i = next_subtitle(*i))) {
        Ok(rotation) => {
            let rotation = SendWrapper::new(rotation);
            on_cleanup(move || drop(rotation));
        }
        Err(err) => log::warn!("Hero rotation disabled: {err}"),
    }

    view! {
        <section class="hero">
            <div class="hero-glow"></div>
            <MatrixCanvas style=MatrixStyle::Code class="hero-matrix" />
            <ParticleCanvas style=ParticleStyle::Hero class="hero-particles" />
            <FloatingSnippets />
            <div class="hero-grid-lines"></div>

            <div class="hero-content">
                <div class="hero-badge">
                    <div class="hero-badge-shimmer"></div>
                    <span class="hero-badge-icon">"</>"</span>
                    <p>"console.log(\"IITRAM's Coding Community\");"</p>
                </div>
                <h1 class="hero-title">
                    <span class="hero-title-glow"></span>
                    <span class="hero-title-text">"WELCOME TO TEKSTRA"</span>
                </h1>
                <h2 class="hero-subtitle">{move || subtitle(active.get())}</h2>
                <div class="hero-actions">
                    <A href=AppRoute::Events.path()>
                        <span class="button button-primary">"Read Our Magazine"</span>
                    </A>
                    <A href=AppRoute::Contact.path()>
                        <span class="button button-outline">"Let's Collaborate"</span>
                    </A>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitles_cycle() {
        assert_eq!(next_subtitle(0), 1);
        assert_eq!(next_subtitle(1), 2);
        assert_eq!(next_subtitle(2), 0);
    }
}
