use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::GalleryHighlight;
use crate::routes::AppRoute;

/// Continuous strip of highlight photos ending in a gallery link.
#[component]
pub fn GalleryMarquee(highlights: Vec<GalleryHighlight>) -> impl IntoView {
    // Two copies so the CSS loop has no visible seam.
    let strip = highlights
        .iter()
        .chain(highlights.iter())
        .map(|photo| {
            view! {
                <div class="marquee-item">
                    <img src=photo.src.clone() alt=photo.alt.clone() loading="lazy" />
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="section gallery-section">
            <h2 class="section-heading">"Captured in Our Gallery"</h2>
            <div class="marquee">
                <div class="marquee-track">{strip}</div>
            </div>
            <div class="section-footer">
                <A href=AppRoute::Gallery.path()>
                    <span class="button button-primary">"Explore Full Gallery"</span>
                </A>
            </div>
        </section>
    }
}
