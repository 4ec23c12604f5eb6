use leptos::prelude::*;

use crate::components::sections::{AchievementGrid, CategoryTabs, HighlightStrip};
use crate::data::achievements;
use crate::models::{category_options, CategoryFilter};

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let items = achievements::achievements();
    let options = category_options(&items);
    let selected = RwSignal::new(CategoryFilter::All);

    view! {
        <div class="page achievements-page">
            <header class="page-header">
                <h1 class="section-heading">"01_ACHIEVEMENTS"</h1>
                <p class="page-lead">
                    "Milestones our members have reached in competitions, research and community work."
                </p>
            </header>
            <HighlightStrip highlights=achievements::page_highlights() />
            <div class="category-tabs">
                <CategoryTabs options=options selected=selected />
            </div>
            <AchievementGrid achievements=items filter=selected />
        </div>
    }
}
