use leptos::prelude::*;

use crate::models::{category_options, filter_by_category, Achievement, CategoryFilter, Highlight};

/// Row of category buttons; the active one is highlighted.
#[component]
pub fn CategoryTabs(options: Vec<String>, selected: RwSignal<CategoryFilter>) -> impl IntoView {
    options
        .into_iter()
        .map(|label| {
            let filter = CategoryFilter::from_label(&label);
            let active = {
                let filter = filter.clone();
                move || selected.with(|current| current == &filter)
            };
            view! {
                <button
                    class="category-tab"
                    class:active=active
                    on:click=move |_| selected.set(filter.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn AchievementCard(achievement: Achievement) -> impl IntoView {
    view! {
        <article class="achievement-card">
            <div class="achievement-icon" title=achievement.icon.label()>
                {achievement.icon.glyph()}
            </div>
            <span class="achievement-year">{achievement.year}</span>
            <h3 class="achievement-title">{achievement.title}</h3>
            <p class="achievement-description">{achievement.description}</p>
            <span class="achievement-category">{achievement.category}</span>
        </article>
    }
}

/// Achievements passing `filter`, or a notice when none do.
#[component]
pub fn AchievementGrid(
    achievements: Vec<Achievement>,
    #[prop(into)] filter: Signal<CategoryFilter>,
) -> impl IntoView {
    let achievements = StoredValue::new(achievements);
    let shown = Memo::new(move |_| {
        filter.with(|filter| achievements.with_value(|all| filter_by_category(all, filter)))
    });

    view! {
        <Show
            when=move || shown.with(|items| !items.is_empty())
            fallback=|| view! { <p class="empty-notice">"No achievements found in this category."</p> }
        >
            <div class="card-grid">
                {move || {
                    shown
                        .get()
                        .into_iter()
                        .map(|achievement| view! { <AchievementCard achievement=achievement /> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn HighlightStrip(highlights: Vec<Highlight>) -> impl IntoView {
    view! {
        <div class="highlight-strip">
            {highlights
                .into_iter()
                .map(|h| {
                    view! {
                        <div class="highlight">
                            <span class="highlight-glyph">{h.glyph}</span>
                            <span class="highlight-value">{format!("{}+", h.value)}</span>
                            <span class="highlight-label">{h.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Home page achievements: category tabs over the grid, stats below.
#[component]
pub fn AchievementsSection(achievements: Vec<Achievement>, highlights: Vec<Highlight>) -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::All);
    let options = category_options(&achievements);

    view! {
        <section class="section achievements-section">
            <h2 class="section-heading">"03_ACHIEVEMENTS"</h2>
            <div class="category-tabs">
                <CategoryTabs options=options selected=selected />
            </div>
            <AchievementGrid achievements=achievements filter=selected />
            <HighlightStrip highlights=highlights />
        </section>
    }
}
