use leptos::prelude::*;

use super::form::{
    delete_record, draft_field, modal_title, parse_count, submit_draft, FormModal, SearchBox, TextField,
};
use crate::config::SiteConfig;
use crate::data::achievements;
use crate::models::achievement::ADMIN_CATEGORIES;
use crate::models::{
    filter_by_category, paginate, search, total_pages, Achievement, AchievementIcon, CategoryFilter,
    ClubStats, Collection, Editor, StatKey,
};

fn this_year() -> String {
    js_sys::Date::new_0().get_full_year().to_string()
}

/// Category and search applied in that order.
fn visible(items: &[Achievement], filter: &CategoryFilter, query: &str) -> Vec<Achievement> {
    search(&filter_by_category(items, filter), query)
}

#[component]
fn StatsCards(stats: RwSignal<ClubStats>) -> impl IntoView {
    let editing = RwSignal::new(None::<ClubStats>);

    let open = move |_| editing.set(Some(stats.get_untracked()));
    let on_close = Callback::new(move |()| editing.set(None));
    let on_submit = Callback::new(move |()| {
        if let Some(draft) = editing.get_untracked() {
            stats.set(draft);
            log::debug!("Updated club stats");
        }
        editing.set(None);
    });

    view! {
        <div class="stats-cards">
            {StatKey::ALL
                .into_iter()
                .map(|key| {
                    view! {
                        <div class="stat-card">
                            <span class="stat-glyph">{key.glyph()}</span>
                            <span class="stat-value">{move || stats.get().get(key)}</span>
                            <span class="stat-label">{key.label()}</span>
                        </div>
                    }
                })
                .collect_view()}
            <button class="button button-outline" on:click=open>"Edit Stats"</button>
        </div>
        <Show when=move || editing.get().is_some()>
            <FormModal title="Edit Stats".to_string() on_submit=on_submit on_close=on_close>
                {StatKey::ALL
                    .into_iter()
                    .map(|key| {
                        let value = Signal::derive(move || {
                            editing.get().map(|s| s.get(key).to_string()).unwrap_or_default()
                        });
                        let on_input = Callback::new(move |text: String| {
                            editing.update(|draft| {
                                if let Some(draft) = draft {
                                    draft.set(key, parse_count(&text));
                                }
                            });
                        });
                        view! { <TextField label=key.label() kind="number" required=true field=(value, on_input) /> }
                    })
                    .collect_view()}
            </FormModal>
        </Show>
    }
}

#[component]
fn Pagination(page: RwSignal<usize>, #[prop(into)] pages: Signal<usize>) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="button button-outline"
                prop:disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pagination-status">{move || format!("Page {} of {}", page.get(), pages.get())}</span>
            <button
                class="button button-outline"
                prop:disabled=move || page.get() >= pages.get()
                on:click=move |_| page.update(|p| *p = (*p + 1).min(pages.get_untracked()))
            >
                "Next"
            </button>
        </div>
    }
}

#[component]
pub fn AdminAchievementsPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let per_page = config.achievements_per_page;

    let records = RwSignal::new(Collection::new(achievements::admin_achievements()));
    let stats = RwSignal::new(achievements::admin_stats());
    let editor = RwSignal::new(Editor::closed(Achievement::blank(&this_year())));
    let filter = RwSignal::new(CategoryFilter::All);
    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);

    let filtered = Memo::new(move |_| {
        records.with(|list| filter.with(|f| query.with(|q| visible(list.items(), f, q))))
    });
    let pages = Signal::derive(move || filtered.with(|items| total_pages(items.len(), per_page)));

    // Any change to the filters starts over from the first page.
    Effect::new(move |_| {
        filter.track();
        query.track();
        page.set(1);
    });
    // Deleting the last row of the last page steps back a page.
    Effect::new(move |_| {
        let last = pages.get();
        if page.get_untracked() > last {
            page.set(last);
        }
    });

    let on_submit = Callback::new(move |()| {
        let adding = !editor.with_untracked(Editor::is_editing);
        if let Some(id) = submit_draft(records, editor, "achievement") {
            if adding {
                if let Some(added) = records.with_untracked(|list| list.get(id).cloned()) {
                    stats.update(|s| s.record_added(&added));
                }
            }
        }
    });
    let on_close = Callback::new(move |()| editor.update(Editor::close));

    let rows = move || {
        let shown = filtered.with(|items| paginate(items, page.get(), per_page));
        shown
            .into_iter()
            .map(|achievement| {
                let id = achievement.id;
                let edited = achievement.clone();
                view! {
                    <tr>
                        <td>{achievement.icon.glyph()}</td>
                        <td>{achievement.title}</td>
                        <td>{achievement.year}</td>
                        <td>{achievement.category}</td>
                        <td class="row-actions">
                            <button class="button-link" on:click=move |_| editor.update(|e| e.open_edit(&edited))>
                                "Edit"
                            </button>
                            <button
                                class="button-link danger"
                                on:click=move |_| {
                                    if let Some(removed) = delete_record(records, id, "achievement") {
                                        stats.update(|s| s.record_removed(&removed));
                                    }
                                }
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let category_select = move |ev: leptos::ev::Event| filter.set(CategoryFilter::from_label(&event_target_value(&ev)));
    let (icon_value, icon_input) = draft_field(editor, |a| a.icon.label().to_string(), |a, v| {
        a.icon = AchievementIcon::from_label(&v);
    });
    let (category_value, category_input) = draft_field(editor, |a| a.category.clone(), |a, v| a.category = v);

    view! {
        <div class="admin-panel">
            <StatsCards stats=stats />

            <div class="admin-toolbar">
                <select class="admin-select" on:change=category_select>
                    <option value=CategoryFilter::ALL_LABEL>{CategoryFilter::ALL_LABEL}</option>
                    {ADMIN_CATEGORIES
                        .into_iter()
                        .map(|category| view! { <option value=category>{category}</option> })
                        .collect_view()}
                </select>
                <SearchBox query=query placeholder="Search achievements..." />
                <button
                    class="button button-primary"
                    on:click=move |_| editor.update(|e| e.open_add(Achievement::blank(&this_year())))
                >
                    "+ Add Achievement"
                </button>
            </div>

            <table class="admin-table">
                <thead>
                    <tr><th></th><th>"Title"</th><th>"Year"</th><th>"Category"</th><th></th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || filtered.with(Vec::is_empty)>
                <p class="empty-notice">"No achievements match the current filters."</p>
            </Show>
            <Pagination page=page pages=pages />

            <Show when=move || editor.with(Editor::is_open)>
                <FormModal title=modal_title(editor, "Achievement") on_submit=on_submit on_close=on_close>
                    <TextField label="Title" required=true field=draft_field(editor, |a| a.title.clone(), |a, v| a.title = v) />
                    <TextField label="Year" required=true field=draft_field(editor, |a| a.year.clone(), |a, v| a.year = v) />
                    <label class="form-field">
                        <span class="form-label">"Category"</span>
                        <select on:change=move |ev| category_input.run(event_target_value(&ev))>
                            {ADMIN_CATEGORIES
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <option value=category selected=move || category_value.get() == category>
                                            {category}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-field">
                        <span class="form-label">"Icon"</span>
                        <select on:change=move |ev| icon_input.run(event_target_value(&ev))>
                            {AchievementIcon::SELECTABLE
                                .into_iter()
                                .map(|icon| {
                                    view! {
                                        <option value=icon.label() selected=move || icon_value.get() == icon.label()>
                                            {format!("{} {}", icon.glyph(), icon.label())}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <TextField
                        label="Description"
                        required=true
                        multiline=true
                        field=draft_field(editor, |a| a.description.clone(), |a, v| a.description = v)
                    />
                </FormModal>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_applies_category_then_search() {
        let items = achievements::admin_achievements();
        let awards = visible(&items, &CategoryFilter::Only("Award".to_string()), "");
        assert!(awards.iter().all(Achievement::is_award));
        let none = visible(&items, &CategoryFilter::Only("Award".to_string()), "zzz-no-match");
        assert!(none.is_empty());
        assert_eq!(visible(&items, &CategoryFilter::All, "  ").len(), items.len());
    }
}
