use leptos::prelude::*;

use super::form::{delete_record, draft_field, modal_title, submit_draft, FormModal, SearchBox, TextField};
use crate::data::gallery;
use crate::dom;
use crate::models::gallery::{parse_photo_list, photo_list_text};
use crate::models::{search, Collection, Editor, FeaturedFilter, GalleryEntry};

fn visible(entries: &[GalleryEntry], featured: FeaturedFilter, query: &str) -> Vec<GalleryEntry> {
    search(&featured.apply(entries), query)
}

#[component]
pub fn AdminGalleryPage() -> impl IntoView {
    let entries = RwSignal::new(Collection::new(gallery::admin_gallery()));
    let editor = RwSignal::new(Editor::closed(GalleryEntry::default()));
    let query = RwSignal::new(String::new());
    let featured = RwSignal::new(FeaturedFilter::All);

    let shown = Memo::new(move |_| {
        entries.with(|list| query.with(|q| visible(list.items(), featured.get(), q)))
    });

    let on_submit = Callback::new(move |()| {
        submit_draft(entries, editor, "gallery entry");
    });
    let on_close = Callback::new(move |()| editor.update(Editor::close));

    let toggle_featured = move |id: u32| {
        entries.update(|list| {
            if let Err(err) = list.modify(id, |entry| entry.featured = !entry.featured) {
                log::warn!("Featured toggle failed: {err}");
            }
        });
    };

    let remove = move |id: u32, name: &str| {
        if dom::confirm(&format!("Are you sure you want to delete \"{name}\"?")) {
            delete_record(entries, id, "gallery entry");
        }
    };

    let cards = move || {
        shown
            .get()
            .into_iter()
            .map(|entry| {
                let id = entry.id;
                let edited = entry.clone();
                let name = entry.name.clone();
                let cover = entry.photos.first().cloned().unwrap_or_default();
                view! {
                    <article class="admin-card gallery-admin-card" class:featured=entry.featured>
                        <img class="admin-thumb" src=cover alt=entry.name.clone() loading="lazy" />
                        <div class="admin-card-body">
                            <h3>{entry.name}</h3>
                            <p class="gallery-meta">{entry.date} " · " {entry.sponsor}</p>
                            <p>{format!("{} photos", entry.photos.len())}</p>
                        </div>
                        <div class="row-actions">
                            <button class="button-link" on:click=move |_| toggle_featured(id)>
                                {if entry.featured { "★ Featured" } else { "☆ Feature" }}
                            </button>
                            <button class="button-link" on:click=move |_| editor.update(|e| e.open_edit(&edited))>
                                "Edit"
                            </button>
                            <button class="button-link danger" on:click=move |_| remove(id, &name)>
                                "Delete"
                            </button>
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    let photos = draft_field(
        editor,
        |entry| photo_list_text(&entry.photos),
        |entry, text| entry.photos = parse_photo_list(&text),
    );

    view! {
        <div class="admin-panel">
            <div class="admin-toolbar">
                <SearchBox query=query placeholder="Search by name, sponsor or description..." />
                <select
                    class="admin-select"
                    on:change=move |ev| featured.set(FeaturedFilter::from_label(&event_target_value(&ev)))
                >
                    {FeaturedFilter::OPTIONS
                        .into_iter()
                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                        .collect_view()}
                </select>
                <button
                    class="button button-primary"
                    on:click=move |_| editor.update(|e| e.open_add(GalleryEntry::default()))
                >
                    "+ Add Gallery Entry"
                </button>
            </div>
            <div class="admin-card-grid">{cards}</div>
            <Show when=move || shown.with(Vec::is_empty)>
                <p class="empty-notice">"No gallery entries found."</p>
            </Show>

            <Show when=move || editor.with(Editor::is_open)>
                <FormModal title=modal_title(editor, "Gallery Entry") on_submit=on_submit on_close=on_close>
                    <TextField label="Event Name" required=true field=draft_field(editor, |g| g.name.clone(), |g, v| g.name = v) />
                    <TextField label="Sponsor" field=draft_field(editor, |g| g.sponsor.clone(), |g, v| g.sponsor = v) />
                    <TextField label="Date" required=true field=draft_field(editor, |g| g.date.clone(), |g, v| g.date = v) />
                    <TextField
                        label="Description"
                        multiline=true
                        field=draft_field(editor, |g| g.description.clone(), |g, v| g.description = v)
                    />
                    <TextField
                        label="Photo URLs (comma separated)"
                        multiline=true
                        placeholder="https://example.com/a.jpg, https://example.com/b.jpg"
                        field=photos
                    />
                    <label class="form-field form-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || editor.with(|e| e.draft().featured)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                editor.update(|e| e.draft_mut().featured = checked);
                            }
                        />
                        <span>"Featured"</span>
                    </label>
                </FormModal>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_filter_then_search() {
        let mut entries = gallery::gallery_events();
        entries[0].featured = true;
        entries[1].featured = false;
        let featured = visible(&entries, FeaturedFilter::Featured, "");
        assert!(featured.iter().all(|e| e.featured));
        let named = visible(&entries, FeaturedFilter::All, &entries[1].name.clone());
        assert!(named.iter().any(|e| e.id == entries[1].id));
    }
}
