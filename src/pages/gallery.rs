use leptos::prelude::*;

use crate::components::PageLoader;
use crate::data::gallery;
use crate::models::gallery::{has_second_row, marquee_duration, marquee_items, marquee_photo_index};
use crate::models::{GalleryEntry, PhotoLoad, PhotoViewer};

/// Viewer request: the entry and the photo to open on.
type OpenRequest = (GalleryEntry, usize);

fn marquee_row(
    entry: StoredValue<GalleryEntry>,
    reverse: bool,
    on_open: Callback<OpenRequest>,
) -> impl IntoView {
    let (items, count) = entry.with_value(|e| (marquee_items(&e.photos, reverse), e.photos.len()));
    let style = format!(
        "animation-duration:{}s;animation-direction:{}",
        marquee_duration(count),
        if reverse { "reverse" } else { "normal" }
    );
    let items = items
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            let photo = marquee_photo_index(i, count, reverse);
            view! {
                <img
                    class="marquee-photo"
                    src=src
                    alt=format!("Photo {}", photo + 1)
                    loading="lazy"
                    on:click=move |_| on_open.run((entry.get_value(), photo))
                />
            }
        })
        .collect_view();

    view! {
        <div class="marquee">
            <div class="marquee-track" style=style>{items}</div>
        </div>
    }
}

/// Modal showing one photo at a time with wrapping navigation.
#[component]
fn PhotoModal(entry: GalleryEntry, start: usize, on_close: Callback<()>) -> impl IntoView {
    let photos = StoredValue::new(entry.photos);
    let viewer = RwSignal::new(PhotoViewer::starting_at(photos.with_value(Vec::len), start));
    let load = RwSignal::new(PhotoLoad::Loading);

    // Any navigation starts a fresh load.
    Effect::new(move |_| {
        viewer.track();
        load.set(PhotoLoad::Loading);
    });

    let current = move || {
        let index = viewer.get().index();
        photos.with_value(|p| p.get(index).cloned().unwrap_or_default())
    };

    let dots = move || {
        let viewer_now = viewer.get();
        (0..viewer_now.len())
            .map(|i| {
                view! {
                    <button
                        class="viewer-dot"
                        class:active=move || viewer.get().index() == i
                        aria-label=format!("Photo {}", i + 1)
                        on:click=move |_| viewer.update(|v| v.open(i))
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="viewer-backdrop" on:click=move |_| on_close.run(())>
            <div class="viewer" on:click=|ev| ev.stop_propagation()>
                <header class="viewer-header">
                    <h3>{entry.name}</h3>
                    <span>{entry.date}</span>
                    <button class="viewer-close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <div class="viewer-stage">
                    <button class="viewer-nav" aria-label="Previous" on:click=move |_| viewer.update(PhotoViewer::prev)>
                        "‹"
                    </button>
                    <img
                        class="viewer-photo"
                        class:hidden=move || load.get() == PhotoLoad::Failed
                        src=current
                        alt=""
                        on:load=move |_| load.set(PhotoLoad::Loaded)
                        on:error=move |_| load.set(PhotoLoad::Failed)
                    />
                    <Show when=move || load.get() == PhotoLoad::Loading>
                        <div class="viewer-spinner"></div>
                    </Show>
                    <Show when=move || load.get() == PhotoLoad::Failed>
                        <div class="viewer-failed">
                            <span>"⚠️"</span>
                            <p>"Image failed to load"</p>
                        </div>
                    </Show>
                    <button class="viewer-nav" aria-label="Next" on:click=move |_| viewer.update(PhotoViewer::next)>
                        "›"
                    </button>
                </div>
                <div class="viewer-dots">{dots}</div>
                <p class="viewer-counter">
                    {move || {
                        let v = viewer.get();
                        format!("{} / {}", v.index() + 1, v.len())
                    }}
                </p>
            </div>
        </div>
    }
}

#[component]
fn GalleryCard(entry: GalleryEntry, on_open: Callback<OpenRequest>) -> impl IntoView {
    let stored = StoredValue::new(entry.clone());
    let second_row = has_second_row(entry.photos.len()).then(|| marquee_row(stored, true, on_open));
    let first_row = marquee_row(stored, false, on_open);

    view! {
        <article class="gallery-card" class:featured=entry.featured>
            <div class="gallery-rows">
                {first_row}
                {second_row}
            </div>
            <div class="gallery-body">
                <h3 class="gallery-title">{entry.name}</h3>
                <p class="gallery-meta">
                    <span>{entry.date}</span>
                    <span>{format!("Sponsored by {}", entry.sponsor)}</span>
                </p>
                <p class="gallery-description">{entry.description}</p>
                <button class="button button-outline" on:click=move |_| on_open.run((stored.get_value(), 0))>
                    {format!("View {} photos", entry.photos.len())}
                </button>
            </div>
        </article>
    }
}

#[component]
fn GalleryContent() -> impl IntoView {
    let selected = RwSignal::new(None::<OpenRequest>);
    let on_open = Callback::new(move |request| selected.set(Some(request)));
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="page gallery-page">
            <header class="page-header">
                <span class="section-label">"04_VISUAL_ARCHIVE"</span>
                <h1 class="section-heading">"EVENT GALLERY"</h1>
                <p class="page-lead">
                    "Explore our digital memory vault - where every pixel tells a story of innovation \
                     and achievement. Swipe through the visual history of Tekstra's journey."
                </p>
            </header>
            <div class="gallery-list">
                {gallery::gallery_events()
                    .into_iter()
                    .map(|entry| view! { <GalleryCard entry=entry on_open=on_open /> })
                    .collect_view()}
            </div>
            {move || {
                selected
                    .get()
                    .map(|(entry, start)| view! { <PhotoModal entry=entry start=start on_close=on_close /> })
            }}
        </div>
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <PageLoader>
            <GalleryContent />
        </PageLoader>
    }
}
