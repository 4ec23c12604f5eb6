use leptos::prelude::*;

use super::form::{
    delete_record, draft_field, modal_title, parse_count, submit_draft, FormModal, TextField,
};
use crate::data::events;
use crate::models::{Collection, Editor, Event, PastEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Upcoming,
    Past,
}

#[component]
fn TagEditor(editor: RwSignal<Editor<Event>>) -> impl IntoView {
    let pending = RwSignal::new(String::new());

    let add = move || {
        let tag = pending.get_untracked();
        let mut added = false;
        editor.update(|e| added = e.draft_mut().add_tag(&tag));
        if added {
            pending.set(String::new());
        }
    };

    view! {
        <div class="form-field">
            <span class="form-label">"Tags"</span>
            <div class="tag-input">
                <input
                    type="text"
                    placeholder="Add a tag"
                    prop:value=move || pending.get()
                    on:input=move |ev| pending.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button type="button" class="button button-outline" on:click=move |_| add()>"Add"</button>
            </div>
            <div class="tag-list">
                {move || {
                    editor
                        .with(|e| e.draft().tags.clone())
                        .into_iter()
                        .map(|tag| {
                            let removed = tag.clone();
                            view! {
                                <span class="tag">
                                    {tag}
                                    <button
                                        type="button"
                                        class="tag-remove"
                                        aria-label="Remove tag"
                                        on:click=move |_| editor.update(|e| e.draft_mut().remove_tag(&removed))
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn UpcomingTab() -> impl IntoView {
    let events = RwSignal::new(Collection::new(events::admin_events()));
    let editor = RwSignal::new(Editor::closed(Event::default()));

    let on_submit = Callback::new(move |()| {
        submit_draft(events, editor, "event");
    });
    let on_close = Callback::new(move |()| editor.update(Editor::close));

    let rows = move || {
        events
            .with(|list| list.items().to_vec())
            .into_iter()
            .map(|event| {
                let id = event.id;
                let edited = event.clone();
                view! {
                    <tr>
                        <td>{event.title}</td>
                        <td>{event.date}</td>
                        <td>{event.location}</td>
                        <td>{event.tags.join(", ")}</td>
                        <td class="row-actions">
                            <button class="button-link" on:click=move |_| editor.update(|e| e.open_edit(&edited))>
                                "Edit"
                            </button>
                            <button
                                class="button-link danger"
                                on:click=move |_| {
                                    delete_record(events, id, "event");
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

    view! {
        <div class="admin-toolbar">
            <button class="button button-primary" on:click=move |_| editor.update(|e| e.open_add(Event::default()))>
                "+ Add Event"
            </button>
        </div>
        <table class="admin-table">
            <thead>
                <tr><th>"Title"</th><th>"Date"</th><th>"Location"</th><th>"Tags"</th><th></th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <Show when=move || editor.with(Editor::is_open)>
            <FormModal title=modal_title(editor, "Event") on_submit=on_submit on_close=on_close>
                <TextField label="Title" required=true field=draft_field(editor, |e| e.title.clone(), |e, v| e.title = v) />
                <TextField label="Date" required=true field=draft_field(editor, |e| e.date.clone(), |e, v| e.date = v) />
                <TextField label="Time" required=true field=draft_field(editor, |e| e.time.clone(), |e, v| e.time = v) />
                <TextField label="Location" required=true field=draft_field(editor, |e| e.location.clone(), |e, v| e.location = v) />
                <TextField label="Image URL" kind="url" field=draft_field(editor, |e| e.image.clone(), |e, v| e.image = v) />
                <TextField
                    label="Description"
                    required=true
                    multiline=true
                    field=draft_field(editor, |e| e.description.clone(), |e, v| e.description = v)
                />
                <TagEditor editor=editor />
            </FormModal>
        </Show>
    }
}

#[component]
fn PastTab() -> impl IntoView {
    let events = RwSignal::new(Collection::new(events::admin_past_events()));
    let editor = RwSignal::new(Editor::closed(PastEvent::default()));

    let on_submit = Callback::new(move |()| {
        submit_draft(events, editor, "past event");
    });
    let on_close = Callback::new(move |()| editor.update(Editor::close));

    let rows = move || {
        events
            .with(|list| list.items().to_vec())
            .into_iter()
            .map(|event| {
                let id = event.id;
                let edited = event.clone();
                let stats = event
                    .stats
                    .entries()
                    .into_iter()
                    .map(|(label, value)| format!("{value} {label}"))
                    .collect::<Vec<_>>()
                    .join(" · ");
                view! {
                    <tr>
                        <td>{event.title}</td>
                        <td>{event.date}</td>
                        <td>{stats}</td>
                        <td class="row-actions">
                            <button class="button-link" on:click=move |_| editor.update(|e| e.open_edit(&edited))>
                                "Edit"
                            </button>
                            <button
                                class="button-link danger"
                                on:click=move |_| {
                                    delete_record(events, id, "past event");
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

    view! {
        <div class="admin-toolbar">
            <button class="button button-primary" on:click=move |_| editor.update(|e| e.open_add(PastEvent::default()))>
                "+ Add Past Event"
            </button>
        </div>
        <table class="admin-table">
            <thead>
                <tr><th>"Title"</th><th>"Date"</th><th>"Stats"</th><th></th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <Show when=move || editor.with(Editor::is_open)>
            <FormModal title=modal_title(editor, "Past Event") on_submit=on_submit on_close=on_close>
                <TextField label="Title" required=true field=draft_field(editor, |e| e.title.clone(), |e, v| e.title = v) />
                <TextField label="Date" required=true field=draft_field(editor, |e| e.date.clone(), |e, v| e.date = v) />
                <TextField label="Image URL" kind="url" field=draft_field(editor, |e| e.image.clone(), |e, v| e.image = v) />
                <TextField
                    label="Description"
                    required=true
                    multiline=true
                    field=draft_field(editor, |e| e.description.clone(), |e, v| e.description = v)
                />
                <div class="form-row">
                    <TextField
                        label="Participants"
                        kind="number"
                        field=draft_field(
                            editor,
                            |e| e.stats.participants.to_string(),
                            |e, v| e.stats.participants = parse_count(&v),
                        )
                    />
                    <TextField
                        label="Projects"
                        kind="number"
                        field=draft_field(
                            editor,
                            |e| e.stats.projects.to_string(),
                            |e, v| e.stats.projects = parse_count(&v),
                        )
                    />
                    <TextField
                        label="Prizes"
                        field=draft_field(editor, |e| e.stats.prizes.clone(), |e, v| e.stats.prizes = v)
                    />
                </div>
            </FormModal>
        </Show>
    }
}

#[component]
pub fn AdminEventsPage() -> impl IntoView {
    let tab = RwSignal::new(Tab::Upcoming);
    let tab_button = move |which: Tab, label: &'static str| {
        view! {
            <button class="admin-tab" class:active=move || tab.get() == which on:click=move |_| tab.set(which)>
                {label}
            </button>
        }
    };

    view! {
        <div class="admin-panel">
            <div class="admin-tabs">
                {tab_button(Tab::Upcoming, "Upcoming Events")}
                {tab_button(Tab::Past, "Past Events")}
            </div>
            {move || match tab.get() {
                Tab::Upcoming => view! { <UpcomingTab /> }.into_any(),
                Tab::Past => view! { <PastTab /> }.into_any(),
            }}
        </div>
    }
}
