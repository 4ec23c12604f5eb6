//! Form widgets shared by the admin pages.

use leptos::prelude::*;

use crate::models::{Collection, Editor, Record};

/// Read and write one text field of an editor's draft.
pub fn draft_field<T>(
    editor: RwSignal<Editor<T>>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> (Signal<String>, Callback<String>)
where
    T: Record + Send + Sync + 'static,
{
    let value = Signal::derive(move || editor.with(|e| get(e.draft())));
    let on_input = Callback::new(move |text: String| editor.update(|e| set(e.draft_mut(), text)));
    (value, on_input)
}

/// Write the editor's draft into `collection` and close the form.
///
/// Both signals change together or not at all. A rejected draft is logged
/// and leaves the form open; the saved id is returned otherwise.
pub fn submit_draft<T>(
    collection: RwSignal<Collection<T>>,
    editor: RwSignal<Editor<T>>,
    noun: &str,
) -> Option<u32>
where
    T: Record + Send + Sync + 'static,
{
    let mut list = collection.get_untracked();
    let mut form = editor.get_untracked();
    match form.submit(&mut list) {
        Ok(id) => {
            collection.set(list);
            editor.set(form);
            log::debug!("Saved {noun} {id}");
            Some(id)
        }
        Err(err) => {
            log::warn!("{noun} not saved: {err}");
            None
        }
    }
}

/// Remove the record with `id`.
pub fn delete_record<T>(collection: RwSignal<Collection<T>>, id: u32, noun: &str) -> Option<T>
where
    T: Record + Send + Sync + 'static,
{
    let mut removed = None;
    collection.update(|list| removed = list.delete(id));
    if removed.is_some() {
        log::debug!("Deleted {noun} {id}");
    }
    removed
}

/// Parse a count typed into a number input; anything unparsable is zero.
pub fn parse_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[component]
pub fn TextField(
    label: &'static str,
    field: (Signal<String>, Callback<String>),
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let (value, on_input) = field;
    let handle = move |ev: leptos::ev::Event| on_input.run(event_target_value(&ev));

    let input = if multiline {
        view! {
            <textarea
                rows="3"
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=handle
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=kind
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=handle
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            {input}
        </label>
    }
}

#[component]
pub fn SearchBox(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            type="search"
            class="admin-search"
            placeholder=placeholder
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
    }
}

/// Dialog wrapping an add/edit form.
#[component]
pub fn FormModal(
    #[prop(into)] title: Signal<String>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=submit>
                <header class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button type="button" class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
                <footer class="modal-footer">
                    <button type="button" class="button button-outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button-primary">"Save"</button>
                </footer>
            </form>
        </div>
    }
}

/// Title for an editor's modal.
pub fn modal_title<T>(editor: RwSignal<Editor<T>>, noun: &'static str) -> Signal<String>
where
    T: Record + Send + Sync + 'static,
{
    Signal::derive(move || {
        if editor.with(Editor::is_editing) {
            format!("Edit {noun}")
        } else {
            format!("Add New {noun}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamMember;

    fn member(id: u32, name: &str) -> TeamMember {
        TeamMember {
            id,
            name: name.to_string(),
            ..TeamMember::default()
        }
    }

    #[test]
    fn test_submit_draft_saves_and_closes() {
        let collection = RwSignal::new(Collection::new(vec![member(3, "Ada")]));
        let editor = RwSignal::new(Editor::closed(TeamMember::default()));
        editor.update(|e| e.open_add(member(0, "Linus")));

        assert_eq!(submit_draft(collection, editor, "team member"), Some(4));
        assert_eq!(collection.with_untracked(Collection::len), 2);
        assert!(!editor.with_untracked(Editor::is_open));
    }

    #[test]
    fn test_rejected_draft_changes_nothing() {
        let collection = RwSignal::new(Collection::new(vec![member(1, "Ada")]));
        let editor = RwSignal::new(Editor::closed(TeamMember::default()));
        editor.update(|e| e.open_edit(&member(9, "Ghost")));

        assert_eq!(submit_draft(collection, editor, "team member"), None);
        assert_eq!(
            collection.with_untracked(|list| list.items().to_vec()),
            vec![member(1, "Ada")]
        );
        assert!(editor.with_untracked(Editor::is_open));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 42 "), 42);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("many"), 0);
    }
}
