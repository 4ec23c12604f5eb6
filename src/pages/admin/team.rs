use leptos::prelude::*;

use super::form::{delete_record, draft_field, modal_title, submit_draft, FormModal, SearchBox, TextField};
use crate::data::team;
use crate::models::{search, Collection, Editor, TeamCategory, TeamMember};

#[component]
pub fn AdminTeamPage() -> impl IntoView {
    let members = RwSignal::new(Collection::new(team::admin_team()));
    let editor = RwSignal::new(Editor::closed(TeamMember::default()));
    let query = RwSignal::new(String::new());

    let shown = Memo::new(move |_| members.with(|list| query.with(|q| search(list.items(), q))));

    let on_submit = Callback::new(move |()| {
        submit_draft(members, editor, "team member");
    });
    let on_close = Callback::new(move |()| editor.update(Editor::close));

    let cards = move || {
        shown
            .get()
            .into_iter()
            .map(|member| {
                let id = member.id;
                let edited = member.clone();
                view! {
                    <article class="admin-card">
                        <div class="member-initials">{member.initials()}</div>
                        <div class="admin-card-body">
                            <h3>{member.name}</h3>
                            <p class="member-role">{member.role}</p>
                            <span class="badge">{member.category.label()}</span>
                        </div>
                        <div class="row-actions">
                            <button class="button-link" on:click=move |_| editor.update(|e| e.open_edit(&edited))>
                                "Edit"
                            </button>
                            <button
                                class="button-link danger"
                                on:click=move |_| {
                                    delete_record(members, id, "team member");
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    let category = Signal::derive(move || editor.with(|e| e.draft().category));
    let set_category = move |ev: leptos::ev::Event| {
        if let Some(picked) = TeamCategory::from_label(&event_target_value(&ev)) {
            editor.update(|e| e.draft_mut().category = picked);
        }
    };

    view! {
        <div class="admin-panel">
            <div class="admin-toolbar">
                <SearchBox query=query placeholder="Search by name, role or category..." />
                <button class="button button-primary" on:click=move |_| editor.update(|e| e.open_add(TeamMember::default()))>
                    "+ Add Member"
                </button>
            </div>
            <div class="admin-card-grid">{cards}</div>
            <Show when=move || shown.with(Vec::is_empty)>
                <p class="empty-notice">"No team members found."</p>
            </Show>

            <Show when=move || editor.with(Editor::is_open)>
                <FormModal title=modal_title(editor, "Team Member") on_submit=on_submit on_close=on_close>
                    <TextField label="Name" required=true field=draft_field(editor, |m| m.name.clone(), |m, v| m.name = v) />
                    <TextField label="Role" required=true field=draft_field(editor, |m| m.role.clone(), |m, v| m.role = v) />
                    <label class="form-field">
                        <span class="form-label">"Category"</span>
                        <select on:change=set_category>
                            {TeamCategory::EDITABLE
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option value=option.label() selected=move || category.get() == option>
                                            {option.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <TextField label="Photo URL" kind="url" field=draft_field(editor, |m| m.image.clone(), |m, v| m.image = v) />
                    <TextField label="Bio" multiline=true field=draft_field(editor, |m| m.bio.clone(), |m, v| m.bio = v) />
                    <fieldset class="form-group">
                        <legend>"Social Links"</legend>
                        <TextField
                            label="GitHub"
                            kind="url"
                            field=draft_field(editor, |m| m.social.github.clone(), |m, v| m.social.github = v)
                        />
                        <TextField
                            label="LinkedIn"
                            kind="url"
                            field=draft_field(editor, |m| m.social.linkedin.clone(), |m, v| m.social.linkedin = v)
                        />
                        <TextField
                            label="Twitter"
                            kind="url"
                            field=draft_field(editor, |m| m.social.twitter.clone(), |m, v| m.social.twitter = v)
                        />
                    </fieldset>
                </FormModal>
            </Show>
        </div>
    }
}
