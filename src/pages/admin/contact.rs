use leptos::prelude::*;

use super::form::SearchBox;
use crate::data::contact;
use crate::models::{category_options, filter_by_category, search, CategoryFilter, ContactMessage};

/// Subject filter first, then free-text search.
fn visible(messages: &[ContactMessage], subject: &CategoryFilter, query: &str) -> Vec<ContactMessage> {
    search(&filter_by_category(messages, subject), query)
}

/// Read-only inbox of messages sent through the public form.
#[component]
pub fn AdminContactPage() -> impl IntoView {
    let messages = StoredValue::new(contact::inbox());
    let subjects = messages.with_value(|m| category_options(m));
    let subject = RwSignal::new(CategoryFilter::All);
    let query = RwSignal::new(String::new());

    let rows = move || {
        let shown = subject.with(|s| query.with(|q| messages.with_value(|m| visible(m, s, q))));
        if shown.is_empty() {
            return view! {
                <tr><td colspan="5" class="empty-notice">"No messages found."</td></tr>
            }
            .into_any();
        }
        shown
            .into_iter()
            .map(|message| {
                view! {
                    <tr>
                        <td>{message.name}</td>
                        <td><a href=format!("mailto:{}", message.email)>{message.email.clone()}</a></td>
                        <td>{message.subject}</td>
                        <td>{message.organization}</td>
                        <td class="message-body">{message.message}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="admin-panel">
            <div class="admin-toolbar">
                <SearchBox query=query placeholder="Search by name, email or subject..." />
                <select
                    class="admin-select"
                    on:change=move |ev| subject.set(CategoryFilter::from_label(&event_target_value(&ev)))
                >
                    {subjects
                        .into_iter()
                        .map(|label| {
                            let value = label.clone();
                            view! { <option value=value>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Subject"</th>
                        <th>"Organization"</th>
                        <th>"Message"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_filter_and_search_combine() {
        let inbox = contact::inbox();
        let subject = inbox[0].subject.clone();
        let by_subject = visible(&inbox, &CategoryFilter::Only(subject.clone()), "");
        assert!(by_subject.iter().all(|m| m.subject == subject));

        let name = inbox[0].name.to_uppercase();
        let found = visible(&inbox, &CategoryFilter::All, &name);
        assert!(found.iter().any(|m| m.id == inbox[0].id));
    }
}
