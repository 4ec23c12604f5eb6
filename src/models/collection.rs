use crate::error::AppError;

/// A record stored in an in-memory admin collection.
pub trait Record: Clone {
    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

/// Records that belong to a named category.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Records that answer free-text search.
pub trait Searchable {
    /// `needle` is already lowercased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

/// Case-insensitive substring test used by `Searchable` impls.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Ordered, id-keyed list of records living in component state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Wrap records as they are; ids are taken from the records.
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Records in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record with `id`, if present.
    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// One past the largest id, or 1 for an empty collection.
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(Record::id).max().map_or(1, |max| max + 1)
    }

    /// Append a record under a fresh id and return that id.
    pub fn add(&mut self, mut record: T) -> u32 {
        let id = self.next_id();
        record.set_id(id);
        self.items.push(record);
        id
    }

    /// Replace the record sharing `record.id()`.
    pub fn update(&mut self, record: T) -> Result<(), AppError> {
        let id = record.id();
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(AppError::RecordNotFound(id))?;
        *slot = record;
        Ok(())
    }

    /// Remove the record with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: u32) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Apply `f` to the record with `id`.
    pub fn modify(&mut self, id: u32, f: impl FnOnce(&mut T)) -> Result<(), AppError> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(AppError::RecordNotFound(id))?;
        f(slot);
        Ok(())
    }
}

/// Add/edit form state for one collection.
///
/// Closing the form drops the draft; the next `open_add` starts blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor<T> {
    draft: T,
    editing: Option<u32>,
    open: bool,
}

impl<T: Record> Editor<T> {
    /// Form closed, holding `blank` as the draft.
    pub const fn closed(blank: T) -> Self {
        Self {
            draft: blank,
            editing: None,
            open: false,
        }
    }

    /// Open the form for a new record.
    pub fn open_add(&mut self, blank: T) {
        self.draft = blank;
        self.editing = None;
        self.open = true;
    }

    /// Open the form on a copy of `record`.
    pub fn open_edit(&mut self, record: &T) {
        self.draft = record.clone();
        self.editing = Some(record.id());
        self.open = true;
    }

    /// Hide the form and forget which record was being edited.
    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
    }

    /// Whether the modal is showing.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the draft replaces an existing record.
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Current form values.
    pub const fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Write the draft into `collection` and close the form.
    ///
    /// Edits replace the record being edited; anything else is appended
    /// under a fresh id. Returns the id that was written.
    pub fn submit(&mut self, collection: &mut Collection<T>) -> Result<u32, AppError> {
        let id = match self.editing {
            Some(id) => {
                let mut record = self.draft.clone();
                record.set_id(id);
                collection.update(record)?;
                id
            }
            None => collection.add(self.draft.clone()),
        };
        self.close();
        Ok(id)
    }
}

/// Category selection; "All" is the identity filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Build from a UI label.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Text shown in the filter dropdown.
    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category,
        }
    }

    /// Whether `category` passes the filter.
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Records whose category passes `filter`, in their original order.
pub fn filter_by_category<T: Categorized + Clone>(items: &[T], filter: &CategoryFilter) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.accepts(item.category()))
        .cloned()
        .collect()
}

/// "All" followed by each distinct category in first-seen order.
pub fn category_options<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut options = vec![CategoryFilter::ALL_LABEL.to_string()];
    for item in items {
        if !options.iter().any(|known| known == item.category()) {
            options.push(item.category().to_string());
        }
    }
    options
}

/// Records matching `query`; a blank query matches everything.
pub fn search<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches(&needle))
        .cloned()
        .collect()
}

/// Number of pages needed for `len` items; zero items still render one page.
pub const fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 || len == 0 {
        1
    } else {
        len.div_ceil(per_page)
    }
}

/// Items on the 1-based `page`.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    if per_page == 0 {
        return items.to_vec();
    }
    let start = page.saturating_sub(1) * per_page;
    items.iter().skip(start).take(per_page).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        id: u32,
        name: String,
        kind: String,
    }

    impl Item {
        fn new(id: u32, name: &str, kind: &str) -> Self {
            Self {
                id,
                name: name.to_string(),
                kind: kind.to_string(),
            }
        }
    }

    impl Record for Item {
        fn id(&self) -> u32 {
            self.id
        }

        fn set_id(&mut self, id: u32) {
            self.id = id;
        }
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            &self.kind
        }
    }

    impl Searchable for Item {
        fn matches(&self, needle: &str) -> bool {
            contains_ci(&self.name, needle)
        }
    }

    fn sample() -> Collection<Item> {
        Collection::new(vec![
            Item::new(1, "Alpha", "A"),
            Item::new(4, "Beta", "B"),
            Item::new(2, "Gamma", "A"),
        ])
    }

    #[test]
    fn test_next_id_empty_is_one() {
        let collection: Collection<Item> = Collection::default();
        assert_eq!(collection.next_id(), 1);
    }

    #[test]
    fn test_add_uses_max_plus_one() {
        let mut collection = sample();
        let id = collection.add(Item::new(0, "Delta", "B"));
        assert_eq!(id, 5);
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.items().last().map(|i| i.id), Some(5));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut collection = sample();
        collection.update(Item::new(4, "Beta v2", "B")).unwrap();
        assert_eq!(collection.items()[1].name, "Beta v2");
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_update_missing_id_errors() {
        let mut collection = sample();
        let result = collection.update(Item::new(99, "Ghost", "A"));
        assert!(matches!(result, Err(AppError::RecordNotFound(99))));
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut collection = sample();
        let removed = collection.delete(4).unwrap();
        assert_eq!(removed.name, "Beta");
        let ids: Vec<u32> = collection.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(collection.delete(4).is_none());
    }

    #[test]
    fn test_modify_applies_closure() {
        let mut collection = sample();
        collection.modify(2, |item| item.kind = "C".to_string()).unwrap();
        assert_eq!(collection.get(2).unwrap().kind, "C");
        assert!(collection.modify(42, |_| {}).is_err());
    }

    #[test]
    fn test_editor_add_then_edit() {
        let mut collection = sample();
        let mut editor = Editor::closed(Item::new(0, "", "A"));
        assert!(!editor.is_open());

        editor.open_add(Item::new(0, "", "A"));
        editor.draft_mut().name = "New".to_string();
        let id = editor.submit(&mut collection).unwrap();
        assert_eq!(id, 5);
        assert!(!editor.is_open());

        let record = collection.get(1).unwrap().clone();
        editor.open_edit(&record);
        assert!(editor.is_editing());
        editor.draft_mut().name = "Alpha v2".to_string();
        editor.submit(&mut collection).unwrap();
        assert_eq!(collection.get(1).unwrap().name, "Alpha v2");
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn test_editor_close_discards_edit_target() {
        let mut editor = Editor::closed(Item::new(0, "", "A"));
        editor.open_edit(&Item::new(3, "x", "A"));
        editor.close();
        assert!(!editor.is_editing());
        assert!(!editor.is_open());
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let collection = sample();
        let all = filter_by_category(collection.items(), &CategoryFilter::All);
        assert_eq!(all, collection.items().to_vec());
    }

    #[test]
    fn test_filter_only_matching_category() {
        let collection = sample();
        let only_a = filter_by_category(collection.items(), &CategoryFilter::from_label("A"));
        assert_eq!(only_a.len(), 2);
        assert!(only_a.iter().all(|i| i.kind == "A"));
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let collection = sample();
        assert_eq!(category_options(collection.items()), vec!["All", "A", "B"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let collection = sample();
        let hits = search(collection.items(), "  gAm ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
        assert_eq!(search(collection.items(), "").len(), 3);
    }

    #[test]
    fn test_pagination() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(total_pages(items.len(), 5), 3);
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(paginate(&items, 1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 3, 5), vec![11, 12]);
        assert!(paginate(&items, 4, 5).is_empty());
    }
}
