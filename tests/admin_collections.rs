//! Invariants of the in-memory admin collections.

use proptest::prelude::*;

use tekstra_ui::models::{
    filter_by_category, paginate, search, total_pages, Achievement, CategoryFilter, ClubStats,
    Collection, Editor, Record,
};

fn achievement(id: u32, category: &str) -> Achievement {
    Achievement {
        id,
        title: format!("Achievement {id}"),
        category: category.to_string(),
        ..Achievement::default()
    }
}

const CATEGORIES: [&str; 4] = ["Competition", "Recognition", "Award", "Research"];

fn arb_achievements() -> impl Strategy<Value = Vec<Achievement>> {
    prop::collection::vec((1u32..500, 0usize..CATEGORIES.len()), 0..30).prop_map(|pairs| {
        let mut seen = Vec::new();
        pairs
            .into_iter()
            .filter(|(id, _)| {
                let fresh = !seen.contains(id);
                seen.push(*id);
                fresh
            })
            .map(|(id, c)| achievement(id, CATEGORIES[c]))
            .collect()
    })
}

#[test]
fn test_recognition_scenario() {
    let items = vec![achievement(1, "Competition"), achievement(2, "Recognition")];
    let filtered = filter_by_category(&items, &CategoryFilter::from_label("Recognition"));
    let ids: Vec<u32> = filtered.iter().map(Record::id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_editor_round_trip_add_then_edit() {
    let mut list = Collection::new(vec![achievement(3, "Award")]);
    let mut editor = Editor::closed(Achievement::blank("2024"));

    editor.open_add(Achievement::blank("2024"));
    editor.draft_mut().title = "New".to_string();
    let id = editor.submit(&mut list).unwrap();
    assert_eq!(id, 4);
    assert!(!editor.is_open());

    let existing = list.get(3).cloned().unwrap();
    editor.open_edit(&existing);
    editor.draft_mut().title = "Renamed".to_string();
    assert_eq!(editor.submit(&mut list).unwrap(), 3);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(3).unwrap().title, "Renamed");
}

#[test]
fn test_award_counter_follows_add_and_delete() {
    let mut stats = ClubStats::default();
    let mut list = Collection::default();
    let id = list.add(achievement(0, "Award"));
    stats.record_added(list.get(id).unwrap());
    assert_eq!(stats.awards_won, 1);

    let removed = list.delete(id).unwrap();
    stats.record_removed(&removed);
    stats.record_removed(&removed);
    assert_eq!(stats.awards_won, 0);
}

proptest! {
    #[test]
    fn test_add_assigns_max_plus_one(items in arb_achievements()) {
        let mut list = Collection::new(items.clone());
        let before = list.len();
        let expected = items.iter().map(Record::id).max().map_or(1, |max| max + 1);
        let id = list.add(achievement(0, "Award"));
        prop_assert_eq!(id, expected);
        prop_assert_eq!(list.len(), before + 1);
    }

    #[test]
    fn test_delete_removes_only_target(items in arb_achievements(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let target = items[pick.index(items.len())].id;
        let mut list = Collection::new(items.clone());
        let removed = list.delete(target);
        prop_assert_eq!(removed.map(|a| a.id), Some(target));
        let remaining: Vec<u32> = list.items().iter().map(Record::id).collect();
        let expected: Vec<u32> = items.iter().map(Record::id).filter(|&id| id != target).collect();
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn test_category_filter_never_leaks(items in arb_achievements(), c in 0usize..CATEGORIES.len()) {
        let filter = CategoryFilter::from_label(CATEGORIES[c]);
        let filtered = filter_by_category(&items, &filter);
        prop_assert!(filtered.iter().all(|a| a.category == CATEGORIES[c]));
        prop_assert_eq!(filter_by_category(&items, &CategoryFilter::All), items);
    }

    #[test]
    fn test_pages_cover_every_match(items in arb_achievements(), per_page in 1usize..8) {
        let matches = search(&items, "achievement");
        let pages = total_pages(matches.len(), per_page);
        let rejoined: Vec<Achievement> =
            (1..=pages).flat_map(|page| paginate(&matches, page, per_page)).collect();
        prop_assert_eq!(rejoined, matches);
    }
}
