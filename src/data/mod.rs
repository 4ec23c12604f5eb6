//! Seed records. Every page builds its own copy when it mounts.

pub mod achievements;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod team;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collection, Record};

    fn assert_unique_ids<T: Record>(items: Vec<T>) {
        let count = items.len();
        let mut ids: Vec<u32> = items.iter().map(Record::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        assert_unique_ids(events::upcoming_events());
        assert_unique_ids(events::past_events());
        assert_unique_ids(achievements::achievements());
        assert_unique_ids(achievements::admin_achievements());
        assert_unique_ids(gallery::gallery_events());
        assert_unique_ids(contact::inbox());

        let mut roster = team::executives();
        roster.extend(team::associates());
        roster.extend(team::past_members());
        assert_unique_ids(roster);
    }

    #[test]
    fn test_admin_seed_next_ids() {
        assert_eq!(Collection::new(events::admin_events()).next_id(), 2);
        assert_eq!(Collection::new(achievements::admin_achievements()).next_id(), 9);
        assert_eq!(Collection::new(team::admin_team()).next_id(), 4);
        assert_eq!(Collection::new(contact::inbox()).next_id(), 4);
    }

    #[test]
    fn test_admin_stats_count_seeded_awards() {
        let awards = achievements::admin_achievements()
            .iter()
            .filter(|a| a.is_award())
            .count();
        assert_eq!(awards, 2);
        assert_eq!(achievements::admin_stats().awards_won, 42);
    }

    #[test]
    fn test_past_members_carry_years() {
        assert!(team::past_members().iter().all(|m| m.years.is_some()));
        assert!(team::executives().iter().all(|m| m.years.is_none()));
    }
}
