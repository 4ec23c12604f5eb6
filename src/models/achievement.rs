use super::collection::{contains_ci, Categorized, Record, Searchable};

/// Category that counts toward the "awards won" stat.
pub const AWARD_CATEGORY: &str = "Award";

/// Categories offered by the admin form.
pub const ADMIN_CATEGORIES: [&str; 6] = [
    "Award",
    "Community",
    "Research",
    "Business",
    "Event",
    "Education",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AchievementIcon {
    #[default]
    Trophy,
    Award,
    Certificate,
    Medal,
    Star,
    Users,
    Project,
    Workshop,
    Code,
    Laptop,
    Globe,
    Brain,
    Handshake,
    Lightbulb,
}

impl AchievementIcon {
    /// Icons offered by the admin form.
    pub const SELECTABLE: [Self; 8] = [
        Self::Trophy,
        Self::Award,
        Self::Certificate,
        Self::Medal,
        Self::Star,
        Self::Users,
        Self::Project,
        Self::Workshop,
    ];

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Trophy => "🏆",
            Self::Award => "🎖",
            Self::Certificate => "📜",
            Self::Medal => "🏅",
            Self::Star => "⭐",
            Self::Users => "👥",
            Self::Project => "🗂",
            Self::Workshop => "🧑‍🏫",
            Self::Code => "💻",
            Self::Laptop => "🖥",
            Self::Globe => "🌐",
            Self::Brain => "🧠",
            Self::Handshake => "🤝",
            Self::Lightbulb => "💡",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Trophy => "Trophy",
            Self::Award => "Award",
            Self::Certificate => "Certificate",
            Self::Medal => "Medal",
            Self::Star => "Star",
            Self::Users => "Users",
            Self::Project => "Project",
            Self::Workshop => "Workshop",
            Self::Code => "Code",
            Self::Laptop => "Laptop",
            Self::Globe => "Globe",
            Self::Brain => "Brain",
            Self::Handshake => "Handshake",
            Self::Lightbulb => "Lightbulb",
        }
    }

    /// Inverse of `label`; unknown names fall back to the trophy.
    pub fn from_label(label: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .chain([
                Self::Code,
                Self::Laptop,
                Self::Globe,
                Self::Brain,
                Self::Handshake,
                Self::Lightbulb,
            ])
            .find(|icon| icon.label() == label)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub year: String,
    pub icon: AchievementIcon,
    pub description: String,
    pub category: String,
}

impl Achievement {
    /// Empty admin draft for the given year.
    pub fn blank(year: &str) -> Self {
        Self {
            year: year.to_string(),
            category: AWARD_CATEGORY.to_string(),
            ..Self::default()
        }
    }

    /// Whether the record counts towards the awards stat.
    pub fn is_award(&self) -> bool {
        self.category == AWARD_CATEGORY
    }
}

impl Record for Achievement {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Categorized for Achievement {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Achievement {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
            || contains_ci(&self.description, needle)
            || contains_ci(&self.year, needle)
            || contains_ci(&self.category, needle)
    }
}

/// Counters displayed above the achievements list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClubStats {
    pub awards_won: u32,
    pub total_members: u32,
    pub projects_completed: u32,
    pub workshops_conducted: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    AwardsWon,
    TotalMembers,
    ProjectsCompleted,
    WorkshopsConducted,
}

impl StatKey {
    pub const ALL: [Self; 4] = [
        Self::AwardsWon,
        Self::TotalMembers,
        Self::ProjectsCompleted,
        Self::WorkshopsConducted,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AwardsWon => "Awards Won",
            Self::TotalMembers => "Total Members",
            Self::ProjectsCompleted => "Projects Completed",
            Self::WorkshopsConducted => "Workshops Conducted",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::AwardsWon => "🏆",
            Self::TotalMembers => "👥",
            Self::ProjectsCompleted => "🗂",
            Self::WorkshopsConducted => "🧑‍🏫",
        }
    }
}

impl ClubStats {
    /// Current value of one counter.
    pub const fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::AwardsWon => self.awards_won,
            StatKey::TotalMembers => self.total_members,
            StatKey::ProjectsCompleted => self.projects_completed,
            StatKey::WorkshopsConducted => self.workshops_conducted,
        }
    }

    /// Overwrite one counter.
    pub fn set(&mut self, key: StatKey, value: u32) {
        match key {
            StatKey::AwardsWon => self.awards_won = value,
            StatKey::TotalMembers => self.total_members = value,
            StatKey::ProjectsCompleted => self.projects_completed = value,
            StatKey::WorkshopsConducted => self.workshops_conducted = value,
        }
    }

    /// Account for a newly added achievement.
    pub fn record_added(&mut self, achievement: &Achievement) {
        if achievement.is_award() {
            self.awards_won += 1;
        }
    }

    /// Account for a deleted achievement.
    pub fn record_removed(&mut self, achievement: &Achievement) {
        if achievement.is_award() {
            self.awards_won = self.awards_won.saturating_sub(1);
        }
    }
}

/// A labelled number shown in the public stats strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub id: u32,
    pub label: String,
    pub value: u32,
    pub glyph: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(category: &str) -> Achievement {
        Achievement {
            category: category.to_string(),
            ..Achievement::default()
        }
    }

    #[test]
    fn test_award_stats_follow_adds_and_removes() {
        let mut stats = ClubStats {
            awards_won: 1,
            ..ClubStats::default()
        };
        stats.record_added(&achievement("Award"));
        stats.record_added(&achievement("Research"));
        assert_eq!(stats.awards_won, 2);

        stats.record_removed(&achievement("Award"));
        stats.record_removed(&achievement("Award"));
        stats.record_removed(&achievement("Award"));
        assert_eq!(stats.awards_won, 0);
    }

    #[test]
    fn test_stat_get_set() {
        let mut stats = ClubStats::default();
        for (value, key) in (10..).zip(StatKey::ALL) {
            stats.set(key, value);
            assert_eq!(stats.get(key), value);
        }
    }

    #[test]
    fn test_icon_label_round_trip() {
        for icon in AchievementIcon::SELECTABLE {
            assert_eq!(AchievementIcon::from_label(icon.label()), icon);
        }
        assert_eq!(AchievementIcon::from_label("unknown"), AchievementIcon::Trophy);
    }

    #[test]
    fn test_blank_defaults_to_award() {
        let blank = Achievement::blank("2024");
        assert!(blank.is_award());
        assert_eq!(blank.year, "2024");
        assert_eq!(blank.id, 0);
    }
}
