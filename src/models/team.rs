use super::collection::{contains_ci, Categorized, Record, Searchable};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl SocialLinks {
    /// Placeholder links used by the seed data.
    pub fn placeholder() -> Self {
        Self {
            github: "#".to_string(),
            linkedin: "#".to_string(),
            twitter: "#".to_string(),
        }
    }
}

/// Cohort a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamCategory {
    #[default]
    Executive,
    Associate,
    TechVisionary,
    Past,
}

impl TeamCategory {
    /// Cohorts offered by the admin form.
    pub const EDITABLE: [Self; 3] = [Self::Executive, Self::Associate, Self::TechVisionary];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Executive => "Executives",
            Self::Associate => "Associate Members",
            Self::TechVisionary => "Tech Visionary Members",
            Self::Past => "Past Members",
        }
    }

    /// Parse a dropdown value.
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::Executive, Self::Associate, Self::TechVisionary, Self::Past]
            .into_iter()
            .find(|category| category.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
    pub social: SocialLinks,
    pub category: TeamCategory,
    /// Tenure, for past members only.
    pub years: Option<String>,
}

impl TeamMember {
    /// First letter of each word in the name, for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

impl Record for TeamMember {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Categorized for TeamMember {
    fn category(&self) -> &str {
        self.category.label()
    }
}

impl Searchable for TeamMember {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.role, needle)
            || contains_ci(self.category.label(), needle)
    }
}

/// One of the people who built this site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebTeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub photo: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in TeamCategory::EDITABLE {
            assert_eq!(TeamCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(TeamCategory::from_label("Interns"), None);
    }

    #[test]
    fn test_search_covers_role_and_category() {
        let member = TeamMember {
            name: "Taylor Kim".into(),
            role: "Tech Visionary".into(),
            category: TeamCategory::TechVisionary,
            ..TeamMember::default()
        };
        assert!(member.matches("taylor"));
        assert!(member.matches("visionary members"));
        assert!(!member.matches("president"));
    }

    #[test]
    fn test_initials() {
        let member = TeamMember {
            name: "Priya  Patel".into(),
            ..TeamMember::default()
        };
        assert_eq!(member.initials(), "PP");
    }
}
