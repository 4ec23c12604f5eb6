use super::collection::Record;

/// Upcoming club event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl Event {
    /// Append a trimmed tag. Blank input and duplicates are ignored.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Drop `tag`; unknown tags are ignored.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }
}

impl Record for Event {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Headline numbers for a finished event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PastEventStats {
    pub participants: u32,
    pub projects: u32,
    /// Free text such as "$5000"; empty when there were no prizes.
    pub prizes: String,
}

impl PastEventStats {
    /// Label/value pairs to display, skipping zero counts and empty prizes.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if self.participants > 0 {
            entries.push(("participants", self.participants.to_string()));
        }
        if self.projects > 0 {
            entries.push(("projects", self.projects.to_string()));
        }
        if !self.prizes.is_empty() {
            entries.push(("prizes", self.prizes.clone()));
        }
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PastEvent {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub image: String,
    pub description: String,
    pub stats: PastEventStats,
}

impl Record for PastEvent {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
}

impl SponsorTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Platinum => "Platinum",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Platinum => "text-cyan-300 border-cyan-400/60",
            Self::Gold => "text-yellow-300 border-yellow-400/60",
            Self::Silver => "text-gray-300 border-gray-400/60",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sponsor {
    pub id: u32,
    pub name: String,
    pub logo: String,
    pub tier: SponsorTier,
    pub website: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_trims_and_skips_blank() {
        let mut event = Event::default();
        assert!(event.add_tag("  AI "));
        assert!(!event.add_tag("   "));
        assert!(!event.add_tag("AI"));
        assert_eq!(event.tags, vec!["AI"]);
    }

    #[test]
    fn test_remove_tag() {
        let mut event = Event {
            tags: vec!["Hackathon".into(), "Competition".into()],
            ..Event::default()
        };
        event.remove_tag("Hackathon");
        assert_eq!(event.tags, vec!["Competition"]);
    }

    #[test]
    fn test_stat_entries_skip_blanks() {
        let stats = PastEventStats {
            participants: 75,
            projects: 0,
            prizes: String::new(),
        };
        assert_eq!(stats.entries(), vec![("participants", "75".to_string())]);
    }
}
