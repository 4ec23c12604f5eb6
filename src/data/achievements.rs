use crate::models::{Achievement, AchievementIcon, ClubStats, Highlight};

fn achievement(
    id: u32,
    title: &str,
    year: &str,
    icon: AchievementIcon,
    description: &str,
    category: &str,
) -> Achievement {
    Achievement {
        id,
        title: title.to_string(),
        year: year.to_string(),
        icon,
        description: description.to_string(),
        category: category.to_string(),
    }
}

fn highlight(id: u32, label: &str, value: u32, glyph: &'static str) -> Highlight {
    Highlight {
        id,
        label: label.to_string(),
        value,
        glyph,
    }
}

/// Achievements page grid.
#[rustfmt::skip]
pub fn achievements() -> Vec<Achievement> {
    use AchievementIcon as I;
    vec![
        achievement(1, "National Coding Championship", "2023", I::Trophy,
            "First place in the prestigious National Coding Championship, competing against 500+ teams from across the country.",
            "Competition"),
        achievement(2, "Google Developer Conference", "2022", I::Code,
            "Selected to present our innovative AI solution at the annual Google Developer Conference in San Francisco.",
            "Recognition"),
        achievement(3, "Microsoft Student Partner Program", "2023", I::Laptop,
            "Five team members selected for the exclusive Microsoft Student Partner program, representing our university.",
            "Partnership"),
        achievement(4, "Open Source Contribution Award", "2022", I::Globe,
            "Recognized for significant contributions to major open source projects, with over 200+ pull requests merged.",
            "Community"),
        achievement(5, "Hackathon Series Champion", "2023", I::Award,
            "Won three consecutive major hackathons, developing innovative solutions for healthcare, education, and sustainability.",
            "Competition"),
        achievement(6, "AI Research Publication", "2023", I::Brain,
            "Research paper on novel machine learning algorithms accepted and published in a leading international journal.",
            "Research"),
        achievement(7, "Tech Workshop Series", "2022", I::Users,
            "Successfully conducted a series of technical workshops, training over 500 students in emerging technologies.",
            "Education"),
        achievement(8, "Industry Certification Program", "2023", I::Certificate,
            "Established a certification program in partnership with leading tech companies, with 100+ certified graduates.",
            "Education"),
    ]
}

pub fn page_highlights() -> Vec<Highlight> {
    vec![
        highlight(1, "Awards Won", 42, "🏆"),
        highlight(2, "Team Members", 120, "👥"),
        highlight(3, "Projects Completed", 75, "💻"),
        highlight(4, "Workshops Conducted", 65, "🖥"),
    ]
}

/// Home page section.
#[rustfmt::skip]
pub fn home_achievements() -> Vec<Achievement> {
    use AchievementIcon as I;
    vec![
        achievement(1, "National Hackathon Champions", "2023", I::Trophy,
            "First place at the National Collegiate Hackathon 2023", "Competition"),
        achievement(2, "Google Solution Challenge", "2022", I::Award,
            "Top 10 finalist in the Google Solution Challenge", "Recognition"),
        achievement(3, "ACM-ICPC Regional", "2023", I::Medal,
            "3rd place at the ACM-ICPC Regional Programming Contest", "Competition"),
        achievement(4, "GitHub Campus Expert", "2022", I::Code,
            "Two members selected as GitHub Campus Experts", "Recognition"),
    ]
}

pub fn home_highlights() -> Vec<Highlight> {
    vec![
        highlight(1, "Events Organized", 50, "💻"),
        highlight(2, "Active Members", 1000, "⭐"),
        highlight(3, "Awards Won", 25, "🏆"),
        highlight(4, "Projects Completed", 100, "💻"),
    ]
}

#[rustfmt::skip]
pub fn admin_achievements() -> Vec<Achievement> {
    use AchievementIcon as I;
    vec![
        achievement(1, "National Innovation Award", "2023", I::Trophy,
            "Recognized for outstanding contributions to technological innovation in cybersecurity.",
            "Award"),
        achievement(2, "Tech Excellence Award", "2022", I::Award,
            "Awarded for excellence in developing cutting-edge solutions for the industry.",
            "Award"),
        achievement(3, "Community Impact Program", "2023", I::Users,
            "Successfully implemented a tech education program reaching over 500 underprivileged students.",
            "Community"),
        achievement(4, "Research Publication", "2021", I::Project,
            "Published research on emerging technologies in a renowned international journal.",
            "Research"),
        achievement(5, "Partnership Milestone", "2023", I::Handshake,
            "Established strategic partnerships with 10 Fortune 500 companies.",
            "Business"),
        achievement(6, "Innovation Summit", "2022", I::Lightbulb,
            "Hosted the largest tech innovation summit in the region with over 2,000 attendees.",
            "Event"),
        achievement(7, "Global Expansion", "2022", I::Globe,
            "Expanded operations to 5 new countries, establishing a truly global presence.",
            "Business"),
        achievement(8, "Industry Certification Program", "2023", I::Certificate,
            "Established a certification program in partnership with leading tech companies, with 100+ certified graduates.",
            "Education"),
    ]
}

pub const fn admin_stats() -> ClubStats {
    ClubStats {
        awards_won: 42,
        total_members: 150,
        projects_completed: 85,
        workshops_conducted: 36,
    }
}
