use crate::models::{Event, PastEvent, PastEventStats, Sponsor, SponsorTier};

const EVENT_PLACEHOLDER: &str = "/placeholder.svg?height=400&width=600";

fn event(
    id: u32,
    title: &str,
    date: &str,
    time: &str,
    location: &str,
    description: &str,
    tags: &[&str],
) -> Event {
    Event {
        id,
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        image: EVENT_PLACEHOLDER.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

fn past_event(
    id: u32,
    title: &str,
    date: &str,
    image: &str,
    description: &str,
    stats: (u32, u32, &str),
) -> PastEvent {
    let (participants, projects, prizes) = stats;
    PastEvent {
        id,
        title: title.to_string(),
        date: date.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        stats: PastEventStats {
            participants,
            projects,
            prizes: prizes.to_string(),
        },
    }
}

pub fn upcoming_events() -> Vec<Event> {
    vec![
        event(
            1,
            "Hackathon 2023",
            "Dec 15-17, 2023",
            "48 Hours",
            "Main Campus",
            "Join us for a 48-hour coding marathon. Build innovative solutions and compete for amazing prizes.",
            &["Hackathon", "Competition"],
        ),
        event(
            2,
            "Web3 Workshop",
            "Nov 25, 2023",
            "2:00 PM - 5:00 PM",
            "Tech Lab",
            "Learn the fundamentals of blockchain technology and build your first decentralized application.",
            &["Workshop", "Web3"],
        ),
        event(
            3,
            "AI Conference",
            "Jan 10, 2024",
            "10:00 AM - 4:00 PM",
            "Virtual",
            "Explore the latest advancements in artificial intelligence and machine learning.",
            &["Conference", "AI"],
        ),
    ]
}

pub fn past_events() -> Vec<PastEvent> {
    vec![
        past_event(
            1,
            "Hackathon 2023",
            "October 15-16, 2023",
            "/events/hackathon.jpg",
            "48-hour coding marathon where teams built innovative solutions for real-world problems.",
            (150, 32, "$5000"),
        ),
        past_event(
            2,
            "Web Development Workshop",
            "September 5, 2023",
            "/events/webdev.jpg",
            "Hands-on workshop covering modern web technologies including React, Node.js and MongoDB.",
            (75, 25, ""),
        ),
        past_event(
            3,
            "Competitive Programming Contest",
            "August 20, 2023",
            "/events/coding.jpg",
            "Intense coding competition testing algorithmic and problem-solving skills.",
            (100, 0, "3 winners"),
        ),
        past_event(
            4,
            "Tech Talk Series",
            "July 10, 2023",
            "/events/techtalk.jpg",
            "Industry experts sharing insights on emerging technologies and career guidance.",
            (200, 0, ""),
        ),
    ]
}

pub fn sponsors() -> Vec<Sponsor> {
    let sponsor = |id, name: &str, slug: &str, tier, description: &str| Sponsor {
        id,
        name: name.to_string(),
        logo: format!("/sponsors/{slug}.svg"),
        tier,
        website: format!("https://{slug}.example.com"),
        description: description.to_string(),
    };
    vec![
        sponsor(
            1,
            "TechCorp Industries",
            "techcorp",
            SponsorTier::Platinum,
            "Leading technology solutions provider specializing in cloud infrastructure.",
        ),
        sponsor(
            2,
            "DevTools Pro",
            "devtools",
            SponsorTier::Gold,
            "Professional development tools and services for modern engineers.",
        ),
        sponsor(
            3,
            "Neural Networks Inc",
            "neural",
            SponsorTier::Gold,
            "Cutting-edge AI research and development company.",
        ),
        sponsor(
            4,
            "ByteWorks",
            "byteworks",
            SponsorTier::Silver,
            "Software development and consulting services.",
        ),
    ]
}

/// Admin seed: the first upcoming event only.
pub fn admin_events() -> Vec<Event> {
    upcoming_events().into_iter().take(1).collect()
}

/// Admin seed: the first past event only.
pub fn admin_past_events() -> Vec<PastEvent> {
    past_events().into_iter().take(1).collect()
}
