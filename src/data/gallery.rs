use crate::models::{GalleryEntry, GalleryHighlight};

const UNSPLASH: &str = "https://images.unsplash.com/photo-";
const HIGHLIGHT_IMAGE: &str =
    "https://static.vecteezy.com/system/resources/previews/000/584/921/original/vector-coding-concept-with-laptop.jpg";

fn photos(ids: &[&str]) -> Vec<String> {
    ids.iter()
        .map(|id| format!("{UNSPLASH}{id}?ixlib=rb-4.0.3"))
        .collect()
}

pub fn gallery_events() -> Vec<GalleryEntry> {
    vec![
        GalleryEntry {
            id: 1,
            name: "Pulse 2023".to_string(),
            sponsor: "TechCorp Industries".to_string(),
            description: "Annual flagship hackathon event bringing together innovators and developers from across the country. 36 hours of non-stop innovation, coding and building the future.".to_string(),
            date: "October 15-16, 2023".to_string(),
            featured: true,
            photos: photos(&[
                "1504384308090-c894fdcc538d",
                "1517245386807-bb43f82c33c4",
                "1515187029135-18ee286d815b",
                "1520333789090-1afc82db536a",
            ]),
        },
        GalleryEntry {
            id: 2,
            name: "CodeCraft Workshop".to_string(),
            sponsor: "DevTools Pro".to_string(),
            description: "Intensive hands-on workshop covering modern web development technologies including React, Node.js and cloud deployment. Led by industry experts.".to_string(),
            date: "September 5, 2023".to_string(),
            featured: false,
            photos: photos(&[
                "1531482615713-2afd69097998",
                "1542744173-8e7e53415bb0",
                "1517245386807-bb43f82c33c4",
            ]),
        },
        GalleryEntry {
            id: 3,
            name: "AI Summit".to_string(),
            sponsor: "Neural Networks Inc".to_string(),
            description: "Premier conference exploring cutting-edge developments in artificial intelligence and machine learning. Featuring keynotes from leading researchers and hands-on demos.".to_string(),
            date: "August 20, 2023".to_string(),
            featured: true,
            photos: photos(&[
                "1485827404703-89b55fcc595e",
                "1573164713988-8665fc963095",
                "1559036376-8b0c870be1e0",
                "1552664730-d307ca884978",
            ]),
        },
    ]
}

/// Admin seed: Pulse 2023 only.
pub fn admin_gallery() -> Vec<GalleryEntry> {
    gallery_events().into_iter().take(1).collect()
}

pub fn highlights() -> Vec<GalleryHighlight> {
    [
        "Hackathon 2023",
        "Workshop Session",
        "Team Building",
        "Networking Event",
        "Panel Discussion",
        "Tech Talk",
        "Innovation Conference",
        "Startup Pitch",
        "Programming Contest",
        "AI & ML Workshop",
    ]
    .into_iter()
    .zip(1..)
    .map(|(alt, id)| GalleryHighlight {
        id,
        src: HIGHLIGHT_IMAGE.to_string(),
        alt: alt.to_string(),
    })
    .collect()
}
