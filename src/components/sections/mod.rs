//! Page sections shared between the home page and the full pages.

pub mod achievements;
pub mod events;
pub mod gallery;
pub mod hero;
pub mod past_events;
pub mod team;
pub mod web_team;

pub use achievements::{AchievementCard, AchievementGrid, AchievementsSection, CategoryTabs, HighlightStrip};
pub use events::UpcomingEvents;
pub use gallery::GalleryMarquee;
pub use hero::Hero;
pub use past_events::{PastEvents, Sponsors};
pub use team::{MemberCard, TeamPreview};
pub use web_team::WebTeam;
