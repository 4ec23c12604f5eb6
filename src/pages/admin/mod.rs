//! Mock management pages under `/admin`. Every page seeds its own
//! collection on mount; nothing is persisted.

pub mod achievements;
pub mod contact;
pub mod events;
pub mod form;
pub mod gallery;
pub mod layout;
pub mod team;

pub use achievements::AdminAchievementsPage;
pub use contact::AdminContactPage;
pub use events::AdminEventsPage;
pub use gallery::AdminGalleryPage;
pub use layout::{AdminHome, AdminLayout};
pub use team::AdminTeamPage;
