pub mod about;
pub mod achievements;
pub mod admin;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod home;
pub mod team;

pub use about::AboutPage;
pub use achievements::AchievementsPage;
pub use contact::ContactPage;
pub use events::EventsPage;
pub use gallery::GalleryPage;
pub use home::Home;
pub use team::TeamPage;
