pub mod achievement;
pub mod collection;
pub mod contact;
pub mod event;
pub mod gallery;
pub mod loader;
pub mod nav;
pub mod team;
pub mod typing;

pub use achievement::{Achievement, AchievementIcon, ClubStats, Highlight, StatKey};
pub use collection::{
    category_options, filter_by_category, paginate, search, total_pages, Categorized,
    CategoryFilter, Collection, Editor, Record, Searchable,
};
pub use contact::{ContactForm, ContactFormState, ContactMessage, SubmitStatus};
pub use event::{Event, PastEvent, PastEventStats, Sponsor, SponsorTier};
pub use gallery::{FeaturedFilter, GalleryEntry, GalleryHighlight, PhotoLoad, PhotoViewer};
pub use loader::LoadProgress;
pub use nav::NavMenu;
pub use team::{SocialLinks, TeamCategory, TeamMember, WebTeamMember};
pub use typing::TypingState;
