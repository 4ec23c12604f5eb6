pub mod fade_in;
pub mod footer;
pub mod navbar;
pub mod page_loader;
pub mod scroll;
pub mod sections;
pub mod terminal_effect;

pub use fade_in::FadeIn;
pub use footer::Footer;
pub use navbar::Navbar;
pub use page_loader::{Loading, PageLoader};
pub use scroll::{ScrollButton, ScrollToTop};
pub use terminal_effect::{TerminalEffect, TypedText};
