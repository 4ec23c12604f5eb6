pub mod scroll;

pub use scroll::{
    scroll_window_top, use_scroll_top, use_scrolled_past, ScrollBlock, ScrollMode, ScrollOptions,
};
