use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::dom::{self, Timeout, WindowListener};
use crate::error::AppError;
use crate::models::nav::is_compact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    #[default]
    Smooth,
    Auto,
}

impl ScrollMode {
    const fn behavior(self) -> ScrollBehavior {
        match self {
            Self::Smooth => ScrollBehavior::Smooth,
            Self::Auto => ScrollBehavior::Auto,
        }
    }
}

/// Vertical alignment of an element scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

impl ScrollBlock {
    const fn position(self) -> ScrollLogicalPosition {
        match self {
            Self::Start => ScrollLogicalPosition::Start,
            Self::Center => ScrollLogicalPosition::Center,
            Self::End => ScrollLogicalPosition::End,
            Self::Nearest => ScrollLogicalPosition::Nearest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub enabled: bool,
    pub mode: ScrollMode,
    pub delay_ms: u32,
    pub block: ScrollBlock,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: ScrollMode::Smooth,
            delay_ms: 0,
            block: ScrollBlock::Start,
        }
    }
}

/// Scroll the viewport to the origin.
pub fn scroll_window_top(mode: ScrollMode) -> Result<(), AppError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(mode.behavior());
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn scroll_to_target(target: Option<web_sys::HtmlDivElement>, options: ScrollOptions) {
    match target {
        Some(element) => {
            let into_view = ScrollIntoViewOptions::new();
            into_view.set_behavior(options.mode.behavior());
            into_view.set_block(options.block.position());
            element.scroll_into_view_with_scroll_into_view_options(&into_view);
        }
        None => {
            if let Err(err) = scroll_window_top(options.mode) {
                log::warn!("Scroll to top failed: {err}");
            }
        }
    }
}

/// Scroll to the returned element once on mount.
///
/// With no element attached to the ref the window is scrolled to the top
/// instead. A non-zero `delay_ms` defers the scroll; unmounting first
/// cancels it.
pub fn use_scroll_top(options: ScrollOptions) -> NodeRef<Div> {
    let target = NodeRef::<Div>::new();
    if !options.enabled {
        return target;
    }

    Effect::new(move |_| {
        let run = move || scroll_to_target(target.get_untracked(), options);
        if options.delay_ms == 0 {
            run();
            return;
        }
        match Timeout::new(options.delay_ms, run) {
            Ok(timer) => {
                let timer = SendWrapper::new(timer);
                on_cleanup(move || drop(timer));
            }
            Err(err) => log::warn!("Delayed scroll disabled: {err}"),
        }
    });

    target
}

/// Tracks whether the window has scrolled past `threshold` pixels.
pub fn use_scrolled_past(threshold: f64) -> ReadSignal<bool> {
    let (past, set_past) = signal(is_compact(dom::scroll_y(), threshold));
    match WindowListener::new("scroll", move |_| {
        set_past.set(is_compact(dom::scroll_y(), threshold));
    }) {
        Ok(listener) => {
            let listener = SendWrapper::new(listener);
            on_cleanup(move || drop(listener));
        }
        Err(err) => log::warn!("Scroll tracking disabled: {err}"),
    }
    past
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_scroll_smoothly_to_start() {
        let options = ScrollOptions::default();
        assert!(options.enabled);
        assert_eq!(options.mode, ScrollMode::Smooth);
        assert_eq!(options.block, ScrollBlock::Start);
        assert_eq!(options.delay_ms, 0);
    }
}
