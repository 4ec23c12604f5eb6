use std::collections::VecDeque;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::SiteConfig;
use crate::dom::{self, WindowListener};
use crate::error::AppError;

/// Pointer state driving the cursor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Idle,
    /// Hovering a link or button.
    Pointer,
    Clicking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
}

impl CursorMode {
    /// Clicking wins over hovering.
    pub const fn resolve(pointer: bool, clicking: bool) -> Self {
        if clicking {
            Self::Clicking
        } else if pointer {
            Self::Pointer
        } else {
            Self::Idle
        }
    }

    /// Colours for the glow, the trail dots and the core ring.
    pub const fn palette(self) -> CursorPalette {
        match self {
            Self::Clicking => CursorPalette {
                primary: "rgba(255, 0, 128, 0.95)",
                secondary: "rgba(128, 0, 255, 0.8)",
                tertiary: "rgba(255, 80, 0, 0.6)",
            },
            Self::Pointer => CursorPalette {
                primary: "rgba(0, 255, 255, 0.95)",
                secondary: "rgba(0, 128, 255, 0.8)",
                tertiary: "rgba(0, 255, 170, 0.6)",
            },
            Self::Idle => CursorPalette {
                primary: "rgba(170, 0, 255, 0.9)",
                secondary: "rgba(0, 255, 255, 0.7)",
                tertiary: "rgba(255, 0, 255, 0.5)",
            },
        }
    }

    /// Diameter of the core dot in pixels.
    pub const fn core_size(self) -> f64 {
        match self {
            Self::Pointer => 28.0,
            Self::Idle | Self::Clicking => 22.0,
        }
    }
}

/// Most recent pointer positions, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CursorTrail {
    points: VecDeque<(f64, f64)>,
    capacity: usize,
}

impl CursorTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a new position, forgetting the oldest past capacity.
    pub fn push(&mut self, x: f64, y: f64) {
        if self.capacity == 0 {
            return;
        }
        self.points.push_front((x, y));
        self.points.truncate(self.capacity);
    }

    /// Positions, newest first.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Opacity of the trail dot at `index` (0 = newest).
#[allow(clippy::cast_precision_loss)]
pub fn trail_opacity(index: usize) -> f64 {
    (0.9 - index as f64 * 0.15).max(0.0)
}

/// Scale of the trail dot at `index` (0 = newest).
#[allow(clippy::cast_precision_loss)]
pub fn trail_scale(index: usize) -> f64 {
    (1.0 - index as f64 * 0.15).max(0.0)
}

fn is_clickable(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a, button, [role=button]").ok().flatten())
        .is_some()
}

fn set_body_cursor(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("cursor", value);
    }
}

#[derive(Clone, Copy)]
struct CursorSignals {
    position: RwSignal<(f64, f64)>,
    trail: RwSignal<CursorTrail>,
    pointer: RwSignal<bool>,
    clicking: RwSignal<bool>,
}

fn listen(signals: CursorSignals) -> Result<[WindowListener; 4], AppError> {
    let track = WindowListener::new("mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
            let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            signals.position.set((x, y));
            signals.trail.update(|trail| trail.push(x, y));
        }
    })?;
    let hover = WindowListener::new("mouseover", move |ev| {
        signals.pointer.set(is_clickable(ev.target()));
    })?;
    let press = WindowListener::new("mousedown", move |_| signals.clicking.set(true))?;
    let release = WindowListener::new("mouseup", move |_| signals.clicking.set(false))?;
    Ok([track, hover, press, release])
}

/// Neon cursor with a fading trail. Replaces the system cursor while mounted.
#[component]
pub fn CyberCursor() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let signals = CursorSignals {
        position: RwSignal::new((-100.0, -100.0)),
        trail: RwSignal::new(CursorTrail::new(config.cursor_trail_length)),
        pointer: RwSignal::new(false),
        clicking: RwSignal::new(false),
    };

    match dom::window().and_then(|_| listen(signals)) {
        Ok(listeners) => {
            set_body_cursor("none");
            let listeners = SendWrapper::new(listeners);
            on_cleanup(move || {
                drop(listeners);
                set_body_cursor("auto");
            });
        }
        Err(err) => log::warn!("Cursor effect disabled: {err}"),
    }

    let mode = Memo::new(move |_| CursorMode::resolve(signals.pointer.get(), signals.clicking.get()));

    let glow_style = move || {
        let (x, y) = signals.position.get();
        let palette = mode.get().palette();
        format!(
            "left:{x}px;top:{y}px;width:300px;height:300px;\
             background:radial-gradient(circle, {} 0%, {} 50%, rgba(0,0,0,0) 70%);opacity:0.45",
            palette.primary, palette.secondary
        )
    };

    let core_style = move || {
        let (x, y) = signals.position.get();
        let mode = mode.get();
        let size = mode.core_size();
        let palette = mode.palette();
        format!(
            "left:{x}px;top:{y}px;width:{size}px;height:{size}px;\
             border:2px solid {};box-shadow:0 0 20px 6px {}",
            palette.primary, palette.tertiary
        )
    };

    let trail_dots = move || {
        let palette = mode.get().palette();
        signals.trail.with(|trail| {
            trail
                .points()
                .enumerate()
                .map(|(i, (x, y))| {
                    let style = format!(
                        "left:{x}px;top:{y}px;opacity:{:.2};transform:translate(-50%, -50%) scale({:.2});background:{}",
                        trail_opacity(i),
                        trail_scale(i),
                        palette.secondary
                    );
                    view! { <div class="cursor-trail-dot" style=style></div> }
                })
                .collect_view()
        })
    };

    view! {
        <div class="cyber-cursor" aria-hidden="true">
            <div class="cursor-glow" style=glow_style></div>
            {trail_dots}
            <div class="cursor-core" style=core_style></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_keeps_newest_first_and_caps() {
        let mut trail = CursorTrail::new(6);
        for i in 0..10 {
            trail.push(f64::from(i), 0.0);
        }
        assert_eq!(trail.len(), 6);
        let xs: Vec<f64> = trail.points().map(|(x, _)| x).collect();
        assert_eq!(xs, vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0]);
    }

    #[test]
    fn test_zero_capacity_trail_stays_empty() {
        let mut trail = CursorTrail::new(0);
        trail.push(1.0, 1.0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_fade_per_index() {
        assert!((trail_opacity(0) - 0.9).abs() < 1e-9);
        assert!((trail_opacity(5) - 0.15).abs() < 1e-9);
        assert!((trail_scale(2) - 0.7).abs() < 1e-9);
        assert!(trail_opacity(10).abs() < 1e-9);
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(CursorMode::resolve(false, false), CursorMode::Idle);
        assert_eq!(CursorMode::resolve(true, false), CursorMode::Pointer);
        assert_eq!(CursorMode::resolve(true, true), CursorMode::Clicking);
        assert!(CursorMode::Pointer.core_size() > CursorMode::Idle.core_size());
        assert_ne!(CursorMode::Idle.palette(), CursorMode::Clicking.palette());
    }
}
