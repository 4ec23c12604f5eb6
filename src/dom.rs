//! Browser glue: timers, listeners and the animation frame loop.
//!
//! Each handle owns its JS closure and releases the browser resource on
//! drop, so a component can park it in `on_cleanup` and forget about it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::AppError;

pub fn window() -> Result<Window, AppError> {
    web_sys::window().ok_or(AppError::NoWindow)
}

/// A `[0, 1)` sample from `Math.random`.
pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

/// Blocking `window.confirm`; false when the dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Repeating `setInterval` timer.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, AppError> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            clamp_ms(period_ms),
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// One-shot `setTimeout` timer; dropping it before it fires cancels it.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Self, AppError> {
        let callback = Closure::once(callback);
        let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            clamp_ms(delay_ms),
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Event listener attached to the window.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new(
        event: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, AppError> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        window()?.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that re-arms itself until dropped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Result<Self, AppError> {
        let window = window()?;
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let tick = {
            let window = window.clone();
            let running = Rc::clone(&running);
            let pending = Rc::clone(&pending);
            let callback = Rc::clone(&callback);
            move || {
                if !running.get() {
                    return;
                }
                frame();
                if let Some(next) = callback.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => {
                            log::warn!("Animation frame request failed: {err:?}");
                            running.set(false);
                        }
                    }
                }
            }
        };
        *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(tick));

        if let Some(first) = callback.borrow().as_ref() {
            pending.set(Some(
                window.request_animation_frame(first.as_ref().unchecked_ref())?,
            ));
        }

        Ok(Self {
            running,
            pending,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(window), Some(id)) = (web_sys::window(), self.pending.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Break the closure's reference to its own cell.
        self.callback.borrow_mut().take();
    }
}

fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}
