//! Ambient background effects.
//!
//! Each effect is split into a pure simulation, which takes its randomness
//! as an `FnMut() -> f64` sampler, and a component that drives it from
//! browser timers and paints it.

pub mod cursor;
pub mod matrix;
pub mod particles;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::dom;
use crate::error::AppError;

pub use cursor::CyberCursor;
pub use matrix::{MatrixCanvas, MatrixStyle};
pub use particles::{ParticleCanvas, ParticleStyle};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, AppError> {
    canvas
        .get_context("2d")?
        .ok_or(AppError::NoCanvasContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::NoCanvasContext)
}

/// Size the canvas backing store to the viewport and return the new size.
pub fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(f64, f64), AppError> {
    let window = dom::window()?;
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    apply_size(canvas, width, height);
    Ok((width, height))
}

/// Size the canvas backing store to its own layout box.
pub fn fit_to_element(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = f64::from(canvas.offset_width());
    let height = f64::from(canvas.offset_height());
    apply_size(canvas, width, height);
    (width, height)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn apply_size(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

/// Uniform sample in `[low, high)`.
pub(crate) fn sample_range(rng: &mut impl FnMut() -> f64, low: f64, high: f64) -> f64 {
    rng().mul_add(high - low, low)
}

/// Uniform index in `0..len`; `len` must be non-zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn sample_index(rng: &mut impl FnMut() -> f64, len: usize) -> usize {
    ((rng() * len as f64) as usize).min(len - 1)
}
