use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{context_2d, fit_to_element, fit_to_window, sample_index};
use crate::config::SiteConfig;
use crate::dom::{self, Interval, WindowListener};
use crate::error::AppError;

const CODE_GLYPHS: &str = "10アイウエオカキクケコサシスセソタチツテト{}[]=><&|!;:~^%$#@*/\\+-_ナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";
const KATAKANA_GLYPHS: &str =
    "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";
const WASH: &str = "rgba(0, 0, 0, 0.05)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixStyle {
    /// Ones and zeros in flat green.
    Binary,
    /// Katakana and code symbols with a shifting green and rare highlights.
    Code,
    /// Dense katakana sized to its container, drops start scattered.
    Katakana,
}

impl MatrixStyle {
    /// Characters a drop picks from.
    pub fn glyphs(self) -> Vec<char> {
        match self {
            Self::Binary => vec!['0', '1'],
            Self::Code => CODE_GLYPHS.chars().collect(),
            Self::Katakana => KATAKANA_GLYPHS.chars().collect(),
        }
    }

    /// Glyph height in pixels; also the column width.
    pub const fn font_size(self) -> f64 {
        match self {
            Self::Binary | Self::Code => 14.0,
            Self::Katakana => 12.0,
        }
    }

    /// A drop past the bottom restarts when a sample exceeds this.
    pub const fn reset_threshold(self) -> f64 {
        match self {
            Self::Binary | Self::Code => 0.975,
            Self::Katakana => 0.99,
        }
    }

    /// Tick period; the katakana variant runs on its own cadence.
    pub const fn frame_ms(self, configured: u32) -> u32 {
        match self {
            Self::Binary | Self::Code => configured,
            Self::Katakana => 33,
        }
    }

    const fn fills_window(self) -> bool {
        !matches!(self, Self::Katakana)
    }
}

/// One glyph painted during a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub highlight: bool,
}

#[derive(Debug, Clone)]
pub struct MatrixRain {
    style: MatrixStyle,
    glyphs: Vec<char>,
    height: f64,
    /// Row index of each column's head.
    drops: Vec<u32>,
}

impl MatrixRain {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    /// Rain sized to the canvas, drops seeded from `rng`.
    pub fn new(style: MatrixStyle, width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let font = style.font_size();
        let columns = match style {
            // A partial column at the right edge still rains.
            MatrixStyle::Binary | MatrixStyle::Code => (width / font).ceil(),
            MatrixStyle::Katakana => (width / font).floor(),
        }
        .max(0.0) as usize;
        let rows = (height / font).max(1.0) as usize;
        let drops = (0..columns)
            .map(|_| match style {
                MatrixStyle::Katakana => sample_index(rng, rows) as u32,
                MatrixStyle::Binary | MatrixStyle::Code => 1,
            })
            .collect();
        Self {
            style,
            glyphs: style.glyphs(),
            height,
            drops,
        }
    }

    /// Number of falling columns.
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Current row of each column's head.
    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Height changes only; the column count is fixed at creation.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Advance every drop by one row and return the glyphs to paint.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn tick(&mut self, rng: &mut impl FnMut() -> f64) -> Vec<Cell> {
        let font = self.style.font_size();
        let mut cells = Vec::with_capacity(self.drops.len());
        for (column, head) in self.drops.iter_mut().enumerate() {
            let color = match self.style {
                MatrixStyle::Binary => "#0f0".to_string(),
                MatrixStyle::Code => {
                    let green = 200 + (rng() * 55.0) as u32;
                    format!("rgba(0, {green}, {}, 0.8)", green / 2)
                }
                MatrixStyle::Katakana => "#0fa".to_string(),
            };
            let glyph = self.glyphs[sample_index(rng, self.glyphs.len())];
            let highlight = self.style == MatrixStyle::Code && rng() > 0.995;
            let y = f64::from(*head) * font;
            cells.push(Cell {
                glyph,
                x: column as f64 * font,
                y,
                color,
                highlight,
            });
            if y > self.height && rng() > self.style.reset_threshold() {
                *head = 0;
            }
            *head += 1;
        }
        cells
    }
}

fn paint(
    ctx: &CanvasRenderingContext2d,
    style: MatrixStyle,
    size: (f64, f64),
    cells: &[Cell],
) -> Result<(), AppError> {
    let font = style.font_size();
    ctx.set_fill_style_str(WASH);
    ctx.fill_rect(0.0, 0.0, size.0, size.1);
    ctx.set_font(&format!("{font}px 'JetBrains Mono', monospace"));
    let mut buf = [0u8; 4];
    for cell in cells {
        ctx.set_fill_style_str(&cell.color);
        ctx.fill_text(cell.glyph.encode_utf8(&mut buf), cell.x, cell.y)?;
        if cell.highlight {
            ctx.set_fill_style_str("rgba(0, 255, 170, 0.3)");
            ctx.fill_rect(cell.x, cell.y, font, font);
        }
    }
    Ok(())
}

type MatrixHandles = (Interval, Option<WindowListener>);

fn start(
    canvas: &HtmlCanvasElement,
    style: MatrixStyle,
    frame_ms: u32,
) -> Result<MatrixHandles, AppError> {
    let ctx = context_2d(canvas)?;
    let (width, height) = if style.fills_window() {
        fit_to_window(canvas)?
    } else {
        fit_to_element(canvas)
    };
    let size = Rc::new(std::cell::Cell::new((width, height)));
    let rain = Rc::new(RefCell::new(MatrixRain::new(
        style,
        width,
        height,
        &mut dom::random,
    )));

    let ticker = {
        let size = Rc::clone(&size);
        let rain = Rc::clone(&rain);
        Interval::new(style.frame_ms(frame_ms), move || {
            let cells = rain.borrow_mut().tick(&mut dom::random);
            if let Err(err) = paint(&ctx, style, size.get(), &cells) {
                log::warn!("Matrix paint failed: {err}");
            }
        })?
    };

    let resize = if style.fills_window() {
        let canvas = canvas.clone();
        Some(WindowListener::new("resize", move |_| {
            match fit_to_window(&canvas) {
                Ok(new_size) => {
                    size.set(new_size);
                    rain.borrow_mut().set_height(new_size.1);
                }
                Err(err) => log::warn!("Matrix resize failed: {err}"),
            }
        })?)
    } else {
        None
    };

    Ok((ticker, resize))
}

/// Canvas of falling glyph columns.
#[component]
pub fn MatrixCanvas(
    style: MatrixStyle,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match start(&canvas, style, config.matrix_frame_ms) {
            Ok(handles) => {
                let handles = SendWrapper::new(handles);
                on_cleanup(move || drop(handles));
            }
            Err(err) => log::warn!("Matrix effect disabled: {err}"),
        }
    });

    view! { <canvas node_ref=canvas_ref class=class></canvas> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_per_style() {
        let mut rng = || 0.5;
        assert_eq!(MatrixRain::new(MatrixStyle::Binary, 100.0, 100.0, &mut rng).columns(), 8);
        assert_eq!(MatrixRain::new(MatrixStyle::Code, 100.0, 100.0, &mut rng).columns(), 8);
        assert_eq!(MatrixRain::new(MatrixStyle::Katakana, 120.0, 120.0, &mut rng).columns(), 10);
    }

    #[test]
    fn test_binary_starts_at_first_row() {
        let mut rng = || 0.5;
        let rain = MatrixRain::new(MatrixStyle::Binary, 70.0, 140.0, &mut rng);
        assert!(rain.drops().iter().all(|&d| d == 1));
    }

    #[test]
    fn test_katakana_starts_scattered_within_rows() {
        let mut rng = || 0.999;
        let rain = MatrixRain::new(MatrixStyle::Katakana, 60.0, 120.0, &mut rng);
        assert!(rain.drops().iter().all(|&d| d < 10));
        assert!(rain.drops().iter().all(|&d| d == 9));
    }

    #[test]
    fn test_tick_advances_and_paints_each_column() {
        let mut rng = || 0.1;
        let mut rain = MatrixRain::new(MatrixStyle::Binary, 70.0, 140.0, &mut rng);
        let cells = rain.tick(&mut rng);
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|c| c.glyph == '0' && (c.y - 14.0).abs() < 1e-9));
        assert!(rain.drops().iter().all(|&d| d == 2));
    }

    #[test]
    fn test_drop_past_bottom_resets_on_high_sample() {
        let mut low = || 0.0;
        let mut rain = MatrixRain::new(MatrixStyle::Binary, 14.0, 28.0, &mut low);
        for _ in 0..5 {
            rain.tick(&mut low);
        }
        assert_eq!(rain.drops(), &[6]);

        let mut high = || 0.99;
        rain.tick(&mut high);
        assert_eq!(rain.drops(), &[1]);
    }

    #[test]
    fn test_code_style_highlight_and_color() {
        let mut rng = || 0.999;
        let mut rain = MatrixRain::new(MatrixStyle::Code, 14.0, 140.0, &mut rng);
        let cells = rain.tick(&mut rng);
        assert!(cells[0].highlight);
        assert_eq!(cells[0].color, "rgba(0, 254, 127, 0.8)");
    }
}
