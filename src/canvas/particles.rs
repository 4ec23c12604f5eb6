use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{context_2d, fit_to_window, sample_index, sample_range};
use crate::config::SiteConfig;
use crate::dom::{self, FrameLoop, WindowListener};
use crate::error::AppError;

/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 100.0;

const AMBIENT_PALETTE: [&str; 4] = ["#00ff00", "#00ffff", "#ff00ff", "#0088ff"];
const HERO_LINK_RGB: &str = "0, 255, 190";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleStyle {
    /// Navbar backdrop: fixed neon palette, survives resizes.
    Ambient,
    /// Hero backdrop: teal/green tones, reseeded on resize.
    Hero,
}

impl ParticleStyle {
    /// Hero density scales with the viewport width.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count_for(self, configured: usize, width: f64) -> usize {
        match self {
            Self::Ambient => configured,
            Self::Hero => configured.min((width / 20.0).max(0.0) as usize),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: String,
    pub alpha: f64,
}

impl Particle {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn spawn(style: ParticleStyle, width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let x = rng() * width;
        let y = rng() * height;
        match style {
            ParticleStyle::Ambient => Self {
                x,
                y,
                size: sample_range(rng, 0.5, 2.5),
                vx: sample_range(rng, -0.25, 0.25),
                vy: sample_range(rng, -0.25, 0.25),
                color: AMBIENT_PALETTE[sample_index(rng, AMBIENT_PALETTE.len())].to_string(),
                alpha: sample_range(rng, 0.1, 0.6),
            },
            ParticleStyle::Hero => {
                let size = sample_range(rng, 1.0, 4.0);
                let vx = sample_range(rng, -0.25, 0.25);
                let vy = sample_range(rng, -0.25, 0.25);
                let r = (rng() * 50.0) as u8;
                let g = (rng() * 255.0) as u8;
                let b = (rng() * 150.0) as u8 + 100;
                let a = sample_range(rng, 0.2, 0.7);
                Self {
                    x,
                    y,
                    vx,
                    vy,
                    size,
                    color: format!("rgba({r}, {g}, {b}, {a:.2})"),
                    alpha: 1.0,
                }
            }
        }
    }

    /// Move one step and reverse velocity on any axis that left the box.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// Line joining two nearby particles.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub color: String,
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    style: ParticleStyle,
    configured: usize,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(
        style: ParticleStyle,
        configured: usize,
        width: f64,
        height: f64,
        rng: &mut impl FnMut() -> f64,
    ) -> Self {
        let mut field = Self {
            style,
            configured,
            width,
            height,
            particles: Vec::new(),
        };
        field.reseed(rng);
        field
    }

    fn reseed(&mut self, rng: &mut impl FnMut() -> f64) {
        let count = self.style.count_for(self.configured, self.width);
        self.particles = (0..count)
            .map(|_| Particle::spawn(self.style, self.width, self.height, rng))
            .collect();
    }

    /// Particles in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Move every particle one frame, bouncing off the edges.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Track a new canvas size; the hero field also respawns.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        if self.style == ParticleStyle::Hero {
            self.reseed(rng);
        }
    }

    /// Pairs close enough to draw a connecting line.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (b.x - a.x).hypot(b.y - a.y);
                if distance >= LINK_DISTANCE {
                    continue;
                }
                let (color, alpha) = match self.style {
                    ParticleStyle::Ambient => {
                        (a.color.clone(), (LINK_DISTANCE - distance) / 300.0)
                    }
                    ParticleStyle::Hero => {
                        let opacity = (1.0 - distance / LINK_DISTANCE) * 0.2;
                        (format!("rgba({HERO_LINK_RGB}, {opacity:.3})"), 1.0)
                    }
                };
                links.push(Link {
                    from: i,
                    to: j,
                    color,
                    alpha,
                });
            }
        }
        links
    }
}

fn paint(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), AppError> {
    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);
    for particle in field.particles() {
        ctx.begin_path();
        ctx.arc(particle.x, particle.y, particle.size, 0.0, TAU)?;
        ctx.set_fill_style_str(&particle.color);
        ctx.set_global_alpha(particle.alpha);
        ctx.fill();
    }
    ctx.set_line_width(0.5);
    let particles = field.particles();
    for link in field.links() {
        let (a, b) = (&particles[link.from], &particles[link.to]);
        ctx.begin_path();
        ctx.set_stroke_style_str(&link.color);
        ctx.set_global_alpha(link.alpha);
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn start(
    canvas: &HtmlCanvasElement,
    style: ParticleStyle,
    configured: usize,
) -> Result<(FrameLoop, WindowListener), AppError> {
    let ctx = context_2d(canvas)?;
    let (width, height) = fit_to_window(canvas)?;
    let mut rng = dom::random;
    let field = Rc::new(RefCell::new(ParticleField::new(
        style, configured, width, height, &mut rng,
    )));

    let frames = {
        let field = Rc::clone(&field);
        FrameLoop::start(move || {
            let mut field = field.borrow_mut();
            field.step();
            if let Err(err) = paint(&ctx, &field) {
                log::warn!("Particle paint failed: {err}");
            }
        })?
    };

    let resize = {
        let canvas = canvas.clone();
        WindowListener::new("resize", move |_| match fit_to_window(&canvas) {
            Ok((width, height)) => field.borrow_mut().resize(width, height, &mut dom::random),
            Err(err) => log::warn!("Particle resize failed: {err}"),
        })?
    };

    Ok((frames, resize))
}

/// Full-bleed canvas of drifting, linked particles.
#[component]
pub fn ParticleCanvas(
    style: ParticleStyle,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match start(&canvas, style, config.ambient_particle_count) {
            Ok(handles) => {
                let handles = SendWrapper::new(handles);
                on_cleanup(move || drop(handles));
            }
            Err(err) => log::warn!("Particle effect disabled: {err}"),
        }
    });

    view! { <canvas node_ref=canvas_ref class=class></canvas> }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic sampler cycling through a fixed sequence.
    fn cycle(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_hero_count_scales_with_width() {
        assert_eq!(ParticleStyle::Hero.count_for(100, 800.0), 40);
        assert_eq!(ParticleStyle::Hero.count_for(100, 4000.0), 100);
        assert_eq!(ParticleStyle::Ambient.count_for(100, 800.0), 100);
    }

    #[test]
    fn test_particles_spawn_inside_ranges() {
        let mut rng = cycle(&[0.0, 0.25, 0.5, 0.75, 0.99]);
        let field = ParticleField::new(ParticleStyle::Ambient, 20, 640.0, 480.0, &mut rng);
        assert_eq!(field.particles().len(), 20);
        for p in field.particles() {
            assert!((0.0..=640.0).contains(&p.x));
            assert!((0.5..2.5).contains(&p.size));
            assert!((0.1..0.6).contains(&p.alpha));
            assert!(AMBIENT_PALETTE.contains(&p.color.as_str()));
        }
    }

    #[test]
    fn test_particle_bounces_off_edge() {
        let mut particle = Particle {
            x: 99.9,
            y: 10.0,
            vx: 0.25,
            vy: 0.0,
            size: 1.0,
            color: String::new(),
            alpha: 1.0,
        };
        particle.advance(100.0, 100.0);
        assert!(particle.vx < 0.0);
        particle.advance(100.0, 100.0);
        assert!(particle.x < 100.0);
    }

    #[test]
    fn test_links_only_join_close_pairs() {
        let mut rng = cycle(&[0.5]);
        let mut field = ParticleField::new(ParticleStyle::Ambient, 0, 500.0, 500.0, &mut rng);
        let at = |x: f64, y: f64| Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            color: "#00ff00".into(),
            alpha: 0.5,
        };
        field.particles = vec![at(0.0, 0.0), at(30.0, 40.0), at(400.0, 400.0)];
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].from, links[0].to), (0, 1));
        assert!((links[0].alpha - 50.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_hero_resize_reseeds() {
        let mut rng = cycle(&[0.1, 0.9, 0.4]);
        let mut field = ParticleField::new(ParticleStyle::Hero, 100, 400.0, 300.0, &mut rng);
        assert_eq!(field.particles().len(), 20);
        field.resize(1000.0, 300.0, &mut rng);
        assert_eq!(field.particles().len(), 50);
        assert_eq!(field.size(), (1000.0, 300.0));
    }

    #[test]
    fn test_ambient_resize_keeps_particles() {
        let mut rng = cycle(&[0.3, 0.6]);
        let mut field = ParticleField::new(ParticleStyle::Ambient, 10, 400.0, 300.0, &mut rng);
        let before = field.particles().to_vec();
        field.resize(800.0, 600.0, &mut rng);
        assert_eq!(field.particles(), before.as_slice());
    }
}
