use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme::Theme;

pub const PARTICLE_COUNT: usize = 15;
pub const BURST_DURATION: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug)]
pub struct Particle {
    /// Final offset from the centre as a fraction of the area, in [-0.5, 0.5).
    pub dx: f64,
    pub dy: f64,
    pub color: usize,
}

/// Confetti burst played when a quiz ends with a good score.
#[derive(Clone, Debug)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    pub started_at: Instant,
}

impl Celebration {
    pub fn burst<R: Rng>(rng: &mut R, started_at: Instant) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                dx: rng.gen_range(-0.5..0.5),
                dy: rng.gen_range(-0.5..0.5),
                color: rng.gen_range(0..usize::from(u8::MAX)),
            })
            .collect();
        Self {
            particles,
            started_at,
        }
    }

    /// Animation progress in [0, 1], or `None` once the burst is over.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= BURST_DURATION {
            return None;
        }
        Some(elapsed.as_secs_f64() / BURST_DURATION.as_secs_f64())
    }
}

pub struct CelebrationWidget<'a> {
    celebration: &'a Celebration,
    now: Instant,
    theme: &'a Theme,
}

impl<'a> CelebrationWidget<'a> {
    pub fn new(celebration: &'a Celebration, now: Instant, theme: &'a Theme) -> Self {
        Self {
            celebration,
            now,
            theme,
        }
    }
}

impl Widget for CelebrationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(t) = self.celebration.progress(self.now) else {
            return;
        };
        if area.width == 0 || area.height == 0 {
            return;
        }
        let palette = self.theme.colors.confetti();
        // Particles shrink as they fly out.
        let glyph = match t {
            t if t < 0.4 => "\u{25CF}",
            t if t < 0.75 => "\u{2022}",
            _ => "\u{00B7}",
        };

        let cx = area.x as f64 + area.width as f64 / 2.0;
        let cy = area.y as f64 + area.height as f64 / 2.0;
        for p in &self.celebration.particles {
            let x = cx + p.dx * area.width as f64 * t;
            let y = cy + p.dy * area.height as f64 * t;
            let (x, y) = (x.floor() as u16, y.floor() as u16);
            if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
                continue;
            }
            let color = palette[p.color % palette.len()];
            buf.set_string(x, y, glyph, Style::default().fg(color));
        }
    }
}
