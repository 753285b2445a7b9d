// SPDX-License-Identifier: MPL-2.0
//! Decorative snowfall overlay drawn on a Canvas.
//!
//! Flake trajectories are derived from a per-index hash, so the overlay is
//! deterministic for a given flake count and needs no RNG. The app advances
//! the animation with a periodic tick; the canvas itself handles no events,
//! so clicks pass through to the page underneath.

use crate::ui::design_tokens::palette;
use crate::ui::theme;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Vertical progress added per animation tick, scaled by flake speed.
const PHASE_STEP: f32 = 0.006;

/// Extra vertical margin so flakes enter and leave off-screen.
const EDGE_MARGIN: f32 = 0.04;

struct Flake {
    /// Horizontal base position, 0..1 across the width.
    lane: f32,
    /// Horizontal sway amplitude, as a fraction of the width.
    sway: f32,
    /// Fall speed multiplier.
    speed: f32,
    /// Sway phase offset so flakes do not move in lockstep.
    offset: f32,
    /// Vertical progress, 0..1 top to bottom.
    y: f32,
    radius: f32,
    /// 0 = rose, 1 = white.
    tint: f32,
}

pub struct Snowfall {
    flakes: Vec<Flake>,
    cache: Cache,
}

impl Snowfall {
    /// Creates an overlay with `count` flakes.
    pub fn new(count: u32) -> Self {
        let flakes = (0..count)
            .map(|i| Flake {
                lane: hash01(i, 0),
                sway: 0.01 + 0.03 * hash01(i, 1),
                speed: 0.5 + hash01(i, 2),
                offset: hash01(i, 3),
                y: hash01(i, 4),
                radius: 1.5 + 2.0 * hash01(i, 5),
                tint: hash01(i, 6),
            })
            .collect();

        Self {
            flakes,
            cache: Cache::default(),
        }
    }

    /// Advances every flake by one animation step and invalidates the
    /// drawing cache. Flakes that leave the bottom re-enter at the top.
    pub fn tick(&mut self) {
        for flake in &mut self.flakes {
            flake.y += PHASE_STEP * flake.speed;
            if flake.y > 1.0 + EDGE_MARGIN {
                flake.y = -EDGE_MARGIN;
            }
        }
        self.cache.clear();
    }

    /// Creates the Canvas layer for the overlay.
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Snowfall {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                for flake in &self.flakes {
                    let sway = flake.sway * (TAU * (flake.y * 2.0 + flake.offset)).sin();
                    let x = (flake.lane + sway).rem_euclid(1.0) * frame.width();
                    let y = flake.y * frame.height();

                    // Fade in at the top, out at the bottom.
                    let alpha = (flake.y.clamp(0.0, 1.0) * std::f32::consts::PI).sin() * 0.8;
                    if alpha <= 0.0 {
                        continue;
                    }

                    let base = theme::snowflake_color();
                    let color = Color {
                        r: base.r + (palette::WHITE.r - base.r) * flake.tint,
                        g: base.g + (palette::WHITE.g - base.g) * flake.tint,
                        b: base.b + (palette::WHITE.b - base.b) * flake.tint,
                        a: alpha,
                    };

                    frame.fill(&Path::circle(Point::new(x, y), flake.radius), color);
                }
            });

        vec![geometry]
    }
}

/// Deterministic hash of `(index, stream)` into `[0, 1)`.
fn hash01(index: u32, stream: u32) -> f32 {
    let mut x = index
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(stream.wrapping_mul(0x85EB_CA6B))
        .wrapping_add(0x27D4_EB2F);
    x ^= x >> 16;
    x = x.wrapping_mul(0x45D9_F3B);
    x ^= x >> 16;
    (x & 0xFFFF) as f32 / 65536.0
}
