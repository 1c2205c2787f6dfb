//! Character-cell canvas for the simulation scene.
//!
//! The drawing surface lives in "world" units (a few world units per
//! terminal pixel) and renders through half-block characters, which doubles
//! the vertical resolution: every terminal row carries two pixel rows, drawn
//! as `▀` with independent foreground and background colors.

use crossterm::style::{Color as TermColor, Stylize};
use kinetica::{Ball, Bounds, Color, OverlayState, Segment, Vec2};

/// World units per rendered pixel.
///
/// A terminal cell is roughly 8x16 screen pixels, so with half-blocks one
/// rendered pixel covers about 8x8 — world coordinates stay comparable to
/// the browser-canvas coordinates the scene parameters were written for.
pub const WORLD_PER_PIXEL: f64 = 8.0;

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
        Color::Magenta => TermColor::Magenta,
        Color::Cyan => TermColor::Cyan,
        Color::White => TermColor::White,
    }
}

/// A canvas sized to a terminal region of `cols` x `rows` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    cols: u16,
    rows: u16,
}

impl Canvas {
    /// Create a canvas covering the given terminal region (minimum 1x1).
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// The surface extent in world units.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            f64::from(self.cols) * WORLD_PER_PIXEL,
            f64::from(self.rows) * 2.0 * WORLD_PER_PIXEL,
        )
    }

    /// Pixel grid dimensions.
    fn pixel_dims(&self) -> (usize, usize) {
        (usize::from(self.cols), usize::from(self.rows) * 2)
    }

    /// Render one frame: a fresh (cleared) pixel buffer, every ball as a
    /// filled circle at its current position, then the optional overlay
    /// vectors on top.
    pub fn render(&self, balls: &[Ball], overlay: Option<&OverlayState>, color: bool) -> String {
        let (px_w, px_h) = self.pixel_dims();
        let mut pixels: Vec<Option<Color>> = vec![None; px_w * px_h];

        for ball in balls {
            fill_circle(&mut pixels, px_w, px_h, ball.position(), ball.radius(), ball.color());
        }

        if let Some(state) = overlay {
            fill_circle(&mut pixels, px_w, px_h, state.center(), state.radius, Color::Cyan);
            draw_segment(&mut pixels, px_w, px_h, state.velocity_segment(), Color::Red);
            draw_segment(
                &mut pixels,
                px_w,
                px_h,
                state.acceleration_segment(),
                Color::Green,
            );
        }

        self.compose(&pixels, px_w, color)
    }

    /// Fold pixel pairs into half-block rows.
    fn compose(&self, pixels: &[Option<Color>], px_w: usize, color: bool) -> String {
        let mut out = String::with_capacity(pixels.len() * 2);

        for row in 0..usize::from(self.rows) {
            for col in 0..px_w {
                let upper = pixels[2 * row * px_w + col];
                let lower = pixels[(2 * row + 1) * px_w + col];
                push_cell(&mut out, upper, lower, color);
            }
            out.push('\n');
        }

        out
    }
}

fn push_cell(out: &mut String, upper: Option<Color>, lower: Option<Color>, color: bool) {
    if !color {
        out.push(match (upper.is_some(), lower.is_some()) {
            (true, true) => '█',
            (true, false) => '▀',
            (false, true) => '▄',
            (false, false) => ' ',
        });
        return;
    }

    match (upper, lower) {
        (Some(u), Some(l)) => {
            out.push_str(&"▀".with(term_color(u)).on(term_color(l)).to_string());
        }
        (Some(u), None) => out.push_str(&"▀".with(term_color(u)).to_string()),
        (None, Some(l)) => out.push_str(&"▄".with(term_color(l)).to_string()),
        (None, None) => out.push(' '),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn set_pixel(pixels: &mut [Option<Color>], px_w: usize, px_h: usize, x: i64, y: i64, color: Color) {
    if x >= 0 && y >= 0 && (x as usize) < px_w && (y as usize) < px_h {
        pixels[(y as usize) * px_w + (x as usize)] = Some(color);
    }
}

/// Rasterize a filled circle given in world coordinates.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn fill_circle(
    pixels: &mut [Option<Color>],
    px_w: usize,
    px_h: usize,
    center: Vec2,
    radius: f64,
    color: Color,
) {
    let cx = center.x / WORLD_PER_PIXEL;
    let cy = center.y / WORLD_PER_PIXEL;
    let r = (radius / WORLD_PER_PIXEL).max(0.5);

    let x_min = (cx - r).floor() as i64;
    let x_max = (cx + r).ceil() as i64;
    let y_min = (cy - r).floor() as i64;
    let y_max = (cy + r).ceil() as i64;

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = (x as f64 + 0.5) - cx;
            let dy = (y as f64 + 0.5) - cy;
            if dx * dx + dy * dy <= r * r {
                set_pixel(pixels, px_w, px_h, x, y, color);
            }
        }
    }
}

/// Bresenham line for a world-space segment.
#[allow(clippy::cast_possible_truncation)]
fn draw_segment(
    pixels: &mut [Option<Color>],
    px_w: usize,
    px_h: usize,
    segment: Segment,
    color: Color,
) {
    let mut x0 = (segment.from.x / WORLD_PER_PIXEL).round() as i64;
    let mut y0 = (segment.from.y / WORLD_PER_PIXEL).round() as i64;
    let x1 = (segment.to.x / WORLD_PER_PIXEL).round() as i64;
    let y1 = (segment.to.y / WORLD_PER_PIXEL).round() as i64;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        set_pixel(pixels, px_w, px_h, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetica::BallParams;

    fn ball_at(x: f64, y: f64, radius: f64, color: Color) -> Ball {
        Ball::from(&BallParams { x, y, radius, color, ..BallParams::default() })
    }

    #[test]
    fn test_bounds_scale_with_cells() {
        let canvas = Canvas::new(80, 24);
        let bounds = canvas.bounds();
        assert_eq!(bounds.width, 640.0);
        assert_eq!(bounds.height, 384.0);
    }

    #[test]
    fn test_minimum_size_is_one_cell() {
        let canvas = Canvas::new(0, 0);
        assert_eq!(canvas.bounds().width, WORLD_PER_PIXEL);
    }

    #[test]
    fn test_empty_scene_renders_blank_grid() {
        let canvas = Canvas::new(4, 2);
        let out = canvas.render(&[], None, false);
        assert_eq!(out, "    \n    \n");
    }

    #[test]
    fn test_ball_renders_as_filled_cells() {
        let canvas = Canvas::new(10, 5);
        // Center of the 80x80 world surface, radius one pixel-ish.
        let balls = [ball_at(40.0, 40.0, 10.0, Color::Red)];
        let out = canvas.render(&balls, None, false);
        assert!(out.contains('█') || out.contains('▀') || out.contains('▄'));
    }

    #[test]
    fn test_clear_happens_each_render() {
        let canvas = Canvas::new(10, 5);
        let balls = [ball_at(40.0, 40.0, 10.0, Color::Red)];
        let _ = canvas.render(&balls, None, false);
        // A later frame with no balls starts from a fresh buffer.
        let out = canvas.render(&[], None, false);
        assert!(!out.contains('█') && !out.contains('▀') && !out.contains('▄'));
    }

    #[test]
    fn test_overlay_draws_vector_lines() {
        let canvas = Canvas::new(20, 10);
        let state = OverlayState {
            x: 40.0,
            y: 40.0,
            radius: 8.0,
            vx: 8.0,
            vy: 0.0,
            ax: 0.0,
            ay: 4.0,
            // velocity reaches x = 40 + 80 = 120, acceleration y = 80
        };
        let out = canvas.render(&[], Some(&state), false);
        let filled = out.chars().filter(|c| *c != ' ' && *c != '\n').count();
        // Circle plus two lines is clearly more than the circle alone.
        let circle_only = OverlayState { vx: 0.0, vy: 0.0, ax: 0.0, ay: 0.0, ..state };
        let base = canvas
            .render(&[], Some(&circle_only), false)
            .chars()
            .filter(|c| *c != ' ' && *c != '\n')
            .count();
        assert!(filled > base);
    }

    #[test]
    fn test_color_render_emits_ansi() {
        let canvas = Canvas::new(10, 5);
        let balls = [ball_at(40.0, 40.0, 12.0, Color::Red)];
        let colored = canvas.render(&balls, None, true);
        assert!(colored.contains("\u{1b}["));
        let plain = canvas.render(&balls, None, false);
        assert!(!plain.contains("\u{1b}["));
    }
}
