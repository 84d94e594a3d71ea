/// Character-cell wireframe renderer
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use vcam_core::{PolygonColor, ProjectedPolygon};

const LINE_CHAR: char = '#';

fn pen_color(color: PolygonColor) -> Color {
    match color {
        PolygonColor::Red => Color::Red,
        PolygonColor::Blue => Color::Blue,
        // Terminals usually draw on a dark background, so "black" edges
        // render as white cells.
        PolygonColor::Black => Color::White,
    }
}

/// Renders projected polygons into a char + color cell buffer.
///
/// Projected coordinates live on a virtual canvas of `canvas_width` x
/// `canvas_height` (the configured window size) with the origin at the
/// center and y pointing up; they are scaled down to terminal cells here.
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    canvas_width: f64,
    canvas_height: f64,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize, canvas_width: u32, canvas_height: u32) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            canvas_width: canvas_width.max(1) as f64,
            canvas_height: canvas_height.max(1) as f64,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.char_buffer.len() {
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    #[cfg(test)]
    fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    /// Draw every edge of every projected polygon.
    pub fn render_polygons(&mut self, polygons: &[ProjectedPolygon]) {
        for polygon in polygons {
            let color = pen_color(polygon.color);
            for (from, to) in polygon.edges() {
                let a = self.to_cell(from.x, from.y);
                let b = self.to_cell(to.x, to.y);
                self.draw_line(a, b, color);
            }
        }
    }

    /// Map a virtual-canvas point (origin center, y up) to cell space
    /// (origin top-left, y down).
    fn to_cell(&self, x: f64, y: f64) -> (f64, f64) {
        let cx = (x + self.canvas_width / 2.0) * self.width as f64 / self.canvas_width;
        let cy = (self.canvas_height / 2.0 - y) * self.height as f64 / self.canvas_height;
        (cx, cy)
    }

    /// Clip a segment to the cell grid, then rasterize it with Bresenham.
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let Some((a, b)) = self.clip_segment(from, to) else {
            return;
        };

        let (mut x0, mut y0) = (a.0.round() as i64, a.1.round() as i64);
        let (x1, y1) = (b.0.round() as i64, b.1.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);
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

    /// Liang-Barsky clip against the cell grid. Points projected with the
    /// epsilon depth clamp land astronomically far off-canvas; clipping
    /// first keeps the rasterizer's step count bounded by the grid size.
    fn clip_segment(
        &self,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Option<((f64, f64), (f64, f64))> {
        let (x0, y0) = from;
        let dx = to.0 - x0;
        let dy = to.1 - y0;
        let max_x = self.width as f64 - 1.0;
        let max_y = self.height as f64 - 1.0;

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        let checks = [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)];
        for (p, q) in checks {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    if r > t0 {
                        t0 = r;
                    }
                } else {
                    if r < t0 {
                        return None;
                    }
                    if r < t1 {
                        t1 = r;
                    }
                }
            }
        }

        Some(((x0 + t0 * dx, y0 + t0 * dy), (x0 + t1 * dx, y0 + t1 * dy)))
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = LINE_CHAR;
        self.color_buffer[idx] = color;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
