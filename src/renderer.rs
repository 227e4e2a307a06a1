//! Tile rendering to image buffers

use crate::color::Paint;
use crate::grid::{GridSpec, PixelRect};
use crate::tile::Tile;
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Transparent color used when the background is `none`
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Resolved drawing style shared by every tile in a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background: Paint,
    pub stroke: Paint,
    /// Fill for tiles without a color prefix
    pub fill: Paint,
    /// Stroke width in pixels, rounded to the nearest integer when drawn
    pub line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Paint::Solid(Rgba([255, 255, 255, 255])),
            stroke: Paint::Solid(Rgba([0, 0, 0, 255])),
            fill: Paint::None,
            line_width: 2.0,
        }
    }
}

/// One rectangle ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSpec {
    pub rect: PixelRect,
    pub fill: Paint,
    pub stroke: Paint,
    pub line_width: f64,
}

impl DrawSpec {
    /// Border thickness in whole pixels. Negative or non-finite widths draw no border.
    ///
    /// Capped at the rectangle's larger side, where the border already covers it.
    pub fn stroke_width(&self) -> i64 {
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return 0;
        }
        let limit = self.rect.width().max(self.rect.height()).max(0);
        let rounded = self.line_width.round();
        if rounded >= limit as f64 {
            limit
        } else {
            rounded as i64
        }
    }
}

/// Mutable pixel buffer that tiles are painted onto.
///
/// Writes outside the buffer are silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Read a pixel; `None` outside the buffer.
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Rgba<u8>> {
        let (x, y) = self.index(x, y)?;
        Some(*self.image.get_pixel(x, y))
    }

    /// Write a pixel. Returns false (and does nothing) outside the buffer.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) -> bool {
        match self.index(x, y) {
            Some((x, y)) => {
                self.image.put_pixel(x, y, color);
                true
            }
            None => false,
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return None;
        }
        Some((x as u32, y as u32))
    }

    /// Overwrite every pixel with the background. `Paint::None` clears to transparent.
    pub fn fill_background(&mut self, paint: Paint) {
        let color = paint.color().unwrap_or(TRANSPARENT);
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Paint a filled, stroked rectangle.
    ///
    /// Interior pixels get the fill; pixels within `stroke_width` of any edge
    /// get the stroke instead. A `none` stroke leaves the fill showing on the
    /// border. Degenerate rectangles draw nothing.
    pub fn draw_rect(&mut self, spec: &DrawSpec) {
        let rect = spec.rect;
        if rect.is_empty() || (spec.fill.is_none() && spec.stroke.is_none()) {
            return;
        }

        let lw = spec.stroke_width();
        let x0 = rect.min_x.max(0);
        let y0 = rect.min_y.max(0);
        let x1 = rect.max_x.min(i64::from(self.width()));
        let y1 = rect.max_y.min(i64::from(self.height()));

        for y in y0..y1 {
            for x in x0..x1 {
                let on_border = x < rect.min_x + lw
                    || x >= rect.max_x - lw
                    || y < rect.min_y + lw
                    || y >= rect.max_y - lw;
                let paint = if on_border && !spec.stroke.is_none() { spec.stroke } else { spec.fill };
                if let Some(color) = paint.color() {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
}

/// Render tiles in order onto a fresh canvas.
///
/// The background is painted once, then each tile's span rectangle is drawn
/// on top. Later tiles overwrite earlier ones where they overlap.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use tileimg::grid::GridSpec;
/// use tileimg::range::CellRange;
/// use tileimg::renderer::{render_tiles, Style};
/// use tileimg::tile::Tile;
///
/// let grid = GridSpec::default();
/// let canvas = render_tiles(&grid, &Style::default(), &[Tile::new(CellRange::single(0, 0))]);
/// assert_eq!(canvas.get_pixel(5, 5), Some(Rgba([0, 0, 0, 255])));
/// assert_eq!(canvas.get_pixel(4, 4), Some(Rgba([255, 255, 255, 255])));
/// ```
pub fn render_tiles(grid: &GridSpec, style: &Style, tiles: &[Tile]) -> Canvas {
    let mut canvas = Canvas::new(grid.width, grid.height);
    canvas.fill_background(style.background);

    for tile in tiles {
        let rect = grid.span_rect(tile.range.start(), tile.range.end());
        let spec = DrawSpec {
            rect,
            fill: tile.fill.unwrap_or(style.fill),
            stroke: style.stroke,
            line_width: style.line_width,
        };
        debug!(tile = %tile, ?rect, empty = rect.is_empty(), "drawing tile");
        canvas.draw_rect(&spec);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::CellRange;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn spec(rect: PixelRect, fill: Paint, stroke: Paint, line_width: f64) -> DrawSpec {
        DrawSpec { rect, fill, stroke, line_width }
    }

    #[test]
    fn test_fill_background() {
        let mut canvas = Canvas::new(3, 2);
        canvas.fill_background(Paint::Solid(RED));
        assert!(canvas.image().pixels().all(|p| *p == RED));

        canvas.fill_background(Paint::None);
        assert!(canvas.image().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_draw_rect_fill_and_stroke() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_background(Paint::Solid(WHITE));
        canvas.draw_rect(&spec(PixelRect::new(2, 2, 8, 8), Paint::Solid(RED), Paint::Solid(BLACK), 1.0));

        assert_eq!(canvas.get_pixel(1, 1), Some(WHITE));
        assert_eq!(canvas.get_pixel(2, 2), Some(BLACK));
        assert_eq!(canvas.get_pixel(7, 5), Some(BLACK));
        assert_eq!(canvas.get_pixel(5, 7), Some(BLACK));
        assert_eq!(canvas.get_pixel(3, 3), Some(RED));
        assert_eq!(canvas.get_pixel(6, 6), Some(RED));
        assert_eq!(canvas.get_pixel(8, 8), Some(WHITE));
    }

    #[test]
    fn test_draw_rect_stroke_none_fills_border() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_rect(&spec(PixelRect::new(0, 0, 4, 4), Paint::Solid(RED), Paint::None, 1.0));
        assert!(canvas.image().pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_draw_rect_fill_none_keeps_interior() {
        let mut canvas = Canvas::new(6, 6);
        canvas.fill_background(Paint::Solid(WHITE));
        canvas.draw_rect(&spec(PixelRect::new(0, 0, 6, 6), Paint::None, Paint::Solid(BLACK), 1.0));
        assert_eq!(canvas.get_pixel(0, 3), Some(BLACK));
        assert_eq!(canvas.get_pixel(3, 3), Some(WHITE));
    }

    #[test]
    fn test_draw_rect_zero_line_width() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_rect(&spec(PixelRect::new(0, 0, 4, 4), Paint::Solid(RED), Paint::Solid(BLACK), 0.0));
        assert!(canvas.image().pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_stroke_width_rounds() {
        let rect = PixelRect::new(0, 0, 10, 10);
        assert_eq!(spec(rect, Paint::None, Paint::None, 2.4).stroke_width(), 2);
        assert_eq!(spec(rect, Paint::None, Paint::None, 2.5).stroke_width(), 3);
        assert_eq!(spec(rect, Paint::None, Paint::None, -1.0).stroke_width(), 0);
        assert_eq!(spec(rect, Paint::None, Paint::None, f64::NAN).stroke_width(), 0);
    }

    #[test]
    fn test_stroke_width_capped_at_rect_size() {
        let rect = PixelRect::new(5, 5, 45, 25);
        assert_eq!(spec(rect, Paint::None, Paint::None, 1e30).stroke_width(), 40);
        assert_eq!(spec(rect, Paint::None, Paint::None, f64::MAX).stroke_width(), 40);
        assert_eq!(spec(rect, Paint::None, Paint::None, 40.0).stroke_width(), 40);
        assert_eq!(spec(rect, Paint::None, Paint::None, 39.0).stroke_width(), 39);
    }

    #[test]
    fn test_render_tiles_huge_line_width_fills_with_stroke() {
        let grid = GridSpec::default();
        let style = Style { fill: Paint::Solid(RED), line_width: 1e30, ..Style::default() };
        let canvas = render_tiles(&grid, &style, &[Tile::new(CellRange::single(0, 0))]);

        assert_eq!(canvas.get_pixel(5, 5), Some(BLACK));
        assert_eq!(canvas.get_pixel(25, 25), Some(BLACK));
        assert_eq!(canvas.get_pixel(44, 44), Some(BLACK));
        assert_eq!(canvas.get_pixel(45, 45), Some(WHITE));
    }

    #[test]
    fn test_thick_stroke_covers_small_rect() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_rect(&spec(PixelRect::new(0, 0, 4, 4), Paint::Solid(RED), Paint::Solid(BLACK), 10.0));
        assert!(canvas.image().pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_degenerate_rect_is_noop() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_background(Paint::Solid(WHITE));
        let before = canvas.clone();
        canvas.draw_rect(&spec(PixelRect::new(8, 2, 2, 8), Paint::Solid(RED), Paint::Solid(BLACK), 1.0));
        canvas.draw_rect(&spec(PixelRect::new(2, 2, 2, 8), Paint::Solid(RED), Paint::Solid(BLACK), 1.0));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_partially_off_canvas_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_rect(&spec(PixelRect::new(-2, -2, 2, 2), Paint::Solid(RED), Paint::Solid(BLACK), 1.0));
        // (0,0) is interior of the unclipped rect
        assert_eq!(canvas.get_pixel(0, 0), Some(RED));
        assert_eq!(canvas.get_pixel(1, 1), Some(BLACK));
        assert_eq!(canvas.get_pixel(2, 2), Some(TRANSPARENT));
    }

    #[test]
    fn test_fully_off_canvas_is_noop() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_rect(&spec(PixelRect::new(10, 10, 20, 20), Paint::Solid(RED), Paint::Solid(BLACK), 1.0));
        assert!(canvas.image().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2);
        assert!(!canvas.set_pixel(-1, 0, RED));
        assert!(!canvas.set_pixel(2, 0, RED));
        assert!(canvas.set_pixel(1, 1, RED));
        assert_eq!(canvas.get_pixel(1, 1), Some(RED));
        assert_eq!(canvas.get_pixel(5, 5), None);
    }

    #[test]
    fn test_render_tiles_default_cell() {
        let grid = GridSpec::default();
        let canvas = render_tiles(&grid, &Style::default(), &[Tile::new(CellRange::single(0, 0))]);

        assert_eq!(canvas.get_pixel(4, 20), Some(WHITE));
        assert_eq!(canvas.get_pixel(5, 20), Some(BLACK));
        assert_eq!(canvas.get_pixel(6, 20), Some(BLACK));
        // fill is none, so the interior keeps the background
        assert_eq!(canvas.get_pixel(7, 20), Some(WHITE));
        assert_eq!(canvas.get_pixel(44, 20), Some(BLACK));
        assert_eq!(canvas.get_pixel(45, 20), Some(WHITE));
    }

    #[test]
    fn test_render_tiles_last_write_wins() {
        let grid = GridSpec::default();
        let style = Style { stroke: Paint::None, ..Style::default() };
        let tiles = [
            Tile::new(CellRange { start_col: 0, end_col: 1, start_row: 0, end_row: 0 })
                .with_fill(Paint::Solid(RED)),
            Tile::new(CellRange::single(1, 0)).with_fill(Paint::Solid(BLUE)),
        ];
        let canvas = render_tiles(&grid, &style, &tiles);
        assert_eq!(canvas.get_pixel(20, 20), Some(RED));
        assert_eq!(canvas.get_pixel(70, 20), Some(BLUE));

        let reversed = [tiles[1], tiles[0]];
        let canvas = render_tiles(&grid, &style, &reversed);
        assert_eq!(canvas.get_pixel(70, 20), Some(RED));
    }

    #[test]
    fn test_render_tiles_reversed_range_draws_nothing() {
        let grid = GridSpec::default();
        let tile = Tile::new(CellRange { start_col: 2, end_col: 1, start_row: 0, end_row: 0 })
            .with_fill(Paint::Solid(RED));
        let canvas = render_tiles(&grid, &Style::default(), &[tile]);
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }
}
