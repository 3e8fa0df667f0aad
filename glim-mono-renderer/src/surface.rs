use std::fmt;

use glim_ui::{Paint, Rect, Surface, TextMetrics};

use crate::config::SurfaceConfig;

/// Character-cell surface with fixed-advance metrics.
///
/// The headless counterpart to a real canvas backend. Every glyph
/// occupies one cell, the advance is the cell width, and the ink height
/// is three quarters of the cell height (less than the full line).
/// Draw calls address the baseline; the glyph row is the one whose ink
/// ends there.
pub struct MonoSurface {
    cols: usize,
    rows: usize,
    cell_w: f32,
    cell_h: f32,
    cells: Vec<char>,
}

impl MonoSurface {
    pub fn new(cols: usize, rows: usize, cell_w: f32, cell_h: f32) -> Self {
        Self {
            cols,
            rows,
            cell_w,
            cell_h,
            cells: vec![' '; cols * rows],
        }
    }

    /// Surface sized from the global `[surface]` config section.
    pub fn from_config() -> Self {
        let cfg: SurfaceConfig = glim_shared::config::section("surface");
        log::debug!("Mono surface: {}x{} cells", cfg.cols, cfg.rows);
        Self::new(cfg.cols, cfg.rows, cfg.cell_width, cfg.cell_height)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at a cell, for tests and dumps.
    pub fn cell(&self, col: usize, row: usize) -> char {
        self.cells[row * self.cols + col]
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn ink_height(&self) -> f32 {
        (self.cell_h * 0.75).round()
    }
}

impl TextMetrics for MonoSurface {
    fn measure_text(&self, text: &str, _paint: &Paint) -> f32 {
        text.chars().count() as f32 * self.cell_w
    }

    fn text_bounds(&self, text: &str, paint: &Paint) -> Rect {
        if text.is_empty() {
            return Rect::new(0.0, 0.0, 0.0, 0.0);
        }
        Rect::new(0.0, 0.0, self.measure_text(text, paint), self.ink_height())
    }
}

impl Surface for MonoSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, _paint: &Paint) {
        let row = ((y - self.ink_height()) / self.cell_h).round() as isize;
        if row < 0 || row >= self.rows as isize {
            log::trace!("draw_text clipped: row {} outside {} rows", row, self.rows);
            return;
        }

        let start = (x / self.cell_w).round() as isize;
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as isize;
            if col < 0 || col >= self.cols as isize {
                continue;
            }
            self.cells[row as usize * self.cols + col as usize] = ch;
        }
    }
}

impl fmt::Display for MonoSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self.cells[row * self.cols..(row + 1) * self.cols]
                .iter()
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
