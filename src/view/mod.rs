//! Canvas View - draw state and repaint planning
//!
//! `ViewCore` is the target-independent half of the view: it owns the grid
//! store, the selected draw color and the view state machine, maps pointer
//! clicks to cells, and plans a repaint as a list of filled rectangles. The
//! wasm facade in `facade.rs` replays that plan onto a real 2D context and
//! wires DOM events.

use crate::domain::{Color, ColorParseError, GridConfig, Pixel};
use crate::store::{GridStore, StoreError};

pub mod facade;

/// Lifecycle of the view. `Ready` is re-entered after every edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Uninitialized,
    Initializing,
    Ready,
}

/// One filled rectangle of a repaint, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellFill {
    pub px: u32,
    pub py: u32,
    pub size: u32,
    pub color: Color,
}

/// The application state object: store handle, selected color, last fetched
/// rows. Shared explicitly (the facade hands it to DOM closures); nothing
/// lives in ambient globals.
pub struct ViewCore {
    store: GridStore,
    state: ViewState,
    selected: Color,
    rows: Vec<Pixel>,
    // Packed ABGR mirror of `rows` in grid order, for raw-buffer hosts.
    colors: Vec<u32>,
}

impl ViewCore {
    pub fn new(config: GridConfig) -> Self {
        let colors = vec![config.default_color.to_abgr(); config.cell_count()];
        Self {
            store: GridStore::new(config),
            state: ViewState::Uninitialized,
            selected: Color::BLACK,
            rows: Vec::new(),
            colors,
        }
    }

    pub fn config(&self) -> &GridConfig {
        self.store.config()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selected_color(&self) -> Color {
        self.selected
    }

    pub fn set_selected_color(&mut self, css: &str) -> Result<(), ColorParseError> {
        self.selected = css.parse()?;
        Ok(())
    }

    /// Rows from the last reload, in (y, x) order.
    pub fn rows(&self) -> &[Pixel] {
        &self.rows
    }

    /// Packed ABGR colors in grid order (row-major, y then x).
    pub fn color_buffer(&self) -> &[u32] {
        &self.colors
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    /// Mount sequence: initialize the store, load the rows, go ready.
    pub fn mount(&mut self) -> Result<(), StoreError> {
        self.state = ViewState::Initializing;
        self.store.ensure_initialized()?;
        self.reload()?;
        self.state = ViewState::Ready;
        Ok(())
    }

    /// Re-fetch all rows. An empty result means the store was never filled:
    /// initialize it and retry once.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let mut rows = self.store.fetch_all()?;
        if rows.is_empty() {
            self.store.ensure_initialized()?;
            rows = self.store.fetch_all()?;
        }
        self.rows = rows;
        self.rebuild_color_buffer();
        Ok(())
    }

    /// Map a raster position to grid coordinates by integer division with the
    /// cell size. Positions outside the canvas map to `None`.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<(u32, u32)> {
        let config = self.store.config();
        if px < 0 || py < 0 {
            return None;
        }
        let (px, py) = (px as u32, py as u32);
        if px >= config.raster_width() || py >= config.raster_height() {
            return None;
        }
        Some((px / config.cell_size, py / config.cell_size))
    }

    /// Write the selected color into one cell, then re-fetch and re-enter
    /// ready: the repaint-after-mutation contract.
    pub fn draw(&mut self, x: u32, y: u32) -> Result<(), StoreError> {
        self.store.set_color(x, y, self.selected)?;
        self.reload()?;
        self.state = ViewState::Ready;
        Ok(())
    }

    /// One filled rectangle per row, scaled by the cell size.
    pub fn draw_list(&self) -> Vec<CellFill> {
        let size = self.store.config().cell_size;
        self.rows
            .iter()
            .map(|p| CellFill {
                px: p.x * size,
                py: p.y * size,
                size,
                color: p.color,
            })
            .collect()
    }

    fn rebuild_color_buffer(&mut self) {
        let config = self.store.config();
        let width = config.width;
        self.colors.fill(config.default_color.to_abgr());
        for p in &self.rows {
            let idx = (p.y * width + p.x) as usize;
            if idx < self.colors.len() {
                self.colors[idx] = p.color.to_abgr();
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
