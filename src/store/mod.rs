//! Grid Store - the embedded table holding one row per pixel
//!
//! Three operations: idempotent grid fill, ordered full scan, point color
//! update. The store never deletes rows and never resizes; after
//! `ensure_initialized` every coordinate in the configured grid has exactly
//! one row.

use thiserror::Error;

use crate::domain::{Color, GridConfig, Pixel};

mod table;

pub use table::PixelTable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing table was never created (`ensure_initialized` has not run).
    #[error("grid store is not initialized")]
    Uninitialized,
}

/// Embedded pixel store over a columnar table.
pub struct GridStore {
    config: GridConfig,
    table: Option<PixelTable>,
    init_runs: u32,
}

impl GridStore {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            table: None,
            init_runs: 0,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// How many times the grid fill has run. Diagnostic counter; the
    /// empty-fetch fallback in the view is expected to bump this at most once.
    pub fn init_runs(&self) -> u32 {
        self.init_runs
    }

    /// Create the backing table if absent and fill every (x, y) in the
    /// configured grid with the default color, skipping rows that already
    /// exist. Safe to call any number of times.
    pub fn ensure_initialized(&mut self) -> Result<(), StoreError> {
        let table = self.table.get_or_insert_with(PixelTable::new);
        for y in 0..self.config.height {
            for x in 0..self.config.width {
                table.insert_or_ignore(x, y, self.config.default_color);
            }
        }
        self.init_runs += 1;
        Ok(())
    }

    /// All rows ordered by y ascending then x ascending. An absent table
    /// yields an empty result; callers treat that as "uninitialized", re-run
    /// `ensure_initialized` and retry once.
    pub fn fetch_all(&self) -> Result<Vec<Pixel>, StoreError> {
        match &self.table {
            Some(table) => Ok(table.scan().collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Update the color of the exact (x, y) row. A missing key is a silent
    /// no-op: initialization is supposed to have created every row, and the
    /// source issued a plain UPDATE rather than an upsert.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<(), StoreError> {
        let table = self.table.as_mut().ok_or(StoreError::Uninitialized)?;
        table.update_color(x, y, color);
        Ok(())
    }
}
