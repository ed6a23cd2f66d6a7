use serde::Serialize;

use super::color::Color;

/// One grid cell record: composite key (x, y) plus its current color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

/// Fixed editor configuration. Dimensions never change for the lifetime of
/// the process; there is no resize path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Device pixels per grid cell.
    pub cell_size: u32,
    /// Fill color for freshly initialized cells.
    pub default_color: Color,
}

impl GridConfig {
    pub const fn new(width: u32, height: u32, cell_size: u32, default_color: Color) -> Self {
        Self {
            width,
            height,
            cell_size,
            default_color,
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Canvas raster width in device pixels.
    #[inline]
    pub fn raster_width(&self) -> u32 {
        self.width * self.cell_size
    }

    /// Canvas raster height in device pixels.
    #[inline]
    pub fn raster_height(&self) -> u32 {
        self.height * self.cell_size
    }
}

impl Default for GridConfig {
    /// Reference configuration: 16x16 cells, 20 device pixels per cell,
    /// white default fill.
    fn default() -> Self {
        Self::new(16, 16, 20, Color::WHITE)
    }
}
