//! PixelTable - Structure of Arrays (SoA) row storage
//!
//! One column per attribute, rows kept sorted by the composite (y, x) key so
//! a full scan is already in paint order and point lookups are a binary
//! search. The initial fill appends in key order, so building the grid never
//! shifts rows.

use std::cmp::Ordering;

use crate::domain::{Color, Pixel};

/// Columnar pixel rows, ordered by (y, x).
#[derive(Debug, Default)]
pub struct PixelTable {
    xs: Vec<u32>,
    ys: Vec<u32>,
    colors: Vec<Color>,
}

impl PixelTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// Insert a row unless the (x, y) key already exists. Returns whether a
    /// row was inserted; an existing row keeps its color.
    pub fn insert_or_ignore(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.position(x, y) {
            Ok(_) => false,
            Err(at) => {
                self.xs.insert(at, x);
                self.ys.insert(at, y);
                self.colors.insert(at, color);
                true
            }
        }
    }

    /// Point update of the color column. Returns whether the key was present;
    /// an absent key is left absent (no upsert).
    pub fn update_color(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.position(x, y) {
            Ok(at) => {
                self.colors[at] = color;
                true
            }
            Err(_) => false,
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.position(x, y).ok().map(|at| self.colors[at])
    }

    /// Full scan in (y, x) order.
    pub fn scan(&self) -> impl Iterator<Item = Pixel> + '_ {
        (0..self.len()).map(move |i| Pixel {
            x: self.xs[i],
            y: self.ys[i],
            color: self.colors[i],
        })
    }

    /// Binary search for the (x, y) key over the sorted columns.
    fn position(&self, x: u32, y: u32) -> Result<usize, usize> {
        let key = (y, x);
        let mut lo = 0;
        let mut hi = self.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match (self.ys[mid], self.xs[mid]).cmp(&key) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }
}
