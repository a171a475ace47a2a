//! Fixed-cell spatial bucketing of snapshot entities.
//!
//! Rebuilt from scratch every turn; holds only borrows into the current
//! snapshot, so nothing here can go stale across turns.

use crate::hlt::constants::CELL_SIZE;
use crate::hlt::entity::{Entity, Position};

fn cell_index(coordinate: f64) -> i64 {
    (coordinate / CELL_SIZE).ceil() as i64 - 1
}

pub struct SpatialGrid<'a, T: Entity> {
    cells: Vec<Vec<&'a T>>,
    rows: usize,
    cols: usize,
}

impl<'a, T: Entity> SpatialGrid<'a, T> {
    pub fn new(width: f64, height: f64) -> SpatialGrid<'a, T> {
        let rows = (height / CELL_SIZE).ceil() as usize;
        let cols = (width / CELL_SIZE).ceil() as usize;
        SpatialGrid {
            cells: vec![Vec::new(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_coords(&self, position: &Position) -> (usize, usize) {
        let row = cell_index(position.1).clamp(0, self.rows.saturating_sub(1) as i64) as usize;
        let col = cell_index(position.0).clamp(0, self.cols.saturating_sub(1) as i64) as usize;
        (row, col)
    }

    /// Bucket a point entity into the one cell under its position.
    pub fn insert_point(&mut self, entity: &'a T) {
        if self.cells.is_empty() {
            return;
        }
        let (row, col) = self.cell_coords(&entity.get_position());
        self.cells[row * self.cols + col].push(entity);
    }

    /// Bucket an entity with area into every cell touched by its bounding
    /// footprint: four corners, four edge midpoints, and the center,
    /// deduplicated.
    pub fn insert_footprint(&mut self, entity: &'a T) {
        if self.cells.is_empty() {
            return;
        }
        let Position(x, y) = entity.get_position();
        let r = entity.get_radius();
        let samples = [
            Position(x - r, y - r),
            Position(x + r, y - r),
            Position(x - r, y + r),
            Position(x + r, y + r),
            Position(x - r, y),
            Position(x + r, y),
            Position(x, y - r),
            Position(x, y + r),
            Position(x, y),
        ];

        let mut touched: Vec<(usize, usize)> = Vec::with_capacity(samples.len());
        for sample in &samples {
            let cell = self.cell_coords(sample);
            if !touched.contains(&cell) {
                touched.push(cell);
            }
        }
        for (row, col) in touched {
            self.cells[row * self.cols + col].push(entity);
        }
    }

    pub fn at(&self, row: usize, col: usize) -> &[&'a T] {
        &self.cells[row * self.cols + col]
    }

    /// Contents of the cell containing `position`.
    pub fn cell_at(&self, position: &Position) -> &[&'a T] {
        if self.cells.is_empty() {
            return &[];
        }
        let (row, col) = self.cell_coords(position);
        self.at(row, col)
    }

    /// Everything in the 3x3 block of cells around `position`.
    pub fn neighborhood(&self, position: &Position) -> Vec<&'a T> {
        if self.cells.is_empty() {
            return Vec::new();
        }
        let (row, col) = self.cell_coords(position);
        let mut found: Vec<&'a T> = Vec::new();
        for r in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(self.cols - 1) {
                for entity in self.at(r, c) {
                    if !found.iter().any(|seen| std::ptr::eq(*seen, *entity)) {
                        found.push(*entity);
                    }
                }
            }
        }
        found
    }

    /// Candidate entities for obstruction tests along the segment from
    /// `start` to `end`: everything bucketed in the rectangle of cells the
    /// segment's bounding box spans. Over-collects off the diagonal, which
    /// the caller's intersection test discards.
    pub fn along_segment(&self, start: &Position, end: &Position) -> Vec<&'a T> {
        if self.cells.is_empty() {
            return Vec::new();
        }
        let (row_a, col_a) = self.cell_coords(start);
        let (row_b, col_b) = self.cell_coords(end);
        let mut found: Vec<&'a T> = Vec::new();
        for row in row_a.min(row_b)..=row_a.max(row_b) {
            for col in col_a.min(col_b)..=col_a.max(col_b) {
                for entity in self.at(row, col) {
                    if !found.iter().any(|seen| std::ptr::eq(*seen, *entity)) {
                        found.push(*entity);
                    }
                }
            }
        }
        found
    }
}
