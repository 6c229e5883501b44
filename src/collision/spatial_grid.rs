// Implements a sparse uniform spatial grid for broadphase collision detection.

use std::collections::{HashMap, HashSet};
use crate::collision::AABB;
use crate::math::vec2::Vec2;
use crate::world::EntityId;

/// Integer coordinates of a grid cell.
pub type CellKey = (i64, i64);

/// A sparse uniform grid keyed by cell coordinates. Unbounded: any point of
/// the plane maps to a cell. Rebuilt from scratch every step.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f64,
    inv_cell_size: f64,   // 1.0 / cell_size, cached for performance
    size_factor: f64,
    size_percentile: f64,
    cells: HashMap<CellKey, Vec<EntityId>>,

    // Temporary storage to avoid allocations during queries
    query_ids: HashSet<EntityId>,
}

impl SpatialGrid {
    /// Creates a new SpatialGrid.
    ///
    /// # Arguments
    /// * `cell_size` - Width/height of a cell until the first adaptation.
    /// * `size_factor` - Adapted cell size as a multiple of the sampled extent.
    /// * `size_percentile` - Quantile (0..1) of the collider extents to sample.
    pub fn new(cell_size: f64, size_factor: f64, size_percentile: f64) -> Self {
        assert!(cell_size > 0.0, "Cell size must be positive");
        SpatialGrid {
            cell_size,
            inv_cell_size: 1.0 / cell_size,
            size_factor,
            size_percentile: size_percentile.clamp(0.0, 1.0),
            cells: HashMap::new(),
            query_ids: HashSet::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Converts world coordinates to grid cell coordinates.
    #[inline]
    pub fn cell_of(&self, point: Vec2) -> CellKey {
        (
            (point.x * self.inv_cell_size).floor() as i64,
            (point.y * self.inv_cell_size).floor() as i64,
        )
    }

    /// Determines the range of grid cells overlapped by an AABB.
    fn cell_range(&self, aabb: &AABB) -> (CellKey, CellKey) {
        (self.cell_of(aabb.min), self.cell_of(aabb.max))
    }

    /// Clears all entities from the grid cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Recomputes the cell size from collider extents (the larger of width
    /// and height per collider). The sample at the configured percentile is
    /// used so a few huge colliders, like level floors, don't blow up the
    /// cell size. Keeps the current size when there is nothing to sample.
    pub fn adapt_cell_size(&mut self, extents: impl IntoIterator<Item = f64>) {
        let mut samples: Vec<f64> = extents.into_iter().filter(|e| e.is_finite()).collect();
        if samples.is_empty() {
            return;
        }
        samples.sort_by(|a, b| a.total_cmp(b));

        let index = ((samples.len() as f64 * self.size_percentile).floor() as usize)
            .min(samples.len() - 1);
        let cell_size = samples[index] * self.size_factor;
        if cell_size > 0.0 && cell_size.is_finite() {
            log::debug!(
                "adapting grid cell size {} -> {} from {} colliders",
                self.cell_size,
                cell_size,
                samples.len()
            );
            self.cell_size = cell_size;
            self.inv_cell_size = 1.0 / cell_size;
        }
    }

    /// Inserts an entity into every cell its bounds overlap.
    pub fn insert(&mut self, id: EntityId, aabb: &AABB) {
        let ((min_col, min_row), (max_col, max_row)) = self.cell_range(aabb);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                self.cells.entry((col, row)).or_default().push(id);
            }
        }
    }

    /// Entities in the cells overlapped by `aabb`, widened by one ring of
    /// cells. De-duplicated; ordered by cell (row-major) then insertion.
    pub fn nearby(&mut self, aabb: &AABB) -> Vec<EntityId> {
        let ((min_col, min_row), (max_col, max_row)) = self.cell_range(aabb);
        // Far-out coordinates saturate to the i64 edge in `cell_of`.
        self.collect_block(
            min_col.saturating_sub(1),
            min_row.saturating_sub(1),
            max_col.saturating_add(1),
            max_row.saturating_add(1),
        )
    }

    /// Entities in the 3x3 block of cells around the cell containing `point`.
    pub fn nearby_point(&mut self, point: Vec2) -> Vec<EntityId> {
        let (col, row) = self.cell_of(point);
        self.collect_block(
            col.saturating_sub(1),
            row.saturating_sub(1),
            col.saturating_add(1),
            row.saturating_add(1),
        )
    }

    fn collect_block(&mut self, min_col: i64, min_row: i64, max_col: i64, max_row: i64) -> Vec<EntityId> {
        self.query_ids.clear();
        let mut found = Vec::new();
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let Some(ids) = self.cells.get(&(col, row)) else {
                    continue;
                };
                for &id in ids {
                    if self.query_ids.insert(id) {
                        found.push(id);
                    }
                }
            }
        }
        found
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
