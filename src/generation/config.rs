//! Generation pipeline configuration

use crate::core::error::Error;
use crate::core::types::{Result, UVec2};
use crate::terrain::band::BandCatalog;

/// Worst case vertices per cell: the top quad plus four skirt quads.
const MAX_VERTICES_PER_CELL: u64 = 20;

/// Configuration for one terrain generation pass.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Domain offset for the height noise. The pipeline never invents a
    /// seed; callers pass one (fixed for reproducible regeneration, fresh
    /// for a new terrain).
    pub seed: f32,
    /// Grid dimensions in cells.
    pub size: UVec2,
    /// Horizontal noise scale (smaller = smoother terrain).
    pub noise_scale: f32,
    /// How far the water surface sits below land level.
    pub water_depth: f32,
    /// How far skirts drop below the surface they hang from.
    pub edge_depth: f32,
    /// Band catalog; already validated by construction.
    pub catalog: BandCatalog,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 12345.0,
            size: UVec2::new(64, 64),
            noise_scale: 0.1,
            water_depth: 0.2,
            edge_depth: 0.2,
            catalog: BandCatalog::default(),
        }
    }
}

impl GenerationConfig {
    /// Reject configurations the pipeline cannot run: zero-sized grids and
    /// grids whose worst-case mesh would overflow u32 indices. Runs before
    /// any buffer is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.size.x == 0 || self.size.y == 0 {
            return Err(Error::Grid(format!(
                "dimensions must be positive, got {}x{}",
                self.size.x, self.size.y
            )));
        }

        let cells = self.size.x as u64 * self.size.y as u64;
        let worst_case = cells
            .checked_mul(MAX_VERTICES_PER_CELL)
            .filter(|&v| v <= u32::MAX as u64);
        if worst_case.is_none() {
            return Err(Error::Grid(format!(
                "{}x{} grid cannot be addressed with u32 indices",
                self.size.x, self.size.y
            )));
        }

        Ok(())
    }
}
