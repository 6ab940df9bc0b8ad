//! Terrain generation pipeline — runs the five stages in sequence.
//!
//! The pipeline orchestrates:
//! 1. Gradient atlas synthesis from the band catalog
//! 2. Height field sampling
//! 3. Band classification
//! 4. Tile/skirt mesh building (atlas UVs resolved per cell)
//!
//! Each pass returns a complete [`TerrainArtifacts`] value; nothing is
//! published until the pass finishes, so callers swap artifact sets
//! atomically and keep the old set on failure.

pub mod config;

pub use config::GenerationConfig;

use std::time::Instant;

use crate::core::types::{Result, UVec2, Vec2, Vec3};
use crate::terrain::atlas::GradientAtlas;
use crate::terrain::band_map::BandMap;
use crate::terrain::height_field::{HeightField, HeightFieldGenerator};
use crate::terrain::mesher::{MeshBuffers, TerrainMesher};

/// World-space footprint of a generated grid, for collaborators that mirror
/// it (a navigation-grid builder rescans from this).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    /// Center of the tile grid on the terrain plane.
    pub center: Vec3,
    /// World-space size of one cell.
    pub cell_size: Vec2,
    /// Grid dimensions in cells.
    pub cells: UVec2,
}

/// The complete, self-consistent artifact set of one generation pass.
///
/// Owned by the caller; downstream consumers get read access only.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainArtifacts {
    pub height_field: HeightField,
    pub band_map: BandMap,
    pub atlas: GradientAtlas,
    pub mesh: MeshBuffers,
}

impl TerrainArtifacts {
    /// Footprint of the generated grid. Tiles are unit squares with the
    /// mesh spanning [0, width] x [0, height] on the ground plane.
    pub fn footprint(&self) -> Footprint {
        let cells = UVec2::new(self.band_map.width(), self.band_map.height());
        Footprint {
            center: Vec3::new(cells.x as f32 / 2.0, 0.0, cells.y as f32 / 2.0),
            cell_size: Vec2::ONE,
            cells,
        }
    }
}

/// Orchestrates one generation pass: catalog -> height field ->
/// classification -> atlas/UVs -> mesh.
pub struct GenerationPipeline {
    config: GenerationConfig,
}

impl GenerationPipeline {
    /// Create a pipeline from configuration. Grid validation runs here so
    /// a constructed pipeline can always generate.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Replace the seed for the next pass; every other parameter is kept.
    pub fn set_seed(&mut self, seed: f32) {
        self.config.seed = seed;
    }

    /// Run the full pipeline. Deterministic: identical configuration
    /// produces bit-identical artifacts.
    pub fn generate(&self) -> Result<TerrainArtifacts> {
        let start = Instant::now();
        let config = &self.config;

        let atlas = GradientAtlas::build(&config.catalog);

        let height_field = HeightFieldGenerator::new(config.seed, config.noise_scale)
            .generate(config.size)?;

        let band_map = BandMap::classify(&height_field, &config.catalog);

        let mesh = TerrainMesher::new(
            &height_field,
            &band_map,
            &config.catalog,
            config.water_depth,
            config.edge_depth,
        )
        .build();

        log::info!(
            "Generated {}x{} terrain in {:.1}ms: {} vertices, {} triangles, {}px atlas",
            config.size.x,
            config.size.y,
            start.elapsed().as_secs_f64() * 1000.0,
            mesh.vertex_count(),
            mesh.triangle_count(),
            atlas.width()
        );

        Ok(TerrainArtifacts {
            height_field,
            band_map,
            atlas,
            mesh,
        })
    }
}
