//! Tiled terrain surface generation
//!
//! The pipeline stages, in order:
//! 1. Band catalog (validated author configuration)
//! 2. Height field sampling (Perlin noise)
//! 3. Band classification
//! 4. Gradient atlas synthesis + texture coordinate mapping
//! 5. Tile/skirt mesh building

pub mod band;
pub mod height_field;
pub mod band_map;
pub mod atlas;
pub mod uv;
pub mod mesher;

pub use band::{Band, BandCatalog};
pub use height_field::{HeightField, HeightFieldGenerator};
pub use band_map::BandMap;
pub use atlas::{GradientAtlas, Rgba8};
pub use mesher::{MeshBuffers, TerrainMesher};
