//! Tile/skirt surface mesh building
//!
//! One flat quad per cell (at 0 for land, `-water_depth` for water) plus
//! vertical skirt quads wherever a map edge or a land/water transition would
//! expose a gap. All four vertices of a quad share the cell's single atlas
//! UV, so height variation renders as flat-shaded color bands.
//!
//! Skirt emission is table-driven: one row per side with the neighbor
//! offset, the top-edge endpoints, and that side's winding pattern. The
//! patterns differ per side so every skirt faces outward from its tile.

use crate::core::types::{Vec2, Vec3};
use crate::terrain::band::BandCatalog;
use crate::terrain::band_map::BandMap;
use crate::terrain::height_field::HeightField;
use crate::terrain::uv::cell_uv;

/// Triangle-list mesh buffers: parallel positions/uvs plus u32 indices.
///
/// Buffers are trimmed to their exact final size; worst-case capacity is
/// reserved up front so emission never reallocates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Vec2>,
}

impl MeshBuffers {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex positions as upload-ready bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Texture coordinates as upload-ready bytes.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Triangle indices as upload-ready bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// One row of the skirt lookup table.
struct SkirtSide {
    /// Cell offset to the neighbor across this side.
    neighbor: [i32; 2],
    /// Top-edge endpoints as cell-corner offsets, (x, y) in cell units.
    edge: [[f32; 2]; 2],
    /// Index pattern over the quad's 4 vertices (top a, top b, bottom a,
    /// bottom b), two triangles.
    winding: [u32; 6],
}

/// West, east, south, north. Each side gets its own winding so the quad
/// faces away from the tile regardless of which side it hangs from.
const SKIRT_SIDES: [SkirtSide; 4] = [
    SkirtSide {
        neighbor: [-1, 0],
        edge: [[0.0, 1.0], [0.0, 0.0]],
        winding: [0, 1, 2, 1, 3, 2],
    },
    SkirtSide {
        neighbor: [1, 0],
        edge: [[1.0, 1.0], [1.0, 0.0]],
        winding: [0, 2, 1, 1, 2, 3],
    },
    SkirtSide {
        neighbor: [0, -1],
        edge: [[0.0, 0.0], [1.0, 0.0]],
        winding: [0, 1, 2, 2, 1, 3],
    },
    SkirtSide {
        neighbor: [0, 1],
        edge: [[0.0, 1.0], [1.0, 1.0]],
        winding: [0, 2, 1, 2, 3, 1],
    },
];

/// Builds [`MeshBuffers`] for one generation pass.
pub struct TerrainMesher<'a> {
    field: &'a HeightField,
    bands: &'a BandMap,
    catalog: &'a BandCatalog,
    water_depth: f32,
    edge_depth: f32,
}

impl<'a> TerrainMesher<'a> {
    pub fn new(
        field: &'a HeightField,
        bands: &'a BandMap,
        catalog: &'a BandCatalog,
        water_depth: f32,
        edge_depth: f32,
    ) -> Self {
        Self {
            field,
            bands,
            catalog,
            water_depth,
            edge_depth,
        }
    }

    /// Emit top quads and skirts for every cell.
    pub fn build(&self) -> MeshBuffers {
        let (w, h) = (self.bands.width(), self.bands.height());
        let cells = (w as usize) * (h as usize);

        let mut mesh = MeshBuffers {
            positions: Vec::with_capacity(cells * 8),
            indices: Vec::with_capacity(cells * 12),
            uvs: Vec::with_capacity(cells * 8),
        };

        for y in 0..h {
            for x in 0..w {
                self.emit_cell(&mut mesh, x, y);
            }
        }

        mesh
    }

    fn emit_cell(&self, mesh: &mut MeshBuffers, x: u32, y: u32) {
        let (w, h) = (self.bands.width(), self.bands.height());
        let is_water = self.bands.is_water(x, y);
        let top = if is_water { -self.water_depth } else { 0.0 };
        let uv = cell_uv(self.field, self.catalog, x, y);
        let (xf, yf) = (x as f32, y as f32);

        let base = mesh.positions.len() as u32;
        mesh.positions.extend_from_slice(&[
            Vec3::new(xf, top, yf + 1.0),
            Vec3::new(xf + 1.0, top, yf + 1.0),
            Vec3::new(xf, top, yf),
            Vec3::new(xf + 1.0, top, yf),
        ]);
        mesh.uvs.extend_from_slice(&[uv; 4]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);

        let is_edge_tile = x == 0 || y == 0 || x == w - 1 || y == h - 1;
        let is_land_tile = !is_water;
        if !(is_land_tile || is_edge_tile) {
            return;
        }

        for side in &SKIRT_SIDES {
            let nx = x as i64 + side.neighbor[0] as i64;
            let ny = y as i64 + side.neighbor[1] as i64;
            let on_map_edge = nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64;

            // Land owns a land/water seam: the water side never emits there.
            let needs_skirt = on_map_edge
                || (is_land_tile && self.bands.is_water(nx as u32, ny as u32));
            if !needs_skirt {
                continue;
            }

            let a = Vec3::new(xf + side.edge[0][0], top, yf + side.edge[0][1]);
            let b = Vec3::new(xf + side.edge[1][0], top, yf + side.edge[1][1]);
            // Land skirts reach past where a neighboring water surface sits.
            let drop = self.edge_depth + if is_land_tile { self.water_depth } else { 0.0 };
            let down = Vec3::Y * drop;

            let base = mesh.positions.len() as u32;
            mesh.positions.extend_from_slice(&[a, b, a - down, b - down]);
            mesh.uvs.extend_from_slice(&[uv; 4]);
            for &k in &side.winding {
                mesh.indices.push(base + k);
            }
        }
    }
}
