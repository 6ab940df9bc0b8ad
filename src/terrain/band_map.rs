//! Band classification of a height field

use crate::terrain::band::BandCatalog;
use crate::terrain::height_field::HeightField;

/// Dense per-cell band indices, row-major, same dimensions as the source
/// height field. Band index 0 means "submerged".
#[derive(Clone, Debug, PartialEq)]
pub struct BandMap {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl BandMap {
    /// Classify every cell of `field` against the catalog.
    pub fn classify(field: &HeightField, catalog: &BandCatalog) -> Self {
        let (width, height) = (field.width(), field.height());
        let mut cells = Vec::with_capacity((width * height) as usize);

        for y in 0..height {
            for x in 0..width {
                cells.push(catalog.band_for(field.get(x, y)) as u8);
            }
        }

        Self { width, height, cells }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Band index at cell (x, y).
    pub fn band(&self, x: u32, y: u32) -> usize {
        self.cells[(y * self.width + x) as usize] as usize
    }

    /// Whether cell (x, y) is submerged (band 0).
    pub fn is_water(&self, x: u32, y: u32) -> bool {
        self.band(x, y) == 0
    }

    /// Whether a navigation grid should treat cell (x, y) as traversable.
    /// Submerged cells are impassable.
    pub fn is_passable(&self, x: u32, y: u32) -> bool {
        !self.is_water(x, y)
    }

    /// All band indices, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
