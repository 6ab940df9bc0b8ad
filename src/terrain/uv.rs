//! Texture coordinate mapping into the gradient atlas
//!
//! A cell's height selects a band (via the catalog's shared containment
//! rule) and a sub-step within it; together they name one atlas column. The
//! horizontal coordinate is that column over the atlas width, the vertical
//! coordinate is always 0.

use crate::core::types::Vec2;
use crate::terrain::band::BandCatalog;
use crate::terrain::height_field::HeightField;

/// Absolute atlas column for `height`: the step counts of every band below
/// the containing band, plus the sub-step inside it.
pub fn atlas_column(catalog: &BandCatalog, height: f32) -> u32 {
    let band_index = catalog.band_for(height);
    let offset: u32 = catalog.bands()[..band_index]
        .iter()
        .map(|b| b.step_count)
        .sum();

    let band = &catalog.bands()[band_index];
    let upper = catalog.upper_border(band_index);
    let step_span = (upper - band.start_height) / band.step_count as f32;

    // A height exactly on the band's upper border fails every strict
    // comparison below and lands in the last step.
    let mut step = band.step_count - 1;
    for j in 1..=band.step_count {
        if height - band.start_height < step_span * j as f32 {
            step = j - 1;
            break;
        }
    }

    offset + step
}

/// Texture coordinate for cell (x, y), `u` in [0, 1), `v` fixed at 0.
pub fn cell_uv(field: &HeightField, catalog: &BandCatalog, x: u32, y: u32) -> Vec2 {
    let column = atlas_column(catalog, field.get(x, y));
    Vec2::new(column as f32 / catalog.atlas_width() as f32, 0.0)
}
