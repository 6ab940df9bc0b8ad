//! Band catalog: the ordered height strata a terrain is classified into.
//!
//! A [`Band`] covers `[start_height, next.start_height)` of the normalized
//! height range (the last band runs to 1.0) and carries a color ramp that is
//! quantized into `step_count` discrete atlas pixels. [`BandCatalog`] is the
//! validated, immutable list of bands for one generation pass; it owns the
//! containment rule shared by the classifier and the UV mapper.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// One stratum of the classification range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower threshold of this band's height range, in [0, 1).
    pub start_height: f32,
    /// Ramp color at the band's lower edge (RGBA, components in [0, 1]).
    pub start_color: [f32; 4],
    /// Ramp color at the band's upper edge.
    pub end_color: [f32; 4],
    /// Number of discrete ramp steps. Must be at least 2.
    pub step_count: u32,
}

/// Ordered, validated list of bands for one generation pass.
///
/// Construction through [`BandCatalog::new`] is the only way to obtain a
/// catalog, so every catalog the pipeline sees is already valid: non-empty,
/// thresholds strictly ascending from 0, every `step_count >= 2`.
#[derive(Clone, Debug, PartialEq)]
pub struct BandCatalog {
    bands: Vec<Band>,
}

impl BandCatalog {
    /// Validate and wrap a list of bands.
    pub fn new(bands: Vec<Band>) -> Result<Self> {
        if bands.is_empty() {
            return Err(Error::Catalog("catalog has no bands".into()));
        }
        if bands.len() > u8::MAX as usize {
            return Err(Error::Catalog(format!(
                "{} bands exceeds the {} band limit",
                bands.len(),
                u8::MAX
            )));
        }
        if bands[0].start_height != 0.0 {
            return Err(Error::Catalog(format!(
                "first band must start at 0, got {}",
                bands[0].start_height
            )));
        }
        for (i, band) in bands.iter().enumerate() {
            if band.step_count < 2 {
                return Err(Error::Catalog(format!(
                    "band {} has step_count {}, minimum is 2",
                    i, band.step_count
                )));
            }
            if !(0.0..1.0).contains(&band.start_height) {
                return Err(Error::Catalog(format!(
                    "band {} start_height {} outside [0, 1)",
                    i, band.start_height
                )));
            }
            if i > 0 && band.start_height <= bands[i - 1].start_height {
                return Err(Error::Catalog(format!(
                    "band {} start_height {} does not ascend past {}",
                    i,
                    band.start_height,
                    bands[i - 1].start_height
                )));
            }
        }
        Ok(Self { bands })
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// A valid catalog is never empty; kept for completeness.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// The bands in ascending threshold order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Upper border of band `i`'s height range: the next band's threshold,
    /// or 1.0 for the last band.
    pub fn upper_border(&self, i: usize) -> f32 {
        if i == self.bands.len() - 1 {
            1.0
        } else {
            self.bands[i + 1].start_height
        }
    }

    /// The band containing `height`: the first band (ascending) whose upper
    /// border is >= height.
    ///
    /// This is the single containment rule for the whole pipeline. The
    /// classifier and the UV mapper both call it, so a tile's band and its
    /// atlas column can never disagree.
    pub fn band_for(&self, height: f32) -> usize {
        for i in 0..self.bands.len() {
            if height <= self.upper_border(i) {
                return i;
            }
        }
        self.bands.len() - 1
    }

    /// Total atlas width: the sum of all bands' step counts.
    pub fn atlas_width(&self) -> u32 {
        self.bands.iter().map(|b| b.step_count).sum()
    }
}

/// Three-band water/sand/grass catalog.
impl Default for BandCatalog {
    fn default() -> Self {
        Self::new(vec![
            Band {
                start_height: 0.0,
                start_color: [0.05, 0.20, 0.45, 1.0],
                end_color: [0.25, 0.55, 0.75, 1.0],
                step_count: 4,
            },
            Band {
                start_height: 0.4,
                start_color: [0.93, 0.84, 0.69, 1.0],
                end_color: [0.87, 0.76, 0.56, 1.0],
                step_count: 2,
            },
            Band {
                start_height: 0.7,
                start_color: [0.39, 0.70, 0.31, 1.0],
                end_color: [0.18, 0.45, 0.16, 1.0],
                step_count: 4,
            },
        ])
        .expect("default catalog is valid")
    }
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

impl Serialize for BandCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.bands.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BandCatalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bands = Vec::<Band>::deserialize(deserializer)?;
        Self::new(bands).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
