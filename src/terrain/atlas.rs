//! Gradient atlas synthesis
//!
//! A [`GradientAtlas`] is a 1-pixel-tall color strip holding the
//! concatenated ramps of every band in catalog order. Each band contributes
//! exactly `step_count` pixels, linearly interpolated from `start_color` to
//! `end_color` inclusive of both endpoints. Renderers must sample it with
//! nearest-neighbor filtering so the discrete steps stay sharp.

use bytemuck::{Pod, Zeroable};

use crate::terrain::band::BandCatalog;

/// Packed 8-bit RGBA pixel for direct upload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 1xW color strip, W = sum of all bands' step counts.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientAtlas {
    pixels: Vec<[f32; 4]>,
}

impl GradientAtlas {
    /// Synthesize the atlas for a catalog.
    ///
    /// Catalog validation guarantees `step_count >= 2`, so the inclusive
    /// interpolation divisor `step_count - 1` is never zero.
    pub fn build(catalog: &BandCatalog) -> Self {
        let mut pixels = Vec::with_capacity(catalog.atlas_width() as usize);

        for band in catalog.bands() {
            let n = band.step_count;
            for k in 0..n {
                pixels.push(ramp_pixel(band.start_color, band.end_color, k, n));
            }
        }

        Self { pixels }
    }

    /// Strip width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.len() as u32
    }

    /// Pixel at column `i`.
    pub fn pixel(&self, i: u32) -> [f32; 4] {
        self.pixels[i as usize]
    }

    /// All pixels in band order.
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Packed 8-bit pixels; `bytemuck::cast_slice` turns the result into
    /// upload-ready bytes.
    pub fn to_rgba8(&self) -> Vec<Rgba8> {
        self.pixels
            .iter()
            .map(|p| Rgba8 {
                r: to_channel(p[0]),
                g: to_channel(p[1]),
                b: to_channel(p[2]),
                a: to_channel(p[3]),
            })
            .collect()
    }

    /// The strip as a Wx1 bitmap for a presentation sink. Sample with
    /// nearest-neighbor filtering.
    pub fn to_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width(), 1);
        for (i, px) in self.to_rgba8().iter().enumerate() {
            img.put_pixel(i as u32, 0, image::Rgba([px.r, px.g, px.b, px.a]));
        }
        img
    }
}

/// Pixel `k` of an `n`-step ramp, endpoints inclusive.
fn ramp_pixel(start: [f32; 4], end: [f32; 4], k: u32, n: u32) -> [f32; 4] {
    let t0 = (n - 1 - k) as f32 / (n - 1) as f32;
    let t1 = k as f32 / (n - 1) as f32;
    std::array::from_fn(|c| start[c] * t0 + end[c] * t1)
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::band::Band;

    fn approx_eq(a: [f32; 4], b: [f32; 4], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    fn two_band_catalog() -> BandCatalog {
        BandCatalog::new(vec![
            Band {
                start_height: 0.0,
                start_color: [0.0, 0.0, 0.0, 1.0],
                end_color: [1.0, 1.0, 1.0, 1.0],
                step_count: 3,
            },
            Band {
                start_height: 0.5,
                start_color: [1.0, 0.0, 0.0, 1.0],
                end_color: [0.0, 0.0, 1.0, 1.0],
                step_count: 2,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_width_is_sum_of_step_counts() {
        let catalog = two_band_catalog();
        let atlas = GradientAtlas::build(&catalog);
        assert_eq!(atlas.width(), 5);
        assert_eq!(atlas.width(), catalog.atlas_width());
    }

    #[test]
    fn test_band_spans_start_and_end_on_catalog_colors() {
        let catalog = two_band_catalog();
        let atlas = GradientAtlas::build(&catalog);

        // Band 0 spans columns 0..3.
        assert!(approx_eq(atlas.pixel(0), [0.0, 0.0, 0.0, 1.0], 1e-6));
        assert!(approx_eq(atlas.pixel(2), [1.0, 1.0, 1.0, 1.0], 1e-6));
        // Band 1 spans columns 3..5.
        assert!(approx_eq(atlas.pixel(3), [1.0, 0.0, 0.0, 1.0], 1e-6));
        assert!(approx_eq(atlas.pixel(4), [0.0, 0.0, 1.0, 1.0], 1e-6));
    }

    #[test]
    fn test_interior_pixel_interpolates() {
        let catalog = two_band_catalog();
        let atlas = GradientAtlas::build(&catalog);
        assert!(approx_eq(atlas.pixel(1), [0.5, 0.5, 0.5, 1.0], 1e-6));
    }

    #[test]
    fn test_two_step_band_is_exactly_endpoints() {
        let catalog = BandCatalog::new(vec![Band {
            start_height: 0.0,
            start_color: [0.2, 0.4, 0.6, 1.0],
            end_color: [0.8, 0.6, 0.4, 1.0],
            step_count: 2,
        }])
        .unwrap();
        let atlas = GradientAtlas::build(&catalog);

        assert_eq!(atlas.width(), 2);
        assert!(approx_eq(atlas.pixel(0), [0.2, 0.4, 0.6, 1.0], 1e-6));
        assert!(approx_eq(atlas.pixel(1), [0.8, 0.6, 0.4, 1.0], 1e-6));
    }

    #[test]
    fn test_rgba8_packing() {
        let catalog = two_band_catalog();
        let packed = GradientAtlas::build(&catalog).to_rgba8();

        assert_eq!(packed.len(), 5);
        assert_eq!(packed[0], Rgba8 { r: 0, g: 0, b: 0, a: 255 });
        assert_eq!(packed[2], Rgba8 { r: 255, g: 255, b: 255, a: 255 });
        assert_eq!(packed[1], Rgba8 { r: 128, g: 128, b: 128, a: 255 });

        let bytes: &[u8] = bytemuck::cast_slice(&packed);
        assert_eq!(bytes.len(), 20);
    }

    #[test]
    fn test_image_adapter_dimensions() {
        let catalog = two_band_catalog();
        let img = GradientAtlas::build(&catalog).to_image();

        assert_eq!(img.width(), 5);
        assert_eq!(img.height(), 1);
        assert_eq!(img.get_pixel(4, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_default_catalog_atlas() {
        let atlas = GradientAtlas::build(&BandCatalog::default());
        assert_eq!(atlas.width(), 10);
    }
}
