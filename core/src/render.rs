use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::config::{MOUNTAIN_COLOR, WATER_COLOR};
use crate::grid::{HeightMap2D, TerrainGrid};
use crate::plate::Plate;

// Height bands: pure blue up to SEA_LEVEL, blue -> green up to LOWLAND, green -> red above
pub const SEA_LEVEL: f32 = 0.5;
pub const LOWLAND: f32 = 0.8;

fn height_gradient() -> Gradient<LinSrgb> {
    Gradient::with_domain(vec![
        (0.0, LinSrgb::new(0.0, 0.0, 1.0)),
        (SEA_LEVEL, LinSrgb::new(0.0, 0.0, 1.0)),
        (LOWLAND, LinSrgb::new(0.0, 1.0, 0.0)),
        (1.0, LinSrgb::new(1.0, 0.0, 0.0)),
    ])
}

// Map a height in [0, 1] to RGB; out-of-range input is clamped first
pub fn height_to_rgb(h: f32) -> [u8; 3] {
    color_at(&height_gradient(), h)
}

fn color_at(gradient: &Gradient<LinSrgb>, h: f32) -> [u8; 3] {
    let h = if h.is_nan() { 0.0 } else { h.clamp(0.0, 1.0) };
    let rgb = gradient.get(h).into_format::<u8>();
    [rgb.red, rgb.green, rgb.blue]
}

pub fn height_image(map: &HeightMap2D) -> RgbImage {
    let gradient = height_gradient();
    let h = map.len();
    let w = map.first().map_or(0, Vec::len);
    let mut img = RgbImage::new(w as u32, h as u32);
    for (y, row) in map.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(color_at(&gradient, v)));
        }
    }
    img
}

/// Color of one terrain cell: water, the owning plate's color, or mountain
/// brown for markers that don't name a plate.
pub fn terrain_color(value: u32, plates: &[Plate]) -> [u8; 3] {
    match value {
        0 => WATER_COLOR,
        v => plates
            .get(v as usize - 1)
            .map_or(MOUNTAIN_COLOR, |p| p.color),
    }
}

pub fn terrain_image(terrain: &TerrainGrid, plates: &[Plate]) -> RgbImage {
    let mut img = RgbImage::new(terrain.width() as u32, terrain.height() as u32);
    for (y, row) in terrain.rows().iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(terrain_color(v, plates)));
        }
    }
    img
}
