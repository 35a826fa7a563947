//! Dataset colors.
//!
//! The five major cities and the average line have fixed colors. Any other
//! name gets a hue derived from an FNV-1a hash of the name, so the same
//! station is drawn in the same color on every render and every build.

use crate::chart::Rgb;

/// Label of the cross-city average dataset.
pub const AVERAGE_LABEL: &str = "Average";

const PALETTE: [(&str, Rgb); 6] = [
    ("Stockholm", Rgb(54, 162, 235)),
    ("Göteborg", Rgb(255, 99, 132)),
    ("Malmö", Rgb(75, 192, 192)),
    ("Uppsala", Rgb(255, 159, 64)),
    ("Umeå", Rgb(153, 102, 255)),
    (AVERAGE_LABEL, Rgb(0, 0, 0)),
];

const FALLBACK_SATURATION: f64 = 0.65;
const FALLBACK_LIGHTNESS: f64 = 0.5;

/// The fixed color for `name`, if it has one.
pub fn fixed_color(name: &str) -> Option<Rgb> {
    PALETTE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, color)| *color)
}

/// Color for a dataset named `name`.
pub fn color_for(name: &str) -> Rgb {
    fixed_color(name).unwrap_or_else(|| hashed_color(name))
}

/// 32-bit FNV-1a. Stable across platforms and compiler versions, unlike
/// `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in bytes {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

fn hashed_color(name: &str) -> Rgb {
    let hue = f64::from(fnv1a(name.as_bytes()) % 360);
    hsl_to_rgb(hue, FALLBACK_SATURATION, FALLBACK_LIGHTNESS)
}

/// `hue` in degrees, `saturation` and `lightness` in 0..=1.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb(channel(r), channel(g), channel(b))
}
