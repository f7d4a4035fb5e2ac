use std::collections::BTreeMap;

use palette::{Srgb, Srgba, WithAlpha};

use crate::data::classify::Bucket;

// ---------------------------------------------------------------------------
// Fixed bucket colour ramp
// ---------------------------------------------------------------------------

/// Display colour of an ordinal bucket. `Undefined` has none.
pub fn bucket_color(bucket: Bucket) -> Option<Srgb<u8>> {
    let rgb = match bucket {
        Bucket::Below100Kt => (0xFF, 0xFF, 0xFF),
        Bucket::Below200Kt => (0xB2, 0xE6, 0x99),
        Bucket::From200To300Kt => (0x3F, 0x51, 0xB5),
        Bucket::From300To500Kt => (0xCC, 0xCC, 0xCC),
        Bucket::From500KtTo1Mt => (0xF4, 0xD0, 0x3F),
        Bucket::From1To2Mt => (0xEB, 0x98, 0x4E),
        Bucket::From2To4Mt => (0xE6, 0x7E, 0x22),
        Bucket::From4To5Mt => (0x92, 0x2B, 0x21),
        Bucket::Above5Mt => (0xFF, 0x00, 0x00),
        Bucket::Undefined => return None,
    };
    Some(Srgb::new(rgb.0, rgb.1, rgb.2))
}

/// `#RRGGBB` form used by CSS and the chart backend.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// CSS `rgba(...)` with the given opacity in `[0, 1]`.
pub fn to_css_rgba(color: Srgb<u8>, alpha: f32) -> String {
    let c: Srgba<u8> = color.with_alpha((alpha.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!(
        "rgba({},{},{},{})",
        c.red,
        c.green,
        c.blue,
        f32::from(c.alpha) / 255.0
    )
}

// ---------------------------------------------------------------------------
// Colour mapping: bucket → hex
// ---------------------------------------------------------------------------

/// Maps every ordinal bucket to its hex colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Bucket, String>,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorMap {
    /// Build the map from the fixed ramp.
    pub fn new() -> Self {
        let mapping = Bucket::ORDERED
            .iter()
            .filter_map(|&b| bucket_color(b).map(|c| (b, to_hex(c))))
            .collect();
        ColorMap { mapping }
    }

    /// Hex colour for a bucket; `None` means "draw nothing".
    pub fn color_for(&self, bucket: Bucket) -> Option<&str> {
        self.mapping.get(&bucket).map(String::as_str)
    }

    /// Legend entries (bucket → colour), low to high.
    pub fn legend_entries(&self) -> Vec<(Bucket, &str)> {
        Bucket::ORDERED
            .iter()
            .filter_map(|&b| Some((b, self.color_for(b)?)))
            .collect()
    }
}
