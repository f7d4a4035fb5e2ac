//! Backend-neutral chart specifications.
//!
//! The builders in [`crate::ui::plot`] produce these; a renderer (currently
//! [`crate::ui::plotly`]) turns them into whatever its backend consumes.

pub mod format;

use serde::Serialize;

use crate::data::classify::Bucket;

/// One legend entry: an ordinal bucket and its colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub bucket: Bucket,
    pub color: String,
}

// ---------------------------------------------------------------------------
// Choropleth
// ---------------------------------------------------------------------------

/// A country polygon to colour in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    /// Country name, matched by the backend against its own geometry.
    pub country: String,
    pub value: Option<f64>,
    pub bucket: Bucket,
    /// `None` for `Undefined`: the region is drawn as absent.
    pub color: Option<String>,
}

/// All regions for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub year: i32,
    pub regions: Vec<Region>,
}

/// Animated choropleth, one frame per year in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    pub legend_title: String,
    pub slider_prefix: String,
    /// Legend categories, low to high emissions.
    pub categories: Vec<LegendEntry>,
    pub frames: Vec<MapFrame>,
}

impl MapSpec {
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.frames.iter().map(|f| f.year)
    }
}

// ---------------------------------------------------------------------------
// Horizontal bar chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub country: String,
    pub value: f64,
    pub bucket: Bucket,
    pub color: String,
    /// Pre-formatted value label, e.g. `1.2Mt / an`.
    pub text: String,
}

/// Horizontal bars in drawing order: the first bar sits at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub bars: Vec<Bar>,
    /// Value-axis extent `[min, max]`.
    pub value_range: [f64; 2],
}
