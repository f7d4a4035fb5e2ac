use std::collections::BTreeMap;

use crate::chart::format::format_si;
use crate::chart::{Bar, BarSpec, LegendEntry, MapFrame, MapSpec, Region};
use crate::color::ColorMap;
use crate::data::model::{ClassifiedRecord, CountryAverage};

pub const LEGEND_TITLE: &str = "SEUILS D'ÉMISSIONS";
pub const SLIDER_PREFIX: &str = "ANNÉE : ";
/// Appended to the abbreviated bar value.
pub const BAR_UNIT_SUFFIX: &str = "t / an";
/// Headroom on the value axis so the outside labels are not clipped.
pub const BAR_RANGE_FACTOR: f64 = 1.8;

// ---------------------------------------------------------------------------
// Choropleth (map pane)
// ---------------------------------------------------------------------------

/// Build the animated map: one frame per distinct year, ascending.
///
/// Within a frame, regions keep the order of the input rows.
pub fn map_chart(records: &[ClassifiedRecord], colors: &ColorMap) -> MapSpec {
    let mut by_year: BTreeMap<i32, Vec<Region>> = BTreeMap::new();

    for rec in records {
        by_year.entry(rec.record.year).or_default().push(Region {
            country: rec.record.country.clone(),
            value: rec.record.co2,
            bucket: rec.bucket,
            color: colors.color_for(rec.bucket).map(str::to_string),
        });
    }

    MapSpec {
        legend_title: LEGEND_TITLE.to_string(),
        slider_prefix: SLIDER_PREFIX.to_string(),
        categories: legend(colors),
        frames: by_year
            .into_iter()
            .map(|(year, regions)| MapFrame { year, regions })
            .collect(),
    }
}

fn legend(colors: &ColorMap) -> Vec<LegendEntry> {
    colors
        .legend_entries()
        .into_iter()
        .map(|(bucket, color)| LegendEntry {
            bucket,
            color: color.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Top-10 bars (side pane)
// ---------------------------------------------------------------------------

/// Build the horizontal bar chart. Input order is kept, so an ascending
/// ranking puts the largest emitter on top.
pub fn bar_chart(top: &[CountryAverage], colors: &ColorMap) -> BarSpec {
    let bars: Vec<Bar> = top
        .iter()
        .map(|c| Bar {
            country: c.country.clone(),
            value: c.mean_co2,
            bucket: c.bucket,
            color: colors.color_for(c.bucket).unwrap_or_default().to_string(),
            text: format!("{}{}", format_si(c.mean_co2, 2), BAR_UNIT_SUFFIX),
        })
        .collect();

    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);

    BarSpec {
        bars,
        value_range: [0.0, max * BAR_RANGE_FACTOR],
    }
}
