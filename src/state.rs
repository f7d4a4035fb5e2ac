use log::{debug, info};

use crate::chart::{BarSpec, MapSpec};
use crate::color::ColorMap;
use crate::data::aggregate::top_emitters;
use crate::data::filter::eu_exclusion_set;
use crate::data::model::{ClassifiedRecord, CountryAverage, EmissionTable};
use crate::ui::{panels, plot, plotly};

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Everything derived from the loaded table, computed once at startup.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Rows with their bucket, in table (year) order.
    pub classified: Vec<ClassifiedRecord>,

    /// Top emitters outside the EU, ascending by mean.
    pub top: Vec<CountryAverage>,

    pub map: MapSpec,
    pub bars: BarSpec,
}

impl Dashboard {
    /// Run classify → aggregate → build charts over a loaded table.
    pub fn build(table: &EmissionTable) -> Self {
        let colors = ColorMap::new();

        let classified = table.classify();
        let undefined = classified.iter().filter(|r| !r.bucket.is_defined()).count();
        debug!("classified {} rows ({undefined} without data)", classified.len());

        let top = top_emitters(&table.records, &eu_exclusion_set());
        if let Some(leader) = top.last() {
            info!(
                "top emitter outside the EU: {} ({:.0} kt/yr on average)",
                leader.country, leader.mean_co2
            );
        }

        let map = plot::map_chart(&classified, &colors);
        let bars = plot::bar_chart(&top, &colors);
        debug!("map has {} frames, bar chart has {} bars", map.frames.len(), bars.bars.len());

        Dashboard {
            classified,
            top,
            map,
            bars,
        }
    }

    /// Render the complete HTML page.
    pub fn render_page(&self) -> String {
        panels::render_page(&plotly::map_figure(&self.map), &plotly::bar_figure(&self.bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_table;

    const SAMPLE: &str = "Name;Year;CO2\n\
                          Germany;2000;9000000\n\
                          Testland;2000;50000\n\
                          Testland;2001;150000\n\
                          Testland;2002;NaN\n\
                          Japan;2001;1200000\n\
                          Japan;2000;1100000\n";

    #[test]
    fn builds_top_list_and_frames() {
        let table = read_table(SAMPLE.as_bytes()).unwrap();
        let dash = Dashboard::build(&table);

        let names: Vec<&str> = dash.top.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Testland", "Japan"]);
        assert_eq!(dash.top[0].bucket.label(), "< 200 kt / an");
        assert_eq!(dash.map.frames.len(), 3);
        // The map still shows excluded countries.
        assert!(dash.map.frames[0].regions.iter().any(|r| r.country == "Germany"));
        assert_eq!(dash.bars.bars.len(), 2);
    }

    #[test]
    fn building_twice_is_byte_identical() {
        let table = read_table(SAMPLE.as_bytes()).unwrap();
        let first = Dashboard::build(&table).render_page();
        let second = Dashboard::build(&table).render_page();
        assert_eq!(first, second);
    }
}
