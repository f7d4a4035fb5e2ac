//! Translation of chart specifications into Plotly.js figures.
//!
//! Each figure is a JSON object with `data`, `layout` and (for the map)
//! `frames`, ready to pass to `Plotly.newPlot`.

use serde_json::{Value, json};

use crate::chart::{BarSpec, LegendEntry, MapFrame, MapSpec};
use crate::color::to_css_rgba;

const BACKGROUND: &str = "#111111";
const TRANSPARENT: &str = "rgba(0,0,0,0)";

// ---------------------------------------------------------------------------
// Choropleth
// ---------------------------------------------------------------------------

/// Plotly figure for the animated map.
///
/// Every frame carries one trace per legend category, in category order,
/// so that Plotly can animate trace-by-trace. Regions without a bucket
/// colour are omitted.
pub fn map_figure(spec: &MapSpec) -> Value {
    let frames: Vec<Value> = spec
        .frames
        .iter()
        .map(|frame| {
            json!({
                "name": frame.year.to_string(),
                "data": frame_traces(frame, &spec.categories),
            })
        })
        .collect();

    let initial = spec
        .frames
        .first()
        .map(|f| frame_traces(f, &spec.categories))
        .unwrap_or_else(|| empty_traces(&spec.categories));

    json!({
        "data": initial,
        "layout": map_layout(spec),
        "frames": frames,
    })
}

fn frame_traces(frame: &MapFrame, categories: &[LegendEntry]) -> Vec<Value> {
    categories
        .iter()
        .map(|cat| {
            let (locations, values): (Vec<&str>, Vec<Option<f64>>) = frame
                .regions
                .iter()
                .filter(|r| r.bucket == cat.bucket && r.color.is_some())
                .map(|r| (r.country.as_str(), r.value))
                .unzip();
            choropleth_trace(cat, &locations, &values)
        })
        .collect()
}

fn empty_traces(categories: &[LegendEntry]) -> Vec<Value> {
    categories
        .iter()
        .map(|cat| choropleth_trace(cat, &[], &[]))
        .collect()
}

fn choropleth_trace(cat: &LegendEntry, locations: &[&str], values: &[Option<f64>]) -> Value {
    let label = cat.bucket.label();
    json!({
        "type": "choropleth",
        "name": label,
        "legendgroup": label,
        "legendrank": cat.bucket.rank(),
        "showlegend": true,
        "locationmode": "country names",
        "locations": locations,
        "z": vec![1; locations.len()],
        "customdata": values,
        "colorscale": [[0.0, cat.color], [1.0, cat.color]],
        "showscale": false,
        "marker": { "line": { "color": "white", "width": 0.5 } },
        "hovertemplate": format!("<b>%{{location}}</b><br>{label}<extra></extra>"),
    })
}

fn map_layout(spec: &MapSpec) -> Value {
    let steps: Vec<Value> = spec
        .years()
        .map(|year| {
            let name = year.to_string();
            json!({
                "label": name,
                "method": "animate",
                "args": [[name], {
                    "mode": "immediate",
                    "frame": { "duration": 0, "redraw": true },
                    "transition": { "duration": 0 },
                }],
            })
        })
        .collect();

    json!({
        "paper_bgcolor": BACKGROUND,
        "plot_bgcolor": BACKGROUND,
        "font": { "color": "white" },
        "margin": { "r": 0, "t": 0, "l": 0, "b": 0 },
        "geo": {
            "bgcolor": BACKGROUND,
            "showframe": false,
            "showcountries": true,
            "countrycolor": "white",
            "showland": true,
            "landcolor": "white",
            "showocean": true,
            "oceancolor": BACKGROUND,
            "projection": { "type": "natural earth" },
        },
        "legend": {
            "title": { "text": format!("<b>{}</b>", spec.legend_title) },
            "x": 0.02,
            "y": 0.5,
            "font": { "size": 18 },
            "bgcolor": to_css_rgba(palette::Srgb::new(0, 0, 0), 0.8),
        },
        "sliders": [{
            "active": 0,
            "currentvalue": {
                "prefix": spec.slider_prefix,
                "font": { "size": 55, "color": "white", "family": "Arial Black" },
                "xanchor": "center",
            },
            "x": 0.5,
            "xanchor": "center",
            "len": 0.9,
            "pad": { "t": 50 },
            "steps": steps,
        }],
        "updatemenus": [{
            "type": "buttons",
            "direction": "left",
            "showactive": false,
            "x": 0.1,
            "xanchor": "right",
            "y": 0,
            "yanchor": "top",
            "pad": { "t": 87, "r": 10 },
            "buttons": [
                {
                    "label": "▶",
                    "method": "animate",
                    "args": [null, {
                        "frame": { "duration": 500, "redraw": true },
                        "fromcurrent": true,
                        "transition": { "duration": 0 },
                    }],
                },
                {
                    "label": "◼",
                    "method": "animate",
                    "args": [[null], {
                        "mode": "immediate",
                        "frame": { "duration": 0, "redraw": true },
                        "transition": { "duration": 0 },
                    }],
                },
            ],
        }],
    })
}

// ---------------------------------------------------------------------------
// Bars
// ---------------------------------------------------------------------------

/// Plotly figure for the top-10 bar chart.
pub fn bar_figure(spec: &BarSpec) -> Value {
    let countries: Vec<&str> = spec.bars.iter().map(|b| b.country.as_str()).collect();
    let values: Vec<f64> = spec.bars.iter().map(|b| b.value).collect();
    let colors: Vec<&str> = spec.bars.iter().map(|b| b.color.as_str()).collect();
    let texts: Vec<&str> = spec.bars.iter().map(|b| b.text.as_str()).collect();

    json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "x": values,
            "y": countries,
            "marker": { "color": colors },
            "text": texts,
            "textposition": "outside",
            "textfont": { "size": 20 },
            "cliponaxis": false,
            "width": 0.5,
            "hovertemplate": "<b>%{y}</b><br>%{text}<extra></extra>",
        }],
        "layout": {
            "showlegend": false,
            "font": { "color": "white" },
            "xaxis": { "visible": false, "range": spec.value_range },
            "yaxis": {
                "tickfont": { "size": 20, "color": "white" },
                "title": { "text": "" },
            },
            "margin": { "l": 10, "r": 120, "t": 10, "b": 10 },
            "plot_bgcolor": TRANSPARENT,
            "paper_bgcolor": TRANSPARENT,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMap;
    use crate::data::classify::classify;
    use crate::data::model::{ClassifiedRecord, CountryAverage, EmissionRecord};
    use crate::ui::plot::{bar_chart, map_chart};

    fn sample_map() -> MapSpec {
        let rows = [
            ("Chile", 1970, Some(10.0)),
            ("Peru", 1970, None),
            ("Chile", 1971, Some(150_000.0)),
        ];
        let records: Vec<ClassifiedRecord> = rows
            .iter()
            .map(|&(c, y, v)| ClassifiedRecord {
                record: EmissionRecord::new(c, y, v),
                bucket: classify(v),
            })
            .collect();
        map_chart(&records, &ColorMap::new())
    }

    #[test]
    fn map_has_one_trace_per_category_in_every_frame() {
        let fig = map_figure(&sample_map());

        assert_eq!(fig["data"].as_array().map(Vec::len), Some(9));
        let frames = fig["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["name"], "1970");
        for frame in frames {
            assert_eq!(frame["data"].as_array().map(Vec::len), Some(9));
        }
        assert_eq!(fig["data"][0]["name"], "< 100 kt / an");
        assert_eq!(fig["data"][0]["locations"], json!(["Chile"]));
    }

    #[test]
    fn legend_ranks_follow_bucket_order() {
        let fig = map_figure(&sample_map());
        let ranks: Vec<Value> = fig["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["legendrank"].clone())
            .collect();
        let expected: Vec<Value> = (0..9).map(|i| json!(i)).collect();
        assert_eq!(ranks, expected);
        assert_eq!(fig["frames"][1]["data"][8]["legendrank"], json!(8));
    }

    #[test]
    fn undefined_regions_are_not_drawn() {
        let fig = map_figure(&sample_map());
        let drawn: Vec<&Value> = fig["frames"][0]["data"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|t| t["locations"].as_array().unwrap())
            .collect();
        assert_eq!(drawn, vec![&json!("Chile")]);
    }

    #[test]
    fn slider_steps_match_frames() {
        let fig = map_figure(&sample_map());
        let steps = fig["layout"]["sliders"][0]["steps"].as_array().unwrap();
        let labels: Vec<&str> = steps.iter().filter_map(|s| s["label"].as_str()).collect();
        assert_eq!(labels, vec!["1970", "1971"]);
        assert_eq!(fig["layout"]["sliders"][0]["currentvalue"]["prefix"], "ANNÉE : ");
        assert_eq!(fig["layout"]["legend"]["bgcolor"], "rgba(0,0,0,0.8)");
    }

    #[test]
    fn empty_map_still_has_legend_traces() {
        let fig = map_figure(&map_chart(&[], &ColorMap::new()));
        assert_eq!(fig["data"].as_array().map(Vec::len), Some(9));
        assert_eq!(fig["frames"], json!([]));
    }

    #[test]
    fn bar_figure_is_horizontal_with_labels() {
        let top = vec![CountryAverage {
            country: "Japan".into(),
            mean_co2: 1_000_000.0,
            bucket: classify(Some(1_000_000.0)),
        }];
        let fig = bar_figure(&bar_chart(&top, &ColorMap::new()));

        assert_eq!(fig["data"][0]["orientation"], "h");
        assert_eq!(fig["data"][0]["y"], json!(["Japan"]));
        assert_eq!(fig["data"][0]["text"], json!(["1.0Mt / an"]));
        assert_eq!(fig["layout"]["xaxis"]["range"], json!([0.0, 1_800_000.0]));
    }
}
