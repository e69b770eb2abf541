use serde_json::{json, Value};

use contracts::dashboards::d100_transaction_trends::{AggregatedPoint, GroupBy, Measure};

/// Build the Vega-Lite v5 specification for the linked trend panels.
///
/// Two vertically concatenated line-with-points views over the *same*
/// aggregated series: the overview supports pan/zoom and carries the brush
/// selection, the detail panel filters to the brushed range. The panels are
/// linked only through the brush region — the detail view is never
/// re-aggregated.
pub fn build_chart_spec(series: &[AggregatedPoint], measure: Measure, group_by: GroupBy) -> Value {
    let values =
        serde_json::to_value(series).expect("aggregated series serializes to JSON");
    let y_title = measure.axis_title();

    // bucket labels stay ordinal: week/month keys are not timestamps, and
    // the series already arrives in calendar order
    let encoding = json!({
        "x": { "field": "time", "type": "ordinal", "title": "Time" },
        "y": { "field": "value", "type": "quantitative", "title": y_title },
        "color": { "field": "group", "type": "nominal", "title": group_by.code() },
        "tooltip": [
            { "field": "time", "type": "nominal", "title": "Time" },
            { "field": "group", "type": "nominal", "title": "Group" },
            { "field": "value", "type": "quantitative", "title": y_title, "format": ",.2f" },
            { "field": "orders", "type": "quantitative", "title": "Orders", "format": ",d" },
            { "field": "revenue", "type": "quantitative", "title": "Revenue", "format": ",d" }
        ]
    });

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "vconcat": [
            {
                "title": "Overall Trend Over Time",
                "data": { "values": values.clone() },
                "width": "container",
                "height": 230,
                "mark": { "type": "line", "point": true },
                "params": [
                    {
                        "name": "zoom",
                        "select": { "type": "interval", "encodings": ["x"] },
                        "bind": "scales"
                    },
                    {
                        "name": "brush",
                        "select": { "type": "interval", "encodings": ["x"] }
                    }
                ],
                "encoding": encoding.clone()
            },
            {
                "title": "Detailed View for Selected Period",
                "data": { "values": values },
                "width": "container",
                "height": 230,
                "transform": [ { "filter": { "param": "brush" } } ],
                "mark": { "type": "line", "point": true },
                "encoding": encoding
            }
        ]
    })
}
