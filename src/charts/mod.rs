// ============================================================================
// CHARTS - Gráficos SVG inline (barras, torta, línea)
// ============================================================================
// Cada dato lleva data-key único dentro de su gráfico y un <title> como tooltip.
// ============================================================================

pub mod scale;
pub mod bar;
pub mod pie;
pub mod line;

pub use scale::{nice_axis, AxisTicks, Plot};
pub use bar::render_bar_chart;
pub use pie::{render_pie_chart, pie_wedges, Wedge};
pub use line::render_line_chart;

use crate::dom::{ElementBuilder, Node};
use crate::models::{ChartKind, ChartSlot, PARTICIPATION_DATA, PIE_DATA};
use scale::fmt;

/// Color principal del sitio
pub const PRIMARY_COLOR: &str = "#0b74de";
/// Relleno por defecto de las barras
pub const BAR_COLOR: &str = "#8884d8";
/// Colores de las porciones, en orden
pub const PIE_COLORS: [&str; 4] = ["#0b74de", "#00c49f", "#ffbb28", "#ff8042"];

/// Cantidad de intervalos del eje de valores
const TICK_COUNT: usize = 4;
const NARROW_WIDTH: f64 = 400.0;
const WIDE_WIDTH: f64 = 800.0;

/// Renderizar el SVG del slot con sus datos fijos
pub fn render_chart(slot: &ChartSlot) -> Node {
    let width = if slot.wide { WIDE_WIDTH } else { NARROW_WIDTH };
    let plot = Plot::new(width, f64::from(slot.height));
    match slot.kind {
        ChartKind::Bar(metric) => render_bar_chart(slot.title, &plot, &PARTICIPATION_DATA, metric),
        ChartKind::Pie => render_pie_chart(slot.title, &plot, &PIE_DATA),
        ChartKind::Line(metric) => render_line_chart(slot.title, &plot, &PARTICIPATION_DATA, metric),
    }
}

/// Tabla de origen del slot serializada (atributo data-series)
pub fn series_json(slot: &ChartSlot) -> String {
    let json = match slot.kind {
        ChartKind::Bar(_) | ChartKind::Line(_) => serde_json::to_string(&PARTICIPATION_DATA),
        ChartKind::Pie => serde_json::to_string(&PIE_DATA),
    };
    json.unwrap_or_else(|e| {
        log::error!("❌ [CHARTS] Error serializando serie '{}': {}", slot.key, e);
        String::from("[]")
    })
}

/// Raíz <svg> común
fn svg_root(title: &str, plot: &Plot, kind: &str) -> ElementBuilder {
    ElementBuilder::svg("svg")
        .class(&format!("chart chart--{}", kind))
        .attr("viewBox", format!("0 0 {} {}", fmt(plot.width), fmt(plot.height)))
        .attr("preserveAspectRatio", "xMidYMid meet")
        .attr("role", "img")
        .attr("aria-label", title)
}

/// Tooltip nativo
fn tooltip(label: &str, value: f64) -> Node {
    ElementBuilder::svg("title")
        .text(format!("{}: {}", label, fmt(value)))
        .build()
}

/// Grilla horizontal + etiquetas del eje de valores
fn value_axis(plot: &Plot, axis: &AxisTicks) -> Node {
    let ticks = axis.values().into_iter().map(|value| {
        let y = fmt(plot.y(value, axis));
        ElementBuilder::svg("g")
            .class("chart-tick")
            .child(
                ElementBuilder::svg("line")
                    .class("chart-grid")
                    .attr("x1", fmt(plot.left))
                    .attr("x2", fmt(plot.width - plot.right))
                    .attr("y1", y.clone())
                    .attr("y2", y.clone())
                    .build(),
            )
            .child(
                ElementBuilder::svg("text")
                    .attr("x", fmt(plot.left - 6.0))
                    .attr("y", y)
                    .attr("text-anchor", "end")
                    .attr("dominant-baseline", "middle")
                    .text(fmt(value))
                    .build(),
            )
            .build()
    });

    ElementBuilder::svg("g")
        .class("chart-axis chart-axis--y")
        .children(ticks)
        .build()
}

/// Etiquetas de categoría bajo la línea base
fn category_axis<'a>(plot: &Plot, labels: impl ExactSizeIterator<Item = &'a str>) -> Node {
    let count = labels.len();
    let texts = labels.enumerate().map(|(i, label)| {
        ElementBuilder::svg("text")
            .attr("x", fmt(plot.band_center(i, count)))
            .attr("y", fmt(plot.baseline() + 18.0))
            .attr("text-anchor", "middle")
            .text(label)
            .build()
    });

    ElementBuilder::svg("g")
        .class("chart-axis chart-axis--x")
        .child(
            ElementBuilder::svg("line")
                .class("chart-baseline")
                .attr("x1", fmt(plot.left))
                .attr("x2", fmt(plot.width - plot.right))
                .attr("y1", fmt(plot.baseline()))
                .attr("y2", fmt(plot.baseline()))
                .build(),
        )
        .children(texts)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::REPORT_CHARTS;
    use std::collections::HashSet;

    fn keyed(node: &Node) -> Vec<String> {
        let root = node.as_element().expect("svg root");
        root.find_all(&|el| el.attr("data-key").is_some())
            .into_iter()
            .filter_map(|el| el.attr("data-key").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_every_slot_has_unique_data_keys() {
        for slot in &REPORT_CHARTS {
            let keys = keyed(&render_chart(slot));
            assert_eq!(keys.len(), 4, "slot {}", slot.key);
            let unique: HashSet<_> = keys.iter().collect();
            assert_eq!(unique.len(), keys.len(), "slot {}", slot.key);
        }
    }

    #[test]
    fn test_keys_are_stable_between_renders() {
        for slot in &REPORT_CHARTS {
            assert_eq!(keyed(&render_chart(slot)), keyed(&render_chart(slot)));
        }
    }

    #[test]
    fn test_series_json_round_trips_source_tables() {
        let bar: serde_json::Value = serde_json::from_str(&series_json(&REPORT_CHARTS[0])).expect("json");
        assert_eq!(bar.as_array().map(Vec::len), Some(4));
        assert_eq!(bar[0]["name"], "Sem 1");
        assert_eq!(bar[3]["participation"], 250.0);

        let pie: serde_json::Value = serde_json::from_str(&series_json(&REPORT_CHARTS[1])).expect("json");
        assert_eq!(pie[2]["name"], "Clubs");
        assert_eq!(pie[2]["value"], 300.0);
    }

    #[test]
    fn test_svg_root_is_accessible() {
        let node = render_chart(&REPORT_CHARTS[2]);
        let root = node.as_element().expect("svg root");
        assert_eq!(root.tag, "svg");
        assert_eq!(root.attr("role"), Some("img"));
        assert_eq!(root.attr("aria-label"), Some("Outcomes Trend"));
        assert_eq!(root.attr("viewBox"), Some("0 0 800 300"));
    }
}
