use crate::charts::scale::{fmt, nice_axis, Plot};
use crate::charts::{category_axis, svg_root, tooltip, value_axis, BAR_COLOR, TICK_COUNT};
use crate::dom::{ElementBuilder, Node};
use crate::models::{ChartSeriesPoint, Metric};

/// Fracción de la banda ocupada por cada barra
const BAR_FILL_RATIO: f64 = 0.6;

/// Gráfico de barras: una barra por categoría
pub fn render_bar_chart(title: &str, plot: &Plot, data: &[ChartSeriesPoint], metric: Metric) -> Node {
    let max = data.iter().map(|p| p.value(metric)).fold(0.0, f64::max);
    let axis = nice_axis(max, TICK_COUNT);
    let bar_width = plot.band_width(data.len()) * BAR_FILL_RATIO;

    let bars = data.iter().enumerate().map(|(i, point)| {
        let value = point.value(metric);
        let y = plot.y(value, &axis);
        ElementBuilder::svg("rect")
            .class("chart-bar")
            .attr("data-key", format!("{}-{}", metric.key(), i))
            .attr("x", fmt(plot.band_center(i, data.len()) - bar_width / 2.0))
            .attr("y", fmt(y))
            .attr("width", fmt(bar_width))
            .attr("height", fmt(plot.baseline() - y))
            .attr("fill", BAR_COLOR)
            .child(tooltip(point.name, value))
            .build()
    });

    svg_root(title, plot, "bar")
        .child(value_axis(plot, &axis))
        .child(category_axis(plot, data.iter().map(|p| p.name)))
        .child(ElementBuilder::svg("g").class("chart-series").children(bars).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PARTICIPATION_DATA;

    #[test]
    fn test_one_bar_per_category_with_tooltips() {
        let plot = Plot::new(400.0, 240.0);
        let node = render_bar_chart("Participation", &plot, &PARTICIPATION_DATA, Metric::Participation);
        let root = node.as_element().expect("svg");
        let bars = root.find_all_by_tag("rect");
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[0].attr("data-key"), Some("participation-0"));
        assert_eq!(bars[3].text_content(), "Sem 4: 250");

        let labels: Vec<String> = root.find_all_by_class("chart-axis--x")[0]
            .find_all_by_tag("text")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(labels, vec!["Sem 1", "Sem 2", "Sem 3", "Sem 4"]);
    }

    #[test]
    fn test_taller_value_gives_taller_bar() {
        let plot = Plot::new(400.0, 240.0);
        let node = render_bar_chart("Participation", &plot, &PARTICIPATION_DATA, Metric::Participation);
        let heights: Vec<f64> = node
            .as_element()
            .expect("svg")
            .find_all_by_tag("rect")
            .iter()
            .filter_map(|r| r.attr("height").and_then(|h| h.parse().ok()))
            .collect();
        // 120, 200, 150, 250
        assert!(heights[1] > heights[2] && heights[2] > heights[0]);
        assert!(heights[3] > heights[1]);
    }

    #[test]
    fn test_empty_series_renders_axes_only() {
        let plot = Plot::new(400.0, 240.0);
        let node = render_bar_chart("Empty", &plot, &[], Metric::Outcomes);
        let root = node.as_element().expect("svg");
        assert!(root.find_all_by_tag("rect").is_empty());
        // eje 0..1
        assert_eq!(root.find_all_by_class("chart-tick").len(), 2);
    }
}
