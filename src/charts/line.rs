use crate::charts::scale::{fmt, nice_axis, Plot};
use crate::charts::{category_axis, svg_root, tooltip, value_axis, PRIMARY_COLOR, TICK_COUNT};
use crate::dom::{ElementBuilder, Node};
use crate::models::{ChartSeriesPoint, Metric};

/// Gráfico de línea de una métrica a lo largo de las categorías
pub fn render_line_chart(title: &str, plot: &Plot, data: &[ChartSeriesPoint], metric: Metric) -> Node {
    let max = data.iter().map(|p| p.value(metric)).fold(0.0, f64::max);
    let axis = nice_axis(max, TICK_COUNT);

    let coords: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, p)| (plot.band_center(i, data.len()), plot.y(p.value(metric), &axis)))
        .collect();

    let points = coords
        .iter()
        .map(|(x, y)| format!("{},{}", fmt(*x), fmt(*y)))
        .collect::<Vec<_>>()
        .join(" ");

    let dots = data.iter().zip(&coords).enumerate().map(|(i, (point, (x, y)))| {
        ElementBuilder::svg("circle")
            .class("chart-dot")
            .attr("data-key", format!("{}-{}", metric.key(), i))
            .attr("cx", fmt(*x))
            .attr("cy", fmt(*y))
            .attr("r", "3")
            .attr("fill", "#ffffff")
            .attr("stroke", PRIMARY_COLOR)
            .attr("stroke-width", "2")
            .child(tooltip(point.name, point.value(metric)))
            .build()
    });

    svg_root(title, plot, "line")
        .child(value_axis(plot, &axis))
        .child(category_axis(plot, data.iter().map(|p| p.name)))
        .child(
            ElementBuilder::svg("g")
                .class("chart-series")
                .child(
                    ElementBuilder::svg("polyline")
                        .class("chart-line")
                        .attr("points", points)
                        .attr("fill", "none")
                        .attr("stroke", PRIMARY_COLOR)
                        .attr("stroke-width", "2")
                        .build(),
                )
                .children(dots)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PARTICIPATION_DATA;

    #[test]
    fn test_line_tracks_outcomes() {
        let plot = Plot::new(800.0, 300.0);
        let node = render_line_chart("Outcomes Trend", &plot, &PARTICIPATION_DATA, Metric::Outcomes);
        let root = node.as_element().expect("svg");

        let line = root.find_all_by_tag("polyline");
        assert_eq!(line.len(), 1);
        assert_eq!(line[0].attr("stroke"), Some(PRIMARY_COLOR));
        assert_eq!(line[0].attr("points").map(|p| p.split(' ').count()), Some(4));

        let tips: Vec<String> = root.find_all_by_tag("circle").iter().map(|c| c.text_content()).collect();
        assert_eq!(tips, vec!["Sem 1: 40", "Sem 2: 80", "Sem 3: 60", "Sem 4: 120"]);
    }

    #[test]
    fn test_highest_value_sits_on_top_of_axis() {
        let plot = Plot::new(800.0, 300.0);
        let node = render_line_chart("Outcomes Trend", &plot, &PARTICIPATION_DATA, Metric::Outcomes);
        let ys: Vec<f64> = node
            .as_element()
            .expect("svg")
            .find_all_by_tag("circle")
            .iter()
            .filter_map(|c| c.attr("cy").and_then(|v| v.parse().ok()))
            .collect();
        // eje 0..150: el punto más alto (120) tiene la menor y
        let min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(min, ys[3]);
        assert!(ys[3] > plot.top);
    }
}
