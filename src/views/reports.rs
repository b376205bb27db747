// ============================================================================
// REPORTS VIEW - Tres gráficos con datos de ejemplo
// ============================================================================

use crate::charts::{render_chart, series_json};
use crate::dom::{ElementBuilder, Node};
use crate::models::{ChartSlot, REPORT_CHARTS};

pub fn render_reports() -> Node {
    ElementBuilder::new("main")
        .class("view view-reports container section")
        .attr("data-view", "reports")
        .child(
            ElementBuilder::new("div")
                .class("report-grid")
                .children(REPORT_CHARTS.iter().map(render_chart_card))
                .build(),
        )
        .build()
}

fn render_chart_card(slot: &ChartSlot) -> Node {
    let class = if slot.wide {
        "chart-card chart-card--wide"
    } else {
        "chart-card"
    };

    ElementBuilder::new("section")
        .class(class)
        .attr("data-chart", slot.key)
        .attr("data-series", series_json(slot))
        .child(ElementBuilder::new("h3").text(slot.title).build())
        .child(
            ElementBuilder::new("div")
                .class("chart-frame")
                .attr("style", format!("height: {}px;", slot.height))
                .child(render_chart(slot))
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_chart_containers_with_distinct_keys() {
        let node = render_reports();
        let view = node.as_element().expect("main");
        let cards = view.find_all_by_class("chart-card");
        let keys: Vec<_> = cards.iter().filter_map(|c| c.attr("data-chart")).collect();
        assert_eq!(keys, vec!["participation", "participation-type", "outcomes"]);
        assert!(cards.iter().all(|c| c.attr("data-series").is_some()));
    }

    #[test]
    fn test_end_to_end_chart_content() {
        let node = render_reports();
        let view = node.as_element().expect("main");

        let bar = view.find_all_by_class("chart--bar");
        assert_eq!(bar.len(), 1);
        assert_eq!(bar[0].find_all_by_class("chart-bar").len(), 4);
        let labels: Vec<String> = bar[0].find_all_by_class("chart-axis--x")[0]
            .find_all_by_tag("text")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(labels, vec!["Sem 1", "Sem 2", "Sem 3", "Sem 4"]);

        let pie = view.find_all_by_class("chart--pie");
        assert_eq!(pie.len(), 1);
        let slices: Vec<String> = pie[0]
            .find_all_by_class("chart-slice")
            .iter()
            .map(|s| s.text_content())
            .collect();
        assert_eq!(slices, vec!["Academic: 400", "Sports: 300", "Clubs: 300", "Volunteering: 200"]);

        let line = view.find_all_by_class("chart--line");
        assert_eq!(line.len(), 1);
        let dots: Vec<_> = line[0]
            .find_all_by_class("chart-dot")
            .iter()
            .filter_map(|d| d.attr("data-key"))
            .collect();
        assert_eq!(dots, vec!["outcomes-0", "outcomes-1", "outcomes-2", "outcomes-3"]);
    }

    #[test]
    fn test_wide_card_height() {
        let node = render_reports();
        let view = node.as_element().expect("main");
        let wide = view.find_all_by_class("chart-card--wide");
        assert_eq!(wide.len(), 1);
        assert_eq!(
            wide[0].find_all_by_class("chart-frame")[0].attr("style"),
            Some("height: 300px;")
        );
    }
}
