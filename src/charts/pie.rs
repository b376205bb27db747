use std::f64::consts::{FRAC_PI_2, TAU};
use crate::charts::scale::{fmt, Plot};
use crate::charts::{svg_root, tooltip, PIE_COLORS};
use crate::dom::{ElementBuilder, Node};
use crate::models::PieSlice;

/// Radio exterior de la torta
const OUTER_RADIUS: f64 = 80.0;

/// Porción ya ubicada (ángulos en radianes, 0 = las 12, sentido horario)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub name: &'static str,
    pub value: f64,
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Ubicar las porciones proporcionalmente. Porciones <= 0 se omiten
/// (el índice original se conserva para el data-key).
pub fn pie_wedges(slices: &[PieSlice]) -> Vec<Wedge> {
    let total: f64 = slices.iter().map(|s| s.value).filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.value > 0.0)
        .map(|(index, slice)| {
            let start = angle;
            angle += slice.value / total * TAU;
            Wedge {
                index,
                name: slice.name,
                value: slice.value,
                start,
                end: angle,
            }
        })
        .collect()
}

fn point_at(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// Path SVG de una porción (centro -> arco -> centro)
fn wedge_path(cx: f64, cy: f64, radius: f64, wedge: &Wedge) -> String {
    let (x0, y0) = point_at(cx, cy, radius, wedge.start);
    let (x1, y1) = point_at(cx, cy, radius, wedge.end);
    let large_arc = if wedge.sweep() > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        fmt(cx),
        fmt(cy),
        fmt(x0),
        fmt(y0),
        fmt(radius),
        fmt(radius),
        large_arc,
        fmt(x1),
        fmt(y1),
    )
}

/// Gráfico de torta
pub fn render_pie_chart(title: &str, plot: &Plot, data: &[PieSlice]) -> Node {
    let (cx, cy) = (plot.width / 2.0, plot.height / 2.0);
    let radius = OUTER_RADIUS.min(plot.height / 2.0 - 4.0).max(0.0);
    let wedges = pie_wedges(data);
    let whole = wedges.len() == 1;

    let shapes = wedges.iter().map(|wedge| {
        let color = PIE_COLORS[wedge.index % PIE_COLORS.len()];
        // Una sola porción con todo el total: el arco degenera, usar círculo
        let shape = if whole {
            ElementBuilder::svg("circle")
                .attr("cx", fmt(cx))
                .attr("cy", fmt(cy))
                .attr("r", fmt(radius))
        } else {
            ElementBuilder::svg("path").attr("d", wedge_path(cx, cy, radius, wedge))
        };
        shape
            .class("chart-slice")
            .attr("data-key", format!("cell-{}", wedge.index))
            .attr("data-name", wedge.name)
            .attr("fill", color)
            .attr("stroke", "#ffffff")
            .child(tooltip(wedge.name, wedge.value))
            .build()
    });

    svg_root(title, plot, "pie")
        .child(ElementBuilder::svg("g").class("chart-series").children(shapes).build())
        .build()
}
