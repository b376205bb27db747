use crate::dom::{ElementBuilder, Node};
use crate::models::{ServiceDescriptor, SERVICES};

/// Variante visual de la tarjeta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Grilla de 4 columnas en Home
    Compact,
    /// Grilla de 2 columnas en Services
    Detailed,
}

/// Tarjeta de servicio; data-key = título (único)
pub fn render_service_card(service: &ServiceDescriptor, style: CardStyle) -> Node {
    let class = match style {
        CardStyle::Compact => "service-card service-card--compact",
        CardStyle::Detailed => "service-card service-card--detailed",
    };

    ElementBuilder::new("div")
        .class(class)
        .attr("data-key", service.title)
        .child(
            ElementBuilder::new("div")
                .class("service-icon")
                .attr("aria-hidden", "true")
                .text(service.icon)
                .build(),
        )
        .child(
            ElementBuilder::new("div")
                .child(ElementBuilder::new("h3").text(service.title).build())
                .child(ElementBuilder::new("p").text(service.description).build())
                .build(),
        )
        .build()
}

/// Grilla con los ocho servicios en orden
pub fn render_service_grid(style: CardStyle) -> Node {
    let grid_class = match style {
        CardStyle::Compact => "service-grid service-grid--compact",
        CardStyle::Detailed => "service-grid service-grid--detailed",
    };

    ElementBuilder::new("div")
        .class(grid_class)
        .children(SERVICES.iter().map(|service| render_service_card(service, style)))
        .build()
}

pub fn render_services() -> Node {
    ElementBuilder::new("main")
        .class("view view-services container section")
        .attr("data-view", "services")
        .child(ElementBuilder::new("h2").text("Services").build())
        .child(render_service_grid(CardStyle::Detailed))
        .build()
}
