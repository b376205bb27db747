// ============================================================================
// REPORT - Series de ejemplo para la página de reportes
// ============================================================================
// Datos fijos, sin fuente real ni actualización.
// ============================================================================

use serde::Serialize;

/// Fila por semestre
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSeriesPoint {
    pub name: &'static str,
    pub participation: f64,
    pub outcomes: f64,
}

/// Métrica numérica de una fila
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Participation,
    Outcomes,
}

impl Metric {
    pub fn key(self) -> &'static str {
        match self {
            Metric::Participation => "participation",
            Metric::Outcomes => "outcomes",
        }
    }
}

impl ChartSeriesPoint {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Participation => self.participation,
            Metric::Outcomes => self.outcomes,
        }
    }
}

/// Porción del gráfico de torta
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
}

pub const PARTICIPATION_DATA: [ChartSeriesPoint; 4] = [
    ChartSeriesPoint { name: "Sem 1", participation: 120.0, outcomes: 40.0 },
    ChartSeriesPoint { name: "Sem 2", participation: 200.0, outcomes: 80.0 },
    ChartSeriesPoint { name: "Sem 3", participation: 150.0, outcomes: 60.0 },
    ChartSeriesPoint { name: "Sem 4", participation: 250.0, outcomes: 120.0 },
];

pub const PIE_DATA: [PieSlice; 4] = [
    PieSlice { name: "Academic", value: 400.0 },
    PieSlice { name: "Sports", value: 300.0 },
    PieSlice { name: "Clubs", value: 300.0 },
    PieSlice { name: "Volunteering", value: 200.0 },
];

/// Tipo de gráfico de cada slot (fijo, no depende de los datos)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar(Metric),
    Pie,
    Line(Metric),
}

/// Slot de la página de reportes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlot {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub height: u32,
    pub wide: bool,
}

pub const REPORT_CHARTS: [ChartSlot; 3] = [
    ChartSlot {
        key: "participation",
        title: "Participation (by semester)",
        kind: ChartKind::Bar(Metric::Participation),
        height: 240,
        wide: false,
    },
    ChartSlot {
        key: "participation-type",
        title: "Participation by Type",
        kind: ChartKind::Pie,
        height: 240,
        wide: false,
    },
    ChartSlot {
        key: "outcomes",
        title: "Outcomes Trend",
        kind: ChartKind::Line(Metric::Outcomes),
        height: 300,
        wide: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_accessor() {
        let sem4 = PARTICIPATION_DATA[3];
        assert_eq!(sem4.value(Metric::Participation), 250.0);
        assert_eq!(sem4.value(Metric::Outcomes), 120.0);
    }

    #[test]
    fn test_pie_total() {
        let total: f64 = PIE_DATA.iter().map(|s| s.value).sum();
        assert_eq!(total, 1200.0);
    }
}
