// ============================================================================
// SCALE - Ejes "bonitos" y escalas lineales para los gráficos SVG
// ============================================================================

/// Eje de valores de 0 a `max` en pasos de `step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTicks {
    pub max: f64,
    pub step: f64,
}

impl AxisTicks {
    pub fn values(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }
}

/// Paso en {1, 2, 2.5, 5, 10} x 10^n, máximo redondeado hacia arriba al paso.
/// Sin datos positivos -> eje 0..1.
pub fn nice_axis(max_value: f64, tick_count: usize) -> AxisTicks {
    if !max_value.is_finite() || max_value <= 0.0 || tick_count == 0 {
        return AxisTicks { max: 1.0, step: 1.0 };
    }

    let raw_step = max_value / tick_count as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = factor * magnitude;
    AxisTicks {
        max: (max_value / step).ceil() * step,
        step,
    }
}

/// Área de dibujo dentro del viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Plot {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 44.0,
            right: 16.0,
            top: 12.0,
            bottom: 28.0,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    /// Coordenada y de la línea base (valor 0)
    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    /// Valor -> coordenada y
    pub fn y(&self, value: f64, axis: &AxisTicks) -> f64 {
        let inner_height = (self.baseline() - self.top).max(0.0);
        self.baseline() - (value / axis.max) * inner_height
    }

    /// Centro de la banda `index` de `count`
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        self.left + (index as f64 + 0.5) * self.band_width(count)
    }

    pub fn band_width(&self, count: usize) -> f64 {
        self.inner_width() / count.max(1) as f64
    }
}

/// Número compacto para atributos SVG y etiquetas (máx. 2 decimales)
pub fn fmt(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_axis_for_sample_series() {
        assert_eq!(nice_axis(250.0, 4), AxisTicks { max: 300.0, step: 100.0 });
        assert_eq!(nice_axis(120.0, 4), AxisTicks { max: 150.0, step: 50.0 });
        assert_eq!(nice_axis(1200.0, 4), AxisTicks { max: 1500.0, step: 500.0 });
        assert_eq!(nice_axis(9.0, 4), AxisTicks { max: 10.0, step: 2.5 });
    }

    #[test]
    fn test_nice_axis_degenerate_inputs() {
        let unit = AxisTicks { max: 1.0, step: 1.0 };
        assert_eq!(nice_axis(0.0, 4), unit);
        assert_eq!(nice_axis(-5.0, 4), unit);
        assert_eq!(nice_axis(f64::NAN, 4), unit);
        assert_eq!(nice_axis(10.0, 0), unit);
    }

    #[test]
    fn test_tick_values() {
        let axis = nice_axis(250.0, 4);
        assert_eq!(axis.values(), vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_plot_mapping() {
        let plot = Plot::new(400.0, 240.0);
        let axis = AxisTicks { max: 300.0, step: 100.0 };
        assert_eq!(plot.y(0.0, &axis), plot.baseline());
        assert_eq!(plot.y(300.0, &axis), plot.top);
        assert!(plot.band_center(0, 4) < plot.band_center(1, 4));
        assert_eq!(plot.band_width(0), plot.inner_width());
    }

    #[test]
    fn test_fmt() {
        assert_eq!(fmt(120.0), "120");
        assert_eq!(fmt(12.5), "12.5");
        assert_eq!(fmt(1.0 / 3.0), "0.33");
        assert_eq!(fmt(-0.001), "0");
    }
}
