use serde::Serialize;

/// Outer size of the chart and the margins around the plot area.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, bon::Builder)]
pub struct Layout {
    #[builder(default = 1000.0)]
    pub width: f64,

    #[builder(default = 400.0)]
    pub height: f64,

    #[builder(default)]
    pub margin: Margin,

    /// Space between the bars as a fraction of the band step.
    #[builder(default = 0.3)]
    pub padding: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Layout {
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self { top: 20.0, right: 20.0, bottom: 30.0, left: 60.0 }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_default_plot_area() {
        let layout = Layout::default();
        assert_abs_diff_eq!(layout.inner_width(), 920.0);
        assert_abs_diff_eq!(layout.inner_height(), 350.0);
    }

    #[test]
    fn test_builder() {
        let layout = Layout::builder().width(500.0).build();
        assert_abs_diff_eq!(layout.inner_width(), 420.0);
        assert_abs_diff_eq!(layout.padding, 0.3);
    }
}
