//! Presentation options for the operating-profile chart.

use plotters::style::RGBColor;

/// Where the series key is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLocation {
    /// Boxed key in the plot area's upper-left corner.
    Inside,
    /// Swatch column in a reserved margin to the right of the plot area.
    Outside,
}

/// Styling for the optional grid lines.
#[derive(Debug, Clone, Copy)]
pub struct GridStyle {
    pub color: RGBColor,
    /// Alpha applied to `color`, in `[0, 1]`.
    pub opacity: f64,
    pub stroke_width: u32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: RGBColor(140, 140, 140),
            opacity: 0.3,
            stroke_width: 1,
        }
    }
}

/// Options for [`draw_operating_profile`](crate::draw_operating_profile).
///
/// The default is the conventional chart: accuracy curve drawn, key inside
/// the plot area, no grid, no title.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Draw the dashed accuracy curve alongside TPR and FPR.
    pub show_accuracy: bool,
    /// Draw the series key.
    pub show_key: bool,
    /// Key placement; ignored when `show_key` is false.
    pub key_location: KeyLocation,
    /// Draw grid lines on the primary mesh.
    pub show_grid: bool,
    /// Grid styling; ignored when `show_grid` is false.
    pub grid: GridStyle,
    /// Caption above the chart.
    pub title: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_accuracy: true,
            show_key: true,
            key_location: KeyLocation::Inside,
            show_grid: false,
            grid: GridStyle::default(),
            title: None,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
