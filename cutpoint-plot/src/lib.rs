//! Dual-axis operating-profile charts.
//!
//! Renders a [`cutpoint_profile::OperatingProfile`] as one chart with two
//! y-axes over a shared score axis: the class-split histogram as stacked
//! bars against the left (count) axis, and the TPR/FPR/accuracy curves
//! against the right (metric) axis. The renderer draws onto any plotters
//! [`DrawingArea`] and hands back the chart context so callers can keep
//! styling either coordinate system.
//!
//! # Quick start
//!
//! ```
//! use cutpoint_plot::{draw_operating_profile, ChartOptions};
//! use cutpoint_profile::compute_operating_profile;
//! use plotters::prelude::*;
//!
//! let labels = [false, false, true, true];
//! let scores = [0.1, 0.4, 0.6, 0.9];
//! let profile = compute_operating_profile(&labels, &scores, 2, Some((0.0, 1.0))).unwrap();
//!
//! let mut svg = String::new();
//! {
//!     let area = SVGBackend::with_string(&mut svg, (800, 480)).into_drawing_area();
//!     area.fill(&WHITE).unwrap();
//!     draw_operating_profile(&area, &profile, &ChartOptions::default()).unwrap();
//!     area.present().unwrap();
//! }
//! assert!(svg.contains("<svg"));
//! ```

pub mod style;

pub use style::{ChartOptions, GridStyle, KeyLocation};

use cutpoint_core::{Binned, CutpointError, Result};
use cutpoint_profile::{compute_operating_profile, OperatingProfile};

use plotters::chart::DualCoordChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::full_palette::{GREEN_700, ORANGE};

const NEGATIVE_COLOR: RGBColor = BLUE;
const POSITIVE_COLOR: RGBColor = ORANGE;
const TPR_COLOR: RGBColor = GREEN_700;
const FPR_COLOR: RGBColor = RED;
const ACCURACY_COLOR: RGBColor = BLACK;
const BAR_OPACITY: f64 = 0.55;
const CURVE_WIDTH: u32 = 2;
/// Right margin reserved for [`KeyLocation::Outside`].
const KEY_PANEL_WIDTH: u32 = 112;

/// The chart context returned by the renderer: primary (count) and
/// secondary (metric) cartesian axes over the score range.
pub type ProfileChart<'a, DB> = DualCoordChartContext<
    'a,
    DB,
    Cartesian2d<RangedCoordf64, RangedCoordf64>,
    Cartesian2d<RangedCoordf64, RangedCoordf64>,
>;

fn render_err<E>(err: DrawingAreaErrorKind<E>) -> CutpointError
where
    E: std::error::Error + Send + Sync,
{
    CutpointError::Render(err.to_string())
}

/// Draw an operating profile onto `area`.
///
/// Stacked histogram bars (negatives from zero, positives on top) go
/// against the primary y-axis; the TPR and FPR curves, and the dashed
/// accuracy curve when enabled, go against the secondary y-axis, all over
/// the profile's bin edges and midpoints. Returns the dual-coordinate
/// chart context for further styling on either axis.
///
/// # Errors
///
/// `InvalidInput` if the profile has no bins or internally inconsistent
/// vector lengths; `Render` if the drawing backend fails.
pub fn draw_operating_profile<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    profile: &OperatingProfile,
    options: &ChartOptions,
) -> Result<ProfileChart<'a, DB>>
where
    DB: DrawingBackend,
{
    let bins = profile.n_bins();
    if bins == 0 {
        return Err(CutpointError::InvalidInput(
            "profile has no bins to draw".into(),
        ));
    }
    if profile.mids.len() != bins
        || profile.pos_hist.len() != bins
        || profile.neg_hist.len() != bins
        || profile.tpr.len() != bins
        || profile.fpr.len() != bins
        || profile.accuracy.len() != bins
    {
        return Err(CutpointError::InvalidInput(
            "profile vectors disagree with the edge count".into(),
        ));
    }

    let (x_lo, x_hi) = profile.span();
    let tallest = profile
        .pos_hist
        .iter()
        .zip(&profile.neg_hist)
        .map(|(p, n)| p + n)
        .max()
        .unwrap_or(0);
    // At least 1 so an all-out-of-range profile still has a drawable axis.
    let y_max = tallest.max(1) as f64 * 1.05;

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .right_y_label_area_size(48);
    if let Some(title) = options.title.as_deref() {
        builder.caption(title, ("sans-serif", 18));
    }
    if options.show_key && options.key_location == KeyLocation::Outside {
        builder.margin_right(KEY_PANEL_WIDTH);
    }
    let mut chart = builder
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_max)
        .map_err(render_err)?
        .set_secondary_coord(x_lo..x_hi, 0.0..1.05);

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Score bins (threshold midpoints)")
            .y_desc("Count per bin")
            .axis_desc_style(("sans-serif", 14));
        if options.show_grid {
            let grid = &options.grid;
            let line = grid.color.mix(grid.opacity).stroke_width(grid.stroke_width);
            mesh.light_line_style(line).bold_line_style(line);
        } else {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_err)?;
    }
    chart
        .configure_secondary_axes()
        .y_desc("Metric value")
        .axis_desc_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(profile.neg_hist.iter().enumerate().map(|(i, &count)| {
            Rectangle::new(
                [
                    (profile.edges[i], 0.0),
                    (profile.edges[i + 1], count as f64),
                ],
                NEGATIVE_COLOR.mix(BAR_OPACITY).filled(),
            )
        }))
        .map_err(render_err)?
        .label("Negatives")
        .legend(|(x, y)| {
            Rectangle::new(
                [(x, y - 5), (x + 12, y + 5)],
                NEGATIVE_COLOR.mix(BAR_OPACITY).filled(),
            )
        });
    chart
        .draw_series(profile.pos_hist.iter().enumerate().map(|(i, &count)| {
            let base = profile.neg_hist[i] as f64;
            Rectangle::new(
                [
                    (profile.edges[i], base),
                    (profile.edges[i + 1], base + count as f64),
                ],
                POSITIVE_COLOR.mix(BAR_OPACITY).filled(),
            )
        }))
        .map_err(render_err)?
        .label("Positives")
        .legend(|(x, y)| {
            Rectangle::new(
                [(x, y - 5), (x + 12, y + 5)],
                POSITIVE_COLOR.mix(BAR_OPACITY).filled(),
            )
        });

    chart
        .draw_secondary_series(LineSeries::new(
            profile.mids.iter().copied().zip(profile.tpr.iter().copied()),
            TPR_COLOR.stroke_width(CURVE_WIDTH),
        ))
        .map_err(render_err)?
        .label("TPR (Recall)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 12, y)], TPR_COLOR.stroke_width(CURVE_WIDTH))
        });
    chart
        .draw_secondary_series(LineSeries::new(
            profile.mids.iter().copied().zip(profile.fpr.iter().copied()),
            FPR_COLOR.stroke_width(CURVE_WIDTH),
        ))
        .map_err(render_err)?
        .label("FPR")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 12, y)], FPR_COLOR.stroke_width(CURVE_WIDTH))
        });
    if options.show_accuracy {
        chart
            .draw_secondary_series(DashedLineSeries::new(
                profile
                    .mids
                    .iter()
                    .copied()
                    .zip(profile.accuracy.iter().copied()),
                6,
                3,
                ACCURACY_COLOR.stroke_width(CURVE_WIDTH),
            ))
            .map_err(render_err)?
            .label("Accuracy")
            .legend(|(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 12, y)],
                    ACCURACY_COLOR.stroke_width(CURVE_WIDTH),
                )
            });
    }

    if options.show_key {
        match options.key_location {
            KeyLocation::Inside => {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .label_font(("sans-serif", 13))
                    .draw()
                    .map_err(render_err)?;
            }
            KeyLocation::Outside => {
                draw_outside_key(area, options.show_accuracy)?;
            }
        }
    }

    Ok(chart)
}

/// Compute a profile and draw it in one call.
///
/// Same parameters as
/// [`compute_operating_profile`](cutpoint_profile::compute_operating_profile)
/// plus the chart options; forwards errors from both stages.
pub fn operating_profile_chart<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    labels: &[bool],
    scores: &[f64],
    bins: usize,
    score_range: Option<(f64, f64)>,
    options: &ChartOptions,
) -> Result<ProfileChart<'a, DB>>
where
    DB: DrawingBackend,
{
    let profile = compute_operating_profile(labels, scores, bins, score_range)?;
    draw_operating_profile(area, &profile, options)
}

/// Render a profile to an SVG file for callers without their own surface.
pub fn render_svg<P: AsRef<std::path::Path>>(
    path: P,
    size: (u32, u32),
    profile: &OperatingProfile,
    options: &ChartOptions,
) -> Result<()> {
    let area = SVGBackend::new(path.as_ref(), size).into_drawing_area();
    area.fill(&WHITE).map_err(render_err)?;
    draw_operating_profile(&area, profile, options)?;
    area.present().map_err(render_err)?;
    Ok(())
}

/// Swatch column in the reserved right margin. The built-in series-label
/// box only draws inside the plot frame, so the outside key is drawn by
/// hand at pixel coordinates.
fn draw_outside_key<DB>(area: &DrawingArea<DB, Shift>, show_accuracy: bool) -> Result<()>
where
    DB: DrawingBackend,
{
    let mut entries: Vec<(&str, ShapeStyle, bool)> = vec![
        ("Negatives", NEGATIVE_COLOR.mix(BAR_OPACITY).filled(), true),
        ("Positives", POSITIVE_COLOR.mix(BAR_OPACITY).filled(), true),
        ("TPR (Recall)", TPR_COLOR.stroke_width(CURVE_WIDTH), false),
        ("FPR", FPR_COLOR.stroke_width(CURVE_WIDTH), false),
    ];
    if show_accuracy {
        entries.push(("Accuracy", ACCURACY_COLOR.stroke_width(CURVE_WIDTH), false));
    }

    let (width, _) = area.dim_in_pixel();
    let x = width as i32 - KEY_PANEL_WIDTH as i32 + 8;
    let mut y = 36i32;
    for (label, style, is_box) in entries {
        if is_box {
            area.draw(&Rectangle::new([(x, y - 5), (x + 12, y + 5)], style))
                .map_err(render_err)?;
        } else {
            area.draw(&PathElement::new(vec![(x, y), (x + 12, y)], style))
                .map_err(render_err)?;
        }
        area.draw(&Text::new(
            label,
            (x + 18, y - 7),
            ("sans-serif", 13).into_font(),
        ))
        .map_err(render_err)?;
        y += 20;
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────
