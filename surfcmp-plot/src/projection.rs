//! The 2D projection figure: value against X for each dataset's original samples.

use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, uniform_grid_spacer};
use surfcmp_core::{Comparison, Dataset, STEP, SampleSet, ValueRange};

use crate::palette;

/// `[x, z]` pairs of the original samples, in file order.
pub(crate) fn curve(samples: &SampleSet) -> Vec<[f64; 2]> {
    samples
        .x()
        .iter()
        .zip(samples.z())
        .map(|(&x, &z)| [x, z])
        .collect()
}

/// Value-axis limits, pinned to the global range of the resampled surfaces.
///
/// Samples outside that range are clipped rather than widening the axis. A
/// constant range is padded by half a unit on each side.
pub(crate) fn value_limits(range: &ValueRange) -> (f64, f64) {
    if range.span() > 0.0 {
        (range.min, range.max)
    } else {
        (range.min - 0.5, range.max + 0.5)
    }
}

pub(crate) fn show(ui: &mut Ui, comparison: &Comparison) {
    let bounds = comparison.bounds();
    let (y_min, y_max) = value_limits(comparison.value_range());

    Plot::new("projection")
        .legend(Legend::default())
        .x_axis_label("X")
        .y_axis_label("Function value")
        .include_x(bounds.min_x)
        .include_x(bounds.max_x)
        .include_y(y_min)
        .include_y(y_max)
        .auto_bounds([true, false])
        .x_grid_spacer(uniform_grid_spacer(|_| [STEP, 5.0 * STEP, 10.0 * STEP]))
        .show(ui, |plot_ui| {
            for dataset in Dataset::ALL {
                let points: PlotPoints = curve(comparison.samples(dataset)).into_iter().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(dataset.label())
                        .color(palette::color(dataset)),
                );
            }
        });
}
