use eframe::egui::Color32;
use surfcmp_core::Dataset;

/// Fixed solid color of each dataset in both figures.
pub(crate) fn color(dataset: Dataset) -> Color32 {
    match dataset {
        Dataset::Fem => Color32::from_rgb(0, 0, 255),
        Dataset::Spline => Color32::from_rgb(255, 0, 0),
        Dataset::True => Color32::from_rgb(0, 128, 0),
    }
}

/// Scales the RGB channels of `color` by `factor` in `[0, 1]`.
pub(crate) fn shade(color: Color32, factor: f64) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scale = |channel: u8| (f64::from(channel) * factor).round() as u8;

    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}
