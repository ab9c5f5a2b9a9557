//! Comparison figures for resampled FEM, spline, and true solutions.
//!
//! [`show`] opens a blocking egui window with two figures:
//!
//! - a 3D overlay of the three nearest-neighbor surfaces on the shared grid,
//!   with value limits set to the global value range
//! - a 2D overlay of value against X for each dataset's original samples,
//!   sharing the same value limits
//!
//! An accuracy summary of the FEM and spline surfaces against the true one is
//! shown beneath the figures.

mod camera;
mod config;
mod palette;
mod projection;
mod surfaces;

use eframe::egui;
use surfcmp_core::{Comparison, Deviation};

pub use config::{Figures, ShowConfig};

/// Opens a window displaying `comparison`.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(comparison: Comparison, config: ShowConfig) -> Result<(), eframe::Error> {
    let [width, height] = config.window_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };
    let title = config.title.unwrap_or_else(|| "surfcmp".to_string());
    let app = CompareApp {
        comparison,
        figures: config.figures,
        camera: camera::Camera::default(),
    };

    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}

/// The egui [`eframe::App`] that renders a [`Comparison`].
struct CompareApp {
    comparison: Comparison,
    figures: Figures,
    camera: camera::Camera,
}

impl eframe::App for CompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("accuracy").show(ctx, |ui| {
            let accuracy = self.comparison.accuracy();
            ui.horizontal(|ui| {
                ui.label(summary("FEM", &accuracy.fem));
                ui.separator();
                ui.label(summary("Spline", &accuracy.spline));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.figures {
            Figures::Both => {
                ui.columns(2, |columns| {
                    surfaces::show(&mut columns[0], &self.comparison, &mut self.camera);
                    projection::show(&mut columns[1], &self.comparison);
                });
            }
            Figures::Surfaces => surfaces::show(ui, &self.comparison, &mut self.camera),
            Figures::Projection => projection::show(ui, &self.comparison),
        });
    }
}

fn summary(method: &str, deviation: &Deviation) -> String {
    format!(
        "{method} vs True: max |Δ| = {:.3e}, RMS = {:.3e}",
        deviation.max_abs, deviation.rms
    )
}
