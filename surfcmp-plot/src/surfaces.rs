//! The 3D surface figure.
//!
//! Every dataset's resampled surface is drawn as flat-shaded quads in one
//! solid color. Quads from all surfaces are depth-sorted together and painted
//! back to front so overlapping surfaces occlude each other correctly.

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, vec2,
};
use surfcmp_core::{Comparison, Dataset};

use crate::{
    camera::{Camera, DataBox, Projected, cross, dot, sub},
    palette,
};

/// Number of labeled ticks on the value axis.
const VALUE_TICKS: usize = 5;

/// Distance from an axis edge to its tick labels, in points.
const LABEL_OFFSET: f32 = 14.0;

/// One grid cell of one surface, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Face {
    pub(crate) dataset: Dataset,
    pub(crate) corners: [Pos2; 4],
    pub(crate) depth: f64,
    pub(crate) fill: Color32,
}

/// Axis limits of the figure: the bounding box widened to every grid node,
/// and the global value range.
pub(crate) fn data_box(comparison: &Comparison) -> DataBox {
    let bounds = comparison.bounds();
    let grid = comparison.grid();
    let range = comparison.value_range();
    DataBox {
        x: extent((bounds.min_x, bounds.max_x), grid.x_axis()),
        y: extent((bounds.min_y, bounds.max_y), grid.y_axis()),
        z: (range.min, range.max),
    }
}

/// The grid runs past the data maximum when bounds are off the unit lattice.
fn extent<'a>(limits: (f64, f64), axis: impl IntoIterator<Item = &'a f64>) -> (f64, f64) {
    axis.into_iter().fold(limits, |(min, max), &v| (min.min(v), max.max(v)))
}

/// Projects every cell of every surface and orders them back to front.
pub(crate) fn faces(comparison: &Comparison, camera: &Camera, rect: Rect) -> Vec<Face> {
    let data = data_box(comparison);
    let toward = camera.toward_viewer();
    let grid = comparison.grid();
    let (ny, nx) = grid.shape();

    let mut faces = Vec::with_capacity(3 * ny.saturating_sub(1) * nx.saturating_sub(1));
    for dataset in Dataset::ALL {
        let values = comparison.surface(dataset).values();
        let base = palette::color(dataset);

        for j in 0..ny.saturating_sub(1) {
            for i in 0..nx.saturating_sub(1) {
                let cube = [(j, i), (j, i + 1), (j + 1, i + 1), (j + 1, i)].map(|node| {
                    data.normalize([grid.xs()[node], grid.ys()[node], values[node]])
                });

                let normal = cross(sub(cube[1], cube[0]), sub(cube[3], cube[0]));
                let length = dot(normal, normal).sqrt();
                let facing = if length > 0.0 {
                    dot(normal, toward).abs() / length
                } else {
                    1.0
                };

                let projected: [Projected; 4] = cube.map(|p| camera.project(p, rect));
                faces.push(Face {
                    dataset,
                    corners: projected.map(|p| p.pos),
                    depth: projected.iter().map(|p| p.depth).sum::<f64>() / 4.0,
                    fill: palette::shade(base, 0.55 + 0.45 * facing),
                });
            }
        }
    }

    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}

/// Draws the figure into the remaining space of `ui`.
///
/// Dragging rotates the view; double-clicking restores the initial angles.
pub(crate) fn show(ui: &mut Ui, comparison: &Comparison, camera: &mut Camera) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    if response.dragged() {
        camera.rotate(response.drag_delta());
    }
    if response.double_clicked() {
        *camera = Camera::default();
    }

    let rect = response.rect.shrink(48.0);
    let text_color = ui.visuals().text_color();
    let axis_stroke = Stroke::new(1.0, ui.visuals().weak_text_color());

    draw_box(&painter, camera, rect, axis_stroke);

    let edge = Stroke::new(0.3, Color32::from_black_alpha(96));
    let faces = faces(comparison, camera, rect);
    if faces.is_empty() {
        draw_degenerate(&painter, comparison, camera, rect);
    }
    for face in faces {
        painter.add(Shape::convex_polygon(face.corners.to_vec(), face.fill, edge));
    }

    draw_ticks(&painter, comparison, camera, rect, text_color);
    draw_legend(&painter, response.rect, text_color);
}

/// The twelve edges of the data cube.
fn draw_box(painter: &egui::Painter, camera: &Camera, rect: Rect, stroke: Stroke) {
    let corner = |i: u8| {
        let c = |bit: u8| if i & bit == 0 { -0.5 } else { 0.5 };
        camera.project([c(1), c(2), c(4)], rect).pos
    };

    for i in 0..8u8 {
        for bit in [1u8, 2, 4] {
            if i & bit == 0 {
                painter.line_segment([corner(i), corner(i | bit)], stroke);
            }
        }
    }
}

/// Surfaces with a single row or column of nodes have no cells; draw them as
/// polylines instead.
fn draw_degenerate(painter: &egui::Painter, comparison: &Comparison, camera: &Camera, rect: Rect) {
    let data = data_box(comparison);
    let grid = comparison.grid();

    for dataset in Dataset::ALL {
        let values = comparison.surface(dataset).values();
        let points: Vec<Pos2> = grid
            .xs()
            .iter()
            .zip(grid.ys())
            .zip(values)
            .map(|((&x, &y), &z)| camera.project(data.normalize([x, y, z]), rect).pos)
            .collect();
        painter.add(Shape::line(points, Stroke::new(2.0, palette::color(dataset))));
    }
}

/// Unit-step ticks on X and Y, evenly spaced ticks on the value axis.
fn draw_ticks(
    painter: &egui::Painter,
    comparison: &Comparison,
    camera: &Camera,
    rect: Rect,
    color: Color32,
) {
    let data = data_box(comparison);
    let grid = comparison.grid();
    let font = FontId::proportional(11.0);
    let center = camera.project([0.0, 0.0, 0.0], rect).pos;

    let label = |point: [f64; 3], text: String| {
        let at = camera.project(data.normalize(point), rect).pos;
        let outward = (at - center).normalized();
        painter.text(
            at + outward * LABEL_OFFSET,
            Align2::CENTER_CENTER,
            text,
            font.clone(),
            color,
        );
    };

    let (x_min, x_max) = data.x;
    let (y_min, y_max) = data.y;
    let (z_min, z_max) = data.z;

    for &x in grid.x_axis() {
        label([x, y_min, z_min], format_tick(x));
    }
    for &y in grid.y_axis() {
        label([x_max, y, z_min], format_tick(y));
    }
    for z in value_ticks(z_min, z_max) {
        label([x_min, y_max, z], format_tick(z));
    }

    let x_mid = 0.5 * (x_min + x_max);
    let y_mid = 0.5 * (y_min + y_max);
    let z_mid = 0.5 * (z_min + z_max);
    let title = |point: [f64; 3], text: &str| {
        let at = camera.project(data.normalize(point), rect).pos;
        let outward = (at - center).normalized();
        painter.text(
            at + outward * LABEL_OFFSET * 2.5,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(13.0),
            color,
        );
    };
    title([x_mid, y_min, z_min], "X");
    title([x_max, y_mid, z_min], "Y");
    title([x_min, y_max, z_mid], "Function value");
}

fn draw_legend(painter: &egui::Painter, area: Rect, color: Color32) {
    let swatch = vec2(14.0, 10.0);
    let mut at = area.left_top() + vec2(12.0, 12.0);

    for dataset in Dataset::ALL {
        painter.rect_filled(
            Rect::from_min_size(at, swatch),
            0.0,
            palette::color(dataset),
        );
        painter.text(
            at + vec2(swatch.x + 6.0, swatch.y * 0.5),
            Align2::LEFT_CENTER,
            dataset.label(),
            FontId::proportional(12.0),
            color,
        );
        at += Vec2::new(0.0, 18.0);
    }
}

/// Evenly spaced tick values from `min` to `max` inclusive.
pub(crate) fn value_ticks(min: f64, max: f64) -> Vec<f64> {
    if max <= min {
        return vec![min];
    }

    #[allow(clippy::cast_precision_loss)]
    let steps = (VALUE_TICKS - 1) as f64;
    (0..VALUE_TICKS)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let k = k as f64;
            min + (max - min) * k / steps
        })
        .collect()
}

/// Whole numbers without decimals, everything else to three decimals.
pub(crate) fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;
    use surfcmp_core::SampleSet;

    use super::*;

    fn comparison() -> Comparison {
        let fem = SampleSet::from_rows([[0.0, 0.0, 0.0], [2.0, 1.0, 1.0]]);
        let spline = SampleSet::from_rows([[0.0, 0.0, 0.5], [2.0, 1.0, 0.5]]);
        let truth = SampleSet::from_rows([[0.0, 0.0, 1.0], [2.0, 1.0, 0.0]]);
        Comparison::build([fem, spline, truth]).unwrap()
    }

    #[test]
    fn one_face_per_cell_per_dataset() {
        let comparison = comparison();
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(300.0, 300.0));
        let faces = faces(&comparison, &Camera::default(), rect);

        // Grid is 3 x 2 nodes, so 2 cells per surface.
        assert_eq!(faces.len(), 6);
        for dataset in Dataset::ALL {
            assert_eq!(faces.iter().filter(|f| f.dataset == dataset).count(), 2);
        }
    }

    #[test]
    fn faces_are_sorted_back_to_front() {
        let comparison = comparison();
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(300.0, 300.0));
        let faces = faces(&comparison, &Camera::default(), rect);

        assert!(faces.windows(2).all(|pair| pair[0].depth <= pair[1].depth));
    }

    #[test]
    fn faces_stay_inside_the_view() {
        let comparison = comparison();
        let rect = Rect::from_min_size(pos2(20.0, 20.0), vec2(240.0, 180.0));
        let camera = Camera {
            elevation: 55.0,
            azimuth: 20.0,
        };
        for face in faces(&comparison, &camera, rect) {
            for corner in face.corners {
                assert!(rect.expand(0.01).contains(corner));
            }
        }
    }

    #[test]
    fn off_lattice_grid_stays_inside_the_box() {
        // Grid nodes reach 1.0 while the samples stop at 0.2.
        let rows = [[0.0, 0.0, 0.0], [0.2, 0.2, 1.0]];
        let comparison = Comparison::build([
            SampleSet::from_rows(rows),
            SampleSet::from_rows(rows),
            SampleSet::from_rows(rows),
        ])
        .unwrap();

        let data = data_box(&comparison);
        assert_eq!(data.x, (0.0, 1.0));
        assert_eq!(data.y, (0.0, 1.0));

        let rect = Rect::from_min_size(pos2(20.0, 20.0), vec2(240.0, 180.0));
        let faces = faces(&comparison, &Camera::default(), rect);
        assert_eq!(faces.len(), 3);
        for face in faces {
            for corner in face.corners {
                assert!(rect.expand(0.01).contains(corner));
            }
        }
    }

    #[test]
    fn value_ticks_span_the_range() {
        assert_eq!(value_ticks(0.0, 1.0), [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(value_ticks(5.0, 5.0), [5.0]);
    }

    #[test]
    fn tick_labels_drop_decimals_for_whole_numbers() {
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(-1.0), "-1");
        assert_eq!(format_tick(0.25), "0.250");
    }
}
