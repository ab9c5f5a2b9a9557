use eframe::egui::{Pos2, Rect, Vec2, pos2};

/// Degrees of rotation per point of pointer drag.
const DEG_PER_POINT: f32 = 0.4;

/// Half the diagonal of the unit cube; the farthest a projected point can be
/// from the center.
const HALF_DIAGONAL: f64 = 0.866_025_403_784_438_6;

/// Orthographic view onto the unit data cube.
///
/// Angles follow the usual 3D-axes convention: azimuth rotates about the
/// vertical (value) axis, elevation tilts the view above the X–Y plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Camera {
    pub(crate) elevation: f32,
    pub(crate) azimuth: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: -60.0,
        }
    }
}

/// A point mapped onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Projected {
    pub(crate) pos: Pos2,
    /// Distance toward the viewer; larger is closer.
    pub(crate) depth: f64,
}

impl Camera {
    /// Rotates the view by a pointer drag.
    pub(crate) fn rotate(&mut self, drag: Vec2) {
        self.azimuth -= drag.x * DEG_PER_POINT;
        self.elevation = (self.elevation + drag.y * DEG_PER_POINT).clamp(-90.0, 90.0);
    }

    /// Unit vector pointing from the cube toward the viewer.
    pub(crate) fn toward_viewer(&self) -> [f64; 3] {
        let (el, az) = self.angles();
        [el.cos() * az.cos(), el.cos() * az.sin(), el.sin()]
    }

    /// Projects a point of the centered unit cube (`[-0.5, 0.5]` per axis)
    /// into `rect`, keeping the whole cube visible at any angle.
    pub(crate) fn project(&self, p: [f64; 3], rect: Rect) -> Projected {
        let (el, az) = self.angles();
        let right = [-az.sin(), az.cos(), 0.0];
        let up = [-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos()];

        let scale = f64::from(rect.width().min(rect.height())) * 0.5 / HALF_DIAGONAL;
        let center = rect.center();

        #[allow(clippy::cast_possible_truncation)]
        let pos = pos2(
            center.x + (dot(p, right) * scale) as f32,
            center.y - (dot(p, up) * scale) as f32,
        );

        Projected {
            pos,
            depth: dot(p, self.toward_viewer()),
        }
    }

    fn angles(&self) -> (f64, f64) {
        (
            f64::from(self.elevation).to_radians(),
            f64::from(self.azimuth).to_radians(),
        )
    }
}

/// Data limits mapped onto the centered unit cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DataBox {
    pub(crate) x: (f64, f64),
    pub(crate) y: (f64, f64),
    pub(crate) z: (f64, f64),
}

impl DataBox {
    /// Maps a data point into `[-0.5, 0.5]` on each axis.
    ///
    /// A zero-width axis maps everything to its center.
    pub(crate) fn normalize(&self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        [
            normalize(x, self.x),
            normalize(y, self.y),
            normalize(z, self.z),
        ]
    }
}

fn normalize(v: f64, (min, max): (f64, f64)) -> f64 {
    if max > min {
        (v - min) / (max - min) - 0.5
    } else {
        0.0
    }
}

pub(crate) fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
