//! Per-frame transforms for the triangle.
//!
//! Everything here is recomputed from scratch each frame from the framebuffer
//! size and the absolute elapsed time; nothing is carried between frames.

use glam::Mat4;

/// Width / height of a framebuffer, or `None` when either side is zero
/// (minimized window).
pub fn aspect_ratio(width: u32, height: u32) -> Option<f32> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(width as f32 / height as f32)
}

/// Orthographic view volume derived from an aspect ratio.
///
/// The near/far pair is reversed (`near = 1`, `far = -1`). With that ordering
/// the depth row of the projection is the identity, so vertex `z` passes
/// through unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoBounds {
    pub fn from_aspect(aspect: f32) -> Self {
        Self {
            left: -aspect,
            right: aspect,
            bottom: -1.0,
            top: 1.0,
            near: 1.0,
            far: -1.0,
        }
    }

    /// GL-convention (clip z in `[-1, 1]`) right-handed projection.
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }
}

/// Rotation about +Z by `elapsed` radians.
pub fn rotation(elapsed: f32) -> Mat4 {
    Mat4::from_rotation_z(elapsed)
}

/// The three matrices of one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub model: Mat4,
    pub projection: Mat4,
    /// `projection * model`: vertices are rotated first, then projected.
    pub mvp: Mat4,
}

impl Transform {
    pub fn new(aspect: f32, elapsed: f32) -> Self {
        let model = rotation(elapsed);
        let projection = OrthoBounds::from_aspect(aspect).matrix();
        Self {
            model,
            projection,
            mvp: projection * model,
        }
    }
}
