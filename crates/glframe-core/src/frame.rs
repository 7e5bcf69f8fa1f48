// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the [`Frame`], a positioned and oriented reference frame.

use serde::{Deserialize, Serialize};

use crate::math::{Mat4, MathError, Vec3, Vec4};

/// An orthonormal frame: a position plus a forward and an up direction.
///
/// Frames place the camera (see [`Frame::camera_transform`]) and movable
/// actors (see [`Frame::actor_transform`]). Both methods return a matrix for
/// the caller to multiply into its own transform stack.
///
/// `forward` and `up` are expected to stay unit length and roughly
/// perpendicular. The type does not enforce this, and [`Frame::rotate_local_y`]
/// does not re-normalize, so long sequences of rotations can drift. Call
/// [`Frame::orthonormalize`] to repair the basis explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    /// World-space position.
    pub origin: Vec3,
    /// The direction the frame faces.
    pub forward: Vec3,
    /// The frame's up direction.
    pub up: Vec3,
}

impl Frame {
    /// The default facing direction, down the negative Z axis.
    pub const DEFAULT_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    /// The default up direction, negative Y.
    pub const DEFAULT_UP: Vec3 = Vec3::new(0.0, -1.0, 0.0);

    /// Creates a frame at the world origin facing [`Frame::DEFAULT_FORWARD`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            origin: Vec3::ZERO,
            forward: Self::DEFAULT_FORWARD,
            up: Self::DEFAULT_UP,
        }
    }

    /// Creates a frame from explicit parts. No validation is performed.
    #[inline]
    pub const fn from_parts(origin: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            origin,
            forward,
            up,
        }
    }

    /// Moves the frame to `(x, y, z)`.
    #[inline]
    pub fn set_origin(&mut self, x: f32, y: f32, z: f32) {
        self.origin = Vec3::new(x, y, z);
    }

    /// The right-hand side vector used by the actor convention, `up x forward`.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.up.cross(self.forward)
    }

    /// Builds the rotation-only matrix describing the camera orientation.
    ///
    /// Columns are `x = (-forward) x up`, `y = up` and `z = -forward`; the
    /// camera looks down its local negative Z axis. The matrix maps
    /// camera-local directions to world space, so its inverse expresses
    /// world-space directions in camera space. Translation is zero.
    pub fn camera_orientation(&self) -> Mat4 {
        let z = -self.forward;
        let x = z.cross(self.up);

        Mat4::from_cols(
            Vec4::direction(x),
            Vec4::direction(self.up),
            Vec4::direction(z),
            Vec4::W,
        )
    }

    /// Returns the world-to-camera (view) matrix for this frame.
    ///
    /// This is the inverse of [`Frame::camera_orientation`], computed as its
    /// transpose because the basis is orthonormal, followed by a translation
    /// by `-origin` unless `rotation_only` is set. Rotation-only views are
    /// used for skyboxes and other geometry that should follow the camera.
    ///
    /// Multiply the result onto the current model-view matrix before drawing
    /// the scene.
    pub fn camera_transform(&self, rotation_only: bool) -> Mat4 {
        let rotation = self.camera_orientation().transpose();
        if rotation_only {
            rotation
        } else {
            rotation * Mat4::from_translation(-self.origin)
        }
    }

    /// Assembles the model matrix that places an actor at this frame.
    ///
    /// Columns are `up x forward`, `up`, `forward`, and `origin` as the
    /// translation, which is left at zero when `rotation_only` is set.
    pub fn matrix(&self, rotation_only: bool) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        matrix.set_column(0, self.right());
        matrix.set_column(1, self.up);
        matrix.set_column(2, self.forward);
        if !rotation_only {
            matrix.set_column(3, self.origin);
        }
        matrix
    }

    /// Returns the actor transform to multiply onto the current model-view
    /// matrix before drawing the actor's geometry in its local space.
    #[inline]
    pub fn actor_transform(&self, rotation_only: bool) -> Mat4 {
        self.matrix(rotation_only)
    }

    /// Moves the frame `delta` units along its forward direction.
    #[inline]
    pub fn move_forward(&mut self, delta: f32) {
        self.origin = self.origin + self.forward * delta;
    }

    /// Turns the frame around its local up axis by `angle` radians.
    ///
    /// The rotation axis is `-up`. Only `forward` is rotated; `up` is
    /// untouched and nothing is re-normalized. A zero-length `up` leaves the
    /// frame as it is.
    pub fn rotate_local_y(&mut self, angle: f32) {
        let axis = -self.up;
        if axis.normalize().is_err() {
            log::warn!(
                "Frame::rotate_local_y: up vector {:?} has no direction, rotation skipped",
                self.up
            );
        }

        let rotation = Mat4::from_axis_angle(axis, angle);
        self.forward = rotation.transform_vector(self.forward);
    }

    /// Re-normalizes `forward` and makes `up` perpendicular to it, in place.
    ///
    /// `forward` keeps its direction. `up` is rebuilt from its component
    /// perpendicular to `forward`, so it keeps pointing to the same side.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] when `forward` has zero length
    /// or `up` is parallel to it. The frame is left unchanged in that case.
    pub fn orthonormalize(&mut self) -> Result<(), MathError> {
        let forward = self.forward.normalize()?;
        let up = (self.up - forward * self.up.dot(forward)).normalize()?;

        log::trace!(
            "Frame::orthonormalize: forward {:?} -> {:?}, up {:?} -> {:?}",
            self.forward,
            forward,
            self.up,
            up
        );
        self.forward = forward;
        self.up = up;
        Ok(())
    }
}

impl Default for Frame {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn sample_frame() -> Frame {
        let forward = Vec3::new(1.0, 0.0, -1.0).normalize().unwrap();
        Frame::from_parts(Vec3::new(4.0, -2.0, 7.5), forward, Vec3::Y)
    }

    #[test]
    fn test_default() {
        let frame = Frame::default();
        assert_eq!(frame.origin, Vec3::ZERO);
        assert_eq!(frame.forward, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(frame.up, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(frame, Frame::new());
    }

    #[test]
    fn test_set_origin() {
        let mut frame = Frame::new();
        frame.set_origin(1.0, -2.0, 3.0);
        assert_eq!(frame.origin, Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(frame.forward, Frame::DEFAULT_FORWARD);
    }

    #[test]
    fn test_move_forward() {
        let mut frame = Frame::new();
        frame.move_forward(5.0);
        assert_eq!(frame.origin, Vec3::new(0.0, 0.0, -5.0));
        frame.move_forward(-2.0);
        assert_eq!(frame.origin, Vec3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn test_move_forward_round_trip() {
        for d in [0.1, 1.0, 7.25, -3.5, 120.0] {
            let mut frame = sample_frame();
            let start = frame.origin;
            frame.move_forward(d);
            frame.move_forward(-d);
            assert!(vec3_approx_eq(frame.origin, start), "d = {d}");
        }
    }

    #[test]
    fn test_rotate_local_y_quarter_turn() {
        let mut frame = Frame::new();
        frame.rotate_local_y(FRAC_PI_2);
        // Rotating about -up = +Y takes -Z to -X.
        assert!(vec3_approx_eq(frame.forward, Vec3::new(-1.0, 0.0, 0.0)));
        assert_eq!(frame.up, Frame::DEFAULT_UP);
    }

    #[test]
    fn test_rotate_local_y_with_huge_up_still_turns() {
        let up = Frame::DEFAULT_UP * 1e20;
        let mut frame = Frame::from_parts(Vec3::ZERO, Frame::DEFAULT_FORWARD, up);
        frame.rotate_local_y(FRAC_PI_2);
        assert!(vec3_approx_eq(frame.forward, Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_local_y_round_trip() {
        for angle in [0.05, FRAC_PI_2, 1.0, PI, -2.2] {
            let mut frame = sample_frame();
            let start = frame.forward;
            frame.rotate_local_y(angle);
            frame.rotate_local_y(-angle);
            assert!(vec3_approx_eq(frame.forward, start), "angle = {angle}");
            assert_eq!(frame.up, Vec3::Y);
        }
    }

    #[test]
    fn test_rotate_local_y_keeps_forward_unit_and_perpendicular() {
        let mut frame = Frame::new();
        for _ in 0..100 {
            frame.rotate_local_y(0.1);
        }
        assert_relative_eq!(frame.forward.length(), 1.0, epsilon = 1e-4);
        assert!(frame.forward.dot(frame.up).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_local_y_with_zero_up_is_skipped() {
        let mut frame = Frame::from_parts(Vec3::ZERO, Frame::DEFAULT_FORWARD, Vec3::ZERO);
        frame.rotate_local_y(1.0);
        assert_eq!(frame.forward, Frame::DEFAULT_FORWARD);
    }

    #[test]
    fn test_camera_orientation_default() {
        let m = Frame::new().camera_orientation();
        assert!(vec3_approx_eq(m.cols[0].truncate(), Vec3::X));
        assert!(vec3_approx_eq(m.cols[1].truncate(), Frame::DEFAULT_UP));
        assert!(vec3_approx_eq(m.cols[2].truncate(), Vec3::Z));
        assert_eq!(m.cols[3], Vec4::W);
    }

    #[test]
    fn test_camera_orientation_inverse_maps_world_to_camera() {
        let frame = sample_frame();
        let inv = frame.camera_orientation().inverse().unwrap();
        // The facing direction is the camera's -Z, the up direction its +Y.
        let forward = inv.transform_vector(frame.forward);
        assert!(vec3_approx_eq(forward, -Vec3::Z));
        assert!(vec3_approx_eq(inv.transform_vector(frame.up), Vec3::Y));
    }

    #[test]
    fn test_camera_transform() {
        let frame = sample_frame();
        let view = frame.camera_transform(false);

        // The eye sits at the camera-space origin.
        let eye = view.transform_point(frame.origin);
        assert!(vec3_approx_eq(eye, Vec3::ZERO));
        // A point straight ahead ends up on the negative Z axis.
        let ahead = frame.origin + frame.forward * 3.0;
        assert!(vec3_approx_eq(
            view.transform_point(ahead),
            Vec3::new(0.0, 0.0, -3.0)
        ));
    }

    #[test]
    fn test_camera_transform_rotation_only() {
        let frame = sample_frame();
        let view = frame.camera_transform(true);
        assert_eq!(view.cols[3], Vec4::W);
        let forward = view.transform_point(frame.forward);
        assert!(vec3_approx_eq(forward, -Vec3::Z));
        assert_eq!(view, frame.camera_orientation().transpose());
    }

    #[test]
    fn test_model_matrix() {
        let frame = sample_frame();
        let m = frame.matrix(false);
        assert_eq!(m.cols[3], Vec4::point(frame.origin));
        assert_eq!(m.get_row(3), Vec4::W);

        // Local +Z is the facing direction, local +Y is up.
        assert!(vec3_approx_eq(m.transform_vector(Vec3::Z), frame.forward));
        assert!(vec3_approx_eq(m.transform_vector(Vec3::Y), frame.up));
        assert!(vec3_approx_eq(m.transform_vector(Vec3::X), frame.right()));
        assert!(vec3_approx_eq(m.transform_point(Vec3::ZERO), frame.origin));
    }

    #[test]
    fn test_actor_transform_rotation_only() {
        let frame = sample_frame();
        let m = frame.actor_transform(true);
        assert_eq!(m.cols[3], Vec4::W);
        assert_eq!(m, frame.matrix(true));
        assert_eq!(frame.actor_transform(false), frame.matrix(false));
    }

    #[test]
    fn test_orthonormalize_repairs_drift() {
        let mut frame = Frame::from_parts(
            Vec3::ZERO,
            Vec3::new(0.0, 0.3, -2.0),
            Vec3::new(0.1, -1.5, 0.0),
        );
        frame.orthonormalize().unwrap();
        assert_relative_eq!(frame.forward.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame.up.length(), 1.0, epsilon = 1e-5);
        assert!(frame.forward.dot(frame.up).abs() < 1e-5);
        // Still facing and pointing the same general way.
        assert!(frame.forward.z < 0.0);
        assert!(frame.up.y < 0.0);
    }

    #[test]
    fn test_orthonormalize_degenerate() {
        let mut frame = Frame::from_parts(Vec3::ZERO, Vec3::ZERO, Frame::DEFAULT_UP);
        assert_eq!(frame.orthonormalize(), Err(MathError::DegenerateVector));

        let mut parallel = Frame::from_parts(Vec3::ZERO, Vec3::Y, Vec3::Y * 2.0);
        let before = parallel;
        assert_eq!(parallel.orthonormalize(), Err(MathError::DegenerateVector));
        assert_eq!(parallel, before);
    }
}
