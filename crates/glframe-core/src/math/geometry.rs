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

//! Triangle normals and plane equations.
//!
//! Neither function here reports degenerate input. Three collinear points give
//! a zero normal, and a plane built from them has a zero normal and `d = 0`.
//! Such a plane fed into [`Plane::shadow_matrix`] produces a matrix whose
//! upper-left 3x3 block is all zeros, so callers that accept arbitrary points
//! should check [`Plane::is_degenerate`] first.

use serde::{Deserialize, Serialize};

use super::{shadow, Mat4, Vec3, Vec4};

/// Computes the (unnormalized) normal of the triangle `p1, p2, p3`.
///
/// The result is `(p1 - p2) x (p2 - p3)`, which points towards the viewer when
/// the points are wound counter-clockwise. Normalize it separately if a unit
/// normal is needed. Collinear points give [`Vec3::ZERO`].
///
/// # Examples
///
/// ```
/// use glframe_core::math::{find_normal, Vec3};
/// let n = find_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert_eq!(n, Vec3::Z);
/// ```
#[inline]
pub fn find_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p1 - p2).cross(p2 - p3)
}

/// A plane in the form `a*x + b*y + c*z + d = 0`.
///
/// The normal `(a, b, c)` is not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Plane {
    /// The x coefficient of the normal.
    pub a: f32,
    /// The y coefficient of the normal.
    pub b: f32,
    /// The z coefficient of the normal.
    pub c: f32,
    /// The constant term.
    pub d: f32,
}

impl Plane {
    /// Creates a plane from its four coefficients.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a plane from a normal and a point lying on it.
    #[inline]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self::new(normal.x, normal.y, normal.z, -normal.dot(point))
    }

    /// Creates the plane passing through three points.
    ///
    /// The normal is `(p2 - p1) x (p3 - p1)`, so counter-clockwise points give
    /// a normal facing the viewer, and `d` is solved by substituting `p1`.
    /// Collinear points yield a zero normal; this is not treated as an error.
    #[inline]
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let normal = (p2 - p1).cross(p3 - p1);
        Self::from_normal_and_point(normal, p1)
    }

    /// Returns the normal `(a, b, c)`.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Returns `true` if the normal is the zero vector.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal().length_squared() == 0.0
    }

    /// Evaluates `a*x + b*y + c*z + d` for a point.
    ///
    /// Zero on the plane; the sign tells which side the point is on. The value
    /// is a true distance only when the normal has unit length.
    #[inline]
    pub fn evaluate(&self, point: Vec3) -> f32 {
        self.normal().dot(point) + self.d
    }

    /// Returns the coefficients as a homogeneous vector `(a, b, c, d)`.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.a, self.b, self.c, self.d)
    }

    /// Returns the coefficients as `[a, b, c, d]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Builds the matrix that flattens geometry onto this plane as seen from
    /// `light`. See [`shadow::planar_shadow_matrix`].
    #[inline]
    pub fn shadow_matrix(&self, light: Vec4) -> Mat4 {
        shadow::planar_shadow_matrix(self, light)
    }
}

impl From<[f32; 4]> for Plane {
    #[inline]
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_find_normal_ccw() {
        let n = find_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(n, Vec3::new(0.0, 0.0, 1.0));

        // Reversing the winding flips the normal.
        let flipped = find_normal(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert_eq!(flipped, -n);
    }

    #[test]
    fn test_find_normal_is_unnormalized() {
        let n = find_normal(Vec3::ZERO, Vec3::X * 3.0, Vec3::Y * 2.0);
        assert!(approx_eq(n.length(), 6.0));
    }

    #[test]
    fn test_find_normal_collinear_is_zero() {
        // Accepted edge case: no error, just a zero normal.
        let n = find_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(n, Vec3::ZERO);
        assert!(n.normalize().is_err());
    }

    #[test]
    fn test_plane_from_points_contains_points() {
        // Three points on the ground of the jet demo, counter-clockwise from above.
        let p1 = Vec3::new(-30.0, -149.0, -20.0);
        let p2 = Vec3::new(-30.0, -149.0, 20.0);
        let p3 = Vec3::new(40.0, -149.0, 20.0);
        let plane = Plane::from_points(p1, p2, p3);

        for p in [p1, p2, p3] {
            assert!(approx_eq(plane.evaluate(p), 0.0), "{p:?}");
        }
        // Normal points up, the plane is y = -149.
        assert!(plane.b > 0.0);
        assert!(approx_eq(plane.a, 0.0) && approx_eq(plane.c, 0.0));
        assert!(approx_eq(plane.d / plane.b, 149.0));
        assert!(plane.evaluate(Vec3::new(0.0, 0.0, 0.0)) > 0.0);
    }

    #[test]
    fn test_plane_from_points_general_orientation() {
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(0.0, 1.0, 0.0);
        let p3 = Vec3::new(0.0, 0.0, 1.0);
        let plane = Plane::from_points(p1, p2, p3);
        // x + y + z = 1
        assert!(approx_eq(plane.a, plane.b) && approx_eq(plane.b, plane.c));
        assert!(approx_eq(plane.d, -plane.a));
        assert!(approx_eq(plane.evaluate(Vec3::ONE / 3.0), 0.0));
    }

    #[test]
    fn test_plane_from_collinear_points_is_degenerate() {
        let plane = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert!(plane.is_degenerate());
        assert_eq!(plane.to_array(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_plane_conversions() {
        let plane = Plane::from([0.0, 1.0, 0.0, 2.0]);
        assert_eq!(plane.to_vec4(), Vec4::new(0.0, 1.0, 0.0, 2.0));
        assert_eq!(plane.normal(), Vec3::Y);
    }
}
