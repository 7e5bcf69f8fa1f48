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

//! Defines the `Mat4` type and associated operations.

use serde::{Deserialize, Serialize};

use super::{MathError, Vec3, Vec4};
use std::ops::{Index, IndexMut, Mul};

/// Relative tolerance under which a determinant is treated as zero.
///
/// The determinant is compared against the product of the column lengths
/// (Hadamard's bound), so uniformly scaled matrices are judged the same way
/// regardless of their scale.
const SINGULAR_TOLERANCE: f32 = 1e-6;

/// A 4x4 column-major matrix, used for 3D affine and projective transformations.
///
/// The memory layout is sixteen consecutive floats, column after column, which
/// is exactly what an OpenGL-style model-view stack expects. Use
/// [`Mat4::to_cols_array`] or `bytemuck::cast_slice` to hand it over.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Returns the identity matrix: ones on the diagonal, zero elsewhere.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a matrix from sixteen floats in column-major order.
    #[inline]
    pub fn from_cols_array(m: [f32; 16]) -> Self {
        bytemuck::cast(m)
    }

    /// Returns the sixteen elements in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.cols[0].get(index),
            y: self.cols[1].get(index),
            z: self.cols[2].get(index),
            w: self.cols[3].get(index),
        }
    }

    /// Overwrites the x, y and z entries of a column, leaving its w entry as is.
    ///
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    pub fn set_column(&mut self, index: usize, v: Vec3) {
        let col = &mut self.cols[index];
        col.x = v.x;
        col.y = v.y;
        col.z = v.z;
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::point(v)],
        }
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(scale.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scale.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scale.z, 0.0),
                Vec4::W,
            ],
        }
    }

    /// Creates a rotation matrix around an arbitrary axis (Rodrigues form).
    ///
    /// Positive angles rotate counter-clockwise when looking down the axis
    /// towards the origin. The axis does not need to be unit length; it is
    /// normalized here.
    ///
    /// A zero-length (or non-finite) axis has no direction to rotate about, so
    /// the identity matrix is returned.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation, any non-zero length.
    /// * `angle`: The angle of rotation in radians.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let Ok(axis) = axis.normalize() else {
            return Self::IDENTITY;
        };

        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;

        Self {
            cols: [
                Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
                Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
                Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
                Vec4::W,
            ],
        }
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            self.get_row(0),
            self.get_row(1),
            self.get_row(2),
            self.get_row(3),
        )
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let c3 = self.cols[3];

        let m00 = c1.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c1.z * c3.w - c3.z * c1.w)
            + c3.y * (c1.z * c2.w - c2.z * c1.w);
        let m01 = c0.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c2.w - c2.z * c0.w);
        let m02 = c0.y * (c1.z * c3.w - c3.z * c1.w) - c1.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c1.w - c1.z * c0.w);
        let m03 = c0.y * (c1.z * c2.w - c2.z * c1.w) - c1.y * (c0.z * c2.w - c2.z * c0.w)
            + c2.y * (c0.z * c1.w - c1.z * c0.w);

        c0.x * m00 - c1.x * m01 + c2.x * m02 - c3.x * m03
    }

    /// Computes the inverse of the matrix by cofactor expansion.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when the determinant is zero,
    /// negligible relative to the size of the columns, or not finite. Planar
    /// shadow matrices always land here.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let c3 = self.cols[3];

        let a00 = c1.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c1.z * c3.w - c3.z * c1.w)
            + c3.y * (c1.z * c2.w - c2.z * c1.w);
        let a01 = -(c1.x * (c2.z * c3.w - c3.z * c2.w) - c2.x * (c1.z * c3.w - c3.z * c1.w)
            + c3.x * (c1.z * c2.w - c2.z * c1.w));
        let a02 = c1.x * (c2.y * c3.w - c3.y * c2.w) - c2.x * (c1.y * c3.w - c3.y * c1.w)
            + c3.x * (c1.y * c2.w - c2.y * c1.w);
        let a03 = -(c1.x * (c2.y * c3.z - c3.y * c2.z) - c2.x * (c1.y * c3.z - c3.y * c1.z)
            + c3.x * (c1.y * c2.z - c2.y * c1.z));

        let a10 = -(c0.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c2.w - c2.z * c0.w));
        let a11 = c0.x * (c2.z * c3.w - c3.z * c2.w) - c2.x * (c0.z * c3.w - c3.z * c0.w)
            + c3.x * (c0.z * c2.w - c2.z * c0.w);
        let a12 = -(c0.x * (c2.y * c3.w - c3.y * c2.w) - c2.x * (c0.y * c3.w - c3.y * c0.w)
            + c3.x * (c0.y * c2.w - c2.y * c0.w));
        let a13 = c0.x * (c2.y * c3.z - c3.y * c2.z) - c2.x * (c0.y * c3.z - c3.y * c0.z)
            + c3.x * (c0.y * c2.z - c2.y * c0.z);

        let a20 = c0.y * (c1.z * c3.w - c3.z * c1.w) - c1.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c1.w - c1.z * c0.w);
        let a21 = -(c0.x * (c1.z * c3.w - c3.z * c1.w) - c1.x * (c0.z * c3.w - c3.z * c0.w)
            + c3.x * (c0.z * c1.w - c1.z * c0.w));
        let a22 = c0.x * (c1.y * c3.w - c3.y * c1.w) - c1.x * (c0.y * c3.w - c3.y * c0.w)
            + c3.x * (c0.y * c1.w - c1.y * c0.w);
        let a23 = -(c0.x * (c1.y * c3.z - c3.y * c1.z) - c1.x * (c0.y * c3.z - c3.y * c0.z)
            + c3.x * (c0.y * c1.z - c1.y * c0.z));

        let a30 = -(c0.y * (c1.z * c2.w - c2.z * c1.w) - c1.y * (c0.z * c2.w - c2.z * c0.w)
            + c2.y * (c0.z * c1.w - c1.z * c0.w));
        let a31 = c0.x * (c1.z * c2.w - c2.z * c1.w) - c1.x * (c0.z * c2.w - c2.z * c0.w)
            + c2.x * (c0.z * c1.w - c1.z * c0.w);
        let a32 = -(c0.x * (c1.y * c2.w - c2.y * c1.w) - c1.x * (c0.y * c2.w - c2.y * c0.w)
            + c2.x * (c0.y * c1.w - c1.y * c0.w));
        let a33 = c0.x * (c1.y * c2.z - c2.y * c1.z) - c1.x * (c0.y * c2.z - c2.y * c0.z)
            + c2.x * (c0.y * c1.z - c1.y * c0.z);

        let det = c0.x * a00 + c1.x * a10 + c2.x * a20 + c3.x * a30;
        let column_bound = self
            .cols
            .iter()
            .map(|c| c.dot(*c).sqrt())
            .product::<f32>();
        if !det.is_finite() || det.abs() <= SINGULAR_TOLERANCE * column_bound {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;

        Ok(Self::from_cols(
            Vec4::new(a00, a10, a20, a30) * inv_det,
            Vec4::new(a01, a11, a21, a31) * inv_det,
            Vec4::new(a02, a12, a22, a32) * inv_det,
            Vec4::new(a03, a13, a23, a33) * inv_det,
        ))
    }

    /// Transforms a point by the upper three rows of the matrix, translation
    /// included. The fourth row is ignored, so no perspective divide happens.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let v = self.cols[0] * p.x + self.cols[1] * p.y + self.cols[2] * p.z + self.cols[3];
        v.truncate()
    }

    /// Transforms a direction by the upper-left 3x3 block only.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let v = self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z;
        v.truncate()
    }

    /// Transforms a point as `(x, y, z, 1)` and divides the result by its `w`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::PointAtInfinity`] if the resulting `w` is zero or
    /// not finite.
    #[inline]
    pub fn project_point(&self, p: Vec3) -> Result<Vec3, MathError> {
        let v = *self * Vec4::point(p);
        if v.w == 0.0 || !v.w.is_finite() {
            return Err(MathError::PointAtInfinity);
        }
        Ok(v.truncate() / v.w)
    }
}

// --- Operators Overloading ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Matrix multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        Self::from_cols(
            self * rhs.cols[0],
            self * rhs.cols[1],
            self * rhs.cols[2],
            self * rhs.cols[3],
        )
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat4 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

// --- Tests ---
