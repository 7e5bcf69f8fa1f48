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

//! Planar projected shadows.

use super::{Mat4, Plane, Vec4};

/// Builds a matrix that squashes geometry flat onto `plane` as seen from `light`.
///
/// Multiply it into the model-view transform before drawing an object a second
/// time in a dark colour and the object's shadow lands on the plane.
///
/// With `dot = plane · light`, entry `(row i, column j)` is
/// `dot * δij - light[i] * plane[j]`. A point light (`light.w == 1.0`) gives a
/// perspective projection through the light position; a directional light
/// (`light.w == 0.0`) gives a parallel projection along `light.xyz`.
///
/// The result collapses 3D space onto a plane, so it is singular: points
/// already on the plane are fixed, everything else moves onto it, and
/// [`Mat4::inverse`] reports it as singular. Read transformed positions back
/// with [`Mat4::project_point`], since the result is homogeneous.
pub fn planar_shadow_matrix(plane: &Plane, light: Vec4) -> Mat4 {
    let p = plane.to_vec4();
    let dot = p.dot(light);

    let column = |j: usize, diagonal: Vec4| diagonal * dot - light * p.get(j);

    Mat4::from_cols(
        column(0, Vec4::X),
        column(1, Vec4::Y),
        column(2, Vec4::Z),
        column(3, Vec4::W),
    )
}
