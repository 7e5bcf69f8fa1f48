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

//! Integration tests for the projected ground shadow of a placed actor.

use glframe_core::math::{approx_eq_eps, find_normal};
use glframe_core::{Frame, MathError, Plane, Vec3, Vec4};

const GROUND: [Vec3; 3] = [
    Vec3::new(-30.0, -149.0, -20.0),
    Vec3::new(-30.0, -149.0, 20.0),
    Vec3::new(40.0, -149.0, 20.0),
];

/// A small wedge in actor-local space.
const WEDGE: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 60.0),
    Vec3::new(-15.0, 0.0, -30.0),
    Vec3::new(15.0, 0.0, -30.0),
    Vec3::new(0.0, 15.0, -30.0),
];

fn ground() -> Plane {
    Plane::from_points(GROUND[0], GROUND[1], GROUND[2])
}

#[test]
fn test_actor_vertices_land_on_ground() {
    let mut actor = Frame::default();
    actor.set_origin(0.0, 0.0, -50.0);
    actor.rotate_local_y(0.8);

    let shadow = ground().shadow_matrix(Vec4::new(-75.0, 150.0, -50.0, 0.0));
    let model_shadow = shadow * actor.actor_transform(false);

    for vertex in WEDGE {
        let flat = model_shadow.project_point(vertex).unwrap();
        assert!(approx_eq_eps(flat.y, -149.0, 1e-2), "{vertex:?}");
    }
}

#[test]
fn test_directional_shadow_slides_along_light() {
    let light = Vec4::new(-75.0, 150.0, -50.0, 0.0);
    let shadow = ground().shadow_matrix(light);

    let p = Vec3::new(10.0, 51.0, -5.0);
    let flat = shadow.project_point(p).unwrap();
    // The offset from the point to its shadow is parallel to the light.
    let offset = flat - p;
    let cross = offset.cross(light.truncate());
    assert!(cross.length() / (offset.length() * light.truncate().length()) < 1e-4);
}

#[test]
fn test_shadow_matrix_cannot_be_undone() {
    let shadow = ground().shadow_matrix(Vec4::new(0.0, 100.0, 0.0, 1.0));
    let err = shadow.inverse().unwrap_err();
    assert!(matches!(err, MathError::SingularMatrix { .. }));
}

#[test]
fn test_ground_normal_faces_up() {
    let normal = find_normal(GROUND[0], GROUND[1], GROUND[2]);
    let normal = normal.normalize().unwrap();
    let plane_normal = ground().normal().normalize().unwrap();
    assert!(approx_eq_eps(normal.y.abs(), 1.0, 1e-6));
    assert!(approx_eq_eps(normal.dot(plane_normal).abs(), 1.0, 1e-6));
}
