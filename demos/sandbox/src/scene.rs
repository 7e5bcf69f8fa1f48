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

//! Runs a scripted walkthrough and collects the matrices a renderer would use.

use anyhow::{bail, Context, Result};
use glframe_core::math::degrees_to_radians;
use glframe_core::{Frame, Mat4, Plane, Vec3};

use crate::config::{SandboxConfig, Step};

/// Per-actor output of a walkthrough.
#[derive(Debug, Clone)]
pub struct ActorReport {
    pub name: String,
    /// Model matrix placing the actor in the world.
    pub model: Mat4,
    /// Actor origin expressed in camera space.
    pub eye_position: Vec3,
    /// Where the actor's origin lands when flattened onto the ground.
    pub shadow_position: Vec3,
}

/// Everything computed for one frame of the walkthrough.
#[derive(Debug, Clone)]
pub struct SceneReport {
    pub camera: Frame,
    pub view: Mat4,
    pub sky_view: Mat4,
    pub ground: Plane,
    pub shadow: Mat4,
    pub actors: Vec<ActorReport>,
}

/// Applies one input step to the camera.
pub fn apply_step(camera: &mut Frame, step: Step) -> Result<()> {
    match step {
        Step::Forward(delta) => camera.move_forward(delta),
        Step::Turn(degrees) => camera.rotate_local_y(degrees_to_radians(degrees)),
        Step::Orthonormalize => camera
            .orthonormalize()
            .context("Camera basis could not be repaired")?,
    }
    Ok(())
}

/// Runs every scripted step, then builds the view, actor and shadow matrices.
pub fn run(config: &SandboxConfig) -> Result<SceneReport> {
    let mut camera = config.camera;
    for (i, step) in config.steps.iter().enumerate() {
        apply_step(&mut camera, *step)
            .with_context(|| format!("Step {i} ({step:?})"))?;
        log::debug!(
            "Step {i} {step:?}: origin {:?}, forward {:?}",
            camera.origin,
            camera.forward
        );
    }

    let [p1, p2, p3] = config.shadow.ground;
    let ground = Plane::from_points(p1, p2, p3);
    if ground.is_degenerate() {
        bail!("Ground points {p1:?}, {p2:?}, {p3:?} are collinear");
    }
    let shadow = ground.shadow_matrix(config.shadow.light);

    let view = camera.camera_transform(false);
    let actors = config
        .actors
        .iter()
        .map(|actor| {
            let model = actor.frame.actor_transform(false);
            let shadow_position = shadow
                .project_point(actor.frame.origin)
                .with_context(|| format!("Shadow of actor '{}'", actor.name))?;
            Ok(ActorReport {
                name: actor.name.clone(),
                model,
                eye_position: (view * model).transform_point(Vec3::ZERO),
                shadow_position,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SceneReport {
        camera,
        view,
        sky_view: camera.camera_transform(true),
        ground,
        shadow,
        actors,
    })
}
