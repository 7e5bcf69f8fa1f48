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

// glframe sandbox
// Headless walkthrough of a scene: camera steps, actor placement, ground shadow.
//
// Usage: sandbox [scene.ron]

mod config;
mod scene;

use std::path::PathBuf;

use anyhow::Result;
use glframe_core::Mat4;

use crate::config::{SandboxConfig, DEFAULT_SCENE};

fn log_matrix(label: &str, m: &Mat4) {
    log::info!("{label}:");
    for row in 0..4 {
        let r = m.get_row(row);
        log::info!(
            "  [{:>10.4} {:>10.4} {:>10.4} {:>10.4}]",
            r.x,
            r.y,
            r.z,
            r.w
        );
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("Loading scene from {}", path.display());
            SandboxConfig::load(&path)?
        }
        None => {
            log::info!("No scene given, using the built-in sphere world");
            SandboxConfig::from_ron(DEFAULT_SCENE)?
        }
    };

    log::info!(
        "Running {} steps with {} actors",
        config.steps.len(),
        config.actors.len()
    );
    let report = scene::run(&config)?;

    log::info!(
        "Camera at {:?}, facing {:?}",
        report.camera.origin,
        report.camera.forward
    );
    log_matrix("View", &report.view);
    log_matrix("Sky view", &report.sky_view);
    log::info!("Ground plane {:?}", report.ground.to_array());
    log_matrix("Ground shadow", &report.shadow);

    for actor in &report.actors {
        log::info!(
            "Actor '{}': eye space {:?}, shadow at {:?}",
            actor.name,
            actor.eye_position,
            actor.shadow_position
        );
        log_matrix(&format!("  '{}' model", actor.name), &actor.model);
    }

    Ok(())
}
