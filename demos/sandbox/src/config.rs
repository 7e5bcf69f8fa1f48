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

//! RON scene description for the sandbox walkthrough.

use std::path::Path;

use anyhow::{Context, Result};
use glframe_core::{Frame, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// The scene shipped with the binary, used when no path is given.
pub const DEFAULT_SCENE: &str = include_str!("../scenes/sphereworld.ron");

/// One scripted camera input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Step {
    /// Walk along the facing direction, in world units.
    Forward(f32),
    /// Turn around the camera's up axis, in degrees.
    Turn(f32),
    /// Repair accumulated drift in the camera basis.
    Orthonormalize,
}

/// A named object placed in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    pub name: String,
    #[serde(default)]
    pub frame: Frame,
}

/// Ground plane and light used for the projected shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Three points on the ground, counter-clockwise seen from above.
    pub ground: [Vec3; 3],
    /// Light position (`w = 1`) or direction (`w = 0`).
    pub light: Vec4,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            ground: [
                Vec3::new(-30.0, -149.0, -20.0),
                Vec3::new(-30.0, -149.0, 20.0),
                Vec3::new(40.0, -149.0, 20.0),
            ],
            light: Vec4::new(-75.0, 150.0, -50.0, 0.0),
        }
    }
}

/// Top-level sandbox configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub camera: Frame,
    pub steps: Vec<Step>,
    pub actors: Vec<ActorConfig>,
    pub shadow: ShadowConfig,
}

impl SandboxConfig {
    /// Parses a configuration from RON text.
    pub fn from_ron(source: &str) -> Result<Self> {
        ron::de::from_str(source).context("Invalid sandbox scene")
    }

    /// Reads and parses a RON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_ron(&source)
            .with_context(|| format!("In scene file {}", path.display()))
    }
}
