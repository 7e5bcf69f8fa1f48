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

//! # glframe Core
//!
//! The reusable part of the demo programs: small 3D vector and matrix math,
//! plane equations, the planar shadow projection, and the orthonormal
//! [`Frame`] used for first-person cameras and movable actors.
//!
//! Everything here is pure or mutates a value the caller owns. Matrices are
//! returned to the caller instead of being pushed onto a global transform
//! stack, so the rendering layer decides when and how to apply them.

#![warn(missing_docs)]

pub mod frame;
pub mod math;

pub use frame::Frame;
pub use math::{Mat4, MathError, Plane, Vec3, Vec4};
